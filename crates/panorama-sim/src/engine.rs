//! Simulation driver.
//!
//! `Simulation` owns the hecs world and the collaborator handles, runs all
//! systems once per rendered frame in a fixed order, applies the viewer
//! commands button actions queued, and produces `FrameSnapshot`s.

use std::mem;

use hecs::{DynamicBundle, Entity, World};
use tracing::info;

use panorama_core::commands::ViewerCommand;
use panorama_core::config::{ButtonConfig, ViewerConfig};
use panorama_core::constants::SESSION_EXIT_DELAY_SECS;
use panorama_core::events::ViewerEvent;
use panorama_core::interfaces::{SharedAudio, SharedHand, SharedHeadPose, SharedNode};
use panorama_core::state::FrameSnapshot;
use panorama_core::types::FrameTime;
use panorama_core::Vec3;

use crate::command_queue::CommandQueue;
use crate::gallery::PanoramaGallery;
use crate::systems;
use crate::systems::snapshot::ViewerStatus;
use crate::world_setup::{self, SceneNodes};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Gallery index shown first (clamped to the gallery size).
    pub initial_panorama: usize,
    /// Delay between an exit request and the end of the session.
    pub exit_delay_secs: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            initial_panorama: 0,
            exit_delay_secs: SESSION_EXIT_DELAY_SECS,
        }
    }
}

/// External collaborators polled every frame.
#[derive(Clone, Default)]
pub struct Collaborators {
    /// Tracked hands. Fixed for the lifetime of the simulation.
    pub hands: Vec<SharedHand>,
    pub head: Option<SharedHeadPose>,
    pub audio: Option<SharedAudio>,
}

/// The simulation driver. Owns the ECS world and all viewer state.
pub struct Simulation {
    world: World,
    time: FrameTime,
    collaborators: Collaborators,
    commands: CommandQueue,
    events: Vec<ViewerEvent>,
    calibration_buffer: Vec<Entity>,

    gallery: PanoramaGallery,
    initial_panorama: usize,
    instructions_enabled: bool,
    instructions_visible: bool,
    exit_delay_secs: f64,
    exit_at_secs: Option<f64>,
    session_ended: bool,
}

impl Simulation {
    pub fn new(config: SimConfig, collaborators: Collaborators) -> Self {
        Self {
            world: World::new(),
            time: FrameTime::default(),
            collaborators,
            commands: CommandQueue::new(),
            events: Vec::new(),
            calibration_buffer: Vec::new(),
            gallery: PanoramaGallery::default(),
            initial_panorama: config.initial_panorama,
            instructions_enabled: true,
            instructions_visible: false,
            exit_delay_secs: config.exit_delay_secs.max(0.0),
            exit_at_secs: None,
            session_ended: false,
        }
    }

    // --- Setup-time registration ---

    /// Spawn the full viewer layout and load the gallery.
    /// Returns the button entities in config order (invalid buttons skipped).
    pub fn setup_viewer(&mut self, config: &ViewerConfig, nodes: SceneNodes) -> Vec<Entity> {
        self.assert_setup_phase();
        self.gallery = PanoramaGallery::new(config.panoramas.clone(), self.initial_panorama);
        if let Some((index, name)) = self.gallery.current() {
            self.events.push(ViewerEvent::PanoramaChanged {
                index,
                panorama: name.to_string(),
            });
        }
        world_setup::setup_viewer(&mut self.world, config, nodes, &self.commands)
    }

    /// Replace the gallery contents without spawning anything.
    pub fn set_panoramas(&mut self, panoramas: Vec<String>) {
        self.assert_setup_phase();
        self.gallery = PanoramaGallery::new(panoramas, self.initial_panorama);
    }

    pub fn spawn_button(&mut self, node: SharedNode, config: &ButtonConfig) -> Entity {
        self.assert_setup_phase();
        world_setup::spawn_button(&mut self.world, node, config, &self.commands)
    }

    pub fn spawn_calibrated(&mut self, node: SharedNode, offset: Vec3) -> Entity {
        self.assert_setup_phase();
        world_setup::spawn_calibrated(&mut self.world, node, offset)
    }

    pub fn spawn_instruction_text(&mut self, node: SharedNode) -> Entity {
        self.assert_setup_phase();
        world_setup::spawn_instruction_text(&mut self.world, node)
    }

    /// Spawn an arbitrary component bundle.
    pub fn spawn(&mut self, components: impl DynamicBundle) -> Entity {
        self.assert_setup_phase();
        self.world.spawn(components)
    }

    fn assert_setup_phase(&self) {
        assert!(
            self.time.frame == 0,
            "entities can only be registered before the first frame"
        );
    }

    // --- Runtime ---

    /// Handle for button actions and hosts to queue viewer commands.
    pub fn command_queue(&self) -> CommandQueue {
        self.commands.clone()
    }

    /// Queue a command for processing at the end of the next frame.
    pub fn queue_command(&mut self, command: ViewerCommand) {
        self.commands.push(command);
    }

    /// Simulate one frame. `delta` is the time since the previous frame and
    /// `elapsed` the host's application time, both in seconds.
    ///
    /// Once the session has ended, frames are no longer simulated and the
    /// returned snapshot only reflects the final state.
    pub fn tick(&mut self, delta: f32, elapsed: f64) -> FrameSnapshot {
        if !self.session_ended {
            self.time.advance(delta, elapsed);
            self.run_systems();
            self.process_commands();
            self.update_session_exit();
        }

        let events = mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            ViewerStatus {
                gallery: &self.gallery,
                instructions_visible: self.instructions_visible,
                instructions_enabled: self.instructions_enabled,
                session_ended: self.session_ended,
            },
            events,
        )
    }

    pub fn time(&self) -> FrameTime {
        self.time
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn session_ended(&self) -> bool {
        self.session_ended
    }

    pub fn instructions_enabled(&self) -> bool {
        self.instructions_enabled
    }

    pub fn current_panorama(&self) -> Option<(usize, &str)> {
        self.gallery.current()
    }

    /// Run all systems in order.
    ///
    /// The button system must run before finger input: it consumes the state
    /// finger input settled on last frame before that state is recomputed.
    fn run_systems(&mut self) {
        let hands = &self.collaborators.hands;

        // 1. One-time head alignment
        systems::calibration::run(
            &mut self.world,
            self.collaborators.head.as_deref(),
            &mut self.calibration_buffer,
            &mut self.events,
        );
        // 2. Edge resolution (sounds, actions) and state reset
        systems::button::run(
            &mut self.world,
            self.collaborators.audio.as_deref(),
            &mut self.events,
        );
        // 3. Contact and travel
        systems::finger_input::run(&mut self.world, hands, self.time.delta_secs);
        // 4. Instruction text visibility
        self.instructions_visible =
            systems::instruction::run(&mut self.world, hands, self.instructions_enabled);
    }

    /// Apply commands queued by button actions (or the host) this frame.
    fn process_commands(&mut self) {
        for command in self.commands.drain() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::NextPanorama | ViewerCommand::PreviousPanorama => {
                let changed = if command == ViewerCommand::NextPanorama {
                    self.gallery.next()
                } else {
                    self.gallery.previous()
                };
                if let Some((index, name)) = changed {
                    info!(index, panorama = name, "panorama changed");
                    self.events.push(ViewerEvent::PanoramaChanged {
                        index,
                        panorama: name.to_string(),
                    });
                }
            }
            ViewerCommand::ToggleInstructions => {
                self.instructions_enabled = !self.instructions_enabled;
                self.events.push(ViewerEvent::InstructionsToggled {
                    enabled: self.instructions_enabled,
                });
            }
            ViewerCommand::ExitSession => {
                if self.exit_at_secs.is_none() {
                    let at_secs = self.time.elapsed_secs + self.exit_delay_secs;
                    info!(at_secs, "session exit scheduled");
                    self.exit_at_secs = Some(at_secs);
                    self.events.push(ViewerEvent::SessionExitScheduled { at_secs });
                }
            }
        }
    }

    fn update_session_exit(&mut self) {
        if let Some(at_secs) = self.exit_at_secs {
            if self.time.elapsed_secs >= at_secs {
                info!(elapsed = self.time.elapsed_secs, "session ended");
                self.session_ended = true;
                self.events.push(ViewerEvent::SessionEnded);
            }
        }
    }
}
