//! End-to-end viewer session: calibrate the console, poke buttons with a
//! simulated fingertip, and end the session.

use glam::Vec3;

use panorama_core::config::ViewerConfig;
use panorama_core::enums::{ButtonKind, ButtonState, Handedness};
use panorama_core::events::ViewerEvent;
use panorama_core::interfaces::SpatialNode;
use panorama_core::state::FrameSnapshot;
use panorama_sim::scene::{RecordingAudio, SimulatedHand, SimulatedHead, ViewerScene};
use panorama_sim::{Collaborators, SimConfig, Simulation};

const DT: f32 = 1.0 / 72.0;

struct Session {
    sim: Simulation,
    scene: ViewerScene,
    config: ViewerConfig,
    head: std::sync::Arc<SimulatedHead>,
    right: std::sync::Arc<SimulatedHand>,
    audio: std::sync::Arc<RecordingAudio>,
    elapsed: f64,
    events: Vec<ViewerEvent>,
}

impl Session {
    fn new() -> Self {
        let config = ViewerConfig::default();
        let scene = ViewerScene::build(&config);
        let head = SimulatedHead::new();
        let left = SimulatedHand::new(Handedness::Left);
        let right = SimulatedHand::new(Handedness::Right);
        let audio = RecordingAudio::new();

        let mut sim = Simulation::new(
            SimConfig::default(),
            Collaborators {
                hands: vec![left, right.clone()],
                head: Some(head.clone()),
                audio: Some(audio.clone()),
            },
        );
        sim.setup_viewer(&config, scene.nodes());

        Self {
            sim,
            scene,
            config,
            head,
            right,
            audio,
            elapsed: 0.0,
            events: Vec::new(),
        }
    }

    fn step(&mut self) -> FrameSnapshot {
        self.elapsed += DT as f64;
        let snapshot = self.sim.tick(DT, self.elapsed);
        self.events.extend(snapshot.events.iter().cloned());
        snapshot
    }

    fn run(&mut self, frames: usize) -> FrameSnapshot {
        let mut last = self.step();
        for _ in 1..frames {
            last = self.step();
        }
        last
    }

    fn button_index(&self, kind: ButtonKind) -> usize {
        self.config
            .buttons
            .iter()
            .position(|b| b.kind == kind)
            .unwrap()
    }

    /// Put the fingertip `depth` below the resting surface of a button.
    fn poke(&self, kind: ButtonKind, depth: f32) {
        let index = self.button_index(kind);
        let button = &self.config.buttons[index];
        // Rest position in world space: console origin plus the configured offset.
        let rest = self.scene.console.world_position() + button.position;
        self.right
            .track(rest + Vec3::new(0.0, button.surface_y - depth, 0.0));
    }

    fn withdraw(&self) {
        self.right.track(Vec3::new(0.0, -10.0, 0.0));
    }

    fn count(&self, pred: impl Fn(&ViewerEvent) -> bool) -> usize {
        self.events.iter().filter(|&e| pred(e)).count()
    }
}

#[test]
fn test_full_session() {
    let mut s = Session::new();

    // Tracking not available yet: console stays put, instructions hidden.
    let snap = s.run(10);
    assert_eq!(snap.pending_calibrations, 1);
    assert_eq!(s.scene.console.position(), Vec3::ZERO);
    assert!(!snap.instructions_visible);
    assert_eq!(snap.panorama.as_ref().map(|p| p.index), Some(0));

    s.head.set_pose(Vec3::new(0.0, 1.5, 0.0));
    let snap = s.step();
    assert_eq!(snap.pending_calibrations, 0);
    let console = s.scene.console.position();
    assert_eq!(console, Vec3::new(0.0, 1.5, 0.0) + s.config.console_offset);

    // The head moves on; the console does not follow.
    s.head.set_pose(Vec3::new(3.0, 1.0, 3.0));
    s.run(5);
    assert_eq!(s.scene.console.position(), console);

    // Audio finishes loading; hand comes into view.
    s.audio.set_ready(true);
    s.withdraw();
    let snap = s.step();
    assert!(snap.instructions_visible);
    assert!(s.scene.instruction_text.is_visible());

    // Press "next" all the way down and hold it.
    let full_press = s.config.buttons[0].full_press_distance;
    s.poke(ButtonKind::NextPanorama, full_press * 1.5);
    s.run(20);
    let next = s.button_index(ButtonKind::NextPanorama);
    let snap = s.step();
    assert_eq!(snap.buttons[next].state, ButtonState::FullyPressed);
    assert!((snap.buttons[next].depth - full_press).abs() < 1e-6);
    assert_eq!(snap.panorama.as_ref().map(|p| p.index), Some(1));
    assert_eq!(
        s.count(|e| matches!(e, ViewerEvent::PanoramaChanged { index: 1, .. })),
        1,
        "holding the button must not keep advancing"
    );
    for (i, b) in snap.buttons.iter().enumerate() {
        if i != next {
            assert_eq!(b.state, ButtonState::Resting, "neighbouring buttons untouched");
        }
    }

    // Let go; the button returns to rest and the release click plays once.
    s.withdraw();
    let snap = s.run(60);
    assert_eq!(snap.buttons[next].state, ButtonState::Resting);
    assert_eq!(snap.buttons[next].depth, 0.0);
    assert_eq!(s.audio.play_count("click_press"), 1);
    assert_eq!(s.audio.play_count("click_release"), 1);

    // A shallow touch presses without triggering.
    s.poke(ButtonKind::PreviousPanorama, full_press * 0.5);
    s.run(10);
    s.withdraw();
    s.run(30);
    assert_eq!(s.sim.current_panorama().map(|(i, _)| i), Some(1));

    // Hiding the hand hides the instructions.
    s.right.hide();
    let snap = s.step();
    assert!(!snap.instructions_visible);

    // Exit: the session ends two seconds after the full press.
    s.poke(ButtonKind::ExitSession, full_press * 2.0);
    s.run(3);
    assert_eq!(
        s.count(|e| matches!(e, ViewerEvent::SessionExitScheduled { .. })),
        1
    );
    s.withdraw();
    let mut ended_at = None;
    for _ in 0..(3 * 72) {
        let snap = s.step();
        if snap.session_ended && ended_at.is_none() {
            ended_at = Some(s.elapsed);
        }
    }
    assert!(ended_at.is_some(), "session should end after the exit delay");
    assert_eq!(s.count(|e| matches!(e, ViewerEvent::SessionEnded)), 1);
    assert!(s.sim.session_ended());
}
