//! Entity spawn factories for setting up the viewer world.
//!
//! Creates the head-anchored console, the instruction text and the console
//! buttons with appropriate component bundles. All spawning happens before
//! the first frame; nothing is spawned while the simulation runs.

use glam::Vec3;
use hecs::{Entity, World};
use tracing::warn;

use panorama_core::commands::ViewerCommand;
use panorama_core::components::*;
use panorama_core::config::{ButtonConfig, ViewerConfig};
use panorama_core::interfaces::SharedNode;

use crate::command_queue::CommandQueue;

/// Scene nodes backing the viewer layout.
pub struct SceneNodes {
    pub console: SharedNode,
    pub instruction_text: SharedNode,
    /// One node per configured button, in config order.
    pub buttons: Vec<SharedNode>,
}

/// Set up the whole viewer: console, instruction text and buttons.
/// Returns the spawned button entities. Buttons with invalid tuning or
/// without a backing node are skipped.
pub fn setup_viewer(
    world: &mut World,
    config: &ViewerConfig,
    nodes: SceneNodes,
    commands: &CommandQueue,
) -> Vec<Entity> {
    spawn_calibrated(world, nodes.console, config.console_offset);
    spawn_instruction_text(world, nodes.instruction_text);

    if nodes.buttons.len() != config.buttons.len() {
        warn!(
            configured = config.buttons.len(),
            nodes = nodes.buttons.len(),
            "button node count does not match config"
        );
    }

    let mut buttons = Vec::with_capacity(config.buttons.len());
    for (index, (button, node)) in config.buttons.iter().zip(nodes.buttons).enumerate() {
        if let Err(err) = button.validate(index) {
            warn!(%err, "skipping button");
            continue;
        }
        buttons.push(spawn_button(world, node, button, commands));
    }
    buttons
}

/// Spawn a pressable button whose action queues the command for its kind.
///
/// # Panics
/// If the tuning in `config` is invalid; call `ButtonConfig::validate` first.
pub fn spawn_button(
    world: &mut World,
    node: SharedNode,
    config: &ButtonConfig,
    commands: &CommandQueue,
) -> Entity {
    let queue = commands.clone();
    let command = ViewerCommand::from(config.kind);
    let button = Button::new(
        config.surface_y,
        config.recovery_speed,
        config.full_press_distance,
    )
    .with_sound_cues(config.press_sound.clone(), config.release_sound.clone())
    .with_action(ButtonAction::new(move || queue.push(command)));

    world.spawn((NodeRef(node), button, Pressable, config.kind))
}

/// Spawn an entity that is placed at `head + offset` once tracking starts.
pub fn spawn_calibrated(world: &mut World, node: SharedNode, offset: Vec3) -> Entity {
    world.spawn((NodeRef(node), CalibrationOffset(offset), NeedsCalibration))
}

/// Spawn instruction text that is shown while any hand is visible.
pub fn spawn_instruction_text(world: &mut World, node: SharedNode) -> Entity {
    world.spawn((NodeRef(node), InstructionText))
}
