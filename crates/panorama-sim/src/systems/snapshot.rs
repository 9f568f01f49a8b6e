//! Snapshot builder: reads the world and produces a `FrameSnapshot`.

use hecs::World;

use panorama_core::components::{Button, NeedsCalibration, NodeRef};
use panorama_core::enums::ButtonKind;
use panorama_core::events::ViewerEvent;
use panorama_core::state::{ButtonSnapshot, FrameSnapshot, PanoramaView};
use panorama_core::types::FrameTime;

use crate::gallery::PanoramaGallery;

/// Viewer-level state that lives outside the ECS world.
pub struct ViewerStatus<'a> {
    pub gallery: &'a PanoramaGallery,
    pub instructions_visible: bool,
    pub instructions_enabled: bool,
    pub session_ended: bool,
}

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &FrameTime,
    status: ViewerStatus<'_>,
    events: Vec<ViewerEvent>,
) -> FrameSnapshot {
    let mut buttons: Vec<ButtonSnapshot> = world
        .query::<(&NodeRef, &Button, Option<&ButtonKind>)>()
        .iter()
        .map(|(entity, (node, button, kind))| {
            let height = node.0.position().y;
            ButtonSnapshot {
                entity: entity.to_bits().get(),
                kind: kind.copied(),
                state: button.curr_state,
                height,
                depth: button.resting_y.map_or(0.0, |rest| (rest - height).max(0.0)),
            }
        })
        .collect();
    buttons.sort_by_key(|b| b.entity);

    let pending_calibrations = world.query::<&NeedsCalibration>().iter().count();

    FrameSnapshot {
        frame: time.frame,
        elapsed_secs: time.elapsed_secs,
        buttons,
        instructions_visible: status.instructions_visible,
        instructions_enabled: status.instructions_enabled,
        panorama: status.gallery.current().map(|(index, name)| PanoramaView {
            index,
            name: name.to_string(),
        }),
        pending_calibrations,
        session_ended: status.session_ended,
        events,
    }
}
