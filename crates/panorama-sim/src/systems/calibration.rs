//! One-shot alignment of head-anchored entities.
//!
//! Every entity carrying `NeedsCalibration` is moved to `head + offset` on the
//! first frame the head pose is available, then loses the marker for good.

use hecs::{Entity, World};
use tracing::info;

use panorama_core::components::{CalibrationOffset, NeedsCalibration, NodeRef};
use panorama_core::events::ViewerEvent;
use panorama_core::interfaces::HeadPoseSource;

/// Run calibration for one frame. Does nothing while tracking is unavailable.
/// `calibrated` is a scratch buffer reused across frames.
pub fn run(
    world: &mut World,
    head: Option<&dyn HeadPoseSource>,
    calibrated: &mut Vec<Entity>,
    events: &mut Vec<ViewerEvent>,
) {
    let Some(head) = head else {
        return;
    };
    if !head.is_tracking_active() {
        return;
    }
    let head_position = head.current_position();

    calibrated.clear();
    for (entity, (node, offset, _pending)) in
        world.query_mut::<(&NodeRef, &CalibrationOffset, &NeedsCalibration)>()
    {
        let position = head_position + offset.0;
        node.0.set_position(position);
        calibrated.push(entity);

        info!(
            entity = entity.to_bits().get(),
            x = position.x,
            y = position.y,
            z = position.z,
            "calibrated to head pose"
        );
        events.push(ViewerEvent::Calibrated {
            entity: entity.to_bits().get(),
            position: position.to_array(),
        });
    }

    for entity in calibrated.drain(..) {
        let _ = world.remove_one::<NeedsCalibration>(entity);
    }
}
