//! Instruction text visibility.

use hecs::World;

use panorama_core::components::{InstructionText, NodeRef};
use panorama_core::interfaces::SharedHand;

/// Show instruction text while any hand is visible and instructions are
/// enabled. Returns the visibility applied.
pub fn run(world: &mut World, hands: &[SharedHand], enabled: bool) -> bool {
    let any_visible = hands.iter().any(|hand| hand.is_visible());
    let visible = enabled && any_visible;

    for (_entity, (node, _text)) in world.query_mut::<(&NodeRef, &InstructionText)>() {
        node.0.set_visible(visible);
    }
    visible
}
