//! Finger contact and button travel.
//!
//! For each pressable button, every hand whose contact region overlaps the
//! button yields a pressing distance: how far its fingertip sits below the
//! button's top surface, measured in the button's local frame. The deepest
//! reading pushes the cap down directly; without contact the cap returns to
//! rest at a fixed linear speed.

use hecs::World;

use panorama_core::components::{Button, NodeRef, Pressable};
use panorama_core::enums::ButtonState;
use panorama_core::interfaces::{HandProxy, SharedHand, SpatialNode};

/// Run finger input for one frame. `delta` is in seconds.
pub fn run(world: &mut World, hands: &[SharedHand], delta: f32) {
    for (_entity, (node, button, _pressable)) in
        world.query_mut::<(&NodeRef, &mut Button, &Pressable)>()
    {
        // Rest height is captured by the button system; skip until it has run.
        let Some(resting_y) = button.resting_y else {
            continue;
        };
        let node = node.0.as_ref();
        let mut position = node.position();

        let (y, state) = match deepest_press(node, button.surface_y, hands) {
            Some(distance) => press(position.y, resting_y, button.full_press_distance, distance),
            None => recover(position.y, resting_y, button.recovery_speed, delta),
        };

        position.y = y;
        node.set_position(position);
        button.curr_state = state;
    }
}

/// Pressing distance for one hand, or `None` if it is not touching the node.
/// Uses the hand's fingertip contact point, never its palm.
pub fn pressing_distance(node: &dyn SpatialNode, surface_y: f32, hand: &dyn HandProxy) -> Option<f32> {
    if !hand.intersects(node) {
        return None;
    }
    let local = node.world_to_local(hand.contact_point());
    Some(surface_y - local.y)
}

/// Deepest pressing distance over all intersecting hands.
pub fn deepest_press(node: &dyn SpatialNode, surface_y: f32, hands: &[SharedHand]) -> Option<f32> {
    hands
        .iter()
        .filter_map(|hand| pressing_distance(node, surface_y, hand.as_ref()))
        .reduce(f32::max)
}

/// Travel under contact. Positive distances push the cap down by that much;
/// travel stops exactly at the full-press depth.
pub fn press(y: f32, resting_y: f32, full_press_distance: f32, distance: f32) -> (f32, ButtonState) {
    let y = if distance > 0.0 { y - distance } else { y };
    let full_press_y = resting_y - full_press_distance;
    if y <= full_press_y {
        (full_press_y, ButtonState::FullyPressed)
    } else {
        (y, ButtonState::Pressed)
    }
}

/// Travel without contact: linear return that never overshoots rest.
pub fn recover(y: f32, resting_y: f32, recovery_speed: f32, delta: f32) -> (f32, ButtonState) {
    if y < resting_y {
        let y = (y + recovery_speed * delta).min(resting_y);
        (y, ButtonState::Recovering)
    } else {
        (resting_y, ButtonState::Resting)
    }
}
