//! Contracts for the external collaborators the simulation drives.
//!
//! Rendering, hand tracking, head tracking and audio all live outside the
//! simulation. Systems only see them through these narrow traits, polled
//! once per frame and never awaited.

use std::sync::Arc;

use glam::Vec3;

use crate::types::Aabb;

/// An externally-owned spatial object (scene-graph node).
///
/// Handles are shared with the renderer, so setters take `&self` and the
/// implementor provides interior mutability.
pub trait SpatialNode: Send + Sync {
    /// Position in the node's parent frame.
    fn position(&self) -> Vec3;
    fn set_position(&self, position: Vec3);
    fn is_visible(&self) -> bool;
    fn set_visible(&self, visible: bool);
    /// Transform a world-space point into this node's local frame.
    fn world_to_local(&self, point: Vec3) -> Vec3;
    /// World-space bounding volume, if the node has geometry.
    fn world_bounds(&self) -> Option<Aabb>;
}

/// A tracked hand representation.
pub trait HandProxy: Send + Sync {
    fn is_visible(&self) -> bool;
    /// Whether the hand's contact region overlaps the node's bounding volume.
    fn intersects(&self, node: &dyn SpatialNode) -> bool;
    /// World-space fingertip contact point. Only meaningful while intersecting.
    fn contact_point(&self) -> Vec3;
}

/// Source of the headset pose.
pub trait HeadPoseSource: Send + Sync {
    fn is_tracking_active(&self) -> bool;
    /// World-space head position. Only meaningful while tracking is active.
    fn current_position(&self) -> Vec3;
}

/// A playable sound resource.
pub trait Sound: Send + Sync {
    fn play(&self);
}

/// Audio backend that becomes ready asynchronously.
pub trait AudioBackend: Send + Sync {
    /// Non-blocking readiness check.
    fn is_ready(&self) -> bool;
    /// Resolve a sound cue name to a playable handle.
    fn load(&self, cue: &str) -> Option<SoundHandle>;
}

pub type SharedNode = Arc<dyn SpatialNode>;
pub type SharedHand = Arc<dyn HandProxy>;
pub type SharedHeadPose = Arc<dyn HeadPoseSource>;
pub type SharedAudio = Arc<dyn AudioBackend>;
/// Shared, not owned: the same buffer may back several buttons.
pub type SoundHandle = Arc<dyn Sound>;
