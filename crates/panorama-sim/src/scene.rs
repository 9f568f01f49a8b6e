//! In-memory collaborators: scene nodes, hands, head pose and audio.
//!
//! These stand in for the renderer and the XR runtime when the simulation
//! runs headless (tests and the replay tool). Geometry is translation-only:
//! nodes have no rotation or scale, so `world_to_local` is a subtraction.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use glam::Vec3;
use parking_lot::Mutex;
use tracing::debug;

use panorama_core::config::ViewerConfig;
use panorama_core::constants::FINGERTIP_RADIUS;
use panorama_core::enums::Handedness;
use panorama_core::interfaces::{
    AudioBackend, HandProxy, HeadPoseSource, SharedNode, Sound, SoundHandle, SpatialNode,
};
use panorama_core::types::Aabb;

use crate::world_setup::SceneNodes;

#[derive(Debug, Clone, Copy)]
struct NodeState {
    position: Vec3,
    visible: bool,
}

/// A translation-only scene-graph node with an optional bounding box.
#[derive(Debug)]
pub struct SceneNode {
    parent: Option<Arc<SceneNode>>,
    half_extents: Option<Vec3>,
    state: Mutex<NodeState>,
}

impl SceneNode {
    /// Root-level node without geometry.
    pub fn new(position: Vec3) -> Arc<Self> {
        Arc::new(Self {
            parent: None,
            half_extents: None,
            state: Mutex::new(NodeState {
                position,
                visible: true,
            }),
        })
    }

    /// Child node positioned in `parent`'s frame.
    pub fn child(parent: &Arc<SceneNode>, position: Vec3, half_extents: Option<Vec3>) -> Arc<Self> {
        Arc::new(Self {
            parent: Some(parent.clone()),
            half_extents,
            state: Mutex::new(NodeState {
                position,
                visible: true,
            }),
        })
    }

    /// Root-level node with a bounding box centered on its origin.
    pub fn with_bounds(position: Vec3, half_extents: Vec3) -> Arc<Self> {
        Arc::new(Self {
            parent: None,
            half_extents: Some(half_extents),
            state: Mutex::new(NodeState {
                position,
                visible: true,
            }),
        })
    }

    pub fn world_position(&self) -> Vec3 {
        let local = self.state.lock().position;
        match &self.parent {
            Some(parent) => parent.world_position() + local,
            None => local,
        }
    }
}

impl SpatialNode for SceneNode {
    fn position(&self) -> Vec3 {
        self.state.lock().position
    }

    fn set_position(&self, position: Vec3) {
        self.state.lock().position = position;
    }

    fn is_visible(&self) -> bool {
        self.state.lock().visible
    }

    fn set_visible(&self, visible: bool) {
        self.state.lock().visible = visible;
    }

    fn world_to_local(&self, point: Vec3) -> Vec3 {
        point - self.world_position()
    }

    fn world_bounds(&self) -> Option<Aabb> {
        self.half_extents
            .map(|half| Aabb::from_center(self.world_position(), half))
    }
}

/// Nodes for a full viewer layout, keeping concrete handles for inspection.
#[derive(Debug, Clone)]
pub struct ViewerScene {
    pub console: Arc<SceneNode>,
    pub instruction_text: Arc<SceneNode>,
    /// One node per configured button, in config order.
    pub buttons: Vec<Arc<SceneNode>>,
}

impl ViewerScene {
    /// Build the console hierarchy described by `config`.
    /// The console starts at the origin until calibration places it.
    pub fn build(config: &ViewerConfig) -> Self {
        let console = SceneNode::new(Vec3::ZERO);
        let instruction_text = SceneNode::child(&console, config.instruction_offset, None);
        let buttons = config
            .buttons
            .iter()
            .map(|b| SceneNode::child(&console, b.position, Some(b.half_extents)))
            .collect();
        Self {
            console,
            instruction_text,
            buttons,
        }
    }

    /// Type-erased handles for world setup.
    pub fn nodes(&self) -> SceneNodes {
        SceneNodes {
            console: self.console.clone() as SharedNode,
            instruction_text: self.instruction_text.clone() as SharedNode,
            buttons: self
                .buttons
                .iter()
                .map(|b| b.clone() as SharedNode)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct HandState {
    visible: bool,
    fingertip: Vec3,
}

/// A hand reduced to a visibility flag and an index-fingertip sphere.
#[derive(Debug)]
pub struct SimulatedHand {
    pub handedness: Handedness,
    radius: f32,
    state: Mutex<HandState>,
}

impl SimulatedHand {
    /// Hidden hand with the default fingertip radius.
    pub fn new(handedness: Handedness) -> Arc<Self> {
        Self::with_radius(handedness, FINGERTIP_RADIUS)
    }

    pub fn with_radius(handedness: Handedness, radius: f32) -> Arc<Self> {
        Arc::new(Self {
            handedness,
            radius,
            state: Mutex::new(HandState {
                visible: false,
                fingertip: Vec3::ZERO,
            }),
        })
    }

    /// Show the hand with its fingertip at `fingertip` (world space).
    pub fn track(&self, fingertip: Vec3) {
        *self.state.lock() = HandState {
            visible: true,
            fingertip,
        };
    }

    /// Tracking lost: the hand disappears and touches nothing.
    pub fn hide(&self) {
        self.state.lock().visible = false;
    }
}

impl HandProxy for SimulatedHand {
    fn is_visible(&self) -> bool {
        self.state.lock().visible
    }

    fn intersects(&self, node: &dyn SpatialNode) -> bool {
        let state = *self.state.lock();
        if !state.visible {
            return false;
        }
        node.world_bounds()
            .is_some_and(|bounds| bounds.intersects_sphere(state.fingertip, self.radius))
    }

    fn contact_point(&self) -> Vec3 {
        self.state.lock().fingertip
    }
}

/// Head pose that is unavailable until the first `set_pose`.
#[derive(Debug, Default)]
pub struct SimulatedHead {
    pose: Mutex<Option<Vec3>>,
}

impl SimulatedHead {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_pose(&self, position: Vec3) {
        *self.pose.lock() = Some(position);
    }

    pub fn lose_tracking(&self) {
        *self.pose.lock() = None;
    }
}

impl HeadPoseSource for SimulatedHead {
    fn is_tracking_active(&self) -> bool {
        self.pose.lock().is_some()
    }

    fn current_position(&self) -> Vec3 {
        self.pose.lock().unwrap_or(Vec3::ZERO)
    }
}

/// Audio backend that records every playback by cue name.
#[derive(Debug, Default)]
pub struct RecordingAudio {
    ready: AtomicBool,
    played: Arc<Mutex<Vec<String>>>,
}

impl RecordingAudio {
    /// Backend that is not ready yet.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::Release);
    }

    /// Every cue played so far, in order.
    pub fn played(&self) -> Vec<String> {
        self.played.lock().clone()
    }

    pub fn play_count(&self, cue: &str) -> usize {
        self.played.lock().iter().filter(|c| *c == cue).count()
    }
}

impl AudioBackend for RecordingAudio {
    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    fn load(&self, cue: &str) -> Option<SoundHandle> {
        if !self.is_ready() {
            return None;
        }
        Some(Arc::new(RecordedSound {
            cue: cue.to_string(),
            log: self.played.clone(),
        }))
    }
}

#[derive(Debug)]
struct RecordedSound {
    cue: String,
    log: Arc<Mutex<Vec<String>>>,
}

impl Sound for RecordedSound {
    fn play(&self) {
        debug!(cue = %self.cue, "sound played");
        self.log.lock().push(self.cue.clone());
    }
}
