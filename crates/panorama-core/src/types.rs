//! Fundamental simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Frame clock tracking.
///
/// Unlike a fixed-rate tick, each frame carries the delta reported by the
/// renderer, so the clock only records what it was told.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameTime {
    /// Number of frames simulated so far.
    pub frame: u64,
    /// Seconds elapsed since the previous frame.
    pub delta_secs: f32,
    /// Application time in seconds, as reported by the host.
    pub elapsed_secs: f64,
}

impl FrameTime {
    /// Advance by one frame. Negative or non-finite deltas are treated as zero.
    pub fn advance(&mut self, delta_secs: f32, elapsed_secs: f64) {
        self.frame += 1;
        self.delta_secs = if delta_secs.is_finite() {
            delta_secs.max(0.0)
        } else {
            0.0
        };
        if elapsed_secs.is_finite() {
            self.elapsed_secs = elapsed_secs;
        }
    }
}

/// World-space axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Sphere-box overlap (touching counts).
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        let closest = center.clamp(self.min, self.max);
        closest.distance_squared(center) <= radius * radius
    }
}
