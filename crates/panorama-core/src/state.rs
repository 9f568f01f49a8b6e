//! Per-frame snapshot of the simulation, for renderers and tooling.

use serde::{Deserialize, Serialize};

use crate::enums::{ButtonKind, ButtonState};
use crate::events::ViewerEvent;

/// Complete observable state after one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub elapsed_secs: f64,
    pub buttons: Vec<ButtonSnapshot>,
    pub instructions_visible: bool,
    pub instructions_enabled: bool,
    pub panorama: Option<PanoramaView>,
    /// Entities still waiting for their one-time calibration.
    pub pending_calibrations: usize,
    pub session_ended: bool,
    /// Events emitted during this frame, in emission order.
    pub events: Vec<ViewerEvent>,
}

/// Observable state of one button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonSnapshot {
    pub entity: u64,
    pub kind: Option<ButtonKind>,
    pub state: ButtonState,
    /// Current cap height in the parent frame.
    pub height: f32,
    /// Depth below rest, zero until the rest height is known.
    pub depth: f32,
}

/// The panorama currently on display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanoramaView {
    pub index: usize,
    pub name: String,
}
