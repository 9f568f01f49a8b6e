//! Events emitted by the simulation for UI feedback and logging.

use serde::{Deserialize, Serialize};

use crate::enums::ButtonKind;

/// Discrete transitions observed during a frame.
///
/// Button events are emitted on rising edges only, so each one appears once
/// per press cycle regardless of how many frames the state is held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ViewerEvent {
    /// A finger made contact with a resting or recovering button.
    ButtonPressed { entity: u64, kind: Option<ButtonKind> },
    /// A button reached its full press depth; its action has fired.
    ButtonFullyPressed { entity: u64, kind: Option<ButtonKind> },
    /// Contact was lost and the button started travelling back up.
    ButtonReleased { entity: u64, kind: Option<ButtonKind> },
    /// A head-anchored entity was aligned to the head pose.
    Calibrated { entity: u64, position: [f32; 3] },
    PanoramaChanged { index: usize, panorama: String },
    InstructionsToggled { enabled: bool },
    /// Session end has been scheduled for `at_secs` (application time).
    SessionExitScheduled { at_secs: f64 },
    SessionEnded,
}
