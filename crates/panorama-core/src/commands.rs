//! Viewer commands produced by button actions.
//!
//! Commands are queued while systems run and processed at the end of the
//! frame, after every system has observed this frame's state.

use serde::{Deserialize, Serialize};

use crate::enums::ButtonKind;

/// All viewer-level actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ViewerCommand {
    NextPanorama,
    PreviousPanorama,
    ToggleInstructions,
    /// Schedule the end of the VR session.
    ExitSession,
}

impl From<ButtonKind> for ViewerCommand {
    fn from(kind: ButtonKind) -> Self {
        match kind {
            ButtonKind::NextPanorama => ViewerCommand::NextPanorama,
            ButtonKind::PreviousPanorama => ViewerCommand::PreviousPanorama,
            ButtonKind::ToggleInstructions => ViewerCommand::ToggleInstructions,
            ButtonKind::ExitSession => ViewerCommand::ExitSession,
        }
    }
}
