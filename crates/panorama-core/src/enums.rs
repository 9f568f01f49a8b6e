//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Physical press state of a 3D button.
///
/// Resting → Pressed → FullyPressed while a finger pushes the cap down;
/// any displaced state → Recovering once contact is lost, then back to
/// Resting when the cap reaches its rest height. Cyclic, no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonState {
    #[default]
    Resting,
    /// A finger is in contact with the cap.
    Pressed,
    /// The cap has travelled its full press distance.
    FullyPressed,
    /// No contact; the cap is travelling back up toward rest.
    Recovering,
}

impl ButtonState {
    /// Whether a finger is touching the button in this state.
    pub fn is_in_contact(self) -> bool {
        matches!(self, ButtonState::Pressed | ButtonState::FullyPressed)
    }
}

/// What a console button does when fully pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ButtonKind {
    /// Show the next panorama in the gallery (wraps around).
    NextPanorama,
    /// Show the previous panorama in the gallery (wraps around).
    PreviousPanorama,
    /// Enable or disable the contextual instruction text.
    ToggleInstructions,
    /// End the VR session after a short delay.
    ExitSession,
}

impl ButtonKind {
    /// Short label used in logs and the replay tool.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NextPanorama => "next",
            Self::PreviousPanorama => "previous",
            Self::ToggleInstructions => "instructions",
            Self::ExitSession => "exit",
        }
    }
}

/// Which hand a tracked hand proxy represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}
