//! ECS components for hecs entities.
//!
//! Components are plain data. Game logic lives in systems; the only
//! methods here are constructors that check configuration preconditions
//! and the thin wrapper around a button's callback.

use std::fmt;

use glam::Vec3;

use crate::enums::ButtonState;
use crate::interfaces::{SharedNode, SoundHandle};

/// Links an entity to its externally-owned scene node.
#[derive(Clone)]
pub struct NodeRef(pub SharedNode);

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&self.0.position()).finish()
    }
}

/// Callback invoked on the rising edge into `FullyPressed`.
///
/// The default holds no callback and invoking it does nothing.
#[derive(Default)]
pub struct ButtonAction(Option<Box<dyn FnMut() + Send + Sync>>);

impl ButtonAction {
    pub fn new(action: impl FnMut() + Send + Sync + 'static) -> Self {
        Self(Some(Box::new(action)))
    }

    /// No-op action.
    pub fn none() -> Self {
        Self(None)
    }

    pub fn is_bound(&self) -> bool {
        self.0.is_some()
    }

    pub fn invoke(&mut self) {
        if let Some(action) = self.0.as_mut() {
            action();
        }
    }
}

impl fmt::Debug for ButtonAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_bound() {
            "ButtonAction(bound)"
        } else {
            "ButtonAction(none)"
        })
    }
}

/// Per-button press state and tuning.
pub struct Button {
    /// State resolved by finger input this frame.
    pub curr_state: ButtonState,
    /// State resolved by finger input on the previous frame.
    pub prev_state: ButtonState,
    /// Cue names resolved against the audio backend once it is ready.
    pub press_cue: Option<String>,
    pub release_cue: Option<String>,
    pub press_sound: Option<SoundHandle>,
    pub release_sound: Option<SoundHandle>,
    /// Rest height, captured from the node on the first simulated frame.
    pub resting_y: Option<f32>,
    /// Top-surface offset above the node origin, in the button's local frame.
    pub surface_y: f32,
    /// Linear return rate in units per second.
    pub recovery_speed: f32,
    /// Travel below rest that registers a full press.
    pub full_press_distance: f32,
    pub action: ButtonAction,
}

impl Button {
    /// Create a resting button.
    ///
    /// # Panics
    /// If `full_press_distance` is not strictly positive or `recovery_speed`
    /// is negative. Both are setup-time configuration errors.
    pub fn new(surface_y: f32, recovery_speed: f32, full_press_distance: f32) -> Self {
        assert!(
            full_press_distance.is_finite() && full_press_distance > 0.0,
            "full_press_distance must be positive, got {full_press_distance}"
        );
        assert!(
            recovery_speed.is_finite() && recovery_speed >= 0.0,
            "recovery_speed must be non-negative, got {recovery_speed}"
        );
        assert!(surface_y.is_finite(), "surface_y must be finite");
        Self {
            curr_state: ButtonState::Resting,
            prev_state: ButtonState::Resting,
            press_cue: None,
            release_cue: None,
            press_sound: None,
            release_sound: None,
            resting_y: None,
            surface_y,
            recovery_speed,
            full_press_distance,
            action: ButtonAction::none(),
        }
    }

    pub fn with_action(mut self, action: ButtonAction) -> Self {
        self.action = action;
        self
    }

    pub fn with_sound_cues(mut self, press: Option<String>, release: Option<String>) -> Self {
        self.press_cue = press;
        self.release_cue = release;
        self
    }

    /// Height at which the cap counts as fully pressed.
    /// `None` until the rest height has been captured.
    pub fn full_press_y(&self) -> Option<f32> {
        self.resting_y.map(|rest| rest - self.full_press_distance)
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("curr_state", &self.curr_state)
            .field("prev_state", &self.prev_state)
            .field("resting_y", &self.resting_y)
            .field("surface_y", &self.surface_y)
            .field("recovery_speed", &self.recovery_speed)
            .field("full_press_distance", &self.full_press_distance)
            .field("press_sound", &self.press_sound.is_some())
            .field("release_sound", &self.release_sound.is_some())
            .field("action", &self.action)
            .finish()
    }
}

/// Marks a button as eligible for finger-contact evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Pressable;

/// Marks an entity whose node visibility mirrors hand visibility.
#[derive(Debug, Clone, Copy)]
pub struct InstructionText;

/// Fixed offset from the head position applied at calibration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationOffset(pub Vec3);

/// Present until the entity has been aligned to the head pose once.
#[derive(Debug, Clone, Copy)]
pub struct NeedsCalibration;
