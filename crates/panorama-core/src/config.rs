//! Viewer layout configuration.
//!
//! The stock layout is available through `Default`; custom layouts are read
//! from JSON and validated before any entity is spawned, so the per-frame
//! path never has to deal with malformed tuning.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::ButtonKind;

/// Full viewer layout: gallery contents, console placement and buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Panorama asset names, in gallery order.
    pub panoramas: Vec<String>,
    /// Console offset from the head position, applied once at calibration.
    #[serde(default = "default_console_offset")]
    pub console_offset: Vec3,
    /// Instruction text position in the console's frame.
    #[serde(default = "default_instruction_offset")]
    pub instruction_offset: Vec3,
    pub buttons: Vec<ButtonConfig>,
}

/// One console button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonConfig {
    pub kind: ButtonKind,
    /// Rest position in the console's frame.
    pub position: Vec3,
    #[serde(default = "default_half_extents")]
    pub half_extents: Vec3,
    #[serde(default = "default_surface_y")]
    pub surface_y: f32,
    #[serde(default = "default_recovery_speed")]
    pub recovery_speed: f32,
    #[serde(default = "default_full_press_distance")]
    pub full_press_distance: f32,
    #[serde(default)]
    pub press_sound: Option<String>,
    #[serde(default)]
    pub release_sound: Option<String>,
}

/// Reasons a configuration is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The document is not valid JSON for this schema.
    Parse(String),
    /// A button's tuning value is out of range.
    InvalidButton {
        index: usize,
        field: &'static str,
        value: f32,
    },
    /// A button's bounding box has a non-positive extent.
    InvalidExtents { index: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "failed to parse viewer config: {msg}"),
            ConfigError::InvalidButton {
                index,
                field,
                value,
            } => write!(f, "button {index}: invalid {field} ({value})"),
            ConfigError::InvalidExtents { index } => {
                write!(f, "button {index}: half extents must be positive")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ViewerConfig {
    /// Parse and validate a JSON layout.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ViewerConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check every button; the first offending entry is reported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, button) in self.buttons.iter().enumerate() {
            button.validate(index)?;
        }
        Ok(())
    }
}

impl ButtonConfig {
    /// Button with stock tuning at the given console position.
    pub fn new(kind: ButtonKind, position: Vec3) -> Self {
        Self {
            kind,
            position,
            half_extents: default_half_extents(),
            surface_y: BUTTON_SURFACE_Y,
            recovery_speed: BUTTON_RECOVERY_SPEED,
            full_press_distance: BUTTON_FULL_PRESS_DISTANCE,
            press_sound: Some("click_press".into()),
            release_sound: Some("click_release".into()),
        }
    }

    /// Check the preconditions `Button::new` asserts on.
    pub fn validate(&self, index: usize) -> Result<(), ConfigError> {
        let invalid = |field, value| ConfigError::InvalidButton {
            index,
            field,
            value,
        };
        if !(self.full_press_distance.is_finite() && self.full_press_distance > 0.0) {
            return Err(invalid("full_press_distance", self.full_press_distance));
        }
        if !(self.recovery_speed.is_finite() && self.recovery_speed >= 0.0) {
            return Err(invalid("recovery_speed", self.recovery_speed));
        }
        if !self.surface_y.is_finite() {
            return Err(invalid("surface_y", self.surface_y));
        }
        if !self.position.is_finite() {
            return Err(invalid("position", f32::NAN));
        }
        if !(self.half_extents.is_finite() && self.half_extents.cmpgt(Vec3::ZERO).all()) {
            return Err(ConfigError::InvalidExtents { index });
        }
        Ok(())
    }
}

impl Default for ViewerConfig {
    /// Four buttons in a row: previous, next, instructions, exit.
    fn default() -> Self {
        let kinds = [
            ButtonKind::PreviousPanorama,
            ButtonKind::NextPanorama,
            ButtonKind::ToggleInstructions,
            ButtonKind::ExitSession,
        ];
        let first_x = -BUTTON_SPACING * (kinds.len() as f32 - 1.0) / 2.0;
        let buttons = kinds
            .iter()
            .enumerate()
            .map(|(i, &kind)| {
                ButtonConfig::new(kind, Vec3::new(first_x + BUTTON_SPACING * i as f32, 0.0, 0.0))
            })
            .collect();

        Self {
            panoramas: DEFAULT_PANORAMAS.iter().map(|p| p.to_string()).collect(),
            console_offset: default_console_offset(),
            instruction_offset: default_instruction_offset(),
            buttons,
        }
    }
}

fn default_console_offset() -> Vec3 {
    Vec3::from_array(CONSOLE_CALIBRATION_OFFSET)
}

fn default_instruction_offset() -> Vec3 {
    Vec3::from_array(INSTRUCTION_TEXT_OFFSET)
}

fn default_half_extents() -> Vec3 {
    Vec3::from_array(BUTTON_HALF_EXTENTS)
}

fn default_surface_y() -> f32 {
    BUTTON_SURFACE_Y
}

fn default_recovery_speed() -> f32 {
    BUTTON_RECOVERY_SPEED
}

fn default_full_press_distance() -> f32 {
    BUTTON_FULL_PRESS_DISTANCE
}
