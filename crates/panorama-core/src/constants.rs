//! Tuning constants and stock layout parameters.
//!
//! Lengths are in meters, speeds in meters per second.

/// Default height of a button's top surface above its origin.
pub const BUTTON_SURFACE_Y: f32 = 0.01;

/// Default linear speed at which a released button returns to rest.
pub const BUTTON_RECOVERY_SPEED: f32 = 0.4;

/// Default travel below rest that registers a full press.
pub const BUTTON_FULL_PRESS_DISTANCE: f32 = 0.008;

/// Default half extents of a button's bounding box.
pub const BUTTON_HALF_EXTENTS: [f32; 3] = [0.025, 0.01, 0.025];

/// Horizontal spacing between buttons in the stock console layout.
pub const BUTTON_SPACING: f32 = 0.08;

/// Console placement relative to the head at calibration:
/// slightly below eye level and an arm's length forward (-Z is forward).
pub const CONSOLE_CALIBRATION_OFFSET: [f32; 3] = [0.0, -0.45, -0.35];

/// Instruction text placement in the console's frame.
pub const INSTRUCTION_TEXT_OFFSET: [f32; 3] = [0.0, 0.12, -0.05];

/// Delay between an exit request and the end of the session (seconds).
pub const SESSION_EXIT_DELAY_SECS: f64 = 2.0;

/// Radius of the fingertip contact sphere used by simulated hands.
pub const FINGERTIP_RADIUS: f32 = 0.008;

/// Stock panorama set.
pub const DEFAULT_PANORAMAS: [&str; 3] = [
    "panoramas/harbor.jpg",
    "panoramas/forest.jpg",
    "panoramas/observatory.jpg",
];
