//! ECS systems that operate on the viewer world each frame.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only
//! passes). They keep no state between frames; everything they remember
//! lives in components.

pub mod button;
pub mod calibration;
pub mod finger_input;
pub mod instruction;
pub mod snapshot;
