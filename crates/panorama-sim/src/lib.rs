//! Simulation engine for the VR panorama viewer.
//!
//! Owns the hecs ECS world, runs the button, finger-input, calibration and
//! instruction systems once per rendered frame, and produces
//! `FrameSnapshot`s for the renderer. Completely headless: every
//! collaborator (scene graph, hands, head pose, audio) is reached through
//! the traits in `panorama_core::interfaces`.

pub mod command_queue;
pub mod engine;
pub mod gallery;
pub mod scene;
pub mod systems;
pub mod world_setup;

pub use command_queue::CommandQueue;
pub use engine::{Collaborators, SimConfig, Simulation};
pub use panorama_core as core;
