//! Core types and definitions for the panorama viewer simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! components, collaborator interfaces, commands, events, snapshots,
//! configuration and constants. It has no dependency on the ECS runtime
//! or any rendering/audio backend.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod interfaces;
pub mod state;
pub mod types;

pub use glam::Vec3;

#[cfg(test)]
mod tests;
