//! PINCH Test Harness - Synthetic input and gesture scenarios
//!
//! This crate provides:
//! - Parametric synthetic hands (handedness, pose, scale, seeded jitter)
//! - Scripted frame sequences run through the engine
//! - A recording overlay for inspecting what the engine would draw
//! - End-to-end tests over `GestureEngine` and `SharedEngine`

pub mod synth;
pub mod scenario;

#[cfg(test)]
mod integration;

pub use synth::*;
pub use scenario::*;
