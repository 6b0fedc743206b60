//! PINCH Gesture - Temporal gesture interpretation
//!
//! This crate turns a per-frame pinch signal into discrete events:
//! - Pinch distance and midpoint between two designated landmarks
//! - Idle/Hover cursor machine with a single-threshold hysteresis
//! - Activation zone confining tracking to the top of the frame
//! - Single-slot, get-and-clear event sink

pub mod pinch;
pub mod cursor;
pub mod sink;
pub mod tracker;

pub use pinch::*;
pub use cursor::*;
pub use sink::*;
pub use tracker::*;
