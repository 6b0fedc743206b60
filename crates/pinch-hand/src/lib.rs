//! PINCH Hand - Per-hand feature extraction
//!
//! Everything in this crate is a pure function of one frame:
//! - Landmark filtering and the approximate bounding box
//! - Chirality from the thumb/pinky tips
//! - Open/closed state per finger
//! - Depth/scale admission gate

pub mod preprocess;
pub mod orientation;
pub mod fingers;
pub mod depth;

pub use preprocess::*;
pub use orientation::*;
pub use fingers::*;
pub use depth::*;
