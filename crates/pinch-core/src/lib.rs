//! PINCH Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout the gesture engine:
//! - Anatomical landmark ids and the filtered finger layout
//! - Frames, raw hands and pixel landmarks
//! - The approximate bounding box
//! - Gesture events and their wire tokens
//! - Error types

pub mod landmark;
pub mod frame;
pub mod bbox;
pub mod event;
pub mod error;

pub use landmark::*;
pub use frame::*;
pub use bbox::*;
pub use event::*;
pub use error::*;
