//! PINCH Runtime - Engine orchestration and frame loop support
//!
//! Per frame, the engine:
//! 1. Validates the frame size
//! 2. Preprocesses up to `max_hands` hands
//! 3. Derives chirality, finger states and the bounding box of each hand
//! 4. Applies the depth gate
//! 5. Selects the first left, admitted hand pinching inside the activation zone
//! 6. Feeds its pinch sample to the gesture tracker
//! 7. Leaves any released event in the single-slot sink for pollers
//!
//! The engine holds no locks. Use [`SharedEngine`] when a capture thread and
//! a poller need the same instance.

pub mod config;
pub mod engine;
pub mod overlay;
pub mod replay;
pub mod shared;
pub mod telemetry;

pub use config::*;
pub use engine::*;
pub use overlay::*;
pub use replay::*;
pub use shared::*;
pub use telemetry::*;
