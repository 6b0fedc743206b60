//! Hand chirality
//!
//! Chirality is inferred only from the horizontal order of the thumb tip and
//! the pinky tip in the filtered landmark list.

use serde::{Deserialize, Serialize};

use pinch_core::{pos, Landmark};

/// Which side the thumb sits on relative to the pinky
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Thumb tip right of the pinky tip
    Right,
    /// Thumb tip left of (or level with) the pinky tip
    Left,
}

impl Polarity {
    /// `None` when the thumb or pinky tip is missing
    pub fn of(landmarks: &[Landmark]) -> Option<Self> {
        let thumb_tip = landmarks.get(pos::THUMB_TIP)?;
        let pinky_tip = landmarks.get(pos::PINKY_TIP)?;
        if thumb_tip.x > pinky_tip.x {
            Some(Polarity::Right)
        } else {
            Some(Polarity::Left)
        }
    }
}

/// Is this a left hand? `false` on empty or short input.
pub fn is_left(landmarks: &[Landmark]) -> bool {
    match (landmarks.get(pos::THUMB_TIP), landmarks.get(pos::PINKY_TIP)) {
        (Some(thumb_tip), Some(pinky_tip)) => thumb_tip.x < pinky_tip.x,
        _ => false,
    }
}
