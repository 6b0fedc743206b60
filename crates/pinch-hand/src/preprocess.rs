//! Landmark preprocessing
//!
//! Reduces a raw 21-point hand to the ten base/tip landmarks and derives the
//! bounding box from four fixed landmarks in the same pass:
//!
//! | edge    | source landmark     |
//! |---------|---------------------|
//! | `y_min` | wrist (0)           |
//! | `x_min` | thumb tip (4)       |
//! | `y_max` | middle tip (12)     |
//! | `x_max` | pinky tip (20)      |
//!
//! A missing source landmark leaves its edge at the frame border. The box is
//! not the extremal one and is inverted on the y axis for an upright hand.

use serde::{Deserialize, Serialize};

use pinch_core::{
    is_filtered_id, BoundingBox, Frame, Landmark, RawHand, FILTERED_LEN, LANDMARKS_PER_HAND,
    MIDDLE_TIP, PINKY_TIP, THUMB_TIP, WRIST,
};

/// A preprocessed hand: filtered pixel landmarks plus the approximate box
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    /// Filtered landmarks, ascending id
    pub landmarks: Vec<Landmark>,
    /// Approximate bounding box
    pub bbox: BoundingBox,
}

impl Hand {
    /// All ten base/tip landmarks present
    pub fn is_complete(&self) -> bool {
        self.landmarks.len() >= FILTERED_LEN
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}

/// Filter one raw hand and derive its bounding box
pub fn preprocess_hand(raw: &RawHand, width: u32, height: u32) -> Hand {
    let mut landmarks = Vec::with_capacity(FILTERED_LEN);
    let mut bbox = BoundingBox::frame(width, height);

    for (id, point) in raw.iter().take(LANDMARKS_PER_HAND) {
        let px = point.to_pixels(width, height);

        match id {
            WRIST => bbox.y_min = px.y,
            THUMB_TIP => bbox.x_min = px.x,
            MIDDLE_TIP => bbox.y_max = px.y,
            PINKY_TIP => bbox.x_max = px.x,
            _ => {}
        }

        if is_filtered_id(id) {
            landmarks.push(Landmark::new(id, px.x, px.y));
        }
    }

    Hand { landmarks, bbox }
}

/// Preprocess every hand in a frame, in provider order
pub fn preprocess_frame(frame: &Frame) -> Vec<Hand> {
    frame
        .hands
        .iter()
        .map(|raw| preprocess_hand(raw, frame.width, frame.height))
        .collect()
}
