//! Frames as delivered by the landmark provider

use serde::{Deserialize, Serialize};

use crate::{NormalizedPoint, PinchError, PinchResult};

/// One detected hand. The landmark id is the position in `landmarks`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawHand {
    pub landmarks: Vec<NormalizedPoint>,
}

impl RawHand {
    pub fn new(landmarks: Vec<NormalizedPoint>) -> Self {
        Self { landmarks }
    }

    /// Iterate `(id, point)` pairs in provider order
    pub fn iter(&self) -> impl Iterator<Item = (u8, NormalizedPoint)> + '_ {
        self.landmarks
            .iter()
            .enumerate()
            .map(|(id, p)| (id as u8, *p))
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}

/// A single provider frame: zero or more hands plus the pixel size
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub hands: Vec<RawHand>,
}

impl Frame {
    pub fn new(width: u32, height: u32, hands: Vec<RawHand>) -> Self {
        Self {
            width,
            height,
            hands,
        }
    }

    /// A frame with no detections
    pub fn empty(width: u32, height: u32) -> Self {
        Self::new(width, height, Vec::new())
    }

    /// Width and height must both be positive
    pub fn validate(&self) -> PinchResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PinchError::InvalidFrameSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn has_hands(&self) -> bool {
        !self.hands.is_empty()
    }
}
