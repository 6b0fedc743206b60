//! Depth/scale gate
//!
//! Approximates "hand at a usable distance" from the bounding-box area. Too
//! small means far and noisy, too large means close and unstable.

use serde::{Deserialize, Serialize};
use tracing::trace;

use pinch_core::{BoundingBox, PinchError, PinchResult};

/// Area band in square pixels. Both ends are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthGate {
    pub min_area: i64,
    pub max_area: i64,
}

impl Default for DepthGate {
    fn default() -> Self {
        // 640x480 reference band
        DepthGate {
            min_area: 8_000,
            max_area: 40_000,
        }
    }
}

impl DepthGate {
    pub fn new(min_area: i64, max_area: i64) -> PinchResult<Self> {
        let gate = DepthGate { min_area, max_area };
        gate.validate()?;
        Ok(gate)
    }

    /// Tighter band used for slider-style control
    pub fn strict() -> Self {
        DepthGate {
            min_area: 10_000,
            max_area: 40_000,
        }
    }

    pub fn validate(&self) -> PinchResult<()> {
        if self.min_area < 0 || self.min_area >= self.max_area {
            return Err(PinchError::InvalidConfig(format!(
                "depth band {}..{} is empty",
                self.min_area, self.max_area
            )));
        }
        Ok(())
    }

    /// Is `area` strictly inside the band?
    #[inline]
    pub fn admits_area(&self, area: i64) -> bool {
        self.min_area < area && area < self.max_area
    }

    pub fn admits(&self, bbox: &BoundingBox) -> bool {
        let area = bbox.area();
        let admitted = self.admits_area(area);
        trace!(area, admitted, "depth gate");
        admitted
    }
}
