//! Pinch measurement
//!
//! The pinch signal is the pixel distance between two positions of the
//! filtered landmark list, together with their integer midpoint.

use serde::{Deserialize, Serialize};

use pinch_core::{pos, Landmark, PinchError, PinchResult, Point};

/// Positions in the filtered landmark list whose distance forms the pinch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinchPoints {
    pub first: usize,
    pub second: usize,
}

impl Default for PinchPoints {
    fn default() -> Self {
        // thumb tip to index tip
        PinchPoints {
            first: pos::THUMB_TIP,
            second: pos::INDEX_TIP,
        }
    }
}

impl PinchPoints {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// Minimum list length needed to measure
    pub fn required_len(&self) -> usize {
        self.first.max(self.second) + 1
    }
}

/// One frame of pinch input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinchSample {
    /// Euclidean distance in pixels
    pub distance: f32,
    /// Midpoint of the two landmarks
    pub center: Point,
}

impl PinchSample {
    pub fn new(distance: f32, center: Point) -> Self {
        Self { distance, center }
    }
}

/// Measure the pinch on a filtered landmark list.
///
/// Calling this on a list too short for `points` is a contract violation and
/// fails with [`PinchError::InsufficientLandmarks`].
pub fn measure_pinch(landmarks: &[Landmark], points: PinchPoints) -> PinchResult<PinchSample> {
    let (Some(a), Some(b)) = (landmarks.get(points.first), landmarks.get(points.second)) else {
        return Err(PinchError::InsufficientLandmarks {
            expected: points.required_len(),
            actual: landmarks.len(),
        });
    };

    let (a, b) = (a.point(), b.point());
    Ok(PinchSample {
        distance: a.distance(&b),
        center: a.midpoint(&b),
    })
}

/// Linear mapping of pinch distance onto a 0..=100 level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinchRange {
    /// Distance mapped to level 0
    pub closed: f32,
    /// Distance mapped to level 100
    pub open: f32,
}

impl Default for PinchRange {
    fn default() -> Self {
        PinchRange {
            closed: 20.0,
            open: 200.0,
        }
    }
}

impl PinchRange {
    pub fn validate(&self) -> PinchResult<()> {
        if !(self.closed.is_finite() && self.open.is_finite()) || self.closed >= self.open {
            return Err(PinchError::InvalidConfig(format!(
                "pinch range {}..{} is empty",
                self.closed, self.open
            )));
        }
        Ok(())
    }

    /// Level in percent, clamped at both ends
    pub fn level(&self, distance: f32) -> f32 {
        let t = (distance - self.closed) / (self.open - self.closed);
        t.clamp(0.0, 1.0) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinch_core::FILTERED_IDS;

    fn line(xs: [i32; 10]) -> Vec<Landmark> {
        FILTERED_IDS
            .iter()
            .zip(xs)
            .map(|(&id, x)| Landmark::new(id, x, 100))
            .collect()
    }

    #[test]
    fn test_measure_default_points() {
        let hand = line([0, 100, 0, 140, 0, 0, 0, 0, 0, 0]);
        let sample = measure_pinch(&hand, PinchPoints::default()).unwrap();
        assert!((sample.distance - 40.0).abs() < 1e-4);
        assert_eq!(sample.center, Point::new(120, 100));
    }

    #[test]
    fn test_measure_custom_points() {
        let hand = line([10, 0, 0, 40, 0, 0, 0, 0, 0, 0]);
        let sample = measure_pinch(&hand, PinchPoints::new(0, 3)).unwrap();
        assert!((sample.distance - 30.0).abs() < 1e-4);
        assert_eq!(sample.center, Point::new(25, 100));
    }

    #[test]
    fn test_measure_short_list_fails_fast() {
        let err = measure_pinch(&[], PinchPoints::default()).unwrap_err();
        assert_eq!(
            err,
            PinchError::InsufficientLandmarks {
                expected: 4,
                actual: 0
            }
        );

        let hand = line([0; 10]);
        assert!(measure_pinch(&hand[..3], PinchPoints::default()).is_err());
    }

    #[test]
    fn test_pinch_level() {
        let range = PinchRange::default();
        assert_eq!(range.level(0.0), 0.0);
        assert_eq!(range.level(20.0), 0.0);
        assert!((range.level(110.0) - 50.0).abs() < 1e-4);
        assert_eq!(range.level(200.0), 100.0);
        assert_eq!(range.level(500.0), 100.0);
    }

    #[test]
    fn test_invalid_range() {
        assert!(PinchRange { closed: 50.0, open: 10.0 }.validate().is_err());
        assert!(PinchRange::default().validate().is_ok());
    }
}
