//! Landmark identifiers and coordinates
//!
//! Ids follow the 21-point hand model used by the landmark provider:
//! 0 is the wrist, each finger contributes four joints ending at its tip.

use serde::{Deserialize, Serialize};

/// Number of landmarks reported per hand by the provider
pub const LANDMARKS_PER_HAND: usize = 21;

pub const WRIST: u8 = 0;
pub const THUMB_IP: u8 = 3;
pub const THUMB_TIP: u8 = 4;
pub const INDEX_PIP: u8 = 6;
pub const INDEX_TIP: u8 = 8;
pub const MIDDLE_PIP: u8 = 10;
pub const MIDDLE_TIP: u8 = 12;
pub const RING_PIP: u8 = 14;
pub const RING_TIP: u8 = 16;
pub const PINKY_PIP: u8 = 18;
pub const PINKY_TIP: u8 = 20;

/// Landmarks kept after filtering: base and tip of each finger, ascending
pub const FILTERED_IDS: [u8; 10] = [
    THUMB_IP, THUMB_TIP, INDEX_PIP, INDEX_TIP, MIDDLE_PIP, MIDDLE_TIP, RING_PIP, RING_TIP,
    PINKY_PIP, PINKY_TIP,
];

/// Length of a complete filtered hand
pub const FILTERED_LEN: usize = FILTERED_IDS.len();

/// Positions within a filtered hand
pub mod pos {
    pub const THUMB_BASE: usize = 0;
    pub const THUMB_TIP: usize = 1;
    pub const INDEX_BASE: usize = 2;
    pub const INDEX_TIP: usize = 3;
    pub const MIDDLE_BASE: usize = 4;
    pub const MIDDLE_TIP: usize = 5;
    pub const RING_BASE: usize = 6;
    pub const RING_TIP: usize = 7;
    pub const PINKY_BASE: usize = 8;
    pub const PINKY_TIP: usize = 9;
}

/// Is this id one of the filtered base/tip landmarks?
#[inline]
pub fn is_filtered_id(id: u8) -> bool {
    FILTERED_IDS.binary_search(&id).is_ok()
}

/// Provider position, normalized to [0, 1] of the frame size
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f32,
    pub y: f32,
}

impl NormalizedPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Scale to the pixel grid. Truncates toward zero.
    #[inline]
    pub fn to_pixels(self, width: u32, height: u32) -> Point {
        Point {
            x: (self.x * width as f32) as i32,
            y: (self.y * height as f32) as i32,
        }
    }
}

/// Pixel position. Image y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in pixels
    pub fn distance(&self, other: &Point) -> f32 {
        let dx = (other.x as i64 - self.x as i64) as f32;
        let dy = (other.y as i64 - self.y as i64) as f32;
        dx.hypot(dy)
    }

    /// Integer midpoint (floor division)
    pub fn midpoint(&self, other: &Point) -> Point {
        Point {
            x: (self.x as i64 + other.x as i64).div_euclid(2) as i32,
            y: (self.y as i64 + other.y as i64).div_euclid(2) as i32,
        }
    }
}

/// A landmark converted to pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Landmark {
    /// Anatomical id (0..=20)
    pub id: u8,
    pub x: i32,
    pub y: i32,
}

impl Landmark {
    pub const fn new(id: u8, x: i32, y: i32) -> Self {
        Self { id, x, y }
    }

    #[inline]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
