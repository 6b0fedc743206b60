//! Approximate hand bounding box
//!
//! The box is taken from four designated landmarks rather than an extremal
//! scan, so a rotated hand can produce an inverted box (`x_min > x_max`).
//! Consumers that need a proper rectangle should call [`BoundingBox::normalized`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl BoundingBox {
    pub const fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// The whole frame. Sizes past `i32::MAX` clamp to it.
    pub fn frame(width: u32, height: u32) -> Self {
        Self::new(
            0,
            0,
            i32::try_from(width).unwrap_or(i32::MAX),
            i32::try_from(height).unwrap_or(i32::MAX),
        )
    }

    pub fn width(&self) -> i64 {
        (self.x_max as i64 - self.x_min as i64).abs()
    }

    pub fn height(&self) -> i64 {
        (self.y_max as i64 - self.y_min as i64).abs()
    }

    /// `|x_max - x_min| * |y_max - y_min|` in square pixels
    pub fn area(&self) -> i64 {
        self.width().saturating_mul(self.height())
    }

    /// True when either axis is reversed
    pub fn is_inverted(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }

    /// Same box with each axis ordered min..max
    pub fn normalized(&self) -> Self {
        Self::new(
            self.x_min.min(self.x_max),
            self.y_min.min(self.y_max),
            self.x_min.max(self.x_max),
            self.y_min.max(self.y_max),
        )
    }
}
