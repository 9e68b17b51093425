//! Planar primitives used by the detector and the pair matcher.
//!
//! Coordinates follow image conventions: x grows to the right, y grows
//! downwards, units are pixels.

mod rotated;

pub use rotated::{is_long_rect, LongSide, RotatedRect, DEFAULT_MIN_ASPECT};

/// Point in image coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    /// Creates a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Point2) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Width/height pair of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size2 {
    pub width: f32,
    pub height: f32,
}

impl Size2 {
    /// Creates a size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
