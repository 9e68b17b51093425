//! Rotated rectangles and their long-side descriptors.
//!
//! `angle_deg` is the direction of the *width* edge, measured from the +x
//! axis towards +y (clockwise on screen). Helpers accept any finite angle;
//! [`RotatedRect::from_corners`] canonicalizes into [45, 135), which makes
//! the width the edge closer to the vertical axis. An upright light bar
//! therefore always has `width > height`, whichever way it leans.

use crate::geometry::{Point2, Size2};
use crate::util::math::{normalize_angle, sin_cos_deg};

/// Minimum long/short side ratio for a rectangle to count as "long".
pub const DEFAULT_MIN_ASPECT: f32 = 1.5;

/// Rectangle with arbitrary orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotatedRect {
    /// Center in pixels.
    pub center: Point2,
    /// Edge lengths; `width` runs along `angle_deg`.
    pub size: Size2,
    /// Orientation of the width edge in degrees.
    pub angle_deg: f32,
}

/// Length and orientation of a rectangle's longer edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LongSide {
    pub length: f32,
    /// Orientation in [0, 180).
    pub angle_deg: f32,
}

impl RotatedRect {
    /// Creates a rectangle from center, size and width-edge angle.
    pub const fn new(cx: f32, cy: f32, width: f32, height: f32, angle_deg: f32) -> Self {
        Self {
            center: Point2::new(cx, cy),
            size: Size2::new(width, height),
            angle_deg,
        }
    }

    /// Builds a rectangle from its four corners listed in boundary order.
    ///
    /// The result is canonicalized so that `angle_deg` lies in [45, 135).
    pub fn from_corners(corners: [Point2; 4]) -> Self {
        let [p0, p1, p2, p3] = corners;
        let center = Point2::new(
            (p0.x + p1.x + p2.x + p3.x) / 4.0,
            (p0.y + p1.y + p2.y + p3.y) / 4.0,
        );
        let mut width = p0.distance(p1);
        let mut height = p1.distance(p2);
        let mut angle = if width > 0.0 {
            normalize_angle((p1.y - p0.y).atan2(p1.x - p0.x).to_degrees())
        } else {
            normalize_angle((p2.y - p1.y).atan2(p2.x - p1.x).to_degrees() - 90.0)
        };

        if angle < 45.0 {
            angle += 90.0;
            std::mem::swap(&mut width, &mut height);
        } else if angle >= 135.0 {
            angle -= 90.0;
            std::mem::swap(&mut width, &mut height);
        }

        Self {
            center,
            size: Size2::new(width, height),
            angle_deg: angle,
        }
    }

    /// Length of the longer edge.
    pub fn long_side(&self) -> f32 {
        self.size.width.max(self.size.height)
    }

    /// Orientation of the longer edge in [0, 180).
    ///
    /// When `width < height` the long edge is perpendicular to the width
    /// edge, hence the 90 degree offset.
    pub fn long_side_angle(&self) -> f32 {
        let mut angle = self.angle_deg;
        if self.size.width < self.size.height {
            angle += 90.0;
        }
        normalize_angle(angle)
    }

    /// Long side length and orientation together.
    pub fn long_side_descriptor(&self) -> LongSide {
        LongSide {
            length: self.long_side(),
            angle_deg: self.long_side_angle(),
        }
    }

    /// Ratio of the longer to the shorter edge, or `None` for degenerate
    /// rectangles (an edge at or below `f32::EPSILON`, or non-finite).
    pub fn aspect_ratio(&self) -> Option<f32> {
        let (w, h) = (self.size.width, self.size.height);
        if !w.is_finite() || !h.is_finite() {
            return None;
        }
        let short = w.min(h);
        if short <= f32::EPSILON {
            return None;
        }
        Some(w.max(h) / short)
    }

    /// Area in square pixels.
    pub fn area(&self) -> f32 {
        self.size.width * self.size.height
    }

    /// Corner points in boundary order, starting from the corner at
    /// `-width/2, +height/2` in the rectangle's own frame.
    pub fn corners(&self) -> [Point2; 4] {
        let (sin, cos) = sin_cos_deg(self.angle_deg);
        let hw = self.size.width * 0.5;
        let hh = self.size.height * 0.5;
        let c = self.center;
        // width axis (cos, sin), height axis (-sin, cos)
        let at = |u: f32, v: f32| Point2::new(c.x + u * cos - v * sin, c.y + u * sin + v * cos);
        [at(-hw, hh), at(-hw, -hh), at(hw, -hh), at(hw, hh)]
    }
}

/// Returns true when the rectangle's long/short ratio is at least
/// `min_aspect`. Degenerate rectangles are never long.
pub fn is_long_rect(rect: &RotatedRect, min_aspect: f32) -> bool {
    rect.aspect_ratio()
        .is_some_and(|aspect| aspect >= min_aspect)
}
