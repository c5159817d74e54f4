//! Foundation types and rounding helpers.
//!
//! Every other module works in terms of [`Point`], [`PointList`] and
//! [`ClipWindow`]. Coordinates are device pixels with y growing downward.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Rounding and conversion functions
// ============================================================================

/// Round a double to the nearest integer, ties to even.
#[inline]
pub fn iround(v: f64) -> i32 {
    let r = v.round();
    if (r - v).abs() == 0.5 {
        (r - r % 2.0) as i32
    } else {
        r as i32
    }
}

/// Truncate a double toward zero.
///
/// This is the emission rule for every floating-point rasterizer in the
/// crate (naive and DDA lines, curve samples, scale, fill spans).
#[inline]
pub fn itrunc(v: f64) -> i32 {
    v as i32
}

/// Convert degrees to radians.
#[inline]
pub fn deg2rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

// ============================================================================
// Point
// ============================================================================

/// An integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Build a point from floating-point coordinates, truncating toward zero.
    #[inline]
    pub fn from_f64_trunc(x: f64, y: f64) -> Self {
        Self::new(itrunc(x), itrunc(y))
    }

    /// Build a point from floating-point coordinates, rounding to nearest.
    #[inline]
    pub fn from_f64_round(x: f64, y: f64) -> Self {
        Self::new(iround(x), iround(y))
    }

    /// True if the two points are 8-connected neighbours (or equal).
    #[inline]
    pub fn touches(&self, other: &Point) -> bool {
        (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Ordered point sequence. Order encodes control-point order, polygon
/// winding or curve parameterization, depending on the primitive.
pub type PointList = Vec<Point>;

/// A horizontal fill run on one scanline, `(start, end)` inclusive.
pub type Span = (Point, Point);

/// Build a [`PointList`] from coordinate pairs.
pub fn points(coords: &[(i32, i32)]) -> PointList {
    coords.iter().copied().map(Point::from).collect()
}

// ============================================================================
// ClipWindow
// ============================================================================

/// Axis-aligned clip rectangle.
///
/// Construction normalizes the corners so that `x_min <= x_max` and
/// `y_min >= y_max`. The y pair is deliberately inverted: `y_max` holds the
/// numerically smaller bound and `y_min` the larger one, and the clip
/// outcodes in [`crate::clip_line`] are written against that layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClipWindow {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl ClipWindow {
    pub fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        let mut w = Self {
            x_min,
            y_min,
            x_max,
            y_max,
        };
        w.normalize();
        w
    }

    /// Restore the corner invariant after the fields were set directly.
    pub fn normalize(&mut self) -> &Self {
        if self.x_min > self.x_max {
            core::mem::swap(&mut self.x_min, &mut self.x_max);
        }
        if self.y_min < self.y_max {
            core::mem::swap(&mut self.y_min, &mut self.y_max);
        }
        self
    }

    /// Numerically smallest y inside the window.
    #[inline]
    pub fn y_low(&self) -> i32 {
        self.y_max
    }

    /// Numerically largest y inside the window.
    #[inline]
    pub fn y_high(&self) -> i32 {
        self.y_min
    }

    /// Returns `true` if (x, y) lies inside the closed window.
    pub fn hit_test(&self, x: f64, y: f64) -> bool {
        x >= self.x_min as f64
            && x <= self.x_max as f64
            && y >= self.y_low() as f64
            && y <= self.y_high() as f64
    }

    /// Returns `true` if the point lies inside the closed window.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.hit_test(p.x as f64, p.y as f64)
    }
}

// ============================================================================
// Tests
// ============================================================================
