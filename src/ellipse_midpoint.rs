//! Midpoint ellipse rasterization.
//!
//! Steps the first quadrant of an axis-aligned ellipse with the classic
//! two-region decision variable and mirrors every step into the other
//! three quadrants about the center of the bounding box.

use crate::basics::{Point, PointList};
use crate::error::{expect_points, Result};

// ============================================================================
// MidpointEllipseInterpolator
// ============================================================================

/// Quadrant walker for the midpoint ellipse algorithm.
///
/// Yields `(dx, dy)` offsets from the center, starting at `(0, ry)` and
/// ending at `(x, 0)`. Region 1 steps x while the curve slope magnitude is
/// below 1, region 2 steps y down to zero.
#[derive(Debug, Clone)]
pub struct MidpointEllipseInterpolator {
    rx2: f64,
    ry2: f64,
    x: i32,
    y: i32,
    p: f64,
    region: u8,
}

impl MidpointEllipseInterpolator {
    pub fn new(rx: i32, ry: i32) -> Self {
        let rx2 = (rx as i64 * rx as i64) as f64;
        let ry2 = (ry as i64 * ry as i64) as f64;
        Self {
            rx2,
            ry2,
            x: 0,
            y: ry,
            p: ry2 + rx2 * (-(ry as f64) + 0.25),
            region: 0,
        }
    }

    #[inline]
    fn in_region1(&self) -> bool {
        self.ry2 * ((self.x + 1) as f64) < self.rx2 * (self.y as f64 - 0.5)
    }
}

impl Iterator for MidpointEllipseInterpolator {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        let (x, y) = (self.x as f64, self.y as f64);
        match self.region {
            0 => {
                self.region = 1;
                return Some((self.x, self.y));
            }
            1 if self.in_region1() => {
                if self.p < 0.0 {
                    self.p += self.ry2 * (2.0 * x + 3.0);
                } else {
                    self.p += self.ry2 * (2.0 * x + 3.0) + self.rx2 * (-2.0 * y + 2.0);
                    self.y -= 1;
                }
                self.x += 1;
                return Some((self.x, self.y));
            }
            1 => {
                self.region = 2;
                self.p = self.ry2 * (x + 0.5) * (x + 0.5) + self.rx2 * (y - 1.0) * (y - 1.0)
                    - self.rx2 * self.ry2;
            }
            _ => {}
        }

        if self.y <= 0 {
            return None;
        }
        let (x, y) = (self.x as f64, self.y as f64);
        if self.p < 0.0 {
            self.p += self.rx2 * (-2.0 * y + 3.0) + self.ry2 * (2.0 * x + 2.0);
            self.x += 1;
        } else {
            self.p += self.rx2 * (-2.0 * y + 3.0);
        }
        self.y -= 1;
        Some((self.x, self.y))
    }
}

// ============================================================================
// Bounding box helpers
// ============================================================================

/// Center and integer semi-axes of the ellipse inscribed in a bounding box.
///
/// Both are truncated toward zero; the decision variable is computed on the
/// truncated semi-axes.
pub fn ellipse_geometry(c0: Point, c1: Point) -> (Point, i32, i32) {
    let rx = (c1.x - c0.x).abs() / 2;
    let ry = (c0.y - c1.y).abs() / 2;
    let center = Point::new((c0.x + c1.x) / 2, (c0.y + c1.y) / 2);
    (center, rx, ry)
}

/// Reorder two opposite corners into `(min x, max y)` / `(max x, min y)`.
///
/// This is the corner layout scene editors store for an ellipse; the
/// rasterizer accepts the corners in any order.
pub fn normalize_ellipse_box(c0: Point, c1: Point) -> [Point; 2] {
    [
        Point::new(c0.x.min(c1.x), c0.y.max(c1.y)),
        Point::new(c0.x.max(c1.x), c0.y.min(c1.y)),
    ]
}

// ============================================================================
// Rasterization
// ============================================================================

#[inline]
fn push_symmetric(out: &mut PointList, c: Point, x: i32, y: i32) {
    out.push(Point::new(c.x + x, c.y + y));
    out.push(Point::new(c.x + x, c.y - y));
    out.push(Point::new(c.x - x, c.y + y));
    out.push(Point::new(c.x - x, c.y - y));
}

/// Rasterize the ellipse inscribed in the box spanned by two corners.
pub fn ellipse_points(c0: Point, c1: Point) -> PointList {
    let (center, rx, ry) = ellipse_geometry(c0, c1);
    let mut out = PointList::new();
    for (x, y) in MidpointEllipseInterpolator::new(rx, ry) {
        push_symmetric(&mut out, center, x, y);
    }
    out
}

/// Rasterize an ellipse given as a two-corner bounding box.
pub fn rasterize_ellipse(bbox: &[Point]) -> Result<PointList> {
    expect_points("ellipse", bbox, 2)?;
    Ok(ellipse_points(bbox[0], bbox[1]))
}

// ============================================================================
// Tests
// ============================================================================
