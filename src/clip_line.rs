//! Line segment clipping against a [`ClipWindow`].
//!
//! Two algorithms: Cohen-Sutherland (region outcodes, iterative endpoint
//! replacement) and Liang-Barsky (parametric interval tightening). Both
//! return the visible sub-segment rounded to the nearest pixel (ties to
//! even), or `None` when nothing is visible. Liang-Barsky keeps the input
//! orientation; Cohen-Sutherland may reverse it.

use tracing::trace;

use crate::algorithm::ClipAlgorithm;
use crate::basics::{ClipWindow, Point, PointList};
use crate::error::{expect_points, Result};

// ============================================================================
// Outcodes
// ============================================================================

/// `x < x_min`
pub const CLIP_LEFT: u8 = 1;
/// `x > x_max`
pub const CLIP_RIGHT: u8 = 1 << 1;
/// `y < y_max`, below the numerically smaller y bound.
pub const CLIP_BOTTOM: u8 = 1 << 2;
/// `y > y_min`, above the numerically larger y bound.
pub const CLIP_TOP: u8 = 1 << 3;

/// Compute the Cohen-Sutherland outcode for (x, y).
///
/// The y bits follow the window's inverted y pair: `CLIP_BOTTOM` is set
/// against `y_max` and `CLIP_TOP` against `y_min`.
///
/// ```text
///          |        |
///   1001   |  1000  |  1010
///          |        |
/// ---------+--------+--------- y_min
///          |        |
///   0001   |  0000  |  0010
///          |        |
/// ---------+--------+--------- y_max
///          |        |
///   0101   |  0100  |  0110
///          |        |
///        x_min    x_max
/// ```
#[inline]
pub fn outcode(x: f64, y: f64, w: &ClipWindow) -> u8 {
    let mut code = 0;
    if x < w.x_min as f64 {
        code |= CLIP_LEFT;
    } else if x > w.x_max as f64 {
        code |= CLIP_RIGHT;
    }
    if y < w.y_max as f64 {
        code |= CLIP_BOTTOM;
    } else if y > w.y_min as f64 {
        code |= CLIP_TOP;
    }
    code
}

// ============================================================================
// Cohen-Sutherland
// ============================================================================

/// Clip a segment with the Cohen-Sutherland algorithm.
///
/// While either endpoint is outside, reject if both share an outside
/// region; otherwise move an outside endpoint onto the first violated
/// boundary in the order left, right, bottom, top.
///
/// When the first endpoint is already inside, the endpoints trade places
/// and stay traded, so the result may run opposite to the input.
pub fn clip_cohen_sutherland(p0: Point, p1: Point, w: &ClipWindow) -> Option<[Point; 2]> {
    let (mut x1, mut y1) = (p0.x as f64, p0.y as f64);
    let (mut x2, mut y2) = (p1.x as f64, p1.y as f64);
    let mut c1 = outcode(x1, y1, w);
    let mut c2 = outcode(x2, y2, w);

    while (c1 | c2) != 0 {
        if (c1 & c2) != 0 {
            trace!(?p0, ?p1, ?w, "segment rejected by outcodes");
            return None;
        }
        if c1 == 0 {
            core::mem::swap(&mut x1, &mut x2);
            core::mem::swap(&mut y1, &mut y2);
            core::mem::swap(&mut c1, &mut c2);
        }

        let (x, y) = if (c1 & CLIP_LEFT) != 0 {
            let k = (y2 - y1) / (x2 - x1);
            let x = w.x_min as f64;
            (x, y1 + k * (x - x1))
        } else if (c1 & CLIP_RIGHT) != 0 {
            let k = (y2 - y1) / (x2 - x1);
            let x = w.x_max as f64;
            (x, y1 + k * (x - x1))
        } else if (c1 & CLIP_BOTTOM) != 0 {
            let k = (x2 - x1) / (y2 - y1);
            let y = w.y_max as f64;
            (x1 + k * (y - y1), y)
        } else {
            let k = (x2 - x1) / (y2 - y1);
            let y = w.y_min as f64;
            (x1 + k * (y - y1), y)
        };

        x1 = x;
        y1 = y;
        c1 = outcode(x1, y1, w);
    }

    Some([Point::from_f64_round(x1, y1), Point::from_f64_round(x2, y2)])
}

// ============================================================================
// Liang-Barsky
// ============================================================================

/// Clip a segment with the Liang-Barsky algorithm.
///
/// For each boundary `(p, q)`, `p < 0` raises the entry parameter and
/// `p > 0` lowers the exit parameter to `q / p`; a segment parallel to a
/// boundary (`p == 0`) and outside it (`q < 0`) is rejected.
pub fn clip_liang_barsky(p0: Point, p1: Point, w: &ClipWindow) -> Option<[Point; 2]> {
    let (x0, y0) = (p0.x as f64, p0.y as f64);
    let dx = (p1.x - p0.x) as f64;
    let dy = (p1.y - p0.y) as f64;

    let boundaries = [
        (-dx, x0 - w.x_min as f64),
        (dx, w.x_max as f64 - x0),
        (-dy, y0 - w.y_max as f64),
        (dy, w.y_min as f64 - y0),
    ];

    let mut u_begin = 0.0_f64;
    let mut u_end = 1.0_f64;
    for (p, q) in boundaries {
        if p == 0.0 {
            if q < 0.0 {
                trace!(?p0, ?p1, ?w, "parallel segment outside window");
                return None;
            }
            continue;
        }
        let u = q / p;
        if p < 0.0 {
            u_begin = u_begin.max(u);
        } else {
            u_end = u_end.min(u);
        }
    }

    if u_begin > u_end {
        trace!(?p0, ?p1, ?w, u_begin, u_end, "empty parametric interval");
        return None;
    }

    Some([
        Point::from_f64_round(x0 + u_begin * dx, y0 + u_begin * dy),
        Point::from_f64_round(x0 + u_end * dx, y0 + u_end * dy),
    ])
}

// ============================================================================
// Dispatch
// ============================================================================

/// Clip the segment between two points with the chosen algorithm.
pub fn clip_segment(p0: Point, p1: Point, window: &ClipWindow, algorithm: ClipAlgorithm) -> Option<[Point; 2]> {
    match algorithm {
        ClipAlgorithm::CohenSutherland => clip_cohen_sutherland(p0, p1, window),
        ClipAlgorithm::LiangBarsky => clip_liang_barsky(p0, p1, window),
    }
}

/// Clip a two-point segment. `Ok(None)` means nothing is visible and the
/// primitive should be discarded.
pub fn clip_line(points: &[Point], window: &ClipWindow, algorithm: ClipAlgorithm) -> Result<Option<PointList>> {
    expect_points("clipped line", points, 2)?;
    Ok(clip_segment(points[0], points[1], window, algorithm).map(|s| s.to_vec()))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::points;

    const ALGORITHMS: [ClipAlgorithm; 2] = [ClipAlgorithm::CohenSutherland, ClipAlgorithm::LiangBarsky];

    fn window() -> ClipWindow {
        ClipWindow::new(2, 2, 8, 8)
    }

    fn pt(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_outcode_inside() {
        assert_eq!(outcode(5.0, 5.0, &window()), 0);
        assert_eq!(outcode(2.0, 8.0, &window()), 0);
    }

    #[test]
    fn test_outcode_sides() {
        let w = window();
        assert_eq!(outcode(0.0, 5.0, &w), CLIP_LEFT);
        assert_eq!(outcode(9.0, 5.0, &w), CLIP_RIGHT);
        // y_max holds the smaller bound, so small y reports "bottom".
        assert_eq!(outcode(5.0, 1.0, &w), CLIP_BOTTOM);
        assert_eq!(outcode(5.0, 9.0, &w), CLIP_TOP);
        assert_eq!(outcode(0.0, 0.0, &w), CLIP_LEFT | CLIP_BOTTOM);
        assert_eq!(outcode(10.0, 10.0, &w), CLIP_RIGHT | CLIP_TOP);
    }

    #[test]
    fn test_inside_unchanged() {
        for alg in ALGORITHMS {
            assert_eq!(
                clip_segment(pt(3, 4), pt(7, 6), &window(), alg),
                Some([pt(3, 4), pt(7, 6)])
            );
        }
    }

    #[test]
    fn test_outside_rejected() {
        let cases = [
            (pt(0, 0), pt(10, 0)),
            (pt(0, 0), pt(0, 10)),
            (pt(9, 0), pt(20, 20)),
            (pt(0, 7), pt(3, 12)),
        ];
        for alg in ALGORITHMS {
            for (a, b) in cases {
                assert_eq!(clip_segment(a, b, &window(), alg), None, "{:?} {:?}-{:?}", alg, a, b);
            }
        }
    }

    fn sorted(seg: Option<[Point; 2]>) -> Option<[Point; 2]> {
        seg.map(|mut s| {
            s.sort();
            s
        })
    }

    #[test]
    fn test_horizontal_crossing() {
        for alg in ALGORITHMS {
            assert_eq!(
                sorted(clip_segment(pt(0, 5), pt(20, 5), &window(), alg)),
                Some([pt(2, 5), pt(8, 5)])
            );
        }
    }

    #[test]
    fn test_diagonal_crossing() {
        for alg in ALGORITHMS {
            assert_eq!(
                sorted(clip_segment(pt(0, 0), pt(10, 10), &window(), alg)),
                Some([pt(2, 2), pt(8, 8)])
            );
            assert_eq!(
                sorted(clip_segment(pt(10, 0), pt(0, 10), &window(), alg)),
                Some([pt(2, 8), pt(8, 2)])
            );
        }
    }

    #[test]
    fn test_liang_barsky_keeps_orientation() {
        let w = window();
        assert_eq!(clip_liang_barsky(pt(20, 5), pt(5, 5), &w), Some([pt(8, 5), pt(5, 5)]));
        assert_eq!(clip_liang_barsky(pt(5, 5), pt(5, -20), &w), Some([pt(5, 5), pt(5, 2)]));
        assert_eq!(clip_liang_barsky(pt(0, 0), pt(10, 10), &w), Some([pt(2, 2), pt(8, 8)]));
    }

    #[test]
    fn test_cohen_sutherland_endpoint_order() {
        let w = window();
        // First endpoint outside: clipped in place.
        assert_eq!(clip_cohen_sutherland(pt(20, 5), pt(5, 5), &w), Some([pt(8, 5), pt(5, 5)]));
        // First endpoint inside: the endpoints trade places.
        assert_eq!(clip_cohen_sutherland(pt(5, 5), pt(5, -20), &w), Some([pt(5, 2), pt(5, 5)]));
        // Both outside: the second clip runs on the traded pair.
        assert_eq!(clip_cohen_sutherland(pt(0, 0), pt(10, 10), &w), Some([pt(8, 8), pt(2, 2)]));
        assert_eq!(clip_cohen_sutherland(pt(10, 0), pt(0, 10), &w), Some([pt(2, 8), pt(8, 2)]));
    }

    #[test]
    fn test_intersection_ties_round_to_even() {
        // The right edge meets the segment at y = 2.5.
        let w = ClipWindow::new(0, 0, 5, 100);
        let (a, b) = (pt(0, 0), pt(10, 5));
        assert_eq!(clip_liang_barsky(a, b, &w), Some([pt(0, 0), pt(5, 2)]));
        assert_eq!(clip_cohen_sutherland(a, b, &w), Some([pt(5, 2), pt(0, 0)]));
    }

    #[test]
    fn test_window_corners_any_order() {
        let w = ClipWindow::new(8, 8, 2, 2);
        for alg in ALGORITHMS {
            assert_eq!(
                sorted(clip_segment(pt(0, 5), pt(20, 5), &w, alg)),
                Some([pt(2, 5), pt(8, 5)])
            );
        }
    }

    #[test]
    fn test_output_inside_and_on_line() {
        let w = ClipWindow::new(-20, -15, 30, 25);
        let ends = [
            (-50, -40),
            (60, 45),
            (-35, 30),
            (40, -30),
            (0, 0),
            (10, -60),
            (-70, 5),
            (25, 20),
        ];
        for alg in ALGORITHMS {
            for &a in &ends {
                for &b in &ends {
                    let (a, b) = (Point::from(a), Point::from(b));
                    if let Some([c, d]) = clip_segment(a, b, &w, alg) {
                        assert!(w.contains(c) && w.contains(d), "{:?} {:?}-{:?}", alg, a, b);
                        let (ux, uy) = ((b.x - a.x) as f64, (b.y - a.y) as f64);
                        let len = ux.hypot(uy);
                        for p in [c, d] {
                            if len > 0.0 {
                                let cross = ux * (p.y - a.y) as f64 - uy * (p.x - a.x) as f64;
                                assert!((cross / len).abs() <= 1.0, "{:?} {:?}-{:?} -> {:?}", alg, a, b, p);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_algorithms_agree_on_rejection() {
        let w = ClipWindow::new(-20, -15, 30, 25);
        let ends = [(-50, -40), (60, 45), (-35, 30), (40, -30), (0, 0), (10, -60), (-70, 5)];
        for &a in &ends {
            for &b in &ends {
                let (a, b) = (Point::from(a), Point::from(b));
                assert_eq!(
                    clip_cohen_sutherland(a, b, &w).is_some(),
                    clip_liang_barsky(a, b, &w).is_some(),
                    "{:?}-{:?}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_degenerate_point() {
        for alg in ALGORITHMS {
            assert_eq!(clip_segment(pt(4, 4), pt(4, 4), &window(), alg), Some([pt(4, 4), pt(4, 4)]));
            assert_eq!(clip_segment(pt(0, 4), pt(0, 4), &window(), alg), None);
        }
    }

    #[test]
    fn test_clip_line_point_count() {
        let w = window();
        assert_eq!(
            clip_line(&points(&[(0, 5), (20, 5)]), &w, ClipAlgorithm::LiangBarsky).unwrap(),
            Some(points(&[(2, 5), (8, 5)]))
        );
        assert_eq!(clip_line(&points(&[(0, 0), (10, 0)]), &w, ClipAlgorithm::CohenSutherland).unwrap(), None);
        assert!(clip_line(&points(&[(0, 0), (1, 1), (2, 2)]), &w, ClipAlgorithm::LiangBarsky).is_err());
    }
}
