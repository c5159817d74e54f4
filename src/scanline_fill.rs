//! Scanline polygon fill with an edge table and an active edge list.
//!
//! Every non-horizontal polygon edge is keyed by its lower y. The sweep
//! walks scanlines upward, activating edges as their start row comes up,
//! expiring edges whose upper y has been reached, and filling between
//! consecutive pairs of sorted crossings. Each edge therefore covers the
//! half-open range `[y_low, y_high)`, which counts a shared vertex once at a
//! local minimum and not at all at a local maximum.
//!
//! Only canvas rows `0..height` are swept. Edges that start above row 0
//! join the sweep at row 0 with their x already advanced, and rows with no
//! active edge are skipped, so the cost is bounded by the canvas height and
//! the edge count rather than by the polygon's coordinates.
//!
//! Both outputs (pixels and spans) come from the same sweep and differ only
//! in how a crossing pair is emitted. All scratch state is owned by one
//! call.

use tracing::{debug, trace};

use crate::basics::{itrunc, Point, PointList, Span};
use crate::error::{expect_at_least, Result};

/// Minimum number of vertices for a fillable polygon.
pub const POLYGON_MIN_POINTS: usize = 3;

/// Scan height bound used by scene editors with a 1000-pixel canvas.
pub const FILL_HEIGHT_DEFAULT: i32 = 1000;

// ============================================================================
// Edge table
// ============================================================================

/// One polygon edge as seen by the sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Edge {
    /// x at the current scanline.
    x: f64,
    /// dx / dy.
    inv_slope: f64,
    /// Scanline at which the edge stops contributing.
    y_top: i32,
}

/// Edges of one polygon keyed by the scanline on which they start.
#[derive(Debug, Clone)]
pub struct EdgeTable {
    /// `(start row, edge)`, sorted by start row.
    edges: Vec<(i32, Edge)>,
    y_max: i32,
}

impl EdgeTable {
    /// Collect the edges of the closed polygon `vertices`, limiting the
    /// sweep to rows `0..height`.
    pub fn new(vertices: &[Point], height: i32) -> Self {
        let y_max = vertices
            .iter()
            .map(|p| p.y)
            .max()
            .unwrap_or(-1)
            .min(height.saturating_sub(1));

        let n = vertices.len();
        let mut edges = Vec::new();
        for (i, &cur) in vertices.iter().enumerate() {
            if cur.y > y_max {
                continue;
            }
            let prev = vertices[(i + n - 1) % n];
            let next = vertices[(i + 1) % n];
            for other in [prev, next] {
                if other.y <= cur.y || other.y <= 0 {
                    continue;
                }
                let inv_slope =
                    (other.x as f64 - cur.x as f64) / (other.y as f64 - cur.y as f64);
                let start = cur.y.max(0);
                edges.push((
                    start,
                    Edge {
                        x: cur.x as f64 + inv_slope * (start as f64 - cur.y as f64),
                        inv_slope,
                        y_top: other.y,
                    },
                ));
            }
        }
        edges.sort_by_key(|&(y, _)| y);

        Self { edges, y_max }
    }

    /// First and last scanline swept, or `None` when nothing is swept.
    pub fn scan_range(&self) -> Option<(i32, i32)> {
        let &(first, _) = self.edges.first()?;
        (first <= self.y_max).then_some((first, self.y_max))
    }

    /// Number of collected edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Run the sweep, calling `emit(y, x_left, x_right)` for every crossing
    /// pair. A trailing unmatched crossing on a scanline is dropped.
    pub fn sweep<F>(self, mut emit: F)
    where
        F: FnMut(i32, f64, f64),
    {
        let mut pending = self.edges.into_iter().peekable();
        let mut active: Vec<Edge> = Vec::new();
        let mut crossings: Vec<f64> = Vec::new();
        let mut dropped = 0usize;

        let mut y = match pending.peek() {
            Some(&(y, _)) => y,
            None => return,
        };
        while y <= self.y_max {
            while let Some((_, e)) = pending.next_if(|&(start, _)| start == y) {
                active.push(e);
            }
            active.retain(|e| e.y_top != y);

            if active.is_empty() {
                match pending.peek() {
                    Some(&(next, _)) => {
                        y = next;
                        continue;
                    }
                    None => break,
                }
            }

            crossings.clear();
            crossings.extend(active.iter().map(|e| e.x));
            crossings.sort_by(f64::total_cmp);

            let pairs = crossings.chunks_exact(2);
            if !pairs.remainder().is_empty() {
                dropped += 1;
                trace!(y, crossings = crossings.len(), "unmatched crossing dropped");
            }
            for pair in pairs {
                emit(y, pair[0], pair[1]);
            }

            for e in &mut active {
                e.x += e.inv_slope;
            }
            match y.checked_add(1) {
                Some(next) => y = next,
                None => break,
            }
        }

        if dropped > 0 {
            debug!(scanlines = dropped, "fill met an odd crossing count");
        }
    }
}

// ============================================================================
// Fill entry points
// ============================================================================

/// Fill a closed polygon, returning every covered pixel.
///
/// A run covers `trunc(x1)..trunc(x2 + 1)`. That matches the span
/// `[trunc(x1), trunc(x2)]` except when `-1 < x2 < 0`, where the run is
/// empty on the right.
pub fn fill_polygon_pixels(vertices: &[Point], height: i32) -> Result<PointList> {
    expect_at_least("filled polygon", vertices, POLYGON_MIN_POINTS)?;
    let mut out = PointList::new();
    EdgeTable::new(vertices, height).sweep(|y, x1, x2| {
        out.extend((itrunc(x1)..itrunc(x2 + 1.0)).map(|x| Point::new(x, y)));
    });
    Ok(out)
}

/// Fill a closed polygon, returning one inclusive span per crossing pair.
pub fn fill_polygon_spans(vertices: &[Point], height: i32) -> Result<Vec<Span>> {
    expect_at_least("filled polygon", vertices, POLYGON_MIN_POINTS)?;
    let mut out = Vec::new();
    EdgeTable::new(vertices, height).sweep(|y, x1, x2| {
        out.push((Point::new(itrunc(x1), y), Point::new(itrunc(x2), y)));
    });
    Ok(out)
}

/// Expand spans into the pixels they cover.
pub fn spans_to_pixels(spans: &[Span]) -> PointList {
    spans
        .iter()
        .flat_map(|&(a, b)| (a.x..=b.x).map(move |x| Point::new(x, a.y)))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::points;

    fn pt(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn square() -> PointList {
        points(&[(0, 0), (10, 0), (10, 10), (0, 10)])
    }

    #[test]
    fn test_edge_table_skips_horizontal() {
        let et = EdgeTable::new(&square(), 1000);
        assert_eq!(et.num_edges(), 2);
        assert_eq!(et.scan_range(), Some((0, 10)));
    }

    #[test]
    fn test_square_spans() {
        let spans = fill_polygon_spans(&square(), 1000).unwrap();
        let expected: Vec<Span> = (0..10).map(|y| (pt(0, y), pt(10, y))).collect();
        assert_eq!(spans, expected);
        assert_eq!(fill_polygon_pixels(&square(), 1000).unwrap().len(), 110);
    }

    #[test]
    fn test_triangle_spans() {
        let spans = fill_polygon_spans(&points(&[(0, 0), (10, 0), (5, 10)]), 1000).unwrap();
        assert_eq!(spans.len(), 10);
        assert_eq!(spans[0], (pt(0, 0), pt(10, 0)));
        assert_eq!(spans[1], (pt(0, 1), pt(9, 1)));
        assert_eq!(spans[9], (pt(4, 9), pt(5, 9)));
        for w in spans.windows(2) {
            assert_eq!(w[1].0.y, w[0].0.y + 1);
            assert!(w[1].0.x >= w[0].0.x);
            assert!(w[1].1.x <= w[0].1.x);
        }
    }

    #[test]
    fn test_concave_notch() {
        // Notch hanging from the y = 0 edge, apex at (5, 5).
        let poly = points(&[(0, 0), (4, 0), (5, 5), (6, 0), (10, 0), (10, 10), (0, 10)]);
        let spans = fill_polygon_spans(&poly, 1000).unwrap();
        let row = |y: i32| -> Vec<(i32, i32)> {
            spans
                .iter()
                .filter(|s| s.0.y == y)
                .map(|s| (s.0.x, s.1.x))
                .collect()
        };
        assert_eq!(row(0), vec![(0, 4), (6, 10)]);
        assert_eq!(row(1), vec![(0, 4), (5, 10)]);
        assert_eq!(row(5), vec![(0, 10)]);
        assert_eq!(row(9), vec![(0, 10)]);
        assert!(row(10).is_empty());
    }

    #[test]
    fn test_height_bound() {
        let spans = fill_polygon_spans(&square(), 5).unwrap();
        assert_eq!(spans.len(), 5);
        assert_eq!(spans.last().unwrap().0.y, 4);
        assert!(fill_polygon_spans(&square(), 0).unwrap().is_empty());
        let below = points(&[(0, 50), (10, 50), (10, 60)]);
        assert!(fill_polygon_pixels(&below, 20).unwrap().is_empty());
    }

    #[test]
    fn test_rows_above_canvas_are_skipped() {
        let spans = fill_polygon_spans(&points(&[(0, -4), (8, -4), (8, 4), (0, 4)]), 1000).unwrap();
        let expected: Vec<Span> = (0..4).map(|y| (pt(0, y), pt(8, y))).collect();
        assert_eq!(spans, expected);
    }

    #[test]
    fn test_far_vertex_does_not_scale_work() {
        let poly = points(&[(0, -2_000_000_000), (10, 0), (0, 10)]);
        let et = EdgeTable::new(&poly, 1000);
        assert_eq!(et.num_edges(), 2);
        assert_eq!(et.scan_range(), Some((0, 10)));
        let spans = fill_polygon_spans(&poly, 1000).unwrap();
        let expected: Vec<Span> = (0..10).map(|y| (pt(0, y), pt(10 - y, y))).collect();
        assert_eq!(spans, expected);

        let extreme = points(&[(0, i32::MIN), (5, i32::MAX), (-5, i32::MAX)]);
        assert_eq!(fill_polygon_spans(&extreme, 0).unwrap(), Vec::new());
    }

    #[test]
    fn test_pixel_runs_end_before_negative_fraction() {
        // Right edge crosses row 1 at x = -0.5.
        let poly = points(&[(-4, 0), (-1, 0), (0, 2), (-4, 2)]);
        let spans = fill_polygon_spans(&poly, 1000).unwrap();
        assert_eq!(spans, vec![(pt(-4, 0), pt(-1, 0)), (pt(-4, 1), pt(0, 1))]);
        let pixels = fill_polygon_pixels(&poly, 1000).unwrap();
        let row1: Vec<i32> = pixels.iter().filter(|p| p.y == 1).map(|p| p.x).collect();
        assert_eq!(row1, vec![-4, -3, -2, -1]);
        assert_eq!(pixels.len(), 8);
    }

    #[test]
    fn test_pixels_match_spans() {
        let poly = points(&[(3, 1), (40, 12), (25, 37), (9, 30), (14, 18)]);
        let spans = fill_polygon_spans(&poly, 1000).unwrap();
        assert_eq!(spans_to_pixels(&spans), fill_polygon_pixels(&poly, 1000).unwrap());
    }

    #[test]
    fn test_unmatched_crossing_dropped() {
        let et = EdgeTable {
            edges: vec![
                (0, Edge { x: 0.0, inv_slope: 0.0, y_top: 2 }),
                (0, Edge { x: 4.0, inv_slope: 0.0, y_top: 2 }),
                (0, Edge { x: 8.0, inv_slope: 0.0, y_top: 2 }),
            ],
            y_max: 1,
        };
        let mut spans = Vec::new();
        et.sweep(|y, a, b| spans.push((y, a, b)));
        assert_eq!(spans, vec![(0, 0.0, 4.0), (1, 0.0, 4.0)]);
    }

    #[test]
    fn test_sweep_skips_empty_rows() {
        let et = EdgeTable {
            edges: vec![
                (0, Edge { x: 1.0, inv_slope: 0.0, y_top: 2 }),
                (0, Edge { x: 3.0, inv_slope: 0.0, y_top: 2 }),
                (1_000_000_000, Edge { x: 5.0, inv_slope: 1.0, y_top: 1_000_000_002 }),
                (1_000_000_000, Edge { x: 9.0, inv_slope: -1.0, y_top: 1_000_000_002 }),
            ],
            y_max: i32::MAX,
        };
        let mut spans = Vec::new();
        et.sweep(|y, a, b| spans.push((y, a, b)));
        assert_eq!(
            spans,
            vec![
                (0, 1.0, 3.0),
                (1, 1.0, 3.0),
                (1_000_000_000, 5.0, 9.0),
                (1_000_000_001, 6.0, 8.0),
            ]
        );
    }

    #[test]
    fn test_too_few_vertices() {
        assert!(fill_polygon_pixels(&points(&[(0, 0), (5, 5)]), 100).is_err());
        assert!(fill_polygon_spans(&[], 100).is_err());
    }
}
