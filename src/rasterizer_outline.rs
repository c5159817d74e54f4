//! Outline rasterizer.
//!
//! Feeds consecutive vertex pairs through the line rasterizer to outline
//! polygons (closed) and curve control polygons (open). Pixels go to any
//! [`PixelSink`]; a plain [`PointList`] is one.

use crate::algorithm::LineAlgorithm;
use crate::basics::{Point, PointList};
use crate::dda_line::line_points;
use crate::error::{expect_at_least, Result};

/// Minimum number of vertices for an outline.
pub const OUTLINE_MIN_POINTS: usize = 2;

// ============================================================================
// PixelSink trait
// ============================================================================

/// Receiver of rasterized pixels.
pub trait PixelSink {
    fn plot(&mut self, p: Point);

    fn plot_all(&mut self, pixels: PointList) {
        for p in pixels {
            self.plot(p);
        }
    }
}

impl PixelSink for PointList {
    #[inline]
    fn plot(&mut self, p: Point) {
        self.push(p);
    }

    fn plot_all(&mut self, pixels: PointList) {
        self.extend(pixels);
    }
}

// ============================================================================
// RasterizerOutline
// ============================================================================

/// Outline rasterizer.
///
/// `move_to` starts a new contour, `line_to` rasterizes the segment from
/// the current point, and `close` rasterizes the segment back to the
/// contour start. Shared vertices are emitted once per segment touching
/// them.
pub struct RasterizerOutline<'a, S: PixelSink> {
    sink: &'a mut S,
    algorithm: LineAlgorithm,
    start: Point,
    current: Point,
    vertices: u32,
}

impl<'a, S: PixelSink> RasterizerOutline<'a, S> {
    pub fn new(sink: &'a mut S, algorithm: LineAlgorithm) -> Self {
        Self {
            sink,
            algorithm,
            start: Point::default(),
            current: Point::default(),
            vertices: 0,
        }
    }

    pub fn algorithm(&self) -> LineAlgorithm {
        self.algorithm
    }

    pub fn move_to(&mut self, p: Point) {
        self.vertices = 1;
        self.start = p;
        self.current = p;
    }

    pub fn line_to(&mut self, p: Point) {
        if self.vertices == 0 {
            self.move_to(p);
            return;
        }
        self.vertices += 1;
        self.sink.plot_all(line_points(self.current, p, self.algorithm));
        self.current = p;
    }

    /// Close the current contour with a segment back to its start.
    pub fn close(&mut self) {
        if self.vertices > 1 {
            self.line_to(self.start);
        }
        self.vertices = 0;
    }

    /// Add a whole vertex list as one contour.
    pub fn add_contour(&mut self, vertices: &[Point], closed: bool) {
        let mut iter = vertices.iter().copied();
        if let Some(first) = iter.next() {
            self.move_to(first);
            for p in iter {
                self.line_to(p);
            }
            if closed {
                self.close();
            }
        }
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Outline a polygon. A closed outline includes the edge from the last
/// vertex back to the first.
pub fn rasterize_polygon_outline(
    vertices: &[Point],
    algorithm: LineAlgorithm,
    closed: bool,
) -> Result<PointList> {
    expect_at_least("polygon outline", vertices, OUTLINE_MIN_POINTS)?;
    let mut out = PointList::new();
    RasterizerOutline::new(&mut out, algorithm).add_contour(vertices, closed);
    Ok(out)
}

/// Outline the open control polygon of a curve.
pub fn rasterize_control_polygon(controls: &[Point], algorithm: LineAlgorithm) -> Result<PointList> {
    rasterize_polygon_outline(controls, algorithm, false)
}

// ============================================================================
// Tests
// ============================================================================
