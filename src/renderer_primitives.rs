//! Primitive renderer.
//!
//! Ties the individual rasterizers together for a scene layer: a
//! [`Primitive`] names a shape, its control points and its algorithm, and
//! [`RendererPrimitives`] turns it into outline and fill pixels. The scene
//! layer still owns selection, z-order and compositing; this module only
//! decides which rasterizer a shape needs.

use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::algorithm::{CurveAlgorithm, LineAlgorithm};
use crate::basics::{Point, PointList};
use crate::curves::CurveSampler;
use crate::dda_line::rasterize_line;
use crate::ellipse_midpoint::rasterize_ellipse;
use crate::error::Result;
use crate::rasterizer_outline::rasterize_polygon_outline;
use crate::scanline_fill::{fill_polygon_pixels, FILL_HEIGHT_DEFAULT};
use crate::trans_affine;

// ============================================================================
// Primitive
// ============================================================================

/// A drawable shape with the algorithm used to rasterize it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Primitive {
    /// Segment between two points.
    Line {
        points: PointList,
        algorithm: LineAlgorithm,
    },
    /// Polygon outline, optionally closed and filled.
    Polygon {
        points: PointList,
        algorithm: LineAlgorithm,
        closed: bool,
        filled: bool,
    },
    /// Ellipse inscribed in the box spanned by two opposite corners.
    Ellipse { points: PointList },
    /// Parametric curve through its control points.
    Curve {
        points: PointList,
        algorithm: CurveAlgorithm,
    },
}

impl Primitive {
    pub fn points(&self) -> &[Point] {
        match self {
            Primitive::Line { points, .. }
            | Primitive::Polygon { points, .. }
            | Primitive::Ellipse { points }
            | Primitive::Curve { points, .. } => points,
        }
    }

    fn map_points(self, f: impl FnOnce(PointList) -> PointList) -> Self {
        match self {
            Primitive::Line { points, algorithm } => Primitive::Line {
                points: f(points),
                algorithm,
            },
            Primitive::Polygon {
                points,
                algorithm,
                closed,
                filled,
            } => Primitive::Polygon {
                points: f(points),
                algorithm,
                closed,
                filled,
            },
            Primitive::Ellipse { points } => Primitive::Ellipse { points: f(points) },
            Primitive::Curve { points, algorithm } => Primitive::Curve {
                points: f(points),
                algorithm,
            },
        }
    }

    /// Shift the shape by `(dx, dy)`.
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        self.map_points(|p| trans_affine::translate(p, dx, dy))
    }

    /// Rotate the shape clockwise around `(cx, cy)`.
    ///
    /// Ellipses stay axis-aligned and are returned unchanged.
    pub fn rotate(self, cx: i32, cy: i32, degrees: f64) -> Self {
        if let Primitive::Ellipse { .. } = self {
            return self;
        }
        self.map_points(|p| trans_affine::rotate(p, cx, cy, degrees))
    }

    /// Scale the shape around `(cx, cy)`.
    pub fn scale(self, cx: i32, cy: i32, factor: f64) -> Self {
        self.map_points(|p| trans_affine::scale(p, cx, cy, factor))
    }
}

// ============================================================================
// RendererPrimitives
// ============================================================================

/// Pixels produced for one primitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rasterized {
    pub outline: PointList,
    pub fill: PointList,
}

/// Rasterizes [`Primitive`]s with fixed fill and curve settings.
#[derive(Debug, Clone, Copy)]
pub struct RendererPrimitives {
    fill_height: i32,
    sampler: CurveSampler,
}

impl Default for RendererPrimitives {
    fn default() -> Self {
        Self::new(FILL_HEIGHT_DEFAULT)
    }
}

impl RendererPrimitives {
    /// Renderer whose polygon fills stop below scanline `fill_height`.
    pub fn new(fill_height: i32) -> Self {
        Self {
            fill_height,
            sampler: CurveSampler::default(),
        }
    }

    pub fn with_sampler(mut self, sampler: CurveSampler) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn fill_height(&self) -> i32 {
        self.fill_height
    }

    pub fn sampler(&self) -> CurveSampler {
        self.sampler
    }

    pub fn render(&self, prim: &Primitive) -> Result<Rasterized> {
        let mut out = Rasterized::default();
        match prim {
            Primitive::Line { points, algorithm } => {
                out.outline = rasterize_line(points, *algorithm)?;
            }
            Primitive::Polygon {
                points,
                algorithm,
                closed,
                filled,
            } => {
                out.outline = rasterize_polygon_outline(points, *algorithm, *closed)?;
                if *filled {
                    out.fill = fill_polygon_pixels(points, self.fill_height)?;
                }
            }
            Primitive::Ellipse { points } => {
                out.outline = rasterize_ellipse(points)?;
            }
            Primitive::Curve { points, algorithm } => {
                out.outline = self.sampler.sample(points, *algorithm)?;
                if out.outline.is_empty() {
                    debug!(controls = points.len(), %algorithm, "curve skipped");
                }
            }
        }
        Ok(out)
    }
}

/// Rasterize a primitive with default settings.
pub fn rasterize(prim: &Primitive) -> Result<Rasterized> {
    RendererPrimitives::default().render(prim)
}

/// Keep only pixels inside a `width` x `height` canvas.
pub fn visible_pixels(pixels: impl IntoIterator<Item = Point>, width: i32, height: i32) -> PointList {
    pixels
        .into_iter()
        .filter(|p| (0..width).contains(&p.x) && (0..height).contains(&p.y))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
