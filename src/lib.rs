//! # cg-raster
//!
//! Classic 2D rasterization and geometry algorithms that turn primitive
//! descriptions into integer pixel coordinates:
//!
//! - Lines: naive slope evaluation, DDA and Bresenham
//! - Ellipses: two-region midpoint algorithm
//! - Curves: Bernstein-form Bezier and uniform cubic B-spline sampling
//! - Affine transforms: translate, rotate and scale of point lists
//! - Line clipping: Cohen-Sutherland and Liang-Barsky
//! - Polygon fill: scanline sweep over an edge table and active edge list
//!
//! Every entry point is a pure function of its arguments. Nothing is
//! cached between calls and no call touches a file or a display surface;
//! callers decide how to store or composite the pixels they get back.
//!
//! Coordinates are device pixels with y growing downward.
//!
//! ```
//! use cg_raster::{rasterize_line, points, LineAlgorithm};
//!
//! let pixels = rasterize_line(&points(&[(0, 0), (4, 2)]), LineAlgorithm::Bresenham).unwrap();
//! assert_eq!(pixels.len(), 5);
//! ```

// Foundation
pub mod algorithm;
pub mod basics;
pub mod error;

// Rasterizers
pub mod bspline;
pub mod curves;
pub mod dda_line;
pub mod ellipse_midpoint;
pub mod rasterizer_outline;
pub mod scanline_fill;

// Geometry
pub mod clip_line;
pub mod trans_affine;

// Dispatch
pub mod renderer_primitives;

pub use algorithm::{AlgorithmTag, ClipAlgorithm, CurveAlgorithm, LineAlgorithm};
pub use basics::{points, ClipWindow, Point, PointList, Span};
pub use clip_line::clip_line;
pub use curves::{sample_curve, CurveSampler, DEFAULT_CURVE_SAMPLES};
pub use dda_line::rasterize_line;
pub use ellipse_midpoint::rasterize_ellipse;
pub use error::{RasterError, Result};
pub use rasterizer_outline::{rasterize_control_polygon, rasterize_polygon_outline};
pub use renderer_primitives::{rasterize, visible_pixels, Primitive, Rasterized, RendererPrimitives};
pub use scanline_fill::{fill_polygon_pixels, fill_polygon_spans, spans_to_pixels};
pub use trans_affine::{rotate, scale, translate};
