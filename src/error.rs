//! Error types.
//!
//! Only caller contract violations are errors. Empty or absent results
//! (an under-specified B-spline, a fully clipped segment, an unmatched fill
//! crossing) are ordinary return values.

use thiserror::Error;

/// Rasterization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// A primitive that needs an exact number of points got a different count
    #[error("{primitive} needs exactly {expected} points, got {found}")]
    PointCount {
        primitive: &'static str,
        expected: usize,
        found: usize,
    },

    /// A primitive that needs a minimum number of points got fewer
    #[error("{primitive} needs at least {minimum} points, got {found}")]
    TooFewPoints {
        primitive: &'static str,
        minimum: usize,
        found: usize,
    },

    /// An algorithm tag was handed to a component that does not implement it
    #[error("algorithm {algorithm} is not supported by the {component}")]
    UnsupportedAlgorithm {
        algorithm: &'static str,
        component: &'static str,
    },

    /// An algorithm name did not match any known algorithm
    #[error("unknown algorithm name: {0:?}")]
    UnknownAlgorithm(String),
}

/// Result type for rasterization operations
pub type Result<T> = std::result::Result<T, RasterError>;

/// Fail unless `points` has exactly `expected` entries.
pub(crate) fn expect_points<T>(primitive: &'static str, points: &[T], expected: usize) -> Result<()> {
    if points.len() == expected {
        Ok(())
    } else {
        Err(RasterError::PointCount {
            primitive,
            expected,
            found: points.len(),
        })
    }
}

/// Fail unless `points` has at least `minimum` entries.
pub(crate) fn expect_at_least<T>(primitive: &'static str, points: &[T], minimum: usize) -> Result<()> {
    if points.len() >= minimum {
        Ok(())
    } else {
        Err(RasterError::TooFewPoints {
            primitive,
            minimum,
            found: points.len(),
        })
    }
}
