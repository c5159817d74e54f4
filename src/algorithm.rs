//! Algorithm selectors.
//!
//! [`AlgorithmTag`] is the closed set of every rasterization variant the
//! crate implements. Each component takes its own narrower enum
//! ([`LineAlgorithm`], [`ClipAlgorithm`], [`CurveAlgorithm`]) so an
//! unsupported choice is rejected at the boundary by `TryFrom`, never
//! discovered mid-algorithm.
//!
//! All enums parse from and print as the names used by scene files:
//! `"Naive"`, `"DDA"`, `"Bresenham"`, `"Cohen-Sutherland"`, `"Liang-Barsky"`,
//! `"Bezier"` and `"B-spline"`.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::RasterError;

// ============================================================================
// AlgorithmTag
// ============================================================================

/// Every algorithm variant known to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AlgorithmTag {
    Naive,
    #[cfg_attr(feature = "serde", serde(rename = "DDA"))]
    Dda,
    Bresenham,
    #[cfg_attr(feature = "serde", serde(rename = "Cohen-Sutherland"))]
    CohenSutherland,
    #[cfg_attr(feature = "serde", serde(rename = "Liang-Barsky"))]
    LiangBarsky,
    Bezier,
    #[cfg_attr(feature = "serde", serde(rename = "B-spline"))]
    BSpline,
}

impl AlgorithmTag {
    pub const ALL: [AlgorithmTag; 7] = [
        AlgorithmTag::Naive,
        AlgorithmTag::Dda,
        AlgorithmTag::Bresenham,
        AlgorithmTag::CohenSutherland,
        AlgorithmTag::LiangBarsky,
        AlgorithmTag::Bezier,
        AlgorithmTag::BSpline,
    ];

    /// Scene-file name of the algorithm.
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmTag::Naive => "Naive",
            AlgorithmTag::Dda => "DDA",
            AlgorithmTag::Bresenham => "Bresenham",
            AlgorithmTag::CohenSutherland => "Cohen-Sutherland",
            AlgorithmTag::LiangBarsky => "Liang-Barsky",
            AlgorithmTag::Bezier => "Bezier",
            AlgorithmTag::BSpline => "B-spline",
        }
    }
}

impl fmt::Display for AlgorithmTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmTag {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlgorithmTag::ALL
            .into_iter()
            .find(|tag| tag.name() == s)
            .ok_or_else(|| RasterError::UnknownAlgorithm(s.to_string()))
    }
}

// ============================================================================
// Per-component selectors
// ============================================================================

// Generates a component enum that is a strict subset of `AlgorithmTag`,
// with the conversions in both directions.
macro_rules! component_algorithm {
    (
        $(#[$meta:meta])*
        $name:ident, $component:literal, default = $default:ident,
        { $($variant:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(try_from = "AlgorithmTag", into = "AlgorithmTag"))]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const COMPONENT: &'static str = $component;

            pub fn name(self) -> &'static str {
                AlgorithmTag::from(self).name()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl From<$name> for AlgorithmTag {
            fn from(a: $name) -> Self {
                match a {
                    $($name::$variant => AlgorithmTag::$variant),+
                }
            }
        }

        impl TryFrom<AlgorithmTag> for $name {
            type Error = RasterError;

            fn try_from(tag: AlgorithmTag) -> Result<Self, Self::Error> {
                match tag {
                    $(AlgorithmTag::$variant => Ok($name::$variant),)+
                    #[allow(unreachable_patterns)]
                    other => Err(RasterError::UnsupportedAlgorithm {
                        algorithm: other.name(),
                        component: $component,
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = RasterError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::try_from(s.parse::<AlgorithmTag>()?)
            }
        }
    };
}

component_algorithm! {
    /// Line rasterization variant.
    LineAlgorithm, "line rasterizer", default = Bresenham,
    { Naive, Dda, Bresenham }
}

component_algorithm! {
    /// Line clipping variant.
    ClipAlgorithm, "line clipper", default = LiangBarsky,
    { CohenSutherland, LiangBarsky }
}

component_algorithm! {
    /// Curve evaluation variant.
    CurveAlgorithm, "curve evaluator", default = Bezier,
    { Bezier, BSpline }
}

// ============================================================================
// Tests
// ============================================================================
