//! Basic types and tolerances shared by both hull builders.
//!
//! - `HullCfg`: centralizes the orientation epsilon and the rayon threshold.
//! - `Turn`: result of the orientation predicate.
//! - `Line2`: general-form line `a·x + b·y = c` through two points.
//! - `Algorithm`, `HullError`: the public call contract.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

/// A point in the plane. Equality is exact coordinate equality.
pub type Point2 = Vector2<f64>;

/// Hull configuration (tolerances and parallelism).
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    /// Relative collinearity tolerance. A triple is collinear when
    /// `|cross| <= eps_orient * extent²`, with `extent` the longer side of the
    /// prepared set's bounding box, so the verdict does not depend on units.
    pub eps_orient: f64,
    /// Prepared sets with at least this many points split work with `rayon::join`.
    pub par_threshold: usize,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            eps_orient: 1e-9,
            par_threshold: 1 << 16,
        }
    }
}

impl HullCfg {
    /// Default tolerances, never parallel.
    #[inline]
    pub fn sequential() -> Self {
        Self {
            par_threshold: usize::MAX,
            ..Self::default()
        }
    }
    /// Absolute threshold on `cross` for a set whose bounding box has longer side `extent`.
    #[inline]
    pub fn tolerance(&self, extent: f64) -> f64 {
        self.eps_orient * extent * extent
    }
    #[inline]
    pub(crate) fn parallel_for(&self, n: usize) -> bool {
        n >= self.par_threshold
    }
}

/// Turn direction of an ordered triple `(a, b, c)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Counter-clockwise (`cross > eps`).
    Left,
    /// Clockwise (`cross < -eps`).
    Right,
    Collinear,
}

/// Line `a·x + b·y = c` through two points; vertical lines need no special case.
///
/// Built so that `eval(x) == cross(p, q, x)`: positive on the left of `p→q`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line2 {
    #[inline]
    pub fn through(p: Point2, q: Point2) -> Self {
        let a = p.y - q.y;
        let b = q.x - p.x;
        Self {
            a,
            b,
            c: a * p.x + b * p.y,
        }
    }
    /// Signed residual `a·x + b·y - c`.
    #[inline]
    pub fn eval(&self, x: Point2) -> f64 {
        self.a * x.x + self.b * x.y - self.c
    }
    /// Squared perpendicular distance; 0 for a degenerate (zero-length) line.
    #[inline]
    pub fn distance_sq(&self, x: Point2) -> f64 {
        let norm_sq = self.a * self.a + self.b * self.b;
        if norm_sq <= 0.0 {
            return 0.0;
        }
        let r = self.eval(x);
        r * r / norm_sq
    }
}

/// Hull construction strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Andrew's monotone chain (two sorted sweeps).
    GrahamScan,
    /// Farthest-point splitting on an explicit work stack.
    Quickhull,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::GrahamScan, Algorithm::Quickhull];

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::GrahamScan => "graham",
            Algorithm::Quickhull => "quickhull",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = HullError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "graham" | "graham-scan" | "grahamscan" | "monotone" => Ok(Algorithm::GrahamScan),
            "quickhull" | "quick-hull" | "qh" => Ok(Algorithm::Quickhull),
            _ => Err(HullError::UnknownAlgorithm { name: s.to_string() }),
        }
    }
}

/// Errors surfaced by hull construction.
#[derive(Debug, Clone, PartialEq)]
pub enum HullError {
    /// A point has a NaN or infinite coordinate.
    InvalidInput { index: usize, x: f64, y: f64 },
    /// Algorithm name could not be parsed.
    UnknownAlgorithm { name: String },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::InvalidInput { index, x, y } => write!(
                f,
                "point {index} has non-finite coordinates ({x}, {y})"
            ),
            HullError::UnknownAlgorithm { name } => write!(
                f,
                "unknown algorithm {name:?} (expected \"graham\" or \"quickhull\")"
            ),
        }
    }
}

impl std::error::Error for HullError {}
