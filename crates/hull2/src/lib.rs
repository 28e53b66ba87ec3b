//! Planar convex hulls: monotone chain and Quickhull over one shared contract.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>` (`Point2`), compared exactly.
//! - Every turn decision goes through `orient::orientation` with one absolute
//!   threshold per call, `HullCfg::eps_orient` scaled by the squared extent of
//!   the prepared set (`HullCfg::tolerance`).
//! - Hulls are clockwise, starting at the lexicographically smallest vertex
//!   (min x, then min y). Collinear boundary points are never vertices.
//!
//! Entry points
//! - `compute_hull(points, algorithm)` and `compute_hull_with(.., cfg)`.
//! - `sources` holds reproducible point sources used by the CLI, benches and tests.

pub mod hull;
pub mod monotone;
pub mod orient;
pub mod prep;
pub mod quickhull;
pub mod sources;
mod types;

pub use hull::Hull;
pub use orient::{cross, orientation};
pub use prep::{prepare, Prepared};
pub use types::{Algorithm, HullCfg, HullError, Line2, Point2, Turn};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::sources::{OnCircle, PointSource, ReplayToken, SourceError, UniformBox};
    pub use crate::{
        compute_hull, compute_hull_with, orientation, Algorithm, Hull, HullCfg, HullError, Point2,
        Turn,
    };
    pub use nalgebra::Vector2 as Vec2;
}

/// Convex hull of `points` with default tolerances.
///
/// Fails only on non-finite coordinates (`HullError::InvalidInput`).
#[inline]
pub fn compute_hull(points: &[Point2], algorithm: Algorithm) -> Result<Hull, HullError> {
    compute_hull_with(points, algorithm, HullCfg::default())
}

/// Convex hull of `points` with explicit tolerances.
///
/// Pre: none (input is validated here, once).
/// Post: clockwise hull starting at the lexicographic minimum; see `Hull`.
pub fn compute_hull_with(
    points: &[Point2],
    algorithm: Algorithm,
    cfg: HullCfg,
) -> Result<Hull, HullError> {
    let prepared = prepare(points)?;
    let distinct = prepared.len();
    let tol = cfg.tolerance(prepared.extent());
    let vertices = match prepared {
        Prepared::Trivial(pts) => pts,
        Prepared::Sorted(pts) => match algorithm {
            Algorithm::GrahamScan => monotone::monotone_chain(&pts, tol, cfg),
            Algorithm::Quickhull => quickhull::quickhull(&pts, tol, cfg),
        },
    };
    tracing::debug!(
        algorithm = %algorithm,
        input = points.len(),
        distinct,
        tol,
        vertices = vertices.len(),
        "hull"
    );
    Ok(Hull::new(vertices, algorithm, tol))
}
