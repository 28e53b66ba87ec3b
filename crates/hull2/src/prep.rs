//! Point set preparation shared by both algorithms.
//!
//! Validates once, copies, sorts lexicographically (x, then y) and drops exact
//! duplicates. `Prepared::extent` is the scale the collinearity tolerance uses. Sets of size ≤ 1 are their own hull and never reach an algorithm,
//! which keeps a zero-length baseline impossible downstream.

use std::cmp::Ordering;

use crate::types::{HullError, Point2};

/// Output of `prepare`.
#[derive(Clone, Debug, PartialEq)]
pub enum Prepared {
    /// 0 or 1 distinct points: already the hull.
    Trivial(Vec<Point2>),
    /// ≥ 2 distinct points, sorted by x then y, no duplicates.
    Sorted(Vec<Point2>),
}

impl Prepared {
    #[inline]
    pub fn len(&self) -> usize {
        self.points().len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points().is_empty()
    }
    #[inline]
    pub fn points(&self) -> &[Point2] {
        match self {
            Prepared::Trivial(p) | Prepared::Sorted(p) => p,
        }
    }
    /// Longer side of the bounding box; 0 for trivial sets.
    pub fn extent(&self) -> f64 {
        let pts = self.points();
        let (Some(first), Some(last)) = (pts.first(), pts.last()) else {
            return 0.0;
        };
        // sorted by x, so only y needs a scan
        let (lo_y, hi_y) = pts
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        (last.x - first.x).max(hi_y - lo_y)
    }
}

/// Lexicographic order on (x, y). Total on finite input.
#[inline]
pub fn lexicographic_cmp(a: &Point2, b: &Point2) -> Ordering {
    a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y))
}

/// Validate, sort and dedup `points` without touching the caller's slice.
pub fn prepare(points: &[Point2]) -> Result<Prepared, HullError> {
    if let Some((index, p)) = points
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::InvalidInput {
            index,
            x: p.x,
            y: p.y,
        });
    }
    // `+ 0.0` maps -0.0 to 0.0 so total_cmp keeps equal points adjacent.
    let mut pts: Vec<Point2> = points
        .iter()
        .map(|p| Point2::new(p.x + 0.0, p.y + 0.0))
        .collect();
    pts.sort_unstable_by(lexicographic_cmp);
    pts.dedup_by(|a, b| a == b);
    if pts.len() <= 1 {
        Ok(Prepared::Trivial(pts))
    } else {
        Ok(Prepared::Sorted(pts))
    }
}
