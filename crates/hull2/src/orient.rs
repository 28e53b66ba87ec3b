//! Orientation predicate; the only place a turn sign is decided.

use crate::types::{Point2, Turn};

/// Signed area of the parallelogram spanned by `b - a` and `c - a`.
/// Positive for a counter-clockwise turn a→b→c.
#[inline]
pub fn cross(a: Point2, b: Point2, c: Point2) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Turn direction of `a→b→c`, collinear within `eps` (absolute, on `cross`).
#[inline]
pub fn orientation(a: Point2, b: Point2, c: Point2, eps: f64) -> Turn {
    let z = cross(a, b, c);
    if z > eps {
        Turn::Left
    } else if z < -eps {
        Turn::Right
    } else {
        Turn::Collinear
    }
}
