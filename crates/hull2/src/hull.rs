//! Hull result: an immutable clockwise vertex sequence plus small queries.

use crate::orient::{cross, orientation};
use crate::prep::lexicographic_cmp;
use crate::types::{Algorithm, Point2, Turn};

/// Convex hull of a point set.
///
/// Invariants:
/// - Vertices are distinct and drawn from the input.
/// - Clockwise order starting at the lexicographic minimum (min x, then min y).
/// - No three consecutive vertices are collinear.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    vertices: Vec<Point2>,
    algorithm: Algorithm,
    tolerance: f64,
}

impl Hull {
    pub(crate) fn new(vertices: Vec<Point2>, algorithm: Algorithm, tolerance: f64) -> Self {
        Self {
            vertices,
            algorithm,
            tolerance,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }
    #[inline]
    pub fn into_vertices(self) -> Vec<Point2> {
        self.vertices
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
    /// Absolute threshold on `cross` used while building (`HullCfg::tolerance`).
    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Enclosed area (non-negative). Zero for hulls with < 3 vertices.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let mut twice = 0.0;
        for i in 0..n {
            let p = self.vertices[i];
            let q = self.vertices[(i + 1) % n];
            twice += p.x * q.y - q.x * p.y;
        }
        // clockwise → negative shoelace sum
        (-0.5 * twice).max(0.0)
    }

    /// Boundary length; a two-vertex hull counts its segment twice.
    pub fn perimeter(&self) -> f64 {
        let n = self.vertices.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|i| (self.vertices[(i + 1) % n] - self.vertices[i]).norm())
            .sum()
    }

    /// Membership with slack `eps` on the cross product (boundary counts as inside).
    pub fn contains_eps(&self, p: Point2, eps: f64) -> bool {
        match self.vertices.as_slice() {
            [] => false,
            [a] => (p - a).norm_squared() <= eps * eps,
            [a, b] => {
                if orientation(*a, *b, p, eps) != Turn::Collinear {
                    return false;
                }
                let ab = b - a;
                let t = ab.dot(&(p - a));
                t >= -eps && t <= ab.norm_squared() + eps
            }
            vs => {
                let n = vs.len();
                (0..n).all(|i| cross(vs[i], vs[(i + 1) % n], p) <= eps)
            }
        }
    }

    /// Every cyclic triple turns right by more than `eps` (vacuous below 3 vertices).
    pub fn is_strictly_convex(&self, eps: f64) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return true;
        }
        (0..n).all(|i| {
            orientation(
                self.vertices[i],
                self.vertices[(i + 1) % n],
                self.vertices[(i + 2) % n],
                eps,
            ) == Turn::Right
        })
    }

    /// Same vertices regardless of order or starting point.
    pub fn same_vertex_set(&self, other: &Hull) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let mut a = self.vertices.clone();
        let mut b = other.vertices.clone();
        a.sort_unstable_by(lexicographic_cmp);
        b.sort_unstable_by(lexicographic_cmp);
        a == b
    }
}
