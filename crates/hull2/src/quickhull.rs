//! Quickhull on an explicit work stack.
//!
//! The extreme points of the prepared order (lexicographic min and max) split
//! the set into an upper and a lower side, each refined by farthest-point
//! splitting. Splits are tasks on a heap-allocated stack, so all-on-hull inputs
//! cannot exhaust the thread stack.
//!
//! Splitting only prunes: a point is discarded once it lies inside a split
//! triangle by more than `PRUNE_MARGIN` tolerances. Everything in the collinear
//! band survives as a candidate, and the candidates go through the same
//! right-turn reduction as `monotone`, so both builders decide every flat triple
//! the same way. Output matches `monotone`: clockwise from the lexicographic min,
//! no collinear vertices.

use crate::monotone::monotone_chain;
use crate::orient::cross;
use crate::prep::lexicographic_cmp;
use crate::types::{HullCfg, Line2, Point2};

/// Interior depth, in tolerances, below which a point may be pruned.
const PRUNE_MARGIN: f64 = 8.0;

/// Pending work: the candidates on the outer side of `p→q`.
#[derive(Debug)]
struct Split {
    p: Point2,
    q: Point2,
    subset: Vec<Point2>,
}

/// Index of the point farthest from the line; first maximum wins.
fn farthest(line: &Line2, subset: &[Point2]) -> usize {
    let mut best = 0;
    let mut best_d = f64::NEG_INFINITY;
    for (i, x) in subset.iter().enumerate() {
        let d = line.distance_sq(*x);
        if d > best_d {
            best = i;
            best_d = d;
        }
    }
    best
}

/// Pushes every candidate hull vertex outside `p→q` onto `out`.
fn walk(p: Point2, q: Point2, subset: Vec<Point2>, tol: f64, out: &mut Vec<Point2>) {
    let keep = -PRUNE_MARGIN * tol;
    let mut stack = vec![Split { p, q, subset }];
    let mut high_water = stack.len();
    while let Some(Split { p, q, subset }) = stack.pop() {
        if subset.is_empty() {
            continue;
        }
        let line = Line2::through(p, q);
        let k = farthest(&line, &subset);
        let far = subset[k];
        out.push(far);
        let mut left = Vec::new();
        let mut right = Vec::new();
        for (i, x) in subset.into_iter().enumerate() {
            if i == k {
                continue;
            }
            let to_left = cross(p, far, x);
            let to_right = cross(far, q, x);
            if to_left >= keep && to_left >= to_right {
                left.push(x);
            } else if to_right >= keep {
                right.push(x);
            }
            // otherwise deep inside triangle p, far, q
        }
        stack.push(Split {
            p: far,
            q,
            subset: right,
        });
        stack.push(Split {
            p,
            q: far,
            subset: left,
        });
        high_water = high_water.max(stack.len());
    }
    tracing::trace!(high_water, "quickhull walk done");
}

/// Hull of a prepared set (≥ 2 distinct points, lexicographically sorted).
///
/// `tol` is the absolute threshold on `cross` (see `HullCfg::tolerance`).
pub fn quickhull(sorted: &[Point2], tol: f64, cfg: HullCfg) -> Vec<Point2> {
    debug_assert!(sorted.len() >= 2);
    let lo = sorted[0];
    let hi = sorted[sorted.len() - 1];
    let keep = -PRUNE_MARGIN * tol;

    // Points near the baseline go to both sides.
    let mut above = Vec::new();
    let mut below = Vec::new();
    for &x in &sorted[1..sorted.len() - 1] {
        if cross(lo, hi, x) >= keep {
            above.push(x);
        }
        if cross(hi, lo, x) >= keep {
            below.push(x);
        }
    }

    let run = |p: Point2, q: Point2, subset: Vec<Point2>| {
        let mut out = Vec::new();
        walk(p, q, subset, tol, &mut out);
        out
    };
    let (upper, lower) = if cfg.parallel_for(sorted.len()) {
        rayon::join(|| run(lo, hi, above), || run(hi, lo, below))
    } else {
        (run(lo, hi, above), run(hi, lo, below))
    };

    let mut candidates = Vec::with_capacity(upper.len() + lower.len() + 2);
    candidates.push(lo);
    candidates.push(hi);
    candidates.extend(upper);
    candidates.extend(lower);
    candidates.sort_unstable_by(lexicographic_cmp);
    candidates.dedup();
    tracing::trace!(candidates = candidates.len(), "quickhull pruned");
    monotone_chain(&candidates, tol, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prep::{prepare, Prepared};

    fn sorted(points: &[(f64, f64)]) -> Vec<Point2> {
        let pts: Vec<Point2> = points.iter().map(|&(x, y)| Point2::new(x, y)).collect();
        match prepare(&pts).unwrap() {
            Prepared::Sorted(s) => s,
            Prepared::Trivial(_) => panic!("expected ≥ 2 distinct points"),
        }
    }

    fn run(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
        quickhull(&sorted(points), 1e-9, HullCfg::default())
            .into_iter()
            .map(|p| (p.x, p.y))
            .collect()
    }

    #[test]
    fn square_with_interior_point() {
        let hull = run(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (2.0, 2.0)]);
        assert_eq!(hull, vec![(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)]);
    }

    #[test]
    fn diamond_with_inner_points() {
        let hull = run(&[
            (0.0, 10.0),
            (1.0, 1.0),
            (10.0, 0.0),
            (1.0, -1.0),
            (0.0, -10.0),
            (-1.0, -1.0),
            (-10.0, 0.0),
            (-1.0, 1.0),
        ]);
        assert_eq!(
            hull,
            vec![(-10.0, 0.0), (0.0, 10.0), (10.0, 0.0), (0.0, -10.0)]
        );
    }

    #[test]
    fn collinear_reduces_to_extremes() {
        assert_eq!(
            run(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]),
            vec![(0.0, 0.0), (2.0, 2.0)]
        );
        assert_eq!(
            run(&[(3.0, 1.0), (3.0, -4.0), (3.0, 0.5)]),
            vec![(3.0, -4.0), (3.0, 1.0)]
        );
    }

    #[test]
    fn points_on_hull_edges_are_dropped() {
        let hull = run(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (2.0, 1.0),
            (2.0, 2.0),
            (1.0, 2.0),
            (0.0, 2.0),
            (0.0, 1.0),
            (1.0, 1.0),
        ]);
        assert_eq!(hull, vec![(0.0, 0.0), (0.0, 2.0), (2.0, 2.0), (2.0, 0.0)]);
    }

    #[test]
    fn all_on_circle_no_stack_overflow() {
        let n = 100_000;
        let pts: Vec<Point2> = (0..n)
            .map(|k| {
                let th = std::f64::consts::TAU * k as f64 / n as f64;
                Point2::new(1e6 * th.cos(), 1e6 * th.sin())
            })
            .collect();
        let s = match prepare(&pts).unwrap() {
            Prepared::Sorted(s) => s,
            Prepared::Trivial(_) => unreachable!(),
        };
        // consecutive points turn by a cross of about 0.25
        let tol = 1e-3;
        let qh = quickhull(&s, tol, HullCfg::sequential());
        let mc = monotone_chain(&s, tol, HullCfg::sequential());
        assert!(qh.len() > n / 2);
        assert_eq!(qh, mc);
    }

    #[test]
    fn parallel_walks_match_sequential() {
        let s = sorted(&[
            (0.0, 0.0),
            (5.0, 1.0),
            (9.0, 4.0),
            (7.0, 8.0),
            (2.0, 9.0),
            (-3.0, 6.0),
            (4.0, 4.0),
            (-1.0, 2.0),
        ]);
        let par = HullCfg {
            par_threshold: 0,
            ..HullCfg::default()
        };
        assert_eq!(
            quickhull(&s, 1e-9, par),
            quickhull(&s, 1e-9, HullCfg::sequential())
        );
    }
}
