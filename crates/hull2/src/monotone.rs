//! Andrew's monotone chain (Graham-scan core).
//!
//! Two sweeps over the prepared order: x-ascending builds the upper chain,
//! x-descending the lower chain. Each sweep keeps a strictly right-turning
//! chain; collinear middles are removed, so the hull has no collinear vertices.
//! The joins at the two extremes are checked once more after the merge.
//! Output is clockwise from the lexicographic minimum.

use crate::orient::orientation;
use crate::prep::lexicographic_cmp;
use crate::types::{HullCfg, Point2, Turn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ChainState {
    Accumulating,
    Reducing,
    Done,
}

/// One sweep's partial chain. Local to a single pass.
#[derive(Debug)]
struct Chain {
    pts: Vec<Point2>,
    state: ChainState,
    tol: f64,
}

impl Chain {
    fn with_capacity(n: usize, tol: f64) -> Self {
        Self {
            pts: Vec::with_capacity(n),
            state: ChainState::Accumulating,
            tol,
        }
    }

    fn push(&mut self, p: Point2) {
        debug_assert_eq!(self.state, ChainState::Accumulating);
        self.pts.push(p);
        self.state = ChainState::Reducing;
        while self.state == ChainState::Reducing {
            let n = self.pts.len();
            if n >= 3
                && orientation(self.pts[n - 3], self.pts[n - 2], self.pts[n - 1], self.tol)
                    != Turn::Right
            {
                // drop the middle of the last three
                self.pts.swap_remove(n - 2);
            } else {
                self.state = ChainState::Accumulating;
            }
        }
    }

    fn finish(&mut self) -> Vec<Point2> {
        debug_assert_eq!(self.state, ChainState::Accumulating);
        self.state = ChainState::Done;
        std::mem::take(&mut self.pts)
    }
}

fn sweep<'a, I>(points: I, n: usize, tol: f64) -> Vec<Point2>
where
    I: Iterator<Item = &'a Point2>,
{
    let mut chain = Chain::with_capacity(n, tol);
    for p in points {
        chain.push(*p);
    }
    chain.finish()
}

/// Removes vertices where the closed cycle does not turn right, then rotates
/// the lexicographic minimum to the front.
///
/// The sweeps only test triples inside one chain; the triples around the two
/// extremes span both chains and are settled here. Of a flat triple, the point
/// lying between the other two is the one dropped.
fn close_cycle(mut hull: Vec<Point2>, tol: f64) -> Vec<Point2> {
    while hull.len() >= 3 {
        let n = hull.len();
        let bad = (0..n).find(|&i| {
            orientation(hull[(i + n - 1) % n], hull[i], hull[(i + 1) % n], tol) != Turn::Right
        });
        let Some(i) = bad else {
            break;
        };
        let (prev, next) = ((i + n - 1) % n, (i + 1) % n);
        let d = hull[next] - hull[prev];
        let t = d.dot(&(hull[i] - hull[prev]));
        let middle = if t < 0.0 {
            prev
        } else if t > d.norm_squared() {
            next
        } else {
            i
        };
        hull.remove(middle);
    }
    if let Some(start) = hull
        .iter()
        .enumerate()
        .min_by(|a, b| lexicographic_cmp(a.1, b.1))
        .map(|(i, _)| i)
    {
        hull.rotate_left(start);
    }
    hull
}

/// Hull of a prepared set (≥ 2 distinct points, lexicographically sorted).
///
/// `tol` is the absolute threshold on `cross` (see `HullCfg::tolerance`).
pub fn monotone_chain(sorted: &[Point2], tol: f64, cfg: HullCfg) -> Vec<Point2> {
    debug_assert!(sorted.len() >= 2);
    let n = sorted.len();
    let (mut upper, mut lower) = if cfg.parallel_for(n) {
        rayon::join(
            || sweep(sorted.iter(), n, tol),
            || sweep(sorted.iter().rev(), n, tol),
        )
    } else {
        (
            sweep(sorted.iter(), n, tol),
            sweep(sorted.iter().rev(), n, tol),
        )
    };
    // Each chain ends where the other starts.
    upper.pop();
    lower.pop();
    upper.append(&mut lower);
    close_cycle(upper, tol)
}
