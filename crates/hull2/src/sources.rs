//! Reproducible point sources (uniform box, circle) for the CLI, benches and tests.
//!
//! Model
//! - A source is a small parameter struct; `PointSource::points(tok)` draws a
//!   fresh set from a replay token `(seed, index)` mixed into one `StdRng`.
//! - The hull core does not depend on this module.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::Point2;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }
    #[inline]
    pub fn next(self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
            ..self
        }
    }
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Rejected source parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceError {
    InvalidParams { reason: String },
}

impl SourceError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid source params: {reason}"),
        }
    }
}

impl std::error::Error for SourceError {}

/// Anything that yields a finite point set from a replay token.
pub trait PointSource {
    fn validate(&self) -> Result<(), SourceError>;

    /// Draw without validating; callers go through `points`.
    fn draw(&self, rng: &mut StdRng) -> Vec<Point2>;

    fn points(&self, tok: ReplayToken) -> Result<Vec<Point2>, SourceError> {
        self.validate()?;
        let mut rng = tok.to_std_rng();
        Ok(self.draw(&mut rng))
    }
}

fn check_center(center: Point2) -> Result<(), SourceError> {
    if !(center.x.is_finite() && center.y.is_finite()) {
        return Err(SourceError::invalid("center must be finite"));
    }
    Ok(())
}

/// `n` points uniform in the square `center ± half_extent`.
///
/// With `lattice`, coordinates are integers in `[-half_extent, half_extent)`
/// around a rounded center; duplicates and collinear runs become common.
#[derive(Clone, Copy, Debug)]
pub struct UniformBox {
    pub n: usize,
    pub half_extent: f64,
    pub center: Point2,
    pub lattice: bool,
}

impl Default for UniformBox {
    fn default() -> Self {
        Self {
            n: 100,
            half_extent: 100.0,
            center: Point2::zeros(),
            lattice: false,
        }
    }
}

impl PointSource for UniformBox {
    fn validate(&self) -> Result<(), SourceError> {
        if !(self.half_extent.is_finite() && self.half_extent > 0.0) {
            return Err(SourceError::invalid("half_extent must be finite and > 0"));
        }
        if self.lattice && self.half_extent < 1.0 {
            return Err(SourceError::invalid("lattice boxes need half_extent >= 1"));
        }
        check_center(self.center)
    }

    fn draw(&self, rng: &mut StdRng) -> Vec<Point2> {
        let h = self.half_extent;
        if self.lattice {
            let m = h.floor() as i64;
            let cx = self.center.x.round();
            let cy = self.center.y.round();
            (0..self.n)
                .map(|_| {
                    Point2::new(
                        cx + rng.gen_range(-m..m) as f64,
                        cy + rng.gen_range(-m..m) as f64,
                    )
                })
                .collect()
        } else {
            (0..self.n)
                .map(|_| {
                    Point2::new(
                        self.center.x + rng.gen_range(-h..h),
                        self.center.y + rng.gen_range(-h..h),
                    )
                })
                .collect()
        }
    }
}

/// `n` points on a circle, at uniformly random angles.
///
/// `jitter` moves each radius by a relative amount in `[-jitter, 0]`; zero keeps
/// every point on the hull (the adversarial case for Quickhull).
#[derive(Clone, Copy, Debug)]
pub struct OnCircle {
    pub n: usize,
    pub radius: f64,
    pub center: Point2,
    pub jitter: f64,
}

impl Default for OnCircle {
    fn default() -> Self {
        Self {
            n: 100,
            radius: 100.0,
            center: Point2::zeros(),
            jitter: 0.0,
        }
    }
}

impl PointSource for OnCircle {
    fn validate(&self) -> Result<(), SourceError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(SourceError::invalid("radius must be finite and > 0"));
        }
        if !(0.0..1.0).contains(&self.jitter) {
            return Err(SourceError::invalid("jitter must lie in [0, 1)"));
        }
        check_center(self.center)
    }

    fn draw(&self, rng: &mut StdRng) -> Vec<Point2> {
        (0..self.n)
            .map(|_| {
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                let r = if self.jitter > 0.0 {
                    self.radius * (1.0 - rng.gen::<f64>() * self.jitter)
                } else {
                    self.radius
                };
                self.center + Point2::new(th.cos() * r, th.sin() * r)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let src = UniformBox::default();
        let tok = ReplayToken { seed: 42, index: 7 };
        assert_eq!(src.points(tok).unwrap(), src.points(tok).unwrap());
        assert_ne!(src.points(tok).unwrap(), src.points(tok.next()).unwrap());
    }

    #[test]
    fn box_bounds_and_lattice() {
        let src = UniformBox {
            n: 500,
            half_extent: 10.0,
            center: Point2::new(3.0, -2.0),
            lattice: true,
        };
        let pts = src.points(ReplayToken::new(1)).unwrap();
        assert_eq!(pts.len(), 500);
        for p in pts {
            assert_eq!(p.x.fract(), 0.0);
            assert!((-7.0..13.0).contains(&p.x));
            assert!((-12.0..8.0).contains(&p.y));
        }
    }

    #[test]
    fn circle_radius() {
        let src = OnCircle {
            n: 64,
            radius: 5.0,
            center: Point2::new(1.0, 1.0),
            jitter: 0.0,
        };
        for p in src.points(ReplayToken::new(9)).unwrap() {
            assert!(((p - src.center).norm() - 5.0).abs() < 1e-9);
        }
        let jittered = OnCircle { jitter: 0.5, ..src };
        for p in jittered.points(ReplayToken::new(9)).unwrap() {
            let r = (p - src.center).norm();
            assert!(r <= 5.0 + 1e-9 && r >= 2.5 - 1e-9);
        }
    }

    #[test]
    fn invalid_params() {
        let bad = UniformBox {
            half_extent: f64::NAN,
            ..UniformBox::default()
        };
        assert!(bad.points(ReplayToken::new(0)).is_err());
        let bad = OnCircle {
            radius: -1.0,
            ..OnCircle::default()
        };
        assert!(matches!(
            bad.points(ReplayToken::new(0)),
            Err(SourceError::InvalidParams { .. })
        ));
        let empty = UniformBox {
            n: 0,
            ..UniformBox::default()
        };
        assert!(empty.points(ReplayToken::new(0)).unwrap().is_empty());
    }
}
