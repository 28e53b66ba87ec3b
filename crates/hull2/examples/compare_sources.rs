//! Print hull sizes of both algorithms across point sources.
//!
//! Usage:
//!   cargo run -p hull2 --example compare_sources -- 5000

use hull2::sources::{OnCircle, PointSource, ReplayToken, UniformBox};
use hull2::{compute_hull, Algorithm, Hull, Point2};

fn main() {
    let n = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(1000);
    let sources: Vec<(&str, Box<dyn PointSource>)> = vec![
        (
            "box",
            Box::new(UniformBox {
                n,
                ..UniformBox::default()
            }),
        ),
        (
            "lattice",
            Box::new(UniformBox {
                n,
                lattice: true,
                ..UniformBox::default()
            }),
        ),
        (
            "circle",
            Box::new(OnCircle {
                n,
                ..OnCircle::default()
            }),
        ),
    ];
    let mut tok = ReplayToken::new(2025);
    for (name, src) in &sources {
        tok = tok.next();
        let points = match src.points(tok) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };
        let (hulls, agree) = build_all(name, &points);
        for h in &hulls {
            println!(
                "{name:>8} n={n} {:>9}: V={} area={:.3}",
                h.algorithm().as_str(),
                h.len(),
                h.area()
            );
        }
        println!("{name:>8} agree={agree}");
    }
}

/// Hulls from every algorithm that succeeded; errors go to stderr and count
/// as disagreement.
fn build_all(name: &str, points: &[Point2]) -> (Vec<Hull>, bool) {
    let mut hulls = Vec::with_capacity(Algorithm::ALL.len());
    for algo in Algorithm::ALL {
        match compute_hull(points, algo) {
            Ok(h) => hulls.push(h),
            Err(e) => eprintln!("{name}: {algo}: {e}"),
        }
    }
    let agree = hulls.len() == Algorithm::ALL.len()
        && hulls.windows(2).all(|w| w[0].same_vertex_set(&w[1]));
    (hulls, agree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_hulls_do_not_count_as_agreement() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(f64::NAN, 1.0),
            Point2::new(1.0, 1.0),
        ];
        let (hulls, agree) = build_all("nan", &pts);
        assert!(hulls.is_empty());
        assert!(!agree);
    }

    #[test]
    fn square_agrees() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.5, 0.5),
        ];
        let (hulls, agree) = build_all("square", &pts);
        assert_eq!(hulls.len(), Algorithm::ALL.len());
        assert!(agree);
    }
}
