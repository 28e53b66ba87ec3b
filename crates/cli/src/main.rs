use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hull2::sources::{OnCircle, PointSource, ReplayToken, UniformBox};
use hull2::{compute_hull_with, Algorithm, Hull, HullCfg, Point2};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "hull2")]
#[command(about = "Planar convex hulls (monotone chain and Quickhull)")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlgoArg {
    Graham,
    Quickhull,
}

impl From<AlgoArg> for Algorithm {
    fn from(a: AlgoArg) -> Self {
        match a {
            AlgoArg::Graham => Algorithm::GrahamScan,
            AlgoArg::Quickhull => Algorithm::Quickhull,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SourceArg {
    /// Uniform in a square of half-width `extent`
    Box,
    /// Integer coordinates in [-extent, extent)
    Lattice,
    /// On a circle of radius `extent`
    Circle,
    /// JSON array of [x, y] pairs read from `--input`
    File,
}

#[derive(clap::Args, Clone, Debug)]
struct PointArgs {
    #[arg(long, value_enum, default_value_t = SourceArg::Box)]
    source: SourceArg,
    /// Number of generated points
    #[arg(long, default_value_t = 100)]
    n: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Box half-width or circle radius
    #[arg(long, default_value_t = 100.0)]
    extent: f64,
    /// Points file for `--source file`
    #[arg(long)]
    input: Option<PathBuf>,
    /// Collinearity tolerance, relative to the squared extent of the points
    #[arg(long, default_value_t = HullCfg::default().eps_orient)]
    eps: f64,
}

#[derive(Subcommand)]
enum Action {
    /// Compute one hull and print (or write) it as JSON
    Run {
        #[arg(long, value_enum, default_value_t = AlgoArg::Graham)]
        algo: AlgoArg,
        #[command(flatten)]
        points: PointArgs,
        /// Output file; a provenance sidecar is written next to it
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run both algorithms on the same points and check that they agree
    Compare {
        #[command(flatten)]
        points: PointArgs,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct HullOut {
    algorithm: String,
    input_len: usize,
    hull: Vec<[f64; 2]>,
    area: f64,
    perimeter: f64,
    tolerance: f64,
}

impl HullOut {
    fn new(hull: &Hull, input_len: usize) -> Self {
        Self {
            algorithm: hull.algorithm().to_string(),
            input_len,
            hull: hull.vertices().iter().map(|p| [p.x, p.y]).collect(),
            area: hull.area(),
            perimeter: hull.perimeter(),
            tolerance: hull.tolerance(),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run { algo, points, out } => run(algo.into(), &points, out.as_deref()),
        Action::Compare { points } => compare(&points),
        Action::Report => report(),
    }
}

fn cfg_from(args: &PointArgs) -> HullCfg {
    HullCfg {
        eps_orient: args.eps,
        ..HullCfg::default()
    }
}

fn load_points(args: &PointArgs) -> Result<Vec<Point2>> {
    let tok = ReplayToken::new(args.seed);
    let pts = match args.source {
        SourceArg::Box | SourceArg::Lattice => UniformBox {
            n: args.n,
            half_extent: args.extent,
            center: Point2::zeros(),
            lattice: matches!(args.source, SourceArg::Lattice),
        }
        .points(tok)?,
        SourceArg::Circle => OnCircle {
            n: args.n,
            radius: args.extent,
            ..OnCircle::default()
        }
        .points(tok)?,
        SourceArg::File => {
            let path = args
                .input
                .as_deref()
                .context("--source file needs --input <path>")?;
            read_points(path)?
        }
    };
    Ok(pts)
}

fn read_points(path: &Path) -> Result<Vec<Point2>> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(raw.into_iter().map(|[x, y]| Point2::new(x, y)).collect())
}

fn run(algo: Algorithm, args: &PointArgs, out: Option<&Path>) -> Result<()> {
    tracing::info!(%algo, source = ?args.source, n = args.n, seed = args.seed, "run");
    let points = load_points(args)?;
    let hull = compute_hull_with(&points, algo, cfg_from(args))?;
    tracing::info!(input = points.len(), vertices = hull.len(), "hull");
    let body = serde_json::to_vec_pretty(&HullOut::new(&hull, points.len()))?;

    let Some(out) = out else {
        println!("{}", String::from_utf8_lossy(&body));
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, body).with_context(|| format!("writing {}", out.display()))?;
    let payload = provenance::Payload::for_hull(
        &hull,
        points.len(),
        args.eps,
        serde_json::json!({
            "source": format!("{:?}", args.source).to_lowercase(),
            "n": args.n,
            "seed": args.seed,
            "extent": args.extent,
            "input": args.input.as_ref().map(|p| p.display().to_string()),
        }),
    );
    let prov = provenance::write_sidecar(out, &payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote");
    Ok(())
}

fn compare(args: &PointArgs) -> Result<()> {
    tracing::info!(source = ?args.source, n = args.n, seed = args.seed, "compare");
    let points = load_points(args)?;
    let cfg = cfg_from(args);
    let mut hulls = Vec::with_capacity(Algorithm::ALL.len());
    for algo in Algorithm::ALL {
        let t0 = Instant::now();
        let hull = compute_hull_with(&points, algo, cfg)?;
        let ms = t0.elapsed().as_secs_f64() * 1e3;
        tracing::info!(%algo, vertices = hull.len(), ms, "timed");
        hulls.push(hull);
    }
    let agree = hulls.windows(2).all(|w| w[0].same_vertex_set(&w[1]));
    let report = serde_json::json!({
        "input_len": points.len(),
        "vertices": hulls.iter().map(|h| (h.algorithm().as_str(), h.len())).collect::<Vec<_>>(),
        "agree": agree,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    if !agree {
        bail!("algorithms disagree on {} points", points.len());
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": hull2::VERSION,
        "algorithms": Algorithm::ALL.iter().map(|a| a.as_str()).collect::<Vec<_>>(),
        "eps_orient": HullCfg::default().eps_orient,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
