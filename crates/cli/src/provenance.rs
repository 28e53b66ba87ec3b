use anyhow::{Context, Result};
use hull2::{Algorithm, Hull};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced a hull artifact: how the points were obtained and how the
/// hull was built from them.
pub struct Payload {
    pub points: Value,
    pub algorithm: Algorithm,
    pub eps_orient: f64,
    pub tolerance: f64,
    pub input_len: usize,
    pub vertices: usize,
}

impl Payload {
    pub fn for_hull(hull: &Hull, input_len: usize, eps_orient: f64, points: Value) -> Self {
        Self {
            points,
            algorithm: hull.algorithm(),
            eps_orient,
            tolerance: hull.tolerance(),
            input_len,
            vertices: hull.len(),
        }
    }

    fn to_json(&self, artifact: &Path, callsite: &Location<'_>) -> Value {
        json!({
            "code_rev": current_git_rev(),
            "version": hull2::VERSION,
            "callsite": format!("{}:{}", callsite.file(), callsite.line()),
            "points": self.points,
            "hull": {
                "algorithm": self.algorithm.as_str(),
                "eps_orient": self.eps_orient,
                "tolerance": self.tolerance,
                "input_len": self.input_len,
                "vertices": self.vertices,
            },
            "artifact": artifact.to_string_lossy(),
        })
    }
}

/// Writes `<artifact stem>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar(artifact: &Path, payload: &Payload) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    let doc = payload.to_json(artifact, Location::caller());
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "hull".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then runtime), else `git describe --always --dirty`,
/// else "unknown".
pub fn current_git_rev() -> String {
    let set = |rev: &String| !rev.is_empty();
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .filter(set)
        .or_else(|| std::env::var("GIT_COMMIT").ok().filter(set))
        .or_else(|| {
            Command::new("git")
                .args(["describe", "--always", "--dirty"])
                .output()
                .ok()
                .filter(|out| out.status.success())
                .and_then(|out| String::from_utf8(out.stdout).ok())
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
