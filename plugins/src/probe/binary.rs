use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use tokio::process::Command;

use envreport_core::api::FactValue;

lazy_static! {
    static ref VERSION_RE: Regex = Regex::new(r"(\d+\.\d+(?:\.\d+)?(?:[-+][0-9A-Za-z.\-]+)?)")
        .expect("version regex is valid");
}

/// First dotted version number in `output`, e.g. `v18.12.0` -> `18.12.0`.
pub fn extract_version(output: &str) -> Option<String> {
    VERSION_RE
        .captures(output)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn resolve(bin: &str) -> Option<PathBuf> {
    match which::which(bin) {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::debug!(target: "envreport.probe", bin, error = %e, "binary not on PATH");
            None
        }
    }
}

/// Run `program args..` and return stdout, or stderr when stdout is empty.
pub async fn capture(program: &Path, args: &[&str]) -> Option<String> {
    let output = match Command::new(program).args(args).output().await {
        Ok(o) => o,
        Err(e) => {
            tracing::debug!(
                target: "envreport.probe",
                program = %program.display(),
                error = %e,
                "failed to run"
            );
            return None;
        }
    };
    let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if !stdout.is_empty() {
        return Some(stdout);
    }
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    (!stderr.is_empty()).then_some(stderr)
}

pub async fn version_of(program: &Path) -> Option<String> {
    capture(program, &["--version"]).await.as_deref().and_then(extract_version)
}

/// Version and location of an executable, `Not Found` when it is not on PATH.
pub async fn probe_binary(bin: &str) -> FactValue {
    let Some(path) = resolve(bin) else {
        return FactValue::NotFound;
    };
    located(&path).await
}

pub async fn located(path: &Path) -> FactValue {
    let display = path.display().to_string();
    match version_of(path).await {
        Some(version) => FactValue::Versioned { version, path: display },
        None => FactValue::Text(display),
    }
}
