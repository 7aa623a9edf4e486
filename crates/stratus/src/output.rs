//! Naming, writing and opening rendered artifacts.

use std::{
    fs,
    path::{Path, PathBuf},
    process::Command,
};

use log::{debug, info, warn};

use crate::{StratusError, config::OutputConfig};

/// Stem used when a title yields no usable characters.
const FALLBACK_STEM: &str = "diagram";

/// Derive a file stem from a diagram title.
///
/// Whitespace runs collapse to a single `_` and the result is lowercased.
/// Path separators are replaced so the artifact always lands in the
/// output directory.
///
/// # Examples
///
/// ```
/// use stratus::output::file_stem;
///
/// assert_eq!(file_stem("Campus AWS  Architecture"), "campus_aws_architecture");
/// assert_eq!(file_stem("  "), "diagram");
/// ```
pub fn file_stem(title: &str) -> String {
    contained_stem(
        title
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase(),
    )
}

/// Replace path separators and reject stems made only of dots and
/// underscores, so the joined path cannot leave its directory.
fn contained_stem(stem: String) -> String {
    let stem = stem.replace(['/', '\\'], "_");
    if stem.is_empty() || stem.chars().all(|c| c == '.' || c == '_') {
        FALLBACK_STEM.to_string()
    } else {
        stem
    }
}

/// Full path of the artifact for `title` inside `dir`.
///
/// An explicit file name is used as given, apart from the separator
/// replacement [`file_stem`] also applies.
pub fn artifact_path(dir: &Path, title: &str, output: &OutputConfig) -> PathBuf {
    let stem = output
        .file_name()
        .map(|name| contained_stem(name.to_string()))
        .unwrap_or_else(|| file_stem(title));
    dir.join(format!("{stem}.{}", output.format().extension()))
}

/// Write `bytes` to `path`.
pub fn write_artifact(path: &Path, bytes: &[u8]) -> Result<(), StratusError> {
    fs::write(path, bytes)?;
    info!(path = path.display().to_string(), bytes = bytes.len(); "Artifact written");
    Ok(())
}

/// Open `path` in the platform's default viewer.
///
/// Waits for the launcher (`open`, `start` or `xdg-open`), which returns
/// once the viewer is up. A launcher that cannot be started or exits with
/// a failure is reported as a warning only; the artifact is already on
/// disk at that point.
pub fn show(path: &Path) {
    let mut command = viewer_command(path);
    match command.status() {
        Ok(status) if status.success() => {
            debug!(path = path.display().to_string(); "Viewer started")
        }
        Ok(status) => warn!(
            path = path.display().to_string(),
            status:% = status;
            "Viewer launcher exited with a failure"
        ),
        Err(err) => warn!(
            path = path.display().to_string(),
            err:% = err;
            "Could not open the rendered diagram"
        ),
    }
}

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(path);
        command
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(path);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(path);
        command
    }
}
