use super::traits::{SourceOutput, StatusSource, StreamKind};
use crate::config::OverlayConfig;
use crate::error::OverlayError;
use futures::future::BoxFuture;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Production [`StatusSource`] that runs git against one listing directory.
///
/// Every invocation disables `core.quotepath` so paths arrive as literal
/// bytes, with only embedded quotes and backslashes still escaped — the
/// unquoter handles those.
#[derive(Debug)]
pub struct GitSource {
    dir: PathBuf,
}

impl GitSource {
    /// Create a source for the given listing directory. The directory may be
    /// anywhere inside a work tree; git resolves the repository itself.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, OverlayError> {
        let dir = dir.into();
        if !dir.ancestors().any(|p| p.join(".git").exists()) {
            return Err(OverlayError::NotARepo(dir.display().to_string()));
        }
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl StatusSource for GitSource {
    fn fetch<'a>(
        &'a self,
        stream: StreamKind,
        config: &'a OverlayConfig,
    ) -> BoxFuture<'a, Result<SourceOutput, OverlayError>> {
        Box::pin(async move {
            let args = stream_args(stream, config);
            let output = Command::new("git")
                .args(&args)
                .current_dir(&self.dir)
                .output()
                .await?;

            Ok(SourceOutput {
                // Killed-by-signal has no exit code; treat it as failure.
                exit_code: output.status.code().unwrap_or(-1),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        })
    }
}

/// Argument list for one stream, scoped to the listing directory (`.`) so
/// all reported paths are relative to it.
fn stream_args(stream: StreamKind, config: &OverlayConfig) -> Vec<String> {
    let base = &config.base_branch_name;
    match stream {
        StreamKind::Status => vec![
            "-c".into(),
            "core.quotepath=false".into(),
            "-c".into(),
            "status.relativePaths=true".into(),
            "status".into(),
            ".".into(),
            "--short".into(),
        ],
        StreamKind::Tree => vec![
            "-c".into(),
            "core.quotepath=false".into(),
            "ls-tree".into(),
            base.clone(),
            ".".into(),
            "--name-only".into(),
        ],
        StreamKind::Diff => vec![
            "-c".into(),
            "core.quotepath=false".into(),
            "diff".into(),
            "--name-status".into(),
            "--relative".into(),
            format!("{base}...HEAD"),
            "--".into(),
            ".".into(),
        ],
    }
}
