use crate::config::OverlayConfig;
use crate::error::OverlayError;
use futures::future::BoxFuture;

/// Which of the three git streams to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    /// `git status . --short` — uncommitted index and working-tree changes.
    Status,
    /// `git ls-tree <base> . --name-only` — tracked top-level entries.
    Tree,
    /// `git diff --name-status --relative <base>...HEAD -- .` — committed
    /// changes relative to the base branch.
    Diff,
}

/// Captured output of one external text producer. Failure is signaled via
/// the exit code, never by omission — every launched stream reports back.
#[derive(Debug, Clone)]
pub struct SourceOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl SourceOutput {
    /// The stand-in result for a stream whose feature flag is disabled.
    pub fn empty_success() -> Self {
        Self {
            exit_code: 0,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}

/// Process-execution seam: something that can produce the text of one git
/// stream for one listing. The production implementation shells out to git;
/// tests substitute scripted outputs.
pub trait StatusSource {
    fn fetch<'a>(
        &'a self,
        stream: StreamKind,
        config: &'a OverlayConfig,
    ) -> BoxFuture<'a, Result<SourceOutput, OverlayError>>;
}
