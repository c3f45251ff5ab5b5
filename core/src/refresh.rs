//! The refresh cycle: launch the git streams concurrently, join them in a
//! fixed order, parse, and merge.
//!
//! Each cycle builds a fresh [`StatusMap`] and hands it back wholesale; no
//! partial mutation is visible outside a single call. Overlapping cycles for
//! the same listing are allowed to race — the last one to return wins, and
//! callers that care should debounce at their boundary.

use crate::config::OverlayConfig;
use crate::error::OverlayError;
use crate::sources::{SourceOutput, StatusSource, StreamKind};
use crate::status::parser::{merge_branch_diff, parse_short_status};
use crate::status::StatusMap;
use futures::future::{join_all, BoxFuture};

/// Run one full status-refresh cycle against the given source.
///
/// Returns `Ok(None)` when the status or tree command exits non-zero — the
/// overlay is unavailable this cycle and the caller should leave its previous
/// presentation in place. A failed diff command only degrades the result to
/// uncommitted data. `Err` is reserved for failures launching the processes
/// themselves.
pub async fn refresh<S: StatusSource>(
    source: &S,
    config: &OverlayConfig,
) -> Result<Option<StatusMap>, OverlayError> {
    // Disabled streams resolve immediately to an empty success so the join
    // always sees exactly three results in positional order.
    let ops: Vec<BoxFuture<'_, Result<SourceOutput, OverlayError>>> = vec![
        source.fetch(StreamKind::Status, config),
        gated(source, StreamKind::Tree, config, config.show_ignored_entries),
        gated(
            source,
            StreamKind::Diff,
            config,
            config.include_committed_changes,
        ),
    ];

    let mut results = join_all(ops).await.into_iter();
    let status = results.next().unwrap_or_else(disabled_result)?;
    let tree = results.next().unwrap_or_else(disabled_result)?;
    let diff = results.next().unwrap_or_else(disabled_result)?;

    if !status.succeeded() || !tree.succeeded() {
        log::warn!(
            "git status unavailable (status exit {}, ls-tree exit {}): {}",
            status.exit_code,
            tree.exit_code,
            status.stderr.trim()
        );
        return Ok(None);
    }

    let mut map = parse_short_status(&status.stdout, &tree.stdout);

    if config.include_committed_changes {
        if diff.succeeded() {
            merge_branch_diff(&mut map, &diff.stdout);
        } else {
            log::debug!(
                "skipping branch diff merge (exit {}): {}",
                diff.exit_code,
                diff.stderr.trim()
            );
        }
    }

    Ok(Some(map))
}

fn gated<'a, S: StatusSource>(
    source: &'a S,
    stream: StreamKind,
    config: &'a OverlayConfig,
    enabled: bool,
) -> BoxFuture<'a, Result<SourceOutput, OverlayError>> {
    if enabled {
        source.fetch(stream, config)
    } else {
        Box::pin(futures::future::ready(Ok(SourceOutput::empty_success())))
    }
}

fn disabled_result() -> Result<SourceOutput, OverlayError> {
    Ok(SourceOutput::empty_success())
}
