//! Parsing and aggregation of git's line-oriented status output.
//!
//! Two entry points build up a [`StatusMap`]: [`parse_short_status`] for
//! `git status --short` plus the base branch's `git ls-tree --name-only`
//! listing, and [`merge_branch_diff`] for an optional
//! `git diff --name-status` branch comparison. Both fold nested paths into
//! their top-level entry through the same aggregation rule, so changes from
//! either source accumulate consistently.
//!
//! All parsing is best-effort: a malformed line is skipped, never an error.
//! A broken status overlay must not break the listing it annotates.

use crate::quote::unquote;
use crate::status::{EntryStatus, StatusCode, StatusMap};

/// Parse `git status --short .` output plus the tracked-file listing from
/// `git ls-tree <base> . --name-only` into a fresh status map.
///
/// Tracked entries that the status output never mentions are inserted with
/// blank codes, so the rendering layer can treat anything absent from the map
/// as ignored.
pub fn parse_short_status(status_text: &str, tree_text: &str) -> StatusMap {
    let mut map = StatusMap::new();

    for line in status_text.lines() {
        if line.is_empty() {
            continue;
        }
        // Format is `XY name` — two single-character codes, a space, then
        // the (possibly quoted) path.
        let mut codes = line.chars();
        let index = codes.next().unwrap_or(' ');
        let working = codes.next().unwrap_or(' ');
        let Some(raw_name) = line.get(3..) else {
            log::debug!("skipping malformed status line: {line:?}");
            continue;
        };
        let name = unquote(raw_name);
        let name = name.strip_suffix('/').unwrap_or(&name);
        if name.is_empty() {
            log::debug!("skipping status line with empty path: {line:?}");
            continue;
        }
        aggregate(&mut map, name, index, working);
    }

    for line in tree_text.lines() {
        if line.is_empty() {
            continue;
        }
        let name = unquote(line);
        map.entry(name).or_insert(EntryStatus::UNMODIFIED);
    }

    map
}

/// Fold one file's status into its top-level entry.
///
/// A bare name is set directly (last write wins). A nested path is truncated
/// to its first segment; any change anywhere under a subdirectory collapses
/// to a generic `M` on that subdirectory's entry, per column, without
/// touching the opposite column's existing code.
pub fn aggregate(map: &mut StatusMap, path: &str, index: StatusCode, working: StatusCode) {
    let Some((top, _)) = path.split_once('/') else {
        map.insert(
            path.to_owned(),
            EntryStatus {
                index,
                working_tree: working,
            },
        );
        return;
    };

    match map.get_mut(top) {
        None => {
            map.insert(
                top.to_owned(),
                EntryStatus {
                    index,
                    working_tree: working,
                },
            );
        }
        Some(entry) => {
            if index != ' ' {
                entry.index = 'M';
            }
            if working != ' ' {
                entry.working_tree = 'M';
            }
        }
    }
}

/// Merge `git diff --name-status --relative <base>...HEAD` output into an
/// existing status map.
///
/// Branch-diff changes only ever touch the index column — they represent
/// committed history, not uncommitted edits. Rename and copy lines carry a
/// similarity score (`R100`, `C75`); only the leading letter matters, and the
/// marker lands on the post-rename path so it annotates the file's current
/// location. Top-level entries keep the precise code; nested paths go through
/// the shared aggregation rule.
pub fn merge_branch_diff(map: &mut StatusMap, diff_text: &str) {
    for line in diff_text.lines() {
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        let Some(code) = fields.next().and_then(|f| f.chars().next()) else {
            continue;
        };
        if !code.is_ascii_alphabetic() {
            log::debug!("skipping malformed diff line: {line:?}");
            continue;
        }
        // Renames and copies list old path then new path; take the new one.
        let target = if matches!(code, 'R' | 'C') {
            fields.nth(1)
        } else {
            fields.next()
        };
        let Some(target) = target else {
            log::debug!("skipping diff line with missing path field: {line:?}");
            continue;
        };
        let name = unquote(target);
        let name = name.strip_suffix('/').unwrap_or(&name);
        if name.is_empty() {
            continue;
        }

        if name.contains('/') {
            aggregate(map, name, code, ' ');
        } else {
            let entry = map.entry(name.to_owned()).or_insert(EntryStatus::UNMODIFIED);
            entry.index = code;
        }
    }
}
