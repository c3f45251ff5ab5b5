//! Reference rendering collaborator: a small CLI that prints a directory
//! listing with two-column status markers, the way an editor overlay would
//! draw them.

use crate::config::OverlayConfig;
use crate::refresh::refresh;
use crate::sources::GitSource;
use crate::status::{EntryStatus, StatusKind, StatusMap};
use clap::Parser;
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "git-overlay")]
#[command(author, version, about = "Annotate a directory listing with git status markers", long_about = None)]
pub struct Cli {
    /// Directory to list (defaults to the current directory)
    pub path: Option<String>,

    /// Base branch for tracked-file listing and committed diffs
    #[arg(short, long, default_value = "HEAD")]
    pub base: String,

    /// Merge committed changes relative to the base branch into the markers
    #[arg(long)]
    pub committed: bool,

    /// Do not mark unlisted entries as ignored
    #[arg(long)]
    pub no_ignored: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn run(cli: Cli) -> Result<(), String> {
    let dir = PathBuf::from(cli.path.unwrap_or_else(|| ".".to_owned()));
    let config = OverlayConfig {
        base_branch_name: cli.base,
        include_committed_changes: cli.committed,
        show_ignored_entries: !cli.no_ignored,
    };

    let source = GitSource::new(&dir).map_err(|e| e.to_string())?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| e.to_string())?;

    let map = runtime
        .block_on(refresh(&source, &config))
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "git status unavailable for this directory".to_owned())?;

    let entries = list_entries(&dir)?;

    if cli.format == OutputFormat::Json {
        print_json(&entries, &map, &config);
    } else {
        for name in &entries {
            let status = lookup(&map, name, &config);
            println!("{} {name}", markers(status));
        }
    }

    Ok(())
}

/// Immediate children of the listing directory, sorted by name. The `.git`
/// directory itself is not part of the listing.
fn list_entries(dir: &Path) -> Result<Vec<String>, String> {
    let read_dir =
        std::fs::read_dir(dir).map_err(|e| format!("cannot read {}: {e}", dir.display()))?;
    let mut names: Vec<String> = read_dir
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name != ".git")
        .collect();
    names.sort();
    Ok(names)
}

/// Status for one visible entry, applying the treat-as-ignored default for
/// entries the map never mentions.
fn lookup(map: &StatusMap, name: &str, config: &OverlayConfig) -> EntryStatus {
    if let Some(status) = map.get(name) {
        return *status;
    }
    if config.show_ignored_entries {
        EntryStatus {
            index: '!',
            working_tree: '!',
        }
    } else {
        EntryStatus::UNMODIFIED
    }
}

/// Two colored marker characters, index column then working-tree column.
fn markers(status: EntryStatus) -> String {
    format!("{}{}", paint(status.index), paint(status.working_tree))
}

fn paint(code: char) -> colored::ColoredString {
    let text = code.to_string();
    match StatusKind::from_code(code) {
        StatusKind::Added => text.green(),
        StatusKind::Copied | StatusKind::Renamed => text.cyan(),
        StatusKind::Deleted | StatusKind::Unmerged => text.red(),
        StatusKind::Modified | StatusKind::TypeChanged => text.yellow(),
        StatusKind::Untracked => text.magenta(),
        StatusKind::Ignored => text.dimmed(),
        StatusKind::Unmodified => text.normal(),
    }
}

fn print_json(entries: &[String], map: &StatusMap, config: &OverlayConfig) {
    let listing: BTreeMap<&str, serde_json::Value> = entries
        .iter()
        .map(|name| {
            let status = lookup(map, name, config);
            let value = serde_json::json!({
                "index": status.index,
                "workingTree": status.working_tree,
                "indexKind": StatusKind::from_code(status.index),
                "workingTreeKind": StatusKind::from_code(status.working_tree),
            });
            (name.as_str(), value)
        })
        .collect();

    println!(
        "{}",
        serde_json::to_string_pretty(&listing).expect("failed to serialize JSON output")
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_defaults_absent_entries_to_ignored() {
        let map = StatusMap::new();
        let config = OverlayConfig::default();
        let status = lookup(&map, "target", &config);
        assert_eq!(status.index, '!');
        assert_eq!(status.working_tree, '!');
    }

    #[test]
    fn test_lookup_respects_disabled_ignore_default() {
        let map = StatusMap::new();
        let config = OverlayConfig {
            show_ignored_entries: false,
            ..OverlayConfig::default()
        };
        assert_eq!(lookup(&map, "target", &config), EntryStatus::UNMODIFIED);
    }
}
