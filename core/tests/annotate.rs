//! End-to-end refresh cycles against a scripted source, exercising the whole
//! pipeline through the public API: concurrent fan-in, short-status parsing,
//! tracked-file fallback, and the branch-diff merge.

use futures::future::BoxFuture;
use git_overlay::sources::{SourceOutput, StatusSource, StreamKind};
use git_overlay::{refresh, EntryStatus, OverlayConfig, StatusKind};

/// Canned git output per stream.
struct FakeRepo {
    status: String,
    tree: String,
    diff: String,
    diff_exit: i32,
}

impl StatusSource for FakeRepo {
    fn fetch<'a>(
        &'a self,
        stream: StreamKind,
        _config: &'a OverlayConfig,
    ) -> BoxFuture<'a, Result<SourceOutput, git_overlay::OverlayError>> {
        Box::pin(async move {
            let (exit_code, stdout) = match stream {
                StreamKind::Status => (0, self.status.clone()),
                StreamKind::Tree => (0, self.tree.clone()),
                StreamKind::Diff => (self.diff_exit, self.diff.clone()),
            };
            Ok(SourceOutput {
                exit_code,
                stdout,
                stderr: String::new(),
            })
        })
    }
}

fn entry(index: char, working: char) -> EntryStatus {
    EntryStatus {
        index,
        working_tree: working,
    }
}

#[tokio::test]
async fn full_cycle_without_committed_changes() {
    let repo = FakeRepo {
        status: "M  staged.rs\n M edited.rs\n?? scratch/\nA  pkg/src/new.rs\n".to_owned(),
        tree: "staged.rs\nedited.rs\npkg\nREADME.md\n".to_owned(),
        diff: String::new(),
        diff_exit: 0,
    };

    let map = refresh(&repo, &OverlayConfig::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(map.len(), 5);
    assert_eq!(map["staged.rs"], entry('M', ' '));
    assert_eq!(map["edited.rs"], entry(' ', 'M'));
    assert_eq!(map["scratch"], entry('?', '?'));
    assert_eq!(map["pkg"], entry('A', ' '));
    assert_eq!(map["README.md"], EntryStatus::UNMODIFIED);
}

#[tokio::test]
async fn full_cycle_with_committed_changes() {
    let repo = FakeRepo {
        status: " M lib.rs\n".to_owned(),
        tree: "lib.rs\ndocs\n".to_owned(),
        diff: "M\tlib.rs\nR087\tdocs/old.md\tdocs/new.md\nA\ttool.py\n".to_owned(),
        diff_exit: 0,
    };
    let config = OverlayConfig {
        base_branch_name: "main".to_owned(),
        include_committed_changes: true,
        show_ignored_entries: true,
    };

    let map = refresh(&repo, &config).await.unwrap().unwrap();

    // Committed edits fill the index column without clobbering the
    // working-tree column from the short status.
    assert_eq!(map["lib.rs"], entry('M', 'M'));
    // The nested rename collapses onto the already-listed docs entry as a
    // generic modification, index column only.
    assert_eq!(map["docs"], entry('M', ' '));
    // A committed change git status never mentioned still appears.
    assert_eq!(map["tool.py"], entry('A', ' '));
}

#[tokio::test]
async fn quoted_paths_round_trip() {
    let repo = FakeRepo {
        status: "?? \"\\\"weird\\\\name\\\".md\"\n".to_owned(),
        tree: String::new(),
        diff: String::new(),
        diff_exit: 0,
    };

    let map = refresh(&repo, &OverlayConfig::default())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(map["\"weird\\name\".md"], entry('?', '?'));
}

#[tokio::test]
async fn failed_diff_degrades_instead_of_failing() {
    let repo = FakeRepo {
        status: "?? untracked.txt\n".to_owned(),
        tree: String::new(),
        diff: String::new(),
        diff_exit: 128,
    };
    let config = OverlayConfig {
        include_committed_changes: true,
        ..OverlayConfig::default()
    };

    let map = refresh(&repo, &config).await.unwrap().unwrap();
    assert_eq!(map["untracked.txt"], entry('?', '?'));
}

#[test]
fn presentation_categories_for_both_columns() {
    let status = EntryStatus {
        index: 'R',
        working_tree: ' ',
    };
    assert_eq!(StatusKind::from_code(status.index), StatusKind::Renamed);
    assert_eq!(
        StatusKind::from_code(status.working_tree),
        StatusKind::Unmodified
    );
}
