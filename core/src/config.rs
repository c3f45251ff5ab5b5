use serde::Deserialize;

/// Per-listing configuration, threaded explicitly through the refresh cycle
/// so that concurrent listings can use different settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverlayConfig {
    /// Reference against which ignored-file listing and committed diffs are
    /// computed.
    pub base_branch_name: String,
    /// Also merge `git diff --name-status <base>...HEAD` into the index
    /// column.
    pub include_committed_changes: bool,
    /// List the base branch's tracked files so unchanged entries appear in
    /// the map and everything else can be treated as ignored.
    pub show_ignored_entries: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            base_branch_name: "HEAD".to_owned(),
            include_committed_changes: false,
            show_ignored_entries: true,
        }
    }
}
