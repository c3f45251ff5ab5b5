pub mod parser;

use serde::Serialize;
use std::collections::HashMap;

/// A single git status code as found in either column of
/// `git status --short` output. A space means unmodified.
pub type StatusCode = char;

/// The status attributed to one directory entry: a file, or the first path
/// segment of a deeper path whose changes were folded into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryStatus {
    /// Staged (index) change code.
    pub index: StatusCode,
    /// Unstaged (working tree) change code.
    pub working_tree: StatusCode,
}

impl EntryStatus {
    pub const UNMODIFIED: Self = Self {
        index: ' ',
        working_tree: ' ',
    };
}

/// Mapping from bare top-level entry name (no path separators) to its status.
/// Built wholesale each refresh cycle and replaced, never patched.
pub type StatusMap = HashMap<String, EntryStatus>;

/// Semantic category of a status code, used by the rendering layer to pick a
/// style. Looked up twice per entry — once per column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Ignored,
    Untracked,
    Added,
    Copied,
    Deleted,
    Modified,
    Renamed,
    TypeChanged,
    Unmerged,
    Unmodified,
}

impl StatusKind {
    /// Categorize a status code. Unrecognized codes (including blank) fall
    /// back to `Unmodified` rather than failing.
    pub fn from_code(code: StatusCode) -> Self {
        match code {
            '!' => Self::Ignored,
            '?' => Self::Untracked,
            'A' => Self::Added,
            'C' => Self::Copied,
            'D' => Self::Deleted,
            'M' => Self::Modified,
            'R' => Self::Renamed,
            'T' => Self::TypeChanged,
            'U' => Self::Unmerged,
            _ => Self::Unmodified,
        }
    }
}
