//! Git status annotation core for directory listings.
//!
//! This crate turns the output of three git commands — `git status --short`,
//! `git ls-tree --name-only`, and an optional `git diff --name-status` branch
//! comparison — into a single mapping from top-level directory-entry name to a
//! pair of status codes (index, working tree). A rendering layer consumes the
//! map to draw per-entry markers next to a directory listing.
//!
//! The git commands themselves are behind the [`sources::StatusSource`] seam;
//! [`sources::GitSource`] is the production implementation, and tests supply
//! scripted sources. [`refresh::refresh`] runs the full cycle: launch the
//! streams concurrently, join them in a fixed order, parse, and merge.

pub mod config;
pub mod error;
pub mod quote;
pub mod refresh;
pub mod sources;
pub mod status;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::OverlayConfig;
pub use error::OverlayError;
pub use refresh::refresh;
pub use status::{EntryStatus, StatusKind, StatusMap};
