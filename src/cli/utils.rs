//! Shared CLI utilities.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// `trello_export_YYYYmmdd_HHMMSS.md` for the given moment.
pub fn default_output_path<Tz: TimeZone>(now: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: Display,
{
    PathBuf::from(format!("trello_export_{}.md", now.format("%Y%m%d_%H%M%S")))
}

/// Delete `path` if it exists. Returns whether a file was removed; failures
/// are logged, never propagated.
pub fn delete_file(path: &Path) -> bool {
    if !path.exists() {
        return false;
    }
    match std::fs::remove_file(path) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Could not delete file {}: {}", path.display(), e);
            false
        }
    }
}
