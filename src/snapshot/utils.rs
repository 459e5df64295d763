// src/snapshot/utils.rs
//! Utility functions for snapshot generation

use std::fs;
use std::path::Path;

use crate::Result;

/// Ensure the snapshot directory structure exists
pub fn ensure_snapshot_dirs(snapshot_dir: &Path) -> Result<()> {
    fs::create_dir_all(snapshot_dir.join("tickets"))?;
    Ok(())
}

/// Remove the snapshot directory so stale files never linger
pub fn clear_snapshot_dir(snapshot_dir: &Path) -> Result<()> {
    if !snapshot_dir.exists() {
        return Ok(());
    }

    fs::remove_dir_all(snapshot_dir)?;
    Ok(())
}

/// Write content to a file, creating parent directories if needed
pub fn write_snapshot_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Format a DateTime as YYYY-MM-DD for frontmatter
pub fn format_date(dt: &chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Format a DateTime as full ISO timestamp
pub fn format_timestamp(dt: &chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
