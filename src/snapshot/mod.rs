// src/snapshot/mod.rs
//! Snapshot generation module
//!
//! Generates human-readable markdown views of the ticket list.
//! These snapshots are derived views meant for browsing; the JSON key
//! files stay the source of truth.

mod readme;
mod ticket;
pub mod utils;

use std::path::Path;

use chrono::Utc;

use crate::storage::JsonStore;
use crate::Result;

pub use self::utils::{format_date, format_timestamp};

/// Statistics about a generated snapshot
#[derive(Debug, Default)]
pub struct SnapshotStats {
    pub active: usize,
    pub closed: usize,
    pub files_generated: Vec<String>,
}

impl SnapshotStats {
    pub fn total_tickets(&self) -> usize {
        self.active + self.closed
    }
}

/// Result of generating a single snapshot file
pub struct GeneratedFile {
    pub relative_path: String,
    pub entity_count: usize,
}

/// Generate markdown snapshots for all tickets
///
/// This will:
/// 1. Clear the existing snapshot directory
/// 2. Write active/closed ticket views
/// 3. Generate an index README.md
pub fn generate_snapshot(store: &JsonStore, snapshot_dir: &Path) -> Result<SnapshotStats> {
    let mut stats = SnapshotStats::default();

    utils::clear_snapshot_dir(snapshot_dir)?;
    utils::ensure_snapshot_dirs(snapshot_dir)?;

    let ticket_files = ticket::generate(store, snapshot_dir)?;
    for file in &ticket_files {
        if file.relative_path.contains("active") {
            stats.active = file.entity_count;
        } else if file.relative_path.contains("closed") {
            stats.closed = file.entity_count;
        }
    }
    stats
        .files_generated
        .extend(ticket_files.into_iter().map(|f| f.relative_path));

    // README last so totals reflect everything generated above.
    readme::generate(store, snapshot_dir, &stats)?;
    stats.files_generated.push("README.md".to_string());

    Ok(stats)
}

/// Generate YAML frontmatter block
pub fn yaml_frontmatter<T: serde::Serialize>(data: &T) -> Result<String> {
    let yaml = serde_yaml::to_string(data)?;
    Ok(format!("---\n{}---\n", yaml))
}

/// Get current timestamp for "last updated" footers
pub fn current_timestamp() -> String {
    format_timestamp(&Utc::now())
}
