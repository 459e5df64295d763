// src/snapshot/readme.rs
//! Snapshot index generation

use std::path::Path;

use crate::report;
use crate::storage::JsonStore;
use crate::Result;

use super::utils::write_snapshot_file;
use super::SnapshotStats;

/// Generate the README.md index for the snapshot directory
pub fn generate(store: &JsonStore, snapshot_dir: &Path, stats: &SnapshotStats) -> Result<()> {
    let ticket_stats = report::ticket_stats(&store.tickets());

    let mut content = String::from("# Spotdesk Snapshot\n\n");
    content.push_str("> Generated from spotdesk. Do not edit directly.\n\n");

    content.push_str(&format!(
        "- [Active tickets](tickets/active.md): {}\n",
        stats.active
    ));
    content.push_str(&format!(
        "- [Closed tickets](tickets/closed.md): {}\n\n",
        stats.closed
    ));

    content.push_str("## Totals\n\n");
    content.push_str(&format!(
        "Open: {} | In Progress: {} | Resolved: {} | Closed: {}\n\n",
        ticket_stats.open, ticket_stats.in_progress, ticket_stats.resolved, ticket_stats.closed
    ));

    content.push_str(&format!("Last updated: {}\n", super::current_timestamp()));

    write_snapshot_file(&snapshot_dir.join("README.md"), &content)
}
