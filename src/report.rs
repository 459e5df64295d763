// src/report.rs
//! Aggregate ticket counts for the stats view.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::entity::{Status, Ticket};

/// Ticket counts by status, priority, and type.
#[derive(Debug, Default, Serialize)]
pub struct TicketStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub closed: usize,
    pub by_priority: BTreeMap<String, usize>,
    pub by_type: BTreeMap<String, usize>,
}

/// Aggregate stats over a ticket list.
pub fn ticket_stats(tickets: &[Ticket]) -> TicketStats {
    let mut stats = TicketStats {
        total: tickets.len(),
        ..Default::default()
    };

    for ticket in tickets {
        match ticket.status {
            Status::Open => stats.open += 1,
            Status::InProgress => stats.in_progress += 1,
            Status::Resolved => stats.resolved += 1,
            Status::Closed => stats.closed += 1,
        }
        *stats
            .by_priority
            .entry(ticket.priority.to_string())
            .or_default() += 1;
        *stats
            .by_type
            .entry(ticket.ticket_type.to_string())
            .or_default() += 1;
    }

    stats
}

/// Format stats for terminal display.
pub fn format_stats(stats: &TicketStats) -> String {
    let mut out = String::new();

    out.push_str(&format!("Tickets: {}\n", stats.total));
    out.push_str(&format!(
        "  Open: {}  In Progress: {}  Resolved: {}  Closed: {}\n",
        stats.open, stats.in_progress, stats.resolved, stats.closed
    ));

    if !stats.by_priority.is_empty() {
        out.push_str("\nBy priority:\n");
        for (priority, count) in &stats.by_priority {
            out.push_str(&format!("  {:<10} {}\n", priority, count));
        }
    }

    if !stats.by_type.is_empty() {
        out.push_str("\nBy type:\n");
        for (ticket_type, count) in &stats.by_type {
            out.push_str(&format!("  {:<10} {}\n", ticket_type, count));
        }
    }

    out
}
