// src/snapshot/ticket.rs
//! Ticket snapshot generation

use std::path::Path;

use crate::entity::{Priority, Status, Ticket};
use crate::storage::JsonStore;
use crate::Result;

use super::utils::write_snapshot_file;
use super::{yaml_frontmatter, GeneratedFile};

#[derive(serde::Serialize)]
struct TicketFrontmatter<'a> {
    generated: String,
    tickets: usize,
    view: &'a str,
}

/// Format a single ticket line with its key fields
fn format_ticket_line(ticket: &Ticket) -> String {
    let assignee = ticket.assignee_emp_id.as_deref().unwrap_or("unassigned");

    let mut line = format!(
        "- **{}** `{}` [{}|{}] {} -> {}",
        ticket.title,
        ticket.ticket_number,
        ticket.ticket_type,
        ticket.priority,
        ticket.reporter_email,
        assignee,
    );

    let mut meta_parts = Vec::new();
    if let Some(department) = &ticket.department {
        meta_parts.push(format!("Dept: {}", department));
    }
    if let Some(location) = &ticket.location {
        meta_parts.push(format!("Location: {}", location));
    }
    if let Some(expected) = ticket.expected_completion {
        meta_parts.push(format!("Expected: {}", expected));
    }
    if !meta_parts.is_empty() {
        line.push_str(&format!("\n  {}", meta_parts.join(" | ")));
    }

    line
}

fn generate_view(
    tickets: &[&Ticket],
    store: &JsonStore,
    snapshot_dir: &Path,
    view: &str,
    heading: &str,
) -> Result<GeneratedFile> {
    let frontmatter = TicketFrontmatter {
        generated: super::current_timestamp(),
        tickets: tickets.len(),
        view,
    };

    let mut content = yaml_frontmatter(&frontmatter)?;
    content.push_str(&format!("\n# {}\n\n", heading));
    content.push_str("> Generated from spotdesk. Do not edit directly.\n\n");

    if tickets.is_empty() {
        content.push_str("*No tickets.*\n");
    } else {
        let priorities = [
            (Priority::Critical, "Critical"),
            (Priority::High, "High"),
            (Priority::Medium, "Medium"),
            (Priority::Low, "Low"),
        ];

        for (priority, section) in priorities {
            let matching: Vec<_> = tickets.iter().filter(|t| t.priority == priority).collect();
            if matching.is_empty() {
                continue;
            }

            content.push_str(&format!("## {}\n\n", section));
            for ticket in matching {
                content.push_str(&format_ticket_line(ticket));
                content.push('\n');

                // Latest audit line gives the "what happened last" context.
                if let Some(latest) = store.history(&ticket.ticket_number).first() {
                    content.push_str(&format!(
                        "  Last: {} by {} at {}\n",
                        latest.action_type,
                        latest.user_email,
                        super::utils::format_timestamp(&latest.timestamp),
                    ));
                }
                content.push('\n');
            }
        }
    }

    let relative_path = format!("tickets/{}.md", view);
    write_snapshot_file(&snapshot_dir.join(&relative_path), &content)?;

    Ok(GeneratedFile {
        relative_path,
        entity_count: tickets.len(),
    })
}

/// Generate active.md (Open/In Progress/Resolved) and closed.md
pub fn generate(store: &JsonStore, snapshot_dir: &Path) -> Result<Vec<GeneratedFile>> {
    let tickets = store.tickets();

    let active: Vec<&Ticket> = tickets
        .iter()
        .filter(|t| t.status != Status::Closed)
        .collect();
    let closed: Vec<&Ticket> = tickets
        .iter()
        .filter(|t| t.status == Status::Closed)
        .collect();

    Ok(vec![
        generate_view(&active, store, snapshot_dir, "active", "Active Tickets")?,
        generate_view(&closed, store, snapshot_dir, "closed", "Closed Tickets")?,
    ])
}
