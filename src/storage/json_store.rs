// src/storage/json_store.rs
//! Keyed JSON persistence plus the ticket lifecycle operations built on it.
//!
//! Each named key maps to one JSON file under `.spotdesk/`. Reads fail
//! soft: a missing or unparsable file yields the caller's fallback. Writes
//! replace the whole key. Single-writer usage is assumed; there is no
//! locking and the ticket counter is a plain read-increment-write.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Duration, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::entity::{
    ActionType, AssigneeMapping, Category, Company, HistoryDraft, HistoryEntry, HodMapping,
    Location, NewTicket, Priority, Status, Subcategory, Ticket,
};
use crate::error::{Result, SpotdeskError};
use crate::scoring::{self, AssignmentInput};

const SPOTDESK_DIR: &str = ".spotdesk";

const KEY_COMPANIES: &str = "companies";
const KEY_LOCATIONS: &str = "locations";
const KEY_CATEGORIES: &str = "categories";
const KEY_SUBCATEGORIES: &str = "subcategories";
const KEY_ASSIGNEES: &str = "assignee_mappings";
const KEY_HODS: &str = "hod_mappings";
const KEY_TICKETS: &str = "tickets";
const KEY_HISTORY: &str = "history";
const KEY_COUNTER: &str = "counter";

/// Resolved tickets older than this flip to Closed on the next sweep.
pub const AUTO_CLOSE_AFTER_DAYS: i64 = 5;

/// Actor recorded on history entries written by the auto-close sweep.
pub const SYSTEM_ACTOR: &str = "system@spot";

/// Update payload for a ticket. `None` fields are left untouched;
/// every applied change whose value actually differs produces one
/// history entry.
#[derive(Debug, Clone, Default)]
pub struct TicketUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
    pub department: Option<String>,
    pub sub_department: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub location: Option<String>,
    pub assignee_emp_id: Option<Option<String>>, // Some(None) to clear
    pub expected_completion: Option<Option<chrono::NaiveDate>>, // Some(None) to clear
}

pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// Initialize a new spotdesk project under `root`
    pub fn init(root: &Path) -> Result<Self> {
        let dir = root.join(SPOTDESK_DIR);

        if dir.exists() {
            return Err(SpotdeskError::AlreadyInitialized);
        }

        fs::create_dir_all(&dir)?;

        let store = Self { dir };
        store.write_key(KEY_COUNTER, &0u64)?;
        store.write_key(KEY_TICKETS, &Vec::<Ticket>::new())?;

        Ok(store)
    }

    /// Open an existing spotdesk project under `root`
    pub fn open(root: &Path) -> Result<Self> {
        let dir = root.join(SPOTDESK_DIR);

        if !dir.exists() {
            return Err(SpotdeskError::NotInitialized);
        }

        Ok(Self { dir })
    }

    /// The `.spotdesk/` data directory
    pub fn data_dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read a key, degrading to `fallback` on a missing file or any
    /// deserialization failure.
    pub fn read_key<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match fs::read_to_string(self.key_path(key)) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or(fallback),
            Err(_) => fallback,
        }
    }

    /// Write a key, fully replacing any prior content.
    pub fn write_key<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string_pretty(value)?;
        fs::write(self.key_path(key), raw)?;
        Ok(())
    }

    // ----- Master data accessors -----

    pub fn companies(&self) -> Vec<Company> {
        self.read_key(KEY_COMPANIES, Vec::new())
    }

    pub fn set_companies(&self, v: &[Company]) -> Result<()> {
        self.write_key(KEY_COMPANIES, &v)
    }

    pub fn locations(&self) -> Vec<Location> {
        self.read_key(KEY_LOCATIONS, Vec::new())
    }

    pub fn set_locations(&self, v: &[Location]) -> Result<()> {
        self.write_key(KEY_LOCATIONS, &v)
    }

    pub fn categories(&self) -> Vec<Category> {
        self.read_key(KEY_CATEGORIES, Vec::new())
    }

    pub fn set_categories(&self, v: &[Category]) -> Result<()> {
        self.write_key(KEY_CATEGORIES, &v)
    }

    pub fn subcategories(&self) -> Vec<Subcategory> {
        self.read_key(KEY_SUBCATEGORIES, Vec::new())
    }

    pub fn set_subcategories(&self, v: &[Subcategory]) -> Result<()> {
        self.write_key(KEY_SUBCATEGORIES, &v)
    }

    pub fn assignee_mappings(&self) -> Vec<AssigneeMapping> {
        self.read_key(KEY_ASSIGNEES, Vec::new())
    }

    pub fn set_assignee_mappings(&self, v: &[AssigneeMapping]) -> Result<()> {
        self.write_key(KEY_ASSIGNEES, &v)
    }

    pub fn hod_mappings(&self) -> Vec<HodMapping> {
        self.read_key(KEY_HODS, Vec::new())
    }

    pub fn set_hod_mappings(&self, v: &[HodMapping]) -> Result<()> {
        self.write_key(KEY_HODS, &v)
    }

    // ----- Tickets -----

    /// All tickets, newest first.
    pub fn tickets(&self) -> Vec<Ticket> {
        self.read_key(KEY_TICKETS, Vec::new())
    }

    pub fn set_tickets(&self, v: &[Ticket]) -> Result<()> {
        self.write_key(KEY_TICKETS, &v)
    }

    pub fn get_ticket(&self, ticket_number: &str) -> Option<Ticket> {
        self.tickets()
            .into_iter()
            .find(|t| t.ticket_number == ticket_number)
    }

    /// Allocate the next human-readable ticket number from the persisted
    /// counter. Not atomic against concurrent writers.
    fn next_ticket_number(&self) -> Result<String> {
        let current: u64 = self.read_key(KEY_COUNTER, 0);
        let next = current + 1;
        self.write_key(KEY_COUNTER, &next)?;
        Ok(format!("TK-{}-{:04}", Utc::now().year(), next))
    }

    /// Create a ticket: allocate a number, run assignment scoring, force
    /// status Open unless overridden, and record a `Created` history entry.
    pub fn create_ticket(&self, params: NewTicket) -> Result<Ticket> {
        let ticket_number = self.next_ticket_number()?;
        let created_at = Utc::now();

        let mappings = self.assignee_mappings();
        let assignee_emp_id = scoring::find_assignee(
            &mappings,
            &AssignmentInput {
                ticket_type: params.ticket_type,
                department: params.department.as_deref(),
                sub_department: params.sub_department.as_deref(),
                location: params.location.as_deref(),
                category: params.category.as_deref(),
            },
        );

        let ticket = Ticket {
            ticket_number: ticket_number.clone(),
            ticket_type: params.ticket_type,
            title: params.title,
            description: params.description,
            priority: params.priority,
            status: params.status.unwrap_or_default(),
            department: params.department,
            sub_department: params.sub_department,
            category: params.category,
            subcategory: params.subcategory,
            location: params.location,
            assignee_emp_id,
            assignee_name: None,
            reporter_email: params.reporter_email,
            reporter_name: params.reporter_name,
            expected_completion: params.expected_completion,
            created_at,
            details: params.details,
        };

        let mut all = self.tickets();
        all.insert(0, ticket.clone());
        self.set_tickets(&all)?;

        let mut draft = HistoryDraft::new(ActionType::Created, ticket.reporter_email.clone())
            .with_comment(format!("{} ticket created", ticket.ticket_type));
        draft.after = Some(json!({
            "status": ticket.status,
            "assigneeEmpID": &ticket.assignee_emp_id,
        }));
        self.add_history(&ticket_number, draft)?;

        tracing::info!(
            ticket = %ticket_number,
            assignee = ticket.assignee_emp_id.as_deref().unwrap_or("-"),
            "created ticket"
        );

        Ok(ticket)
    }

    /// Apply an update to a ticket and record one history entry per field
    /// whose value actually changed. The status field is tagged `Status`,
    /// everything else `Updated`. Unknown ticket numbers are an error.
    pub fn update_ticket(
        &self,
        ticket_number: &str,
        updates: TicketUpdate,
        actor_email: &str,
        comment: Option<String>,
    ) -> Result<Ticket> {
        let mut tickets = self.tickets();
        let idx = tickets
            .iter()
            .position(|t| t.ticket_number == ticket_number)
            .ok_or_else(|| SpotdeskError::TicketNotFound(ticket_number.to_string()))?;

        let before = tickets[idx].clone();
        let mut after = before.clone();
        let mut diffs: Vec<(&'static str, serde_json::Value, serde_json::Value)> = Vec::new();

        if let Some(title) = updates.title {
            if after.title != title {
                diffs.push(("title", json!(&before.title), json!(&title)));
                after.title = title;
            }
        }
        if let Some(description) = updates.description {
            if after.description.as_deref() != Some(description.as_str()) {
                diffs.push((
                    "description",
                    json!(&before.description),
                    json!(&description),
                ));
                after.description = Some(description);
            }
        }
        if let Some(priority) = updates.priority {
            if after.priority != priority {
                diffs.push(("priority", json!(before.priority), json!(priority)));
                after.priority = priority;
            }
        }
        if let Some(status) = updates.status {
            if after.status != status {
                diffs.push(("status", json!(before.status), json!(status)));
                after.status = status;
            }
        }
        if let Some(department) = updates.department {
            if after.department.as_deref() != Some(department.as_str()) {
                diffs.push(("department", json!(&before.department), json!(&department)));
                after.department = Some(department);
            }
        }
        if let Some(sub_department) = updates.sub_department {
            if after.sub_department.as_deref() != Some(sub_department.as_str()) {
                diffs.push((
                    "subDepartment",
                    json!(&before.sub_department),
                    json!(&sub_department),
                ));
                after.sub_department = Some(sub_department);
            }
        }
        if let Some(category) = updates.category {
            if after.category.as_deref() != Some(category.as_str()) {
                diffs.push(("category", json!(&before.category), json!(&category)));
                after.category = Some(category);
            }
        }
        if let Some(subcategory) = updates.subcategory {
            if after.subcategory.as_deref() != Some(subcategory.as_str()) {
                diffs.push((
                    "subcategory",
                    json!(&before.subcategory),
                    json!(&subcategory),
                ));
                after.subcategory = Some(subcategory);
            }
        }
        if let Some(location) = updates.location {
            if after.location.as_deref() != Some(location.as_str()) {
                diffs.push(("location", json!(&before.location), json!(&location)));
                after.location = Some(location);
            }
        }
        if let Some(assignee) = updates.assignee_emp_id {
            if after.assignee_emp_id != assignee {
                diffs.push((
                    "assigneeEmpID",
                    json!(&before.assignee_emp_id),
                    json!(&assignee),
                ));
                after.assignee_emp_id = assignee;
            }
        }
        if let Some(expected) = updates.expected_completion {
            if after.expected_completion != expected {
                diffs.push((
                    "expectedCompletion",
                    json!(before.expected_completion),
                    json!(expected),
                ));
                after.expected_completion = expected;
            }
        }

        // Updated ticket moves to the front of the list.
        tickets.remove(idx);
        tickets.insert(0, after.clone());
        self.set_tickets(&tickets)?;

        for (field, before_val, after_val) in diffs {
            let action = if field == "status" {
                ActionType::Status
            } else {
                ActionType::Updated
            };
            let mut draft =
                HistoryDraft::new(action, actor_email).with_diff(field, before_val, after_val);
            draft.comment = comment.clone();
            self.add_history(ticket_number, draft)?;
        }

        tracing::debug!(ticket = %ticket_number, actor = actor_email, "updated ticket");

        Ok(after)
    }

    /// Record an `IT Acknowledged` entry on a ticket without touching any
    /// of its fields.
    pub fn acknowledge(
        &self,
        ticket_number: &str,
        actor_email: &str,
        comment: Option<String>,
    ) -> Result<HistoryEntry> {
        if self.get_ticket(ticket_number).is_none() {
            return Err(SpotdeskError::TicketNotFound(ticket_number.to_string()));
        }

        let mut draft = HistoryDraft::new(ActionType::Acknowledged, actor_email);
        draft.comment = comment;
        self.add_history(ticket_number, draft)
    }

    /// Sweep Resolved tickets: any whose transition into Resolved (latest
    /// `Status` entry with after "Resolved", falling back to creation time)
    /// is at least [`AUTO_CLOSE_AFTER_DAYS`] old flips to Closed. Returns
    /// the numbers of the tickets closed.
    pub fn auto_close_resolved(&self) -> Result<Vec<String>> {
        let mut tickets = self.tickets();
        let now = Utc::now();
        let mut closed = Vec::new();

        for ticket in tickets.iter_mut() {
            if ticket.status != Status::Resolved {
                continue;
            }

            let resolved_at = self
                .history(&ticket.ticket_number)
                .into_iter()
                .find(|h| {
                    h.action_type == ActionType::Status
                        && h.after.as_ref().and_then(|v| v.as_str()) == Some("Resolved")
                })
                .map(|h| h.timestamp)
                .unwrap_or(ticket.created_at);

            if now - resolved_at >= Duration::days(AUTO_CLOSE_AFTER_DAYS) {
                ticket.status = Status::Closed;
                self.add_history(
                    &ticket.ticket_number,
                    HistoryDraft::new(ActionType::AutoClosed, SYSTEM_ACTOR).with_comment(format!(
                        "Auto-closed after {} days",
                        AUTO_CLOSE_AFTER_DAYS
                    )),
                )?;
                closed.push(ticket.ticket_number.clone());
            }
        }

        if !closed.is_empty() {
            self.set_tickets(&tickets)?;
            tracing::info!(count = closed.len(), "auto-closed resolved tickets");
        }

        Ok(closed)
    }

    // ----- History -----

    /// History entries for one ticket, newest first.
    pub fn history(&self, ticket_number: &str) -> Vec<HistoryEntry> {
        let all: BTreeMap<String, Vec<HistoryEntry>> = self.read_key(KEY_HISTORY, BTreeMap::new());
        all.get(ticket_number).cloned().unwrap_or_default()
    }

    pub fn set_history(&self, ticket_number: &str, entries: &[HistoryEntry]) -> Result<()> {
        let mut all: BTreeMap<String, Vec<HistoryEntry>> =
            self.read_key(KEY_HISTORY, BTreeMap::new());
        all.insert(ticket_number.to_string(), entries.to_vec());
        self.write_key(KEY_HISTORY, &all)
    }

    /// Assign an id and timestamp to a draft and prepend it to the
    /// ticket's history.
    pub fn add_history(&self, ticket_number: &str, draft: HistoryDraft) -> Result<HistoryEntry> {
        let mut all: BTreeMap<String, Vec<HistoryEntry>> =
            self.read_key(KEY_HISTORY, BTreeMap::new());

        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            ticket_number: ticket_number.to_string(),
            user_email: draft.user_email,
            action_type: draft.action_type,
            field: draft.field,
            before: draft.before,
            after: draft.after,
            comment: draft.comment,
            timestamp: Utc::now(),
        };

        all.entry(ticket_number.to_string())
            .or_default()
            .insert(0, entry.clone());
        self.write_key(KEY_HISTORY, &all)?;

        Ok(entry)
    }
}
