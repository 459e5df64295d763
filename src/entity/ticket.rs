// src/entity/ticket.rs
use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketType {
    #[serde(rename = "IT")]
    It,
    Vehicle,
    Admin,
}

impl std::fmt::Display for TicketType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TicketType::It => write!(f, "IT"),
            TicketType::Vehicle => write!(f, "Vehicle"),
            TicketType::Admin => write!(f, "Admin"),
        }
    }
}

impl std::str::FromStr for TicketType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "it" => Ok(TicketType::It),
            "vehicle" => Ok(TicketType::Vehicle),
            "admin" => Ok(TicketType::Admin),
            _ => Err(format!("Invalid ticket type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
            Priority::Critical => write!(f, "Critical"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            _ => Err(format!("Invalid priority: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Closed,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Open => write!(f, "Open"),
            Status::InProgress => write!(f, "In Progress"),
            Status::Resolved => write!(f, "Resolved"),
            Status::Closed => write!(f, "Closed"),
        }
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '-'], "_").as_str() {
            "open" => Ok(Status::Open),
            "in_progress" | "inprogress" => Ok(Status::InProgress),
            "resolved" => Ok(Status::Resolved),
            "closed" => Ok(Status::Closed),
            _ => Err(format!("Invalid status: {}", s)),
        }
    }
}

/// A tracked unit of work. Never physically deleted; terminal state is Closed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub ticket_number: String,
    #[serde(rename = "type")]
    pub ticket_type: TicketType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "assigneeEmpID", default, skip_serializing_if = "Option::is_none")]
    pub assignee_emp_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_name: Option<String>,
    pub reporter_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_completion: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    /// Extra form-specific fields (vehicle requisitions, admin service requests).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub details: BTreeMap<String, serde_json::Value>,
}

/// Parameters for creating a ticket. Number, assignee, and creation
/// timestamp are filled in by the store.
#[derive(Debug, Clone)]
pub struct NewTicket {
    pub ticket_type: TicketType,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub status: Option<Status>, // defaults to Open
    pub department: Option<String>,
    pub sub_department: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub location: Option<String>,
    pub reporter_email: String,
    pub reporter_name: Option<String>,
    pub expected_completion: Option<NaiveDate>,
    pub details: BTreeMap<String, serde_json::Value>,
}

impl NewTicket {
    pub fn new(ticket_type: TicketType, title: String, reporter_email: String) -> Self {
        Self {
            ticket_type,
            title,
            description: None,
            priority: Priority::default(),
            status: None,
            department: None,
            sub_department: None,
            category: None,
            subcategory: None,
            location: None,
            reporter_email,
            reporter_name: None,
            expected_completion: None,
            details: BTreeMap::new(),
        }
    }
}
