// src/entity/history.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionType {
    Created,
    Updated,
    Status,
    #[serde(rename = "IT Acknowledged")]
    Acknowledged,
    #[serde(rename = "Auto-closed")]
    AutoClosed,
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionType::Created => write!(f, "Created"),
            ActionType::Updated => write!(f, "Updated"),
            ActionType::Status => write!(f, "Status"),
            ActionType::Acknowledged => write!(f, "IT Acknowledged"),
            ActionType::AutoClosed => write!(f, "Auto-closed"),
        }
    }
}

/// One immutable audit record on a ticket: a field-level diff or a
/// lifecycle event. Entries are stored newest-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: Uuid,
    pub ticket_number: String,
    pub user_email: String,
    pub action_type: ActionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// History entry payload before the store assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct HistoryDraft {
    pub user_email: String,
    pub action_type: ActionType,
    pub field: Option<String>,
    pub before: Option<serde_json::Value>,
    pub after: Option<serde_json::Value>,
    pub comment: Option<String>,
}

impl HistoryDraft {
    pub fn new(action_type: ActionType, user_email: impl Into<String>) -> Self {
        Self {
            user_email: user_email.into(),
            action_type,
            field: None,
            before: None,
            after: None,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_diff(
        mut self,
        field: impl Into<String>,
        before: serde_json::Value,
        after: serde_json::Value,
    ) -> Self {
        self.field = Some(field.into());
        self.before = Some(before);
        self.after = Some(after);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_type_wire_format() {
        assert_eq!(
            serde_json::to_string(&ActionType::AutoClosed).unwrap(),
            "\"Auto-closed\""
        );
        assert_eq!(
            serde_json::to_string(&ActionType::Acknowledged).unwrap(),
            "\"IT Acknowledged\""
        );
        let back: ActionType = serde_json::from_str("\"Auto-closed\"").unwrap();
        assert_eq!(back, ActionType::AutoClosed);
    }
}
