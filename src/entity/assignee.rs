// src/entity/assignee.rs
use serde::{Deserialize, Serialize};

/// Scoring rule for auto-assignment. Read-only at ticket-creation time;
/// rows with `is_display` false are skipped by the scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssigneeMapping {
    #[serde(rename = "mappingID")]
    pub mapping_id: String,
    pub emp_location: String,
    pub department: String,
    pub sub_dept: String,
    pub sub_task: String,
    pub task_label: String,
    pub ticket_type: String,
    #[serde(rename = "assigneeEmpID")]
    pub assignee_emp_id: String,
    pub is_display: bool,
}
