// src/scoring.rs
//! Best-match scoring for auto-assignment.
//!
//! Every active mapping is scored against the new ticket's classification
//! fields; the highest score wins, first-encountered on ties.

use crate::entity::{AssigneeMapping, TicketType};

/// Classification fields of a candidate ticket, as seen by the scorer.
#[derive(Debug, Clone)]
pub struct AssignmentInput<'a> {
    pub ticket_type: TicketType,
    pub department: Option<&'a str>,
    pub sub_department: Option<&'a str>,
    pub location: Option<&'a str>,
    pub category: Option<&'a str>,
}

/// Pick the employee id of the best-matching active mapping.
///
/// Returns `None` only when no active mappings exist: a mapping that
/// matches nothing still scores 0, which beats the -1 sentinel.
pub fn find_assignee(mappings: &[AssigneeMapping], input: &AssignmentInput) -> Option<String> {
    let mut best_score: i32 = -1;
    let mut best: Option<&AssigneeMapping> = None;

    for mapping in mappings.iter().filter(|m| m.is_display) {
        let score = score_mapping(mapping, input);
        // Strict greater-than keeps the first mapping on ties.
        if score > best_score {
            best_score = score;
            best = Some(mapping);
        }
    }

    best.map(|m| m.assignee_emp_id.clone())
}

fn score_mapping(mapping: &AssigneeMapping, input: &AssignmentInput) -> i32 {
    let mut score = 0;

    if mapping
        .ticket_type
        .eq_ignore_ascii_case(&input.ticket_type.to_string())
    {
        score += 2;
    }
    if input.department.is_some_and(|d| mapping.department == d) {
        score += 2;
    }
    if input.sub_department.is_some_and(|s| mapping.sub_dept == s) {
        score += 1;
    }
    if input.location.is_some_and(|l| mapping.emp_location == l) {
        score += 2;
    }
    if input
        .category
        .is_some_and(|c| mapping.task_label == c || mapping.sub_task == c)
    {
        score += 1;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(id: &str, ticket_type: &str, department: &str, location: &str) -> AssigneeMapping {
        AssigneeMapping {
            mapping_id: id.to_string(),
            emp_location: location.to_string(),
            department: department.to_string(),
            sub_dept: String::new(),
            sub_task: String::new(),
            task_label: String::new(),
            ticket_type: ticket_type.to_string(),
            assignee_emp_id: format!("{}@example.com", id),
            is_display: true,
        }
    }

    fn input<'a>(department: Option<&'a str>, location: Option<&'a str>) -> AssignmentInput<'a> {
        AssignmentInput {
            ticket_type: TicketType::It,
            department,
            sub_department: None,
            location,
            category: None,
        }
    }

    #[test]
    fn test_no_mappings_yields_no_assignee() {
        assert_eq!(find_assignee(&[], &input(None, None)), None);
    }

    #[test]
    fn test_stronger_match_beats_type_only_match() {
        // type + department + location = 6, type only = 2
        let maps = vec![
            mapping("weak", "IT", "Finance", "Plant A"),
            mapping("strong", "IT", "IT", "Head Office"),
        ];
        let chosen = find_assignee(&maps, &input(Some("IT"), Some("Head Office")));
        assert_eq!(chosen.as_deref(), Some("strong@example.com"));
    }

    #[test]
    fn test_tie_goes_to_first_mapping() {
        let maps = vec![
            mapping("first", "IT", "IT", "Head Office"),
            mapping("second", "IT", "IT", "Head Office"),
        ];
        let chosen = find_assignee(&maps, &input(Some("IT"), Some("Head Office")));
        assert_eq!(chosen.as_deref(), Some("first@example.com"));
    }

    #[test]
    fn test_type_match_is_case_insensitive() {
        let maps = vec![mapping("only", "it", "HR", "Plant A")];
        let chosen = find_assignee(&maps, &input(None, None));
        assert_eq!(chosen.as_deref(), Some("only@example.com"));
    }

    #[test]
    fn test_inactive_mappings_are_skipped() {
        let mut inactive = mapping("hidden", "IT", "IT", "Head Office");
        inactive.is_display = false;
        assert_eq!(
            find_assignee(&[inactive], &input(Some("IT"), Some("Head Office"))),
            None
        );
    }

    #[test]
    fn test_zero_score_mapping_still_wins_over_nothing() {
        // Matches no field at all, but beats the -1 sentinel.
        let maps = vec![mapping("fallback", "Vehicle", "Fleet", "Plant B")];
        let chosen = find_assignee(&maps, &input(None, None));
        assert_eq!(chosen.as_deref(), Some("fallback@example.com"));
    }

    #[test]
    fn test_category_matches_either_label_field() {
        let mut by_label = mapping("label", "Vehicle", "X", "Y");
        by_label.task_label = "Network".to_string();
        let mut by_subtask = mapping("subtask", "Vehicle", "X", "Y");
        by_subtask.sub_task = "Network".to_string();

        let inp = AssignmentInput {
            ticket_type: TicketType::It,
            department: None,
            sub_department: None,
            location: None,
            category: Some("Network"),
        };
        // Both score 1; first wins.
        let chosen = find_assignee(&[by_label, by_subtask], &inp);
        assert_eq!(chosen.as_deref(), Some("label@example.com"));
    }
}
