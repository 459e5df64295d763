use std::process::Command;

use chrono::{Duration, Utc};
use spotdesk::entity::ActionType;
use spotdesk::JsonStore;
use tempfile::TempDir;

fn spotdesk_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_spotdesk"))
}

#[test]
fn test_init_creates_spotdesk_directory() {
    let tmp = TempDir::new().unwrap();

    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["init"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(tmp.path().join(".spotdesk").exists());
    assert!(tmp.path().join(".spotdesk/counter.json").exists());
    assert!(tmp.path().join(".spotdesk/tickets.json").exists());
}

#[test]
fn test_init_twice_fails() {
    let tmp = TempDir::new().unwrap();

    spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["init"])
        .output()
        .unwrap();

    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["init"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Already initialized"));
}

#[test]
fn test_create_without_init_fails() {
    let tmp = TempDir::new().unwrap();

    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["create", "it", "Test"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not in a spotdesk project"));
}

#[test]
fn test_full_ticket_workflow() {
    let tmp = TempDir::new().unwrap();

    // Init and seed master data
    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["init"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["seed"])
        .output()
        .unwrap();
    assert!(output.status.success());

    // Create a ticket that matches the seeded IT mapping
    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args([
            "create",
            "it",
            "VPN down",
            "--priority=high",
            "--department=IT",
            "--location=Head Office",
            "--category=Network",
            "--reporter=alice@pel.com",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("-0001"));
    assert!(stdout.contains("VPN down"));
    assert!(stdout.contains("Assigned to it@pel.com"));

    // Second ticket gets the next sequence number
    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["create", "vehicle", "Car for plant visit"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("-0002"));

    // List shows both
    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["list"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("VPN down"));
    assert!(stdout.contains("Car for plant visit"));

    let ticket_number = format!("TK-{}-0001", Utc::now().format("%Y"));

    // Show has status and the Created audit entry
    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["show", &ticket_number])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Status: Open"));
    assert!(stdout.contains("Created"));
    assert!(stdout.contains("alice@pel.com"));

    // Update status, then verify the Status history entry
    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args([
            "update",
            &ticket_number,
            "--status=in-progress",
            "--actor=it@pel.com",
            "--comment=working on it",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("In Progress"));

    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["history", &ticket_number])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[Status]"));
    assert!(stdout.contains("working on it"));
}

#[test]
fn test_list_json_output() {
    let tmp = TempDir::new().unwrap();

    spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["init"])
        .output()
        .unwrap();

    spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["create", "admin", "New chair"])
        .output()
        .unwrap();

    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["list", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(parsed.is_array());
    assert_eq!(parsed.as_array().unwrap().len(), 1);
    assert_eq!(parsed[0]["type"], "Admin");
    assert_eq!(parsed[0]["status"], "Open");
}

#[test]
fn test_update_unknown_ticket_fails() {
    let tmp = TempDir::new().unwrap();

    spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["init"])
        .output()
        .unwrap();

    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["update", "TK-1999-0042", "--status=closed"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Ticket not found"));
}

#[test]
fn test_seed_and_master_list() {
    let tmp = TempDir::new().unwrap();

    spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["init"])
        .output()
        .unwrap();

    spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["seed"])
        .output()
        .unwrap();

    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["master", "list", "assignees"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("it@pel.com"));
    assert!(stdout.contains("fleet@pel.com"));

    // Seeding again changes nothing
    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["seed"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("nothing seeded"));
}

#[test]
fn test_master_add_assignee_drives_assignment() {
    let tmp = TempDir::new().unwrap();

    spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["init"])
        .output()
        .unwrap();

    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args([
            "master",
            "add-assignee",
            "MAP-X",
            "desk@example.com",
            "--type=it",
            "--department=IT",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["create", "it", "Mouse broken", "--department=IT"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Assigned to desk@example.com"));
}

#[test]
fn test_autoclose_flips_old_resolved_tickets() {
    let tmp = TempDir::new().unwrap();

    spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["init"])
        .output()
        .unwrap();

    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["create", "it", "Old issue"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let ticket_number = format!("TK-{}-0001", Utc::now().format("%Y"));

    spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["update", &ticket_number, "--status=resolved"])
        .output()
        .unwrap();

    // Age the resolution entry past the threshold through the library.
    let store = JsonStore::open(tmp.path()).unwrap();
    let mut entries = store.history(&ticket_number);
    for entry in entries.iter_mut() {
        if entry.action_type == ActionType::Status {
            entry.timestamp = Utc::now() - Duration::days(6);
        }
    }
    store.set_history(&ticket_number, &entries).unwrap();

    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["autoclose"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(&format!("Closed {}", ticket_number)));

    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["show", &ticket_number])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Status: Closed"));
    assert!(stdout.contains("Auto-closed"));
}

#[test]
fn test_autoclose_leaves_fresh_resolved_tickets() {
    let tmp = TempDir::new().unwrap();

    spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["init"])
        .output()
        .unwrap();

    spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["create", "it", "Fresh issue"])
        .output()
        .unwrap();

    let ticket_number = format!("TK-{}-0001", Utc::now().format("%Y"));

    spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["update", &ticket_number, "--status=resolved"])
        .output()
        .unwrap();

    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["autoclose"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No tickets to close"));
}

#[test]
fn test_stats_counts_statuses() {
    let tmp = TempDir::new().unwrap();

    spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["init"])
        .output()
        .unwrap();

    spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["create", "it", "One", "--priority=critical"])
        .output()
        .unwrap();
    spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["create", "admin", "Two"])
        .output()
        .unwrap();

    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["stats", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["total"], 2);
    assert_eq!(parsed["open"], 2);
    assert_eq!(parsed["by_priority"]["Critical"], 1);
    assert_eq!(parsed["by_type"]["IT"], 1);
}

#[test]
fn test_snapshot_writes_markdown_views() {
    let tmp = TempDir::new().unwrap();

    spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["init"])
        .output()
        .unwrap();

    spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["create", "it", "Snapshot me"])
        .output()
        .unwrap();

    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["snapshot"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let active = tmp.path().join(".spotdesk/snapshot/tickets/active.md");
    assert!(active.exists());
    let content = std::fs::read_to_string(active).unwrap();
    assert!(content.contains("Snapshot me"));
    assert!(tmp.path().join(".spotdesk/snapshot/README.md").exists());
}

#[test]
fn test_ack_records_acknowledgement() {
    let tmp = TempDir::new().unwrap();

    spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["init"])
        .output()
        .unwrap();

    spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["create", "it", "Ack me"])
        .output()
        .unwrap();

    let ticket_number = format!("TK-{}-0001", Utc::now().format("%Y"));

    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["ack", &ticket_number, "--actor=it@pel.com"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = spotdesk_cmd()
        .current_dir(tmp.path())
        .args(["history", &ticket_number])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("IT Acknowledged"));
}
