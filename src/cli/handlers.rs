use std::env;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::entity::{NewTicket, Priority, Status, Ticket, TicketType};
use crate::entity::{AssigneeMapping, Category, Company, HodMapping, Location, Subcategory};
use crate::error::{Result, SpotdeskError};
use crate::storage::{JsonStore, TicketUpdate};
use crate::{report, seed, snapshot};

/// Find the project root by looking for .spotdesk/ or .git/
fn find_project_root() -> PathBuf {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut current = cwd.as_path();
    loop {
        if current.join(".spotdesk").exists() || current.join(".git").exists() {
            return current.to_path_buf();
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return cwd,
        }
    }
}

/// Acting user email: explicit flag, then SPOTDESK_ACTOR, then the
/// anonymous default.
fn actor_email(explicit: Option<String>) -> String {
    explicit
        .or_else(|| env::var("SPOTDESK_ACTOR").ok())
        .unwrap_or_else(|| "user@spot".to_string())
}

/// Parse a detail string in format "key=value"
fn parse_detail_string(s: &str) -> Result<(String, serde_json::Value)> {
    let parts: Vec<&str> = s.splitn(2, '=').collect();
    if parts.len() != 2 || parts[0].is_empty() {
        return Err(SpotdeskError::Storage(format!(
            "Invalid detail format '{}'. Expected 'key=value'",
            s
        )));
    }
    Ok((
        parts[0].to_string(),
        serde_json::Value::String(parts[1].to_string()),
    ))
}

pub fn handle_init() -> Result<()> {
    let root = env::current_dir()?;

    let _store = JsonStore::init(&root)?;

    println!("Initialized spotdesk project in {}", root.display());

    Ok(())
}

pub fn handle_seed() -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    if seed::seed_defaults(&store)? {
        println!("Seeded default master data.");
    } else {
        println!("Master data already present, nothing seeded.");
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn handle_create(
    ticket_type: String,
    title: String,
    priority: String,
    description: Option<String>,
    department: Option<String>,
    sub_department: Option<String>,
    category: Option<String>,
    subcategory: Option<String>,
    location: Option<String>,
    reporter: Option<String>,
    expected: Option<String>,
    details: Vec<String>,
    stdin: bool,
    json: bool,
) -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    let ticket_type: TicketType = ticket_type
        .parse()
        .map_err(|_| SpotdeskError::InvalidTicketType(ticket_type))?;

    let mut params = NewTicket::new(ticket_type, title, actor_email(reporter));
    params.priority = priority.parse().unwrap_or_default();
    params.description = description;
    params.department = department;
    params.sub_department = sub_department;
    params.category = category;
    params.subcategory = subcategory;
    params.location = location;
    params.expected_completion =
        expected.and_then(|d| chrono::NaiveDate::parse_from_str(&d, "%Y-%m-%d").ok());

    if stdin {
        if atty::is(atty::Stream::Stdin) {
            return Err(SpotdeskError::Storage(
                "stdin is a terminal; pipe the description or use --description".to_string(),
            ));
        }
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        if !content.is_empty() {
            params.description = Some(content);
        }
    }

    for detail in &details {
        let (key, value) = parse_detail_string(detail)?;
        params.details.insert(key, value);
    }

    let ticket = store.create_ticket(params)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ticket)?);
    } else {
        println!(
            "Created ticket {} ({}) - {}",
            ticket.ticket_number, ticket.ticket_type, ticket.title
        );
        match &ticket.assignee_emp_id {
            Some(assignee) => println!("  Assigned to {}", assignee),
            None => println!("  Unassigned (no matching mapping)"),
        }
    }

    Ok(())
}

fn format_ticket_line(t: &Ticket) -> String {
    format!(
        "  {} [{}|{}|{}] {} -> {}",
        t.ticket_number,
        t.ticket_type,
        t.priority,
        t.status,
        t.title,
        t.assignee_emp_id.as_deref().unwrap_or("unassigned")
    )
}

pub fn handle_list(status: Option<String>, ticket_type: Option<String>, json: bool) -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    let status_filter: Option<Status> = status.and_then(|s| s.parse().ok());
    let type_filter: Option<TicketType> = ticket_type.and_then(|s| s.parse().ok());

    let tickets: Vec<Ticket> = store
        .tickets()
        .into_iter()
        .filter(|t| status_filter.map_or(true, |s| t.status == s))
        .filter(|t| type_filter.map_or(true, |ty| t.ticket_type == ty))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&tickets)?);
    } else if tickets.is_empty() {
        println!("No tickets found.");
    } else {
        println!("Tickets:\n");
        for t in &tickets {
            println!("{}", format_ticket_line(t));
        }
    }

    Ok(())
}

pub fn handle_show(ticket_number: String, json: bool) -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    // Opportunistic sweep, the way the detail view always ran it.
    store.auto_close_resolved()?;

    let ticket = store
        .get_ticket(&ticket_number)
        .ok_or_else(|| SpotdeskError::TicketNotFound(ticket_number.clone()))?;
    let history = store.history(&ticket_number);

    if json {
        let combined = serde_json::json!({ "ticket": ticket, "history": history });
        println!("{}", serde_json::to_string_pretty(&combined)?);
        return Ok(());
    }

    println!("Ticket {}", ticket.ticket_number);
    println!("Title: {}", ticket.title);
    println!(
        "Type: {}  Priority: {}  Status: {}",
        ticket.ticket_type, ticket.priority, ticket.status
    );
    if let Some(ref department) = ticket.department {
        println!("Department: {}", department);
    }
    if let Some(ref sub_department) = ticket.sub_department {
        println!("Sub-department: {}", sub_department);
    }
    if let Some(ref category) = ticket.category {
        println!("Category: {}", category);
    }
    if let Some(ref location) = ticket.location {
        println!("Location: {}", location);
    }
    println!("Reporter: {}", ticket.reporter_email);
    if let Some(ref assignee) = ticket.assignee_emp_id {
        println!("Assignee: {}", assignee);
    }
    println!("Created: {}", ticket.created_at.format("%Y-%m-%d %H:%M"));
    if let Some(expected) = ticket.expected_completion {
        println!("Expected completion: {}", expected);
    }
    if let Some(ref description) = ticket.description {
        println!("\n{}", description);
    }
    if !ticket.details.is_empty() {
        println!("\nDetails:");
        for (key, value) in &ticket.details {
            println!("  {}: {}", key, value);
        }
    }

    if !history.is_empty() {
        println!("\nHistory:");
        for entry in &history {
            print_history_entry(entry);
        }
    }

    Ok(())
}

fn print_history_entry(entry: &crate::entity::HistoryEntry) {
    let mut line = format!(
        "  {} [{}] {}",
        entry.timestamp.format("%Y-%m-%d %H:%M"),
        entry.action_type,
        entry.user_email
    );
    if let Some(ref field) = entry.field {
        line.push_str(&format!(
            " {}: {} -> {}",
            field,
            entry
                .before
                .as_ref()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string()),
            entry
                .after
                .as_ref()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string()),
        ));
    }
    if let Some(ref comment) = entry.comment {
        line.push_str(&format!(" ({})", comment));
    }
    println!("{}", line);
}

#[allow(clippy::too_many_arguments)]
pub fn handle_update(
    ticket_number: String,
    title: Option<String>,
    status: Option<String>,
    priority: Option<String>,
    assignee: Option<String>,
    expected: Option<String>,
    actor: Option<String>,
    comment: Option<String>,
    json: bool,
) -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    let mut updates = TicketUpdate {
        title,
        ..Default::default()
    };

    if let Some(s) = status {
        updates.status = Some(s.parse::<Status>().map_err(SpotdeskError::Storage)?);
    }
    if let Some(p) = priority {
        updates.priority = Some(p.parse::<Priority>().map_err(SpotdeskError::Storage)?);
    }
    if let Some(a) = assignee {
        updates.assignee_emp_id = Some(if a.is_empty() { None } else { Some(a) });
    }
    if let Some(e) = expected {
        updates.expected_completion = if e.is_empty() {
            Some(None)
        } else {
            let date = chrono::NaiveDate::parse_from_str(&e, "%Y-%m-%d")
                .map_err(|_| SpotdeskError::Storage(format!("Invalid date: {}", e)))?;
            Some(Some(date))
        };
    }

    let ticket = store.update_ticket(&ticket_number, updates, &actor_email(actor), comment)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ticket)?);
    } else {
        println!(
            "Updated ticket {} [{}|{}] - {}",
            ticket.ticket_number, ticket.priority, ticket.status, ticket.title
        );
    }

    Ok(())
}

pub fn handle_ack(
    ticket_number: String,
    actor: Option<String>,
    comment: Option<String>,
) -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    store.acknowledge(&ticket_number, &actor_email(actor), comment)?;
    println!("Acknowledged ticket {}", ticket_number);

    Ok(())
}

pub fn handle_history(ticket_number: String, json: bool) -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    if store.get_ticket(&ticket_number).is_none() {
        return Err(SpotdeskError::TicketNotFound(ticket_number));
    }

    let history = store.history(&ticket_number);

    if json {
        println!("{}", serde_json::to_string_pretty(&history)?);
    } else if history.is_empty() {
        println!("No history for {}.", ticket_number);
    } else {
        println!("History for {}:\n", ticket_number);
        for entry in &history {
            print_history_entry(entry);
        }
    }

    Ok(())
}

pub fn handle_autoclose(json: bool) -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    let closed = store.auto_close_resolved()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&closed)?);
    } else if closed.is_empty() {
        println!("No tickets to close.");
    } else {
        for number in &closed {
            println!("Closed {}", number);
        }
    }

    Ok(())
}

pub fn handle_stats(json: bool) -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    let stats = report::ticket_stats(&store.tickets());

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", report::format_stats(&stats));
    }

    Ok(())
}

pub fn handle_snapshot() -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    let snapshot_dir = store.data_dir().join("snapshot");
    let stats = snapshot::generate_snapshot(&store, &snapshot_dir)?;

    println!(
        "Snapshot written to {} ({} tickets, {} files)",
        snapshot_dir.display(),
        stats.total_tickets(),
        stats.files_generated.len()
    );

    Ok(())
}

pub fn handle_master_list(kind: String, json: bool) -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    match kind.as_str() {
        "companies" => {
            let companies = store.companies();
            if json {
                println!("{}", serde_json::to_string_pretty(&companies)?);
            } else if companies.is_empty() {
                println!("No companies found.");
            } else {
                println!("Companies:\n");
                for c in companies {
                    println!("  {} ({}) {}", c.company_code, c.company_short_name, c.company_name);
                }
            }
        }
        "locations" => {
            let locations = store.locations();
            if json {
                println!("{}", serde_json::to_string_pretty(&locations)?);
            } else if locations.is_empty() {
                println!("No locations found.");
            } else {
                println!("Locations:\n");
                for l in locations {
                    println!("  {} [{}] {}", l.location_id, l.company_code, l.location_name);
                }
            }
        }
        "categories" => {
            let categories = store.categories();
            if json {
                println!("{}", serde_json::to_string_pretty(&categories)?);
            } else if categories.is_empty() {
                println!("No categories found.");
            } else {
                println!("Categories:\n");
                for c in categories {
                    println!("  {} {}", c.category_id, c.category_name);
                }
            }
        }
        "subcategories" => {
            let subcategories = store.subcategories();
            if json {
                println!("{}", serde_json::to_string_pretty(&subcategories)?);
            } else if subcategories.is_empty() {
                println!("No subcategories found.");
            } else {
                println!("Subcategories:\n");
                for s in subcategories {
                    println!("  {} [{}] {}", s.subcategory_id, s.category_id, s.subcategory_name);
                }
            }
        }
        "assignees" => {
            let mappings = store.assignee_mappings();
            if json {
                println!("{}", serde_json::to_string_pretty(&mappings)?);
            } else if mappings.is_empty() {
                println!("No assignee mappings found.");
            } else {
                println!("Assignee mappings:\n");
                for m in mappings {
                    let state = if m.is_display { "" } else { " (hidden)" };
                    println!(
                        "  {} [{}] {}/{} @ {} -> {}{}",
                        m.mapping_id,
                        m.ticket_type,
                        m.department,
                        m.sub_dept,
                        m.emp_location,
                        m.assignee_emp_id,
                        state
                    );
                }
            }
        }
        "hods" => {
            let hods = store.hod_mappings();
            if json {
                println!("{}", serde_json::to_string_pretty(&hods)?);
            } else if hods.is_empty() {
                println!("No HOD mappings found.");
            } else {
                println!("HOD mappings:\n");
                for h in hods {
                    println!("  {} {}/{} -> {} ({})", h.id, h.dept, h.sub_dept, h.hod_id, h.hod_name);
                }
            }
        }
        _ => {
            eprintln!(
                "Unknown master kind '{}'. Valid kinds: companies, locations, categories, subcategories, assignees, hods",
                kind
            );
        }
    }

    Ok(())
}

pub fn handle_master_add_company(code: String, short_name: String, name: String) -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    let mut companies = store.companies();
    companies.push(Company {
        company_code: code.clone(),
        company_short_name: short_name,
        company_name: name,
    });
    store.set_companies(&companies)?;

    println!("Added company {}", code);
    Ok(())
}

pub fn handle_master_add_location(id: String, company_code: String, name: String) -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    let mut locations = store.locations();
    locations.push(Location {
        location_id: id.clone(),
        company_code,
        location_name: name,
    });
    store.set_locations(&locations)?;

    println!("Added location {}", id);
    Ok(())
}

pub fn handle_master_add_category(id: String, name: String) -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    let mut categories = store.categories();
    categories.push(Category {
        category_id: id.clone(),
        category_name: name,
    });
    store.set_categories(&categories)?;

    println!("Added category {}", id);
    Ok(())
}

pub fn handle_master_add_subcategory(id: String, category_id: String, name: String) -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    let mut subcategories = store.subcategories();
    subcategories.push(Subcategory {
        subcategory_id: id.clone(),
        category_id,
        subcategory_name: name,
    });
    store.set_subcategories(&subcategories)?;

    println!("Added subcategory {}", id);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn handle_master_add_assignee(
    mapping_id: String,
    assignee: String,
    ticket_type: String,
    location: String,
    department: String,
    sub_dept: String,
    sub_task: String,
    task_label: String,
    hidden: bool,
) -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    let mut mappings = store.assignee_mappings();
    mappings.push(AssigneeMapping {
        mapping_id: mapping_id.clone(),
        emp_location: location,
        department,
        sub_dept,
        sub_task,
        task_label,
        ticket_type,
        assignee_emp_id: assignee,
        is_display: !hidden,
    });
    store.set_assignee_mappings(&mappings)?;

    println!("Added assignee mapping {}", mapping_id);
    Ok(())
}

pub fn handle_master_add_hod(
    id: String,
    dept: String,
    sub_dept: String,
    hod_id: String,
    hod_name: String,
) -> Result<()> {
    let root = find_project_root();
    let store = JsonStore::open(&root)?;

    let mut hods = store.hod_mappings();
    hods.push(HodMapping {
        id: id.clone(),
        dept,
        sub_dept,
        hod_id,
        hod_name,
    });
    store.set_hod_mappings(&hods)?;

    println!("Added HOD mapping {}", id);
    Ok(())
}
