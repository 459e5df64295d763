// src/seed.rs
//! Default master data, loaded into any list that is still empty.

use crate::entity::{AssigneeMapping, Category, Company, HodMapping, Location, Subcategory};
use crate::error::Result;
use crate::storage::JsonStore;

/// Seed master data defaults. Each list is filled only if currently empty,
/// so re-running is harmless. Returns true if anything was written.
pub fn seed_defaults(store: &JsonStore) -> Result<bool> {
    let mut seeded = false;

    if store.companies().is_empty() {
        store.set_companies(&[
            company("PEL", "PEL", "Premier Enterprises Ltd"),
            company("TECH", "TechCorp", "Technology Corporation Ltd."),
        ])?;
        seeded = true;
    }

    if store.locations().is_empty() {
        store.set_locations(&[
            location("LOC001", "PEL", "Head Office"),
            location("LOC002", "PEL", "Plant A"),
            location("LOC003", "PEL", "Warehouse"),
        ])?;
        seeded = true;
    }

    if store.categories().is_empty() {
        store.set_categories(&[
            category("CAT001", "Hardware"),
            category("CAT002", "Software"),
            category("CAT003", "Network"),
        ])?;
        seeded = true;
    }

    if store.subcategories().is_empty() {
        store.set_subcategories(&[
            subcategory("SUB001", "CAT001", "Laptop"),
            subcategory("SUB002", "CAT001", "Printer"),
            subcategory("SUB003", "CAT002", "Installation"),
            subcategory("SUB004", "CAT003", "Connectivity"),
        ])?;
        seeded = true;
    }

    if store.assignee_mappings().is_empty() {
        store.set_assignee_mappings(&[
            AssigneeMapping {
                mapping_id: "MAP001".to_string(),
                emp_location: "Head Office".to_string(),
                department: "IT".to_string(),
                sub_dept: "Network".to_string(),
                sub_task: "Connectivity".to_string(),
                task_label: "Network".to_string(),
                ticket_type: "IT".to_string(),
                assignee_emp_id: "it@pel.com".to_string(),
                is_display: true,
            },
            AssigneeMapping {
                mapping_id: "MAP002".to_string(),
                emp_location: "Plant A".to_string(),
                department: "Administration".to_string(),
                sub_dept: "Transport".to_string(),
                sub_task: "Vehicle".to_string(),
                task_label: "Vehicle".to_string(),
                ticket_type: "Vehicle".to_string(),
                assignee_emp_id: "fleet@pel.com".to_string(),
                is_display: true,
            },
            AssigneeMapping {
                mapping_id: "MAP003".to_string(),
                emp_location: "Head Office".to_string(),
                department: "Administration".to_string(),
                sub_dept: "Services".to_string(),
                sub_task: "General".to_string(),
                task_label: "Admin Service".to_string(),
                ticket_type: "Admin".to_string(),
                assignee_emp_id: "admin@pel.com".to_string(),
                is_display: true,
            },
        ])?;
        seeded = true;
    }

    if store.hod_mappings().is_empty() {
        store.set_hod_mappings(&[
            hod("1", "IT", "Network", "EMP001", "John Smith"),
            hod("2", "IT", "Software", "EMP002", "Jane Doe"),
            hod("3", "HR", "Recruitment", "EMP003", "Mike Johnson"),
            hod("4", "Finance", "Accounting", "EMP004", "Sarah Wilson"),
        ])?;
        seeded = true;
    }

    Ok(seeded)
}

fn company(code: &str, short_name: &str, name: &str) -> Company {
    Company {
        company_code: code.to_string(),
        company_short_name: short_name.to_string(),
        company_name: name.to_string(),
    }
}

fn location(id: &str, company_code: &str, name: &str) -> Location {
    Location {
        location_id: id.to_string(),
        company_code: company_code.to_string(),
        location_name: name.to_string(),
    }
}

fn category(id: &str, name: &str) -> Category {
    Category {
        category_id: id.to_string(),
        category_name: name.to_string(),
    }
}

fn subcategory(id: &str, category_id: &str, name: &str) -> Subcategory {
    Subcategory {
        subcategory_id: id.to_string(),
        category_id: category_id.to_string(),
        subcategory_name: name.to_string(),
    }
}

fn hod(id: &str, dept: &str, sub_dept: &str, hod_id: &str, hod_name: &str) -> HodMapping {
    HodMapping {
        id: id.to_string(),
        dept: dept.to_string(),
        sub_dept: sub_dept.to_string(),
        hod_id: hod_id.to_string(),
        hod_name: hod_name.to_string(),
    }
}
