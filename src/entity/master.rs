// src/entity/master.rs
//! Master data records: the lookup tables ticket forms draw from.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub company_code: String,
    pub company_short_name: String,
    pub company_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(rename = "locationID")]
    pub location_id: String,
    pub company_code: String,
    pub location_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "categoryID")]
    pub category_id: String,
    pub category_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    #[serde(rename = "subcategoryID")]
    pub subcategory_id: String,
    #[serde(rename = "categoryID")]
    pub category_id: String,
    pub subcategory_name: String,
}

/// Head-of-department mapping, used for escalation lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HodMapping {
    pub id: String,
    pub dept: String,
    pub sub_dept: String,
    #[serde(rename = "hodID")]
    pub hod_id: String,
    pub hod_name: String,
}
