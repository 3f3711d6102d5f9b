//! Partner company model.

use crate::model::RecordId;
use serde::{Deserialize, Serialize};

/// Stored partner company. `name` is the only required field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: RecordId,
    pub name: String,
    /// Corporate / NGO / Govt (free text, not constrained).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    /// Sponsor / Partner / Hiring Partner (free text).
    pub role: Option<String>,
    /// Active / Inactive (free text).
    pub status: Option<String>,
    /// Money / Venue / Mentorship (free text).
    pub contribution: Option<String>,
    pub notes: Option<String>,
}

/// Creation draft for a partner company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCompany {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub contribution: Option<String>,
    pub notes: Option<String>,
}
