//! Contact model: mentees, mentors, and other program participants.

use crate::model::RecordId;
use serde::{Deserialize, Serialize};

/// Stored contact. All descriptive fields are optional free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: RecordId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    /// Free-text program label; intentionally not linked to `Program` rows.
    pub program: Option<String>,
}

/// Creation draft for a contact. No field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub program: Option<String>,
}
