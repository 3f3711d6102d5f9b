//! Program model.

use crate::model::RecordId;
use serde::{Deserialize, Serialize};

/// Stored program.
///
/// `status` is a free-text label; the UI treats Pending / Active /
/// Completed as canonical but the store does not constrain it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: RecordId,
    pub name: Option<String>,
    pub status: Option<String>,
}

/// Creation draft for a program. No field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProgram {
    pub name: Option<String>,
    pub status: Option<String>,
}
