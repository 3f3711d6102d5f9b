//! Task model.

use crate::model::RecordId;
use serde::{Deserialize, Serialize};

/// Stored task.
///
/// `assigned_to` is free text and intentionally not linked to `Contact`
/// rows. `status` is free text; the UI treats Pending / In Progress /
/// Done as canonical.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: RecordId,
    pub title: Option<String>,
    pub assigned_to: Option<String>,
    pub status: Option<String>,
}

/// Creation draft for a task. No field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: Option<String>,
    pub assigned_to: Option<String>,
    pub status: Option<String>,
}
