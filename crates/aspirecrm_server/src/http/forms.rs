//! Declared form schemas per entity.
//!
//! # Responsibility
//! - Give every create endpoint a statically declared field set with
//!   explicit required/optional annotations.
//!
//! # Invariants
//! - A missing required field is a reported `MissingField` failure,
//!   never a crashed request.
//! - Field values pass through verbatim; no trimming or normalization
//!   happens outside the login path.

use crate::http::error::ApiError;
use aspirecrm_core::{NewCompany, NewContact, NewProgram, NewTask};
use serde::Deserialize;

fn require(value: Option<String>, field: &'static str) -> Result<String, ApiError> {
    value.ok_or(ApiError::MissingField(field))
}

/// Login form. Both fields are required.
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl LoginForm {
    pub fn into_credentials(self) -> Result<(String, String), ApiError> {
        Ok((
            require(self.username, "username")?,
            require(self.password, "password")?,
        ))
    }
}

/// Contact create form. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub program: Option<String>,
}

impl ContactForm {
    pub fn into_draft(self) -> Result<NewContact, ApiError> {
        Ok(NewContact {
            name: self.name,
            email: self.email,
            phone: self.phone,
            role: self.role,
            program: self.program,
        })
    }
}

/// Company create form. `name` is required.
#[derive(Debug, Default, Deserialize)]
pub struct CompanyForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub contribution: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl CompanyForm {
    pub fn into_draft(self) -> Result<NewCompany, ApiError> {
        Ok(NewCompany {
            name: require(self.name, "name")?,
            kind: self.kind,
            contact_person: self.contact_person,
            email: self.email,
            phone: self.phone,
            location: self.location,
            role: self.role,
            status: self.status,
            contribution: self.contribution,
            notes: self.notes,
        })
    }
}

/// Program create form. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct ProgramForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl ProgramForm {
    pub fn into_draft(self) -> Result<NewProgram, ApiError> {
        Ok(NewProgram {
            name: self.name,
            status: self.status,
        })
    }
}

/// Task create form. Every field is optional.
#[derive(Debug, Default, Deserialize)]
pub struct TaskForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl TaskForm {
    pub fn into_draft(self) -> Result<NewTask, ApiError> {
        Ok(NewTask {
            title: self.title,
            assigned_to: self.assigned_to,
            status: self.status,
        })
    }
}
