//! First-start demonstration data.
//!
//! # Responsibility
//! - Populate empty tables with fixed demo rows before the first request.
//!
//! # Invariants
//! - A table is seeded if and only if it is currently empty.
//! - Re-running against a populated table inserts nothing and removes
//!   nothing; seeding is idempotent across restarts.
//! - The admin credential is stored hashed, never as plaintext.

use crate::model::company::{Company, NewCompany};
use crate::model::contact::{Contact, NewContact};
use crate::model::program::{NewProgram, Program};
use crate::model::task::{NewTask, Task};
use crate::model::user::{NewUser, User};
use crate::repo::entity_repo::{EntityRecord, RepoError, RepoResult, SqliteEntityRepository};
use crate::service::password::{hash_password, PasswordHashError};
use log::info;
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Username and password of the demonstration admin account.
pub const SEED_ADMIN_USERNAME: &str = "admin";
pub const SEED_ADMIN_PASSWORD: &str = "admin";

#[derive(Debug)]
pub enum SeedError {
    Repo(RepoError),
    Password(PasswordHashError),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Password(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Password(err) => Some(err),
        }
    }
}

impl From<RepoError> for SeedError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<PasswordHashError> for SeedError {
    fn from(value: PasswordHashError) -> Self {
        Self::Password(value)
    }
}

/// Rows inserted per table by one seeding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub contacts: usize,
    pub companies: usize,
    pub programs: usize,
    pub tasks: usize,
}

impl SeedReport {
    /// Total rows inserted by this pass.
    pub fn total(&self) -> usize {
        self.users + self.contacts + self.companies + self.programs + self.tasks
    }
}

/// Seeds each empty table with its fixed demonstration rows.
pub fn seed_demo_data(conn: &Connection) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();

    report.users = seed_table::<User>(conn, &demo_users()?)?;
    report.contacts = seed_table::<Contact>(conn, &demo_contacts())?;
    report.companies = seed_table::<Company>(conn, &demo_companies())?;
    report.programs = seed_table::<Program>(conn, &demo_programs())?;
    report.tasks = seed_table::<Task>(conn, &demo_tasks())?;

    info!(
        "event=seed module=service status=ok inserted={}",
        report.total()
    );
    Ok(report)
}

fn seed_table<E: EntityRecord>(conn: &Connection, drafts: &[E::Draft]) -> RepoResult<usize> {
    let repo: SqliteEntityRepository<'_, E> = SqliteEntityRepository::new(conn);
    if repo.first()?.is_some() {
        return Ok(0);
    }
    let ids = repo.insert_many(drafts)?;
    Ok(ids.len())
}

fn demo_users() -> Result<Vec<NewUser>, PasswordHashError> {
    Ok(vec![NewUser {
        username: SEED_ADMIN_USERNAME.to_string(),
        password_hash: hash_password(SEED_ADMIN_PASSWORD)?,
        role: Some("Admin".to_string()),
    }])
}

fn demo_contacts() -> Vec<NewContact> {
    vec![
        NewContact {
            name: Some("Alice Johnson".to_string()),
            email: Some("alice@example.com".to_string()),
            phone: Some("1234567890".to_string()),
            role: Some("Mentee".to_string()),
            program: Some("Mentorship 2025".to_string()),
        },
        NewContact {
            name: Some("Priya Singh".to_string()),
            email: Some("priya@example.com".to_string()),
            phone: Some("9876543210".to_string()),
            role: Some("Mentor".to_string()),
            program: Some("Mentorship 2025".to_string()),
        },
    ]
}

fn demo_companies() -> Vec<NewCompany> {
    vec![
        NewCompany {
            name: "WomenTech Partners".to_string(),
            kind: Some("NGO".to_string()),
            contact_person: None,
            email: None,
            phone: None,
            location: None,
            role: None,
            status: None,
            contribution: None,
            notes: None,
        },
        NewCompany {
            name: "Aspire Corp".to_string(),
            kind: Some("Corporate".to_string()),
            contact_person: None,
            email: None,
            phone: None,
            location: None,
            role: None,
            status: None,
            contribution: None,
            notes: None,
        },
    ]
}

fn demo_programs() -> Vec<NewProgram> {
    vec![
        NewProgram {
            name: Some("Mentorship 2025".to_string()),
            status: Some("Active".to_string()),
        },
        NewProgram {
            name: Some("Skill Workshop".to_string()),
            status: Some("Pending".to_string()),
        },
    ]
}

fn demo_tasks() -> Vec<NewTask> {
    vec![
        NewTask {
            title: Some("Follow-up with Alice".to_string()),
            assigned_to: Some("Priya Singh".to_string()),
            status: Some("Pending".to_string()),
        },
        NewTask {
            title: Some("Prepare Workshop Material".to_string()),
            assigned_to: Some("Admin".to_string()),
            status: Some("In Progress".to_string()),
        },
    ]
}
