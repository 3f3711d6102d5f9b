//! User lookup contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the username lookup the login path depends on.
//!
//! # Invariants
//! - Lookup is an exact string match on `username`; no normalization.

use crate::model::user::User;
use crate::repo::entity_repo::{EntityRecord, RepoResult};
use rusqlite::{params, Connection};

/// Repository interface for login-account lookups.
pub trait UserRepository {
    /// Finds one user by exact username, or `None`.
    fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;
}

/// SQLite-backed user lookup repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, username, password_hash, role
             FROM users
             WHERE username = ?1;",
        )?;

        let mut rows = stmt.query(params![username])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(User::from_row(row)?));
        }

        Ok(None)
    }
}
