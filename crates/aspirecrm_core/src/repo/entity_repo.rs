//! Entity repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide one CRUD API parameterized over the entity type.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Identifiers are assigned by SQLite `AUTOINCREMENT` and never reused.
//! - `list_all` returns rows in insertion order (id ascending).
//! - Deleting an unknown identifier is a semantic `NotFound`, not a DB error.

use crate::db::DbError;
use crate::model::company::{Company, NewCompany};
use crate::model::contact::{Contact, NewContact};
use crate::model::program::{NewProgram, Program};
use crate::model::task::{NewTask, Task};
use crate::model::user::{NewUser, User, DEFAULT_USER_ROLE};
use crate::model::RecordId;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for CRM persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound {
        entity: &'static str,
        id: RecordId,
    },
    /// Store-level uniqueness violation (e.g. duplicate username).
    Conflict(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} row not found: {id}"),
            Self::Conflict(message) => write!(f, "constraint violation: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound { .. } => None,
            Self::Conflict(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(err, message) = &value {
            if err.code == rusqlite::ErrorCode::ConstraintViolation {
                return Self::Conflict(
                    message
                        .clone()
                        .unwrap_or_else(|| "unnamed constraint".to_string()),
                );
            }
        }
        Self::Db(DbError::Sqlite(value))
    }
}

/// Static persistence schema for one CRM entity.
///
/// Implementations declare the table name, the insertable column list and
/// the draft-to-SQL / row-to-record conversions. The generic repository
/// derives all CRUD SQL from these declarations.
pub trait EntityRecord: Sized {
    /// Table name in the SQLite schema.
    const TABLE: &'static str;
    /// Insertable columns, excluding the store-assigned `id`.
    const COLUMNS: &'static [&'static str];
    /// Caller-supplied creation shape.
    type Draft;

    /// Binds one draft as SQL values, ordered per `COLUMNS`.
    fn bind_draft(draft: &Self::Draft) -> Vec<Value>;
    /// Parses one stored row (selected as `id` + `COLUMNS`).
    fn from_row(row: &Row<'_>) -> RepoResult<Self>;
}

/// SQLite-backed repository, parameterized over the entity type.
pub struct SqliteEntityRepository<'conn, E: EntityRecord> {
    conn: &'conn Connection,
    _entity: PhantomData<E>,
}

impl<'conn, E: EntityRecord> SqliteEntityRepository<'conn, E> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            _entity: PhantomData,
        }
    }

    /// Inserts one row and returns its fresh store-assigned identifier.
    pub fn insert(&self, draft: &E::Draft) -> RepoResult<RecordId> {
        self.conn
            .execute(&insert_sql::<E>(), params_from_iter(E::bind_draft(draft)))?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Inserts several rows, committing each one independently.
    ///
    /// Row-at-a-time on purpose: the application offers no multi-row
    /// transaction guarantee.
    pub fn insert_many(&self, drafts: &[E::Draft]) -> RepoResult<Vec<RecordId>> {
        let mut ids = Vec::with_capacity(drafts.len());
        for draft in drafts {
            ids.push(self.insert(draft)?);
        }
        Ok(ids)
    }

    /// Lists all rows in insertion order, materialized fully.
    pub fn list_all(&self) -> RepoResult<Vec<E>> {
        let sql = format!("{} ORDER BY id ASC;", select_sql::<E>());
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(E::from_row(row)?);
        }
        Ok(records)
    }

    /// Gets one row by identifier.
    pub fn get(&self, id: RecordId) -> RepoResult<Option<E>> {
        let sql = format!("{} WHERE id = ?1;", select_sql::<E>());
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(E::from_row(row)?));
        }
        Ok(None)
    }

    /// Gets the lowest-id row, if any. Used by the seed-if-empty check.
    pub fn first(&self) -> RepoResult<Option<E>> {
        let sql = format!("{} ORDER BY id ASC LIMIT 1;", select_sql::<E>());
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(E::from_row(row)?));
        }
        Ok(None)
    }

    /// Counts all rows.
    pub fn count(&self) -> RepoResult<u64> {
        let sql = format!("SELECT COUNT(*) FROM {};", E::TABLE);
        let count = self.conn.query_row(&sql, [], |row| row.get::<_, u64>(0))?;
        Ok(count)
    }

    /// Hard-deletes one row by identifier.
    pub fn delete(&self, id: RecordId) -> RepoResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?1;", E::TABLE);
        let changed = self.conn.execute(&sql, params![id])?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: E::TABLE,
                id,
            });
        }
        Ok(())
    }
}

fn select_sql<E: EntityRecord>() -> String {
    format!("SELECT id, {} FROM {}", E::COLUMNS.join(", "), E::TABLE)
}

fn insert_sql<E: EntityRecord>() -> String {
    let placeholders = (1..=E::COLUMNS.len())
        .map(|n| format!("?{n}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({});",
        E::TABLE,
        E::COLUMNS.join(", "),
        placeholders
    )
}

fn text(value: &str) -> Value {
    Value::Text(value.to_string())
}

fn opt_text(value: &Option<String>) -> Value {
    match value {
        Some(text) => Value::Text(text.clone()),
        None => Value::Null,
    }
}

impl EntityRecord for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["username", "password_hash", "role"];
    type Draft = NewUser;

    fn bind_draft(draft: &NewUser) -> Vec<Value> {
        vec![
            text(&draft.username),
            text(&draft.password_hash),
            text(draft.role.as_deref().unwrap_or(DEFAULT_USER_ROLE)),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: row.get("id")?,
            username: row.get("username")?,
            password_hash: row.get("password_hash")?,
            role: row.get("role")?,
        })
    }
}

impl EntityRecord for Contact {
    const TABLE: &'static str = "contacts";
    const COLUMNS: &'static [&'static str] = &["name", "email", "phone", "role", "program"];
    type Draft = NewContact;

    fn bind_draft(draft: &NewContact) -> Vec<Value> {
        vec![
            opt_text(&draft.name),
            opt_text(&draft.email),
            opt_text(&draft.phone),
            opt_text(&draft.role),
            opt_text(&draft.program),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            email: row.get("email")?,
            phone: row.get("phone")?,
            role: row.get("role")?,
            program: row.get("program")?,
        })
    }
}

impl EntityRecord for Company {
    const TABLE: &'static str = "companies";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "type",
        "contact_person",
        "email",
        "phone",
        "location",
        "role",
        "status",
        "contribution",
        "notes",
    ];
    type Draft = NewCompany;

    fn bind_draft(draft: &NewCompany) -> Vec<Value> {
        vec![
            text(&draft.name),
            opt_text(&draft.kind),
            opt_text(&draft.contact_person),
            opt_text(&draft.email),
            opt_text(&draft.phone),
            opt_text(&draft.location),
            opt_text(&draft.role),
            opt_text(&draft.status),
            opt_text(&draft.contribution),
            opt_text(&draft.notes),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            kind: row.get("type")?,
            contact_person: row.get("contact_person")?,
            email: row.get("email")?,
            phone: row.get("phone")?,
            location: row.get("location")?,
            role: row.get("role")?,
            status: row.get("status")?,
            contribution: row.get("contribution")?,
            notes: row.get("notes")?,
        })
    }
}

impl EntityRecord for Program {
    const TABLE: &'static str = "programs";
    const COLUMNS: &'static [&'static str] = &["name", "status"];
    type Draft = NewProgram;

    fn bind_draft(draft: &NewProgram) -> Vec<Value> {
        vec![opt_text(&draft.name), opt_text(&draft.status)]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            status: row.get("status")?,
        })
    }
}

impl EntityRecord for Task {
    const TABLE: &'static str = "tasks";
    const COLUMNS: &'static [&'static str] = &["title", "assigned_to", "status"];
    type Draft = NewTask;

    fn bind_draft(draft: &NewTask) -> Vec<Value> {
        vec![
            opt_text(&draft.title),
            opt_text(&draft.assigned_to),
            opt_text(&draft.status),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: row.get("id")?,
            title: row.get("title")?,
            assigned_to: row.get("assigned_to")?,
            status: row.get("status")?,
        })
    }
}
