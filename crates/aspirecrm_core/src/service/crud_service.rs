//! Entity CRUD use-case service.
//!
//! # Responsibility
//! - Provide stable list/create/delete entry points for surface callers.
//! - Delegate persistence to the entity repository.
//!
//! # Invariants
//! - No update operation exists for any entity; this is a deliberate
//!   property of the system, not an omission.
//! - Every mutation emits one `entity_create` or `entity_delete` event.

use crate::model::RecordId;
use crate::repo::entity_repo::{EntityRecord, RepoResult, SqliteEntityRepository};
use log::info;
use rusqlite::Connection;

/// Use-case service for one entity table, parameterized over the entity.
pub struct CrudService<'conn, E: EntityRecord> {
    repo: SqliteEntityRepository<'conn, E>,
}

impl<'conn, E: EntityRecord> CrudService<'conn, E> {
    /// Creates a service bound to the given connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            repo: SqliteEntityRepository::new(conn),
        }
    }

    /// Lists all rows in insertion order.
    pub fn list(&self) -> RepoResult<Vec<E>> {
        self.repo.list_all()
    }

    /// Creates one row from a caller-supplied draft and returns its id.
    pub fn create(&self, draft: &E::Draft) -> RepoResult<RecordId> {
        let id = self.repo.insert(draft)?;
        info!(
            "event=entity_create module=service status=ok table={} id={id}",
            E::TABLE
        );
        Ok(id)
    }

    /// Deletes one row by id. `NotFound` when the id does not exist.
    pub fn delete(&self, id: RecordId) -> RepoResult<()> {
        self.repo.delete(id)?;
        info!(
            "event=entity_delete module=service status=ok table={} id={id}",
            E::TABLE
        );
        Ok(())
    }
}
