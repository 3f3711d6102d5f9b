//! Login account model.
//!
//! # Invariants
//! - `username` is unique; uniqueness is enforced by the store.
//! - `password_hash` holds a salted hash, never the plaintext password.

use crate::model::RecordId;
use serde::{Deserialize, Serialize};

/// Default role assigned when a draft does not specify one.
pub const DEFAULT_USER_ROLE: &str = "Staff";

/// Stored login account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub username: String,
    /// Salted password hash in `v1$<salt>$<mac>` form.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Stored but never checked for authorization decisions.
    pub role: String,
}

/// Creation draft for a login account.
///
/// `password_hash` must already be hashed by the caller; the repository
/// layer never sees plaintext credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    /// Defaults to [`DEFAULT_USER_ROLE`] when absent.
    pub role: Option<String>,
}
