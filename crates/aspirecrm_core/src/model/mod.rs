//! Domain model for the CRM entities.
//!
//! # Responsibility
//! - Define canonical record shapes mirrored by the relational schema.
//! - Define creation drafts with required/optional fields declared statically.
//!
//! # Invariants
//! - Every stored record is identified by a store-assigned `RecordId`.
//! - Identifiers are unique per table, immutable, and never reused.
//! - No relationships are modeled between entities; cross-entity references
//!   (e.g. `Task::assigned_to`) are free text by design.

pub mod company;
pub mod contact;
pub mod program;
pub mod task;
pub mod user;

/// Store-assigned synthetic identifier shared by all CRM tables.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = i64;
