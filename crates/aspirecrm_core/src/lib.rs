//! Core domain logic for the Aspire CRM.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging};
pub use model::company::{Company, NewCompany};
pub use model::contact::{Contact, NewContact};
pub use model::program::{NewProgram, Program};
pub use model::task::{NewTask, Task};
pub use model::user::{NewUser, User};
pub use model::RecordId;
pub use repo::entity_repo::{EntityRecord, RepoError, RepoResult, SqliteEntityRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use service::auth_service::{AuthError, AuthService};
pub use service::crud_service::CrudService;
pub use service::dashboard_service::{dashboard_summary, DashboardSummary, UNSET_STATUS_LABEL};
pub use service::password::{hash_password, verify_password, PasswordHashError};
pub use service::seed_service::{seed_demo_data, SeedError, SeedReport};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
