//! HTTP surface for the Aspire CRM.
//!
//! # Responsibility
//! - Expose the core CRUD, auth, dashboard and seed services over axum.
//! - Own session-cookie integrity and the auth gate in front of
//!   protected routes.
//!
//! # Invariants
//! - Handlers hold no state beyond [`state::AppState`]; there are no
//!   process-global singletons.
//! - Every store access goes through the shared connection guard.

pub mod config;
pub mod http;
pub mod session;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use http::build_router;
pub use state::AppState;
