//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the HTTP layer decoupled from storage details.

pub mod auth_service;
pub mod crud_service;
pub mod dashboard_service;
pub mod password;
pub mod seed_service;
