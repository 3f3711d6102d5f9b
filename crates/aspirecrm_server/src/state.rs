//! Shared per-process application state.
//!
//! # Responsibility
//! - Hold the store handle and configuration constructed once at startup
//!   and hand them to request handlers.
//!
//! # Invariants
//! - The single rusqlite connection is only reachable through the async
//!   mutex guard, which serializes all store operations.

use crate::config::ServerConfig;
use rusqlite::Connection;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Application context passed to every handler via axum state.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
    config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(conn: Connection, config: ServerConfig) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
            config: Arc::new(config),
        }
    }

    /// Acquires the store connection, serializing row writes across
    /// concurrent requests.
    pub async fn db(&self) -> MutexGuard<'_, Connection> {
        self.db.lock().await
    }

    /// Session signing key material.
    pub fn secret(&self) -> &[u8] {
        self.config.session_secret.as_bytes()
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
