//! Server binary entry point.
//!
//! # Responsibility
//! - Assemble configuration, logging, storage and seed data, then serve
//!   the router until the process is stopped.
//!
//! # Invariants
//! - Startup failures exit with a diagnostic; they never panic.
//! - Seeding runs before the first request is accepted.

use aspirecrm_core::db::open_db;
use aspirecrm_core::{core_version, init_logging, seed_demo_data};
use aspirecrm_server::{build_router, AppState, ServerConfig};
use log::{info, warn};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("aspirecrm_server: {message}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), String> {
    let config = ServerConfig::from_env().map_err(|err| err.to_string())?;
    init_logging(&config.log_level, &config.log_dir)?;

    let conn = open_db(&config.db_path).map_err(|err| {
        format!(
            "failed to open database `{}`: {err}",
            config.db_path.display()
        )
    })?;
    let report =
        seed_demo_data(&conn).map_err(|err| format!("failed to seed demo data: {err}"))?;
    info!(
        "event=server_start module=server status=start version={} seeded_rows={}",
        core_version(),
        report.total()
    );

    let state = AppState::new(conn, config);
    if state.config().uses_default_secret() {
        warn!(
            "event=server_start module=server status=warn error_code=default_session_secret"
        );
    }
    let bind_addr = state.config().bind_addr;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|err| format!("failed to bind {bind_addr}: {err}"))?;
    info!("event=server_start module=server status=ok bind={bind_addr}");

    axum::serve(listener, app)
        .await
        .map_err(|err| format!("server error: {err}"))
}
