//! Router assembly and the auth gate.
//!
//! # Responsibility
//! - Wire all routes onto one `Router` with shared [`AppState`].
//! - Guard every route except login/logout/landing behind the session
//!   check.
//!
//! # Invariants
//! - A missing or unverifiable session is a redirect to `/login`, never
//!   an error response.
//! - Deletes use POST uniformly across all four entities.

pub mod error;
pub mod forms;
pub mod handlers;

use crate::session::{cookie_value, decode_session, SESSION_COOKIE};
use crate::state::AppState;
use axum::extract::{Request, State};
use axum::middleware::{from_fn_with_state, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;

/// Session check applied in front of every protected route.
///
/// Control-flow short-circuit, not a failure: unauthenticated callers are
/// sent to the login view.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let authenticated = cookie_value(request.headers(), SESSION_COOKIE)
        .and_then(|token| decode_session(&token, state.secret()).ok())
        .is_some();

    if !authenticated {
        return Redirect::to("/login").into_response();
    }
    next.run(request).await
}

/// Builds the full application router.
pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/dashboard", get(handlers::dashboard))
        .route("/contacts", get(handlers::contacts_list))
        .route("/contacts/add", post(handlers::contacts_add))
        .route("/contacts/delete/:id", post(handlers::contacts_delete))
        .route("/companies", get(handlers::companies_list))
        .route("/companies/add", post(handlers::companies_add))
        .route("/companies/delete/:id", post(handlers::companies_delete))
        .route("/programs", get(handlers::programs_list))
        .route("/programs/add", post(handlers::programs_add))
        .route("/programs/delete/:id", post(handlers::programs_delete))
        .route("/tasks", get(handlers::tasks_list))
        .route("/tasks/add", post(handlers::tasks_add))
        .route("/tasks/delete/:id", post(handlers::tasks_delete))
        .route_layer(from_fn_with_state(state.clone(), require_session));

    Router::new()
        .route("/", get(handlers::index))
        .route("/login", get(handlers::login_page).post(handlers::login_submit))
        .route("/logout", get(handlers::logout))
        .merge(protected)
        .with_state(state)
}
