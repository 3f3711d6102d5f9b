//! Request handlers.
//!
//! # Responsibility
//! - Implement the login/logout flow, the dashboard view and the
//!   list/add/delete endpoints for the four business entities.
//!
//! # Invariants
//! - Mutations answer with a 303 redirect back to the listing view and a
//!   one-shot flash notice; listing views consume the notice.
//! - Credential failures re-render the login page with a uniform notice.

use crate::http::error::ApiError;
use crate::http::forms::{CompanyForm, ContactForm, LoginForm, ProgramForm, TaskForm};
use crate::session::{
    cookie_value, decode_flash, encode_session, flash_clear_cookie, flash_set_cookie,
    session_clear_cookie, session_set_cookie, SessionClaims, FLASH_COOKIE,
};
use crate::state::AppState;
use aspirecrm_core::{
    dashboard_summary, AuthError, AuthService, Company, Contact, CrudService, EntityRecord,
    Program, RecordId, SqliteUserRepository, Task,
};
use axum::extract::{Form, Path, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

const LOGIN_PAGE_TEMPLATE: &str = r#"<!doctype html>
<html>
<head><meta charset="utf-8"><title>Aspire CRM login</title></head>
<body>
  <h1>Aspire CRM</h1>
  {notice}
  <form method="post" action="/login">
    <label>Username <input name="username" autocomplete="username"></label>
    <label>Password <input name="password" type="password" autocomplete="current-password"></label>
    <button type="submit">Sign in</button>
  </form>
</body>
</html>
"#;

fn render_login(notice: Option<&str>) -> Html<String> {
    let notice_html = match notice {
        Some(text) => format!(r#"<p class="notice">{text}</p>"#),
        None => String::new(),
    };
    Html(LOGIN_PAGE_TEMPLATE.replace("{notice}", &notice_html))
}

fn redirect_with_flash(path: &str, notice: &str) -> Response {
    let mut response = Redirect::to(path).into_response();
    if let Ok(value) = HeaderValue::from_str(&flash_set_cookie(notice)) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    response
}

/// `GET /` - entry point, always sends the caller to the login view.
pub async fn index() -> Redirect {
    Redirect::to("/login")
}

/// `GET /login`
pub async fn login_page() -> Html<String> {
    render_login(None)
}

/// `POST /login`
pub async fn login_submit(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, ApiError> {
    let (username, password) = form.into_credentials()?;

    let login_result = {
        let conn = state.db().await;
        let auth = AuthService::new(SqliteUserRepository::new(&conn));
        auth.login(&username, &password)
    };

    match login_result {
        Ok(user) => {
            let claims = SessionClaims {
                user: user.username,
            };
            let token = encode_session(&claims, state.secret())?;
            let mut response = Redirect::to("/dashboard").into_response();
            if let Ok(value) = HeaderValue::from_str(&session_set_cookie(&token)) {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Ok(response)
        }
        Err(AuthError::InvalidCredentials) => Ok((
            StatusCode::UNAUTHORIZED,
            render_login(Some("Invalid credentials!")),
        )
            .into_response()),
        Err(err @ AuthError::Repo(_)) => Err(err.into()),
    }
}

/// `GET /logout` - clears the session cookie; safe without a session.
pub async fn logout() -> Response {
    let mut response = Redirect::to("/login").into_response();
    if let Ok(value) = HeaderValue::from_str(&session_clear_cookie()) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    response
}

/// `GET /dashboard`
pub async fn dashboard(State(state): State<AppState>) -> Result<Response, ApiError> {
    let conn = state.db().await;
    let summary = dashboard_summary(&conn)?;
    Ok(Json(summary).into_response())
}

async fn entity_list<E>(state: &AppState, headers: &HeaderMap) -> Result<Response, ApiError>
where
    E: EntityRecord + Serialize,
{
    let notice = cookie_value(headers, FLASH_COOKIE).and_then(|value| decode_flash(&value));
    let had_notice = notice.is_some();

    let items = {
        let conn = state.db().await;
        let service: CrudService<'_, E> = CrudService::new(&conn);
        service.list()?
    };

    let mut response = Json(json!({ "notice": notice, "items": items })).into_response();
    if had_notice {
        if let Ok(value) = HeaderValue::from_str(&flash_clear_cookie()) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }
    Ok(response)
}

async fn entity_create<E>(
    state: &AppState,
    draft: &E::Draft,
    notice: &str,
    list_path: &str,
) -> Result<Response, ApiError>
where
    E: EntityRecord,
{
    {
        let conn = state.db().await;
        let service: CrudService<'_, E> = CrudService::new(&conn);
        service.create(draft)?;
    }
    Ok(redirect_with_flash(list_path, notice))
}

async fn entity_delete<E>(
    state: &AppState,
    id: RecordId,
    notice: &str,
    list_path: &str,
) -> Result<Response, ApiError>
where
    E: EntityRecord,
{
    {
        let conn = state.db().await;
        let service: CrudService<'_, E> = CrudService::new(&conn);
        service.delete(id)?;
    }
    Ok(redirect_with_flash(list_path, notice))
}

/// `GET /contacts`
pub async fn contacts_list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    entity_list::<Contact>(&state, &headers).await
}

/// `POST /contacts/add`
pub async fn contacts_add(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Response, ApiError> {
    let draft = form.into_draft()?;
    entity_create::<Contact>(&state, &draft, "Contact added!", "/contacts").await
}

/// `POST /contacts/delete/{id}`
pub async fn contacts_delete(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Response, ApiError> {
    entity_delete::<Contact>(&state, id, "Contact deleted!", "/contacts").await
}

/// `GET /companies`
pub async fn companies_list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    entity_list::<Company>(&state, &headers).await
}

/// `POST /companies/add`
pub async fn companies_add(
    State(state): State<AppState>,
    Form(form): Form<CompanyForm>,
) -> Result<Response, ApiError> {
    let draft = form.into_draft()?;
    entity_create::<Company>(&state, &draft, "Company added!", "/companies").await
}

/// `POST /companies/delete/{id}`
pub async fn companies_delete(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Response, ApiError> {
    entity_delete::<Company>(&state, id, "Company deleted!", "/companies").await
}

/// `GET /programs`
pub async fn programs_list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    entity_list::<Program>(&state, &headers).await
}

/// `POST /programs/add`
pub async fn programs_add(
    State(state): State<AppState>,
    Form(form): Form<ProgramForm>,
) -> Result<Response, ApiError> {
    let draft = form.into_draft()?;
    entity_create::<Program>(&state, &draft, "Program added!", "/programs").await
}

/// `POST /programs/delete/{id}`
pub async fn programs_delete(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Response, ApiError> {
    entity_delete::<Program>(&state, id, "Program deleted!", "/programs").await
}

/// `GET /tasks`
pub async fn tasks_list(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    entity_list::<Task>(&state, &headers).await
}

/// `POST /tasks/add`
pub async fn tasks_add(
    State(state): State<AppState>,
    Form(form): Form<TaskForm>,
) -> Result<Response, ApiError> {
    let draft = form.into_draft()?;
    entity_create::<Task>(&state, &draft, "Task added!", "/tasks").await
}

/// `POST /tasks/delete/{id}`
pub async fn tasks_delete(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Response, ApiError> {
    entity_delete::<Task>(&state, id, "Task deleted!", "/tasks").await
}
