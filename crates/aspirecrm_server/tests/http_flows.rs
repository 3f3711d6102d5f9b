use aspirecrm_core::db::{open_db, open_db_in_memory};
use aspirecrm_core::{seed_demo_data, Contact, SqliteEntityRepository};
use aspirecrm_server::session::SESSION_COOKIE;
use aspirecrm_server::{build_router, AppState, ServerConfig};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

fn app() -> Router {
    let conn = open_db_in_memory().unwrap();
    seed_demo_data(&conn).unwrap();
    build_router(AppState::new(conn, ServerConfig::default()))
}

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: Response) -> Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
}

/// Logs in as the seeded admin and returns the `name=value` session pair.
async fn login_session(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::post("/login")
                .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(Body::from("username=admin&password=admin"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with(SESSION_COOKIE));
    set_cookie.split(';').next().unwrap().to_string()
}

async fn get_with_cookie(app: &Router, path: &str, cookie: &str) -> Response {
    app.clone()
        .oneshot(
            Request::get(path)
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn post_form_with_cookie(app: &Router, path: &str, cookie: &str, body: &str) -> Response {
    app.clone()
        .oneshot(
            Request::post(path)
                .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
                .header(header::COOKIE, cookie)
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn root_redirects_to_login() {
    let response = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn protected_routes_redirect_without_a_session() {
    let app = app();
    for path in ["/dashboard", "/contacts", "/companies", "/programs", "/tasks"] {
        let response = app
            .clone()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "path {path}");
        assert_eq!(location(&response), "/login", "path {path}");
    }
}

#[tokio::test]
async fn tampered_session_token_is_rejected() {
    let app = app();
    let response = get_with_cookie(
        &app,
        "/dashboard",
        &format!("{SESSION_COOKIE}=v1.eyJ1c2VyIjoiaW50cnVkZXIifQ.Zm9yZ2Vk"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn invalid_credentials_rerender_login_with_notice() {
    let response = app()
        .oneshot(
            Request::post("/login")
                .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(Body::from("username=admin&password=wrong"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let page = body_text(response).await;
    assert!(page.contains("Invalid credentials!"));
    assert!(page.contains("<form"));
}

#[tokio::test]
async fn login_without_password_field_is_a_validation_error() {
    let response = app()
        .oneshot(
            Request::post("/login")
                .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(Body::from("username=admin"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "validation_missing");
}

#[tokio::test]
async fn dashboard_reports_seeded_totals_and_histograms() {
    let app = app();
    let session = login_session(&app).await;

    let response = get_with_cookie(&app, "/dashboard", &session).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total_contacts"], 2);
    assert_eq!(body["total_companies"], 2);
    assert_eq!(body["total_programs"], 2);
    assert_eq!(body["total_tasks"], 2);
    assert_eq!(body["program_status"]["Active"], 1);
    assert_eq!(body["program_status"]["Pending"], 1);
    assert_eq!(body["task_status"]["In Progress"], 1);
    assert_eq!(body["task_status"]["Pending"], 1);
}

#[tokio::test]
async fn contact_add_then_delete_scenario() {
    let app = app();
    let session = login_session(&app).await;

    // Seeded state: two contacts.
    let response = get_with_cookie(&app, "/contacts", &session).await;
    let body = body_json(response).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 2);

    let response = post_form_with_cookie(
        &app,
        "/contacts/add",
        &session,
        "name=Zara&email=z%40x.com&phone=000&role=Mentee&program=P1",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/contacts");
    let flash = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();

    let response =
        get_with_cookie(&app, "/contacts", &format!("{session}; {flash}")).await;
    let body = body_json(response).await;
    assert_eq!(body["notice"], "Contact added!");
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    let zara = items.last().unwrap();
    assert_eq!(zara["name"], "Zara");
    assert_eq!(zara["email"], "z@x.com");
    let zara_id = zara["id"].as_i64().unwrap();

    let response = post_form_with_cookie(
        &app,
        &format!("/contacts/delete/{zara_id}"),
        &session,
        "",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = get_with_cookie(&app, "/contacts", &session).await;
    let body = body_json(response).await;
    assert_eq!(body["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn company_add_without_name_is_rejected_with_field_name() {
    let app = app();
    let session = login_session(&app).await;

    let response =
        post_form_with_cookie(&app, "/companies/add", &session, "type=NGO&status=Active").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "validation_missing");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("name"));
}

#[tokio::test]
async fn deleting_an_unknown_id_is_not_found() {
    let app = app();
    let session = login_session(&app).await;

    let response = post_form_with_cookie(&app, "/tasks/delete/4242", &session, "").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn program_add_redirects_back_to_listing() {
    let app = app();
    let session = login_session(&app).await;

    let response = post_form_with_cookie(
        &app,
        "/programs/add",
        &session,
        "name=Winter+Drive&status=Pending",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/programs");

    let response = get_with_cookie(&app, "/programs", &session).await;
    let body = body_json(response).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items.last().unwrap()["name"], "Winter Drive");
}

#[tokio::test]
async fn on_disk_database_keeps_rows_written_through_the_router() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("aspirecrm.sqlite3");

    let mut config = ServerConfig::default();
    config.db_path = db_path.clone();

    let conn = open_db(&db_path).unwrap();
    seed_demo_data(&conn).unwrap();
    let state = AppState::new(conn, config);
    assert_eq!(state.config().db_path, db_path);

    let app = build_router(state);
    let session = login_session(&app).await;
    let response = post_form_with_cookie(&app, "/contacts/add", &session, "name=Zara").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    drop(app);

    // Reopen the same file: the write must have landed on disk.
    let conn = open_db(&db_path).unwrap();
    let contacts: SqliteEntityRepository<'_, Contact> = SqliteEntityRepository::new(&conn);
    let rows = contacts.list_all().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows.last().unwrap().name.as_deref(), Some("Zara"));
}

#[tokio::test]
async fn logout_expires_the_session_cookie() {
    let app = app();
    let response = app
        .clone()
        .oneshot(Request::get("/logout").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login");
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.contains("Max-Age=0"));
}
