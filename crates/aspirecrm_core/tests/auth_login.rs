use aspirecrm_core::db::open_db_in_memory;
use aspirecrm_core::{seed_demo_data, AuthError, AuthService, SqliteUserRepository};

#[test]
fn seeded_admin_can_log_in() {
    let conn = open_db_in_memory().unwrap();
    seed_demo_data(&conn).unwrap();

    let auth = AuthService::new(SqliteUserRepository::new(&conn));
    let user = auth.login("admin", "admin").unwrap();
    assert_eq!(user.username, "admin");
    assert_eq!(user.role, "Admin");
}

#[test]
fn wrong_password_is_a_uniform_credential_failure() {
    let conn = open_db_in_memory().unwrap();
    seed_demo_data(&conn).unwrap();

    let auth = AuthService::new(SqliteUserRepository::new(&conn));
    let err = auth.login("admin", "wrong").unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[test]
fn unknown_user_fails_identically_to_wrong_password() {
    let conn = open_db_in_memory().unwrap();
    seed_demo_data(&conn).unwrap();

    let auth = AuthService::new(SqliteUserRepository::new(&conn));
    let unknown = auth.login("nobody", "admin").unwrap_err();
    let wrong = auth.login("admin", "wrong").unwrap_err();
    assert_eq!(format!("{unknown}"), format!("{wrong}"));
}

#[test]
fn credentials_are_trimmed_before_matching() {
    let conn = open_db_in_memory().unwrap();
    seed_demo_data(&conn).unwrap();

    let auth = AuthService::new(SqliteUserRepository::new(&conn));
    let user = auth.login("  admin  ", " admin ").unwrap();
    assert_eq!(user.username, "admin");
}

#[test]
fn empty_database_denies_everyone() {
    let conn = open_db_in_memory().unwrap();
    let auth = AuthService::new(SqliteUserRepository::new(&conn));
    assert!(matches!(
        auth.login("admin", "admin").unwrap_err(),
        AuthError::InvalidCredentials
    ));
}
