use aspirecrm_core::db::migrations::latest_version;
use aspirecrm_core::db::{open_db, open_db_in_memory, DbError};
use aspirecrm_core::{hash_password, NewUser, RepoError, SqliteEntityRepository, User};
use rusqlite::Connection;

#[test]
fn fresh_database_reaches_latest_schema_version() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
    assert!(latest_version() >= 1);
}

#[test]
fn schema_creates_all_five_tables() {
    let conn = open_db_in_memory().unwrap();
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name;")
        .unwrap();
    let names: Vec<String> = stmt
        .query_map([], |row| row.get(0))
        .unwrap()
        .map(|name| name.unwrap())
        .collect();

    for table in ["users", "contacts", "companies", "programs", "tasks"] {
        assert!(names.iter().any(|n| n == table), "missing table {table}");
    }
}

#[test]
fn newer_schema_than_supported_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
            .unwrap();
    }

    let err = open_db(&path).unwrap_err();
    assert!(matches!(err, DbError::UnsupportedSchemaVersion { .. }));
}

#[test]
fn reopening_a_file_database_preserves_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("crm.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let repo: SqliteEntityRepository<'_, User> = SqliteEntityRepository::new(&conn);
        repo.insert(&NewUser {
            username: "admin".to_string(),
            password_hash: hash_password("admin").unwrap(),
            role: Some("Admin".to_string()),
        })
        .unwrap();
    }

    let conn = open_db(&path).unwrap();
    let repo: SqliteEntityRepository<'_, User> = SqliteEntityRepository::new(&conn);
    let users = repo.list_all().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "admin");
}

#[test]
fn username_uniqueness_is_enforced_by_the_store() {
    let conn = open_db_in_memory().unwrap();
    let repo: SqliteEntityRepository<'_, User> = SqliteEntityRepository::new(&conn);

    let draft = NewUser {
        username: "admin".to_string(),
        password_hash: hash_password("admin").unwrap(),
        role: None,
    };
    repo.insert(&draft).unwrap();

    let err = repo.insert(&draft).unwrap_err();
    assert!(matches!(err, RepoError::Conflict(_)));
}

#[test]
fn role_defaults_to_staff_when_absent() {
    let conn = open_db_in_memory().unwrap();
    let repo: SqliteEntityRepository<'_, User> = SqliteEntityRepository::new(&conn);

    let id = repo
        .insert(&NewUser {
            username: "volunteer".to_string(),
            password_hash: hash_password("pw").unwrap(),
            role: None,
        })
        .unwrap();

    let user = repo.get(id).unwrap().unwrap();
    assert_eq!(user.role, "Staff");
}
