use aspirecrm_core::db::open_db_in_memory;
use aspirecrm_core::{
    Company, Contact, CrudService, NewCompany, NewContact, NewProgram, Program, RepoError,
    SqliteEntityRepository,
};

fn contact_named(name: &str) -> NewContact {
    NewContact {
        name: Some(name.to_string()),
        ..NewContact::default()
    }
}

#[test]
fn create_then_list_contains_exactly_one_new_row() {
    let conn = open_db_in_memory().unwrap();
    let service: CrudService<'_, Contact> = CrudService::new(&conn);

    let draft = NewContact {
        name: Some("Alice Johnson".to_string()),
        email: Some("alice@example.com".to_string()),
        phone: Some("1234567890".to_string()),
        role: Some("Mentee".to_string()),
        program: Some("Mentorship 2025".to_string()),
    };
    let id = service.create(&draft).unwrap();

    let rows = service.list().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, id);
    assert_eq!(rows[0].name.as_deref(), Some("Alice Johnson"));
    assert_eq!(rows[0].email.as_deref(), Some("alice@example.com"));
    assert_eq!(rows[0].phone.as_deref(), Some("1234567890"));
    assert_eq!(rows[0].role.as_deref(), Some("Mentee"));
    assert_eq!(rows[0].program.as_deref(), Some("Mentorship 2025"));
}

#[test]
fn list_returns_rows_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let service: CrudService<'_, Contact> = CrudService::new(&conn);

    let first = service.create(&contact_named("first")).unwrap();
    let second = service.create(&contact_named("second")).unwrap();
    let third = service.create(&contact_named("third")).unwrap();

    let ids: Vec<_> = service.list().unwrap().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first, second, third]);
}

#[test]
fn identifiers_are_fresh_and_never_reused() {
    let conn = open_db_in_memory().unwrap();
    let service: CrudService<'_, Contact> = CrudService::new(&conn);

    let first = service.create(&contact_named("one")).unwrap();
    let second = service.create(&contact_named("two")).unwrap();
    assert_ne!(first, second);

    service.delete(second).unwrap();
    let third = service.create(&contact_named("three")).unwrap();
    assert!(third > second, "deleted id {second} must not be reused");
}

#[test]
fn delete_removes_row_and_second_delete_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service: CrudService<'_, Contact> = CrudService::new(&conn);

    let id = service.create(&contact_named("temporary")).unwrap();
    service.delete(id).unwrap();
    assert!(service.list().unwrap().is_empty());

    let err = service.delete(id).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound {
            entity: "contacts",
            id: missing,
        } if missing == id
    ));
}

#[test]
fn delete_unknown_id_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service: CrudService<'_, Program> = CrudService::new(&conn);

    let err = service.delete(4242).unwrap_err();
    assert!(matches!(err, RepoError::NotFound { .. }));
}

#[test]
fn company_roundtrip_keeps_all_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo: SqliteEntityRepository<'_, Company> = SqliteEntityRepository::new(&conn);

    let draft = NewCompany {
        name: "WomenTech Partners".to_string(),
        kind: Some("NGO".to_string()),
        contact_person: Some("Dana Cole".to_string()),
        email: Some("dana@wtp.org".to_string()),
        phone: Some("555-0101".to_string()),
        location: Some("Nairobi".to_string()),
        role: Some("Sponsor".to_string()),
        status: Some("Active".to_string()),
        contribution: Some("Venue".to_string()),
        notes: Some("Hosts the monthly meetup.".to_string()),
    };
    let id = repo.insert(&draft).unwrap();

    let loaded = repo.get(id).unwrap().unwrap();
    assert_eq!(loaded.name, "WomenTech Partners");
    assert_eq!(loaded.kind.as_deref(), Some("NGO"));
    assert_eq!(loaded.contact_person.as_deref(), Some("Dana Cole"));
    assert_eq!(loaded.location.as_deref(), Some("Nairobi"));
    assert_eq!(loaded.notes.as_deref(), Some("Hosts the monthly meetup."));
}

#[test]
fn get_unknown_id_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo: SqliteEntityRepository<'_, Company> = SqliteEntityRepository::new(&conn);
    assert!(repo.get(99).unwrap().is_none());
}

#[test]
fn first_and_count_track_table_contents() {
    let conn = open_db_in_memory().unwrap();
    let repo: SqliteEntityRepository<'_, Program> = SqliteEntityRepository::new(&conn);

    assert!(repo.first().unwrap().is_none());
    assert_eq!(repo.count().unwrap(), 0);

    let first_id = repo
        .insert(&NewProgram {
            name: Some("Mentorship 2025".to_string()),
            status: Some("Active".to_string()),
        })
        .unwrap();
    repo.insert(&NewProgram {
        name: Some("Skill Workshop".to_string()),
        status: Some("Pending".to_string()),
    })
    .unwrap();

    assert_eq!(repo.count().unwrap(), 2);
    assert_eq!(repo.first().unwrap().unwrap().id, first_id);
}

#[test]
fn insert_many_assigns_ascending_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo: SqliteEntityRepository<'_, Contact> = SqliteEntityRepository::new(&conn);

    let drafts = vec![contact_named("a"), contact_named("b"), contact_named("c")];
    let ids = repo.insert_many(&drafts).unwrap();

    assert_eq!(ids.len(), 3);
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}
