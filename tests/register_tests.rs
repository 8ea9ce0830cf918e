mod common;
use chrono::{TimeZone, Utc};
use common::{init_db, rck, setup_test_cache, setup_test_db};
use predicates::str::contains;
use rcheckin::cache::{KeyValueStore, MemoryStore, USER_DATA_KEY};
use rcheckin::core::register::{NewcomerForm, RegisterLogic, VisitorForm};
use rcheckin::db::initialize::init_db as init_schema;
use rcheckin::db::pool::DbPool;
use rcheckin::db::records::load_records;
use rcheckin::errors::AppError;
use rcheckin::models::user::UserDoc;

fn store() -> DbPool {
    let pool = DbPool::in_memory().expect("in-memory db");
    init_schema(&pool.conn).expect("schema");
    pool
}

fn newcomer(name: &str) -> NewcomerForm {
    NewcomerForm {
        name: name.to_string(),
        department: "college".to_string(),
        year_level: "1st year".to_string(),
    }
}

#[test]
fn test_register_visitor_writes_store_and_cache() {
    let mut pool = store();
    let mut cache = MemoryStore::new();
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 8, 30, 0).unwrap();

    let form = VisitorForm {
        name: "  Ana Cruz ".to_string(),
        purpose: Some("Enrollment".to_string()),
        office: Some("registrar office".to_string()),
    };
    let doc = RegisterLogic::register_visitor(&mut pool, &mut cache, &form, now).unwrap();

    assert_eq!(doc.id, format!("visitor_{}", now.timestamp_millis()));
    assert_eq!(doc.name, "Ana Cruz");
    assert_eq!(doc.office, "Registrar Office");
    assert_eq!(doc.kind, "visitor");
    assert_eq!(doc.registered_at, "2025-06-15T08:30:00.000Z");

    let records = load_records(&mut pool).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].display_name(), "Ana Cruz");
    assert_eq!(
        records[0].get("registeredAt").and_then(|v| v.as_str()),
        Some("2025-06-15T08:30:00.000Z")
    );

    match RegisterLogic::current_user(&cache) {
        Some(UserDoc::Visitor(v)) => assert_eq!(v, doc),
        other => panic!("unexpected cached user: {other:?}"),
    }
}

#[test]
fn test_register_visitor_requires_name() {
    let mut pool = store();
    let mut cache = MemoryStore::new();

    let form = VisitorForm {
        name: "   ".to_string(),
        ..Default::default()
    };
    let err = RegisterLogic::register_visitor(&mut pool, &mut cache, &form, Utc::now()).unwrap_err();

    assert_eq!(err.to_string(), "Please enter your name");
    assert!(cache.is_empty());
    assert!(load_records(&mut pool).unwrap().is_empty());
}

#[test]
fn test_register_visitor_rejects_unknown_office() {
    let mut pool = store();
    let mut cache = MemoryStore::new();

    let form = VisitorForm {
        name: "Ana".to_string(),
        purpose: None,
        office: Some("Cafeteria".to_string()),
    };
    let err = RegisterLogic::register_visitor(&mut pool, &mut cache, &form, Utc::now()).unwrap_err();
    assert!(matches!(err, AppError::Registration(_)));
}

#[test]
fn test_register_newcomer_and_guard() {
    let mut pool = store();
    let mut cache = MemoryStore::new();

    let doc = RegisterLogic::register_newcomer(&mut pool, &mut cache, &newcomer("Ben"), Utc::now())
        .unwrap();
    assert_eq!(doc.department, "College");
    assert_eq!(doc.year_level, "1st Year");
    assert!(doc.id.starts_with("newcomer_"));

    let err = RegisterLogic::register_newcomer(&mut pool, &mut cache, &newcomer("Other"), Utc::now())
        .unwrap_err();
    assert!(matches!(err, AppError::AlreadyRegistered(ref n) if n == "Ben"));
    assert_eq!(load_records(&mut pool).unwrap().len(), 1);

    // a logout lifts the guard
    let gone = RegisterLogic::logout(&mut cache).unwrap();
    assert_eq!(gone.map(|u| u.name().to_string()), Some("Ben".to_string()));
    assert!(RegisterLogic::current_user(&cache).is_none());
    RegisterLogic::register_newcomer(&mut pool, &mut cache, &newcomer("Other"), Utc::now())
        .unwrap();
}

#[test]
fn test_newcomer_guard_ignores_cached_visitor() {
    let mut pool = store();
    let mut cache = MemoryStore::new();

    let visitor = VisitorForm {
        name: "Ana".to_string(),
        ..Default::default()
    };
    RegisterLogic::register_visitor(&mut pool, &mut cache, &visitor, Utc::now()).unwrap();
    RegisterLogic::register_newcomer(&mut pool, &mut cache, &newcomer("Ana"), Utc::now()).unwrap();

    assert!(RegisterLogic::current_user(&cache).unwrap().is_newcomer());
}

#[test]
fn test_newcomer_guard_only_needs_type() {
    let mut pool = store();
    let mut cache = MemoryStore::new();
    // older cached newcomer without department / yearLevel
    cache
        .set(USER_DATA_KEY, r#"{"id": "newcomer_1", "name": "Dee", "type": "newcomer"}"#)
        .unwrap();

    let err = RegisterLogic::register_newcomer(&mut pool, &mut cache, &newcomer("Eli"), Utc::now())
        .unwrap_err();
    assert!(matches!(err, AppError::AlreadyRegistered(ref n) if n == "Dee"));
    assert!(load_records(&mut pool).unwrap().is_empty());
}

#[test]
fn test_register_newcomer_requires_all_fields() {
    let mut pool = store();
    let mut cache = MemoryStore::new();

    let form = NewcomerForm {
        name: "Ben".to_string(),
        department: String::new(),
        year_level: "Grade 7".to_string(),
    };
    let err = RegisterLogic::register_newcomer(&mut pool, &mut cache, &form, Utc::now()).unwrap_err();
    assert_eq!(err.to_string(), "Please fill in all required fields");

    let form = NewcomerForm {
        department: "University".to_string(),
        ..form
    };
    let err = RegisterLogic::register_newcomer(&mut pool, &mut cache, &form, Utc::now()).unwrap_err();
    assert!(err.to_string().contains("Unknown department"));
}

#[test]
fn test_malformed_cached_user_is_ignored() {
    let mut pool = store();
    let mut cache = MemoryStore::new();
    cache.set(USER_DATA_KEY, "{not json").unwrap();

    assert!(RegisterLogic::current_user(&cache).is_none());
    RegisterLogic::register_newcomer(&mut pool, &mut cache, &newcomer("Cleo"), Utc::now()).unwrap();
    assert_eq!(RegisterLogic::current_user(&cache).unwrap().name(), "Cleo");
}

#[test]
fn test_store_failure_leaves_cache_untouched() {
    // no schema: the users table does not exist
    let mut pool = DbPool::in_memory().unwrap();
    let mut cache = MemoryStore::new();

    let form = VisitorForm {
        name: "Ana".to_string(),
        ..Default::default()
    };
    let err = RegisterLogic::register_visitor(&mut pool, &mut cache, &form, Utc::now()).unwrap_err();

    assert!(err.to_string().starts_with("Failed to register. Please try again."));
    assert!(cache.is_empty());
}

// ---------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------

#[test]
fn test_cli_register_visitor_and_log() {
    let db = setup_test_db("cli_register_visitor");
    let cache = setup_test_cache("cli_register_visitor");
    init_db(&db);

    rck()
        .args([
            "--db",
            &db,
            "--cache",
            &cache,
            "register",
            "visitor",
            "--name",
            "Ana Cruz",
            "--office",
            "finance office",
        ])
        .assert()
        .success()
        .stdout(contains("Welcome, Ana Cruz!"))
        .stdout(contains("Finance Office"));

    rck()
        .args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("register_visitor"))
        .stdout(contains("migration_applied"));
}

#[test]
fn test_cli_newcomer_already_registered_continues() {
    let db = setup_test_db("cli_newcomer_already");
    let cache = setup_test_cache("cli_newcomer_already");
    init_db(&db);

    let register = |name: &str| {
        let mut cmd = rck();
        cmd.args([
            "--db",
            &db,
            "--cache",
            &cache,
            "register",
            "newcomer",
            "--name",
            name,
            "--department",
            "High School",
            "--year-level",
            "Grade 11",
        ]);
        cmd
    };

    register("Ben Reyes").assert().success();

    register("Someone Else")
        .assert()
        .success()
        .stderr(contains("already registered as a newcomer"))
        .stdout(contains("Ben Reyes"));

    rck()
        .args(["--db", &db, "--cache", &cache, "logout"])
        .assert()
        .success()
        .stdout(contains("Goodbye, Ben Reyes!"));

    rck()
        .args(["--db", &db, "--cache", &cache, "logout"])
        .assert()
        .success()
        .stdout(contains("No user is currently registered"));
}

#[test]
fn test_cli_register_missing_name_fails() {
    let db = setup_test_db("cli_register_missing_name");
    let cache = setup_test_cache("cli_register_missing_name");
    init_db(&db);

    rck()
        .args([
            "--db", &db, "--cache", &cache, "register", "visitor", "--name", " ",
        ])
        .assert()
        .failure()
        .stderr(contains("Please enter your name"));
}
