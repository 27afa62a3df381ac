#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_fresh_database_has_no_blobs() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.get_blob(EXPENSES_KEY).unwrap().is_none());
    assert!(db.get_blob(BUDGETS_KEY).unwrap().is_none());
}

#[test]
fn test_put_then_get_blob() {
    let db = Database::open_in_memory().unwrap();
    db.put_blob(EXPENSES_KEY, "[]").unwrap();
    assert_eq!(db.get_blob(EXPENSES_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_put_blob_overwrites() {
    let db = Database::open_in_memory().unwrap();
    db.put_blob(BUDGETS_KEY, r#"{"Food":"100"}"#).unwrap();
    db.put_blob(BUDGETS_KEY, r#"{"Food":"250"}"#).unwrap();
    assert_eq!(
        db.get_blob(BUDGETS_KEY).unwrap().as_deref(),
        Some(r#"{"Food":"250"}"#)
    );
}

#[test]
fn test_blobs_are_independent() {
    let db = Database::open_in_memory().unwrap();
    db.put_blob(EXPENSES_KEY, "expenses-value").unwrap();
    db.put_blob(BUDGETS_KEY, "budgets-value").unwrap();
    assert_eq!(
        db.get_blob(EXPENSES_KEY).unwrap().as_deref(),
        Some("expenses-value")
    );
    assert_eq!(
        db.get_blob(BUDGETS_KEY).unwrap().as_deref(),
        Some("budgets-value")
    );
}

#[test]
fn test_reopen_file_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spendtui.db");
    {
        let db = Database::open(&path).unwrap();
        db.put_blob(EXPENSES_KEY, "[1]").unwrap();
    }
    let db = Database::open(&path).unwrap();
    assert_eq!(db.get_blob(EXPENSES_KEY).unwrap().as_deref(), Some("[1]"));
}

#[test]
fn test_migrate_is_idempotent() {
    let mut db = Database::open_in_memory().unwrap();
    db.put_blob(EXPENSES_KEY, "[]").unwrap();
    db.migrate().unwrap();
    let version: i32 = db
        .conn
        .query_row("SELECT version FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, schema::CURRENT_VERSION);
    assert_eq!(db.get_blob(EXPENSES_KEY).unwrap().as_deref(), Some("[]"));
}
