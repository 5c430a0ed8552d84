use rusqlite::Connection;
use wordlist_core::db::schema::{apply_schema, latest_version, SchemaAction, SCHEMA_VERSION};
use wordlist_core::db::{open_db, open_db_in_memory, DATABASE_FILE_NAME};

#[test]
fn open_db_in_memory_creates_word_table_at_version_two() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(latest_version(), 2);
    assert_eq!(schema_version(&conn), SCHEMA_VERSION);
    assert_table_exists(&conn, "word_table");
}

#[test]
fn open_db_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join(DATABASE_FILE_NAME);

    let conn = open_db(&path).unwrap();
    assert!(path.exists());
    assert_table_exists(&conn, "word_table");
}

#[test]
fn reopening_current_schema_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DATABASE_FILE_NAME);

    let conn = open_db(&path).unwrap();
    conn.execute("INSERT INTO word_table (word) VALUES ('kept');", [])
        .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(row_count(&conn), 1);
}

#[test]
fn newer_schema_version_is_dropped_and_recreated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE word_table (id INTEGER PRIMARY KEY, word TEXT, extra TEXT);
         INSERT INTO word_table (word, extra) VALUES ('old', 'x');
         PRAGMA user_version = 999;",
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), SCHEMA_VERSION);
    assert_eq!(row_count(&conn), 0);
    assert!(!column_exists(&conn, "extra"));
}

#[test]
fn older_and_unversioned_tables_are_reset() {
    let mut older = Connection::open_in_memory().unwrap();
    older
        .execute_batch(
            "CREATE TABLE word_table (id INTEGER PRIMARY KEY, word TEXT NOT NULL);
             PRAGMA user_version = 1;",
        )
        .unwrap();
    assert_eq!(
        apply_schema(&mut older).unwrap(),
        SchemaAction::Reset { from_version: 1 }
    );

    let mut unversioned = Connection::open_in_memory().unwrap();
    unversioned
        .execute_batch("CREATE TABLE word_table (id INTEGER PRIMARY KEY, word TEXT);")
        .unwrap();
    assert_eq!(
        apply_schema(&mut unversioned).unwrap(),
        SchemaAction::Reset { from_version: 0 }
    );
}

#[test]
fn negative_schema_version_is_reset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DATABASE_FILE_NAME);

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE word_table (id INTEGER PRIMARY KEY, word TEXT NOT NULL);
         INSERT INTO word_table (word) VALUES ('stale');
         PRAGMA user_version = -1;",
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), SCHEMA_VERSION);
    assert_eq!(row_count(&conn), 0);

    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("PRAGMA user_version = -7;").unwrap();
    assert_eq!(
        apply_schema(&mut conn).unwrap(),
        SchemaAction::Reset { from_version: -7 }
    );
}

#[test]
fn apply_schema_reports_created_then_unchanged() {
    let mut conn = Connection::open_in_memory().unwrap();
    assert_eq!(apply_schema(&mut conn).unwrap(), SchemaAction::Created);
    assert_eq!(apply_schema(&mut conn).unwrap(), SchemaAction::Unchanged);
}

#[test]
fn autoincrement_does_not_reuse_ids_after_truncate() {
    let conn = open_db_in_memory().unwrap();
    conn.execute("INSERT INTO word_table (word) VALUES ('a');", [])
        .unwrap();
    conn.execute("DELETE FROM word_table;", []).unwrap();
    conn.execute("INSERT INTO word_table (word) VALUES ('b');", [])
        .unwrap();

    let id: i64 = conn
        .query_row("SELECT id FROM word_table;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(id, 2);
}

#[test]
fn word_column_rejects_null() {
    let conn = open_db_in_memory().unwrap();
    let result = conn.execute("INSERT INTO word_table (word) VALUES (NULL);", []);
    assert!(result.is_err());
}

fn schema_version(conn: &Connection) -> i32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn row_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM word_table;", [], |row| row.get(0))
        .unwrap()
}

fn column_exists(conn: &Connection, column: &str) -> bool {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(SELECT 1 FROM pragma_table_info('word_table') WHERE name = ?1);",
            [column],
            |row| row.get(0),
        )
        .unwrap();
    exists == 1
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
