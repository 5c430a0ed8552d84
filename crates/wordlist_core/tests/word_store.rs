use rusqlite::Connection;
use wordlist_core::db::open_db_in_memory;
use wordlist_core::store::seed::seed_if_empty;
use wordlist_core::{RepoError, SqliteWordStore, Word, WordStore, SEED_WORDS};

#[test]
fn insert_assigns_increasing_ids() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteWordStore::try_new(&conn).unwrap();

    let first = store.insert(&Word::new("Carla")).unwrap();
    let second = store.insert(&Word::new("Ximena")).unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 2);
}

#[test]
fn insert_with_explicit_id_keeps_it_and_duplicates_fail() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteWordStore::try_new(&conn).unwrap();

    assert_eq!(store.insert(&Word::with_id(40, "Ana")).unwrap(), 40);
    let err = store.insert(&Word::with_id(40, "Other")).unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));

    assert_eq!(store.insert(&Word::new("Next")).unwrap(), 41);
}

#[test]
fn all_words_is_ordered_by_id() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteWordStore::try_new(&conn).unwrap();

    store.insert(&Word::with_id(9, "nine")).unwrap();
    store.insert(&Word::with_id(3, "three")).unwrap();
    store.insert(&Word::with_id(5, "five")).unwrap();

    let ids: Vec<_> = store
        .all_words()
        .unwrap()
        .into_iter()
        .map(|word| word.id.unwrap())
        .collect();
    assert_eq!(ids, vec![3, 5, 9]);
}

#[test]
fn update_replaces_text_for_same_id() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteWordStore::try_new(&conn).unwrap();

    let id = store.insert(&Word::new("Natalia")).unwrap();
    store.update(&Word::with_id(id, "Natalia2")).unwrap();

    assert_eq!(store.all_words().unwrap(), vec![Word::with_id(id, "Natalia2")]);
}

#[test]
fn update_and_delete_report_missing_rows() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteWordStore::try_new(&conn).unwrap();

    let err = store.update(&Word::with_id(77, "ghost")).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(77)));

    let err = store.delete_word(&Word::with_id(77, "ghost")).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(77)));

    let err = store.update(&Word::new("no id")).unwrap_err();
    assert!(matches!(err, RepoError::MissingId));
}

#[test]
fn delete_word_removes_exactly_one_row() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteWordStore::try_new(&conn).unwrap();

    let keep = store.insert(&Word::new("keep")).unwrap();
    let gone = store.insert(&Word::new("gone")).unwrap();
    store.delete_word(&Word::with_id(gone, "gone")).unwrap();

    assert_eq!(store.all_words().unwrap(), vec![Word::with_id(keep, "keep")]);
}

#[test]
fn delete_all_empties_table() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteWordStore::try_new(&conn).unwrap();

    store.insert(&Word::new("a")).unwrap();
    store.insert(&Word::new("b")).unwrap();

    assert_eq!(store.delete_all().unwrap(), 2);
    assert!(store.all_words().unwrap().is_empty());
    assert!(store.any_word().unwrap().is_empty());
}

#[test]
fn any_word_returns_at_most_one_row() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteWordStore::try_new(&conn).unwrap();

    assert!(store.any_word().unwrap().is_empty());
    store.insert(&Word::new("a")).unwrap();
    store.insert(&Word::new("b")).unwrap();
    assert_eq!(store.any_word().unwrap().len(), 1);
}

#[test]
fn validation_failure_blocks_writes() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteWordStore::try_new(&conn).unwrap();

    assert!(matches!(
        store.insert(&Word::new("")).unwrap_err(),
        RepoError::Validation(_)
    ));
    let id = store.insert(&Word::new("ok")).unwrap();
    assert!(matches!(
        store.update(&Word::with_id(id, "")).unwrap_err(),
        RepoError::Validation(_)
    ));
}

#[test]
fn read_path_keeps_rows_with_empty_text() {
    let conn = open_db_in_memory().unwrap();
    conn.execute("INSERT INTO word_table (word) VALUES ('');", [])
        .unwrap();
    conn.execute("INSERT INTO word_table (word) VALUES ('after');", [])
        .unwrap();
    let store = SqliteWordStore::try_new(&conn).unwrap();

    assert_eq!(
        store.all_words().unwrap(),
        vec![Word::with_id(1, ""), Word::with_id(2, "after")]
    );
    assert_eq!(store.any_word().unwrap().len(), 1);
}

#[test]
fn store_rejects_connection_without_schema() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteWordStore::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version: 2,
            actual_version: 0,
        }) => {}
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("store should reject unmigrated connection"),
    }
}

#[test]
fn seed_inserts_five_words_in_order_once() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteWordStore::try_new(&conn).unwrap();

    assert_eq!(seed_if_empty(&store).unwrap(), 5);
    assert_eq!(seed_if_empty(&store).unwrap(), 0);

    let words = store.all_words().unwrap();
    let expected: Vec<_> = SEED_WORDS
        .iter()
        .enumerate()
        .map(|(index, text)| Word::with_id(index as i64 + 1, *text))
        .collect();
    assert_eq!(words, expected);
}

#[test]
fn seed_skips_non_empty_table() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteWordStore::try_new(&conn).unwrap();

    store.insert(&Word::new("mine")).unwrap();
    assert_eq!(seed_if_empty(&store).unwrap(), 0);
    assert_eq!(store.all_words().unwrap().len(), 1);
}

#[test]
fn words_serialize_with_column_names() {
    let json = serde_json::to_string(&Word::with_id(1, "Carla")).unwrap();
    assert_eq!(json, r#"{"id":1,"word":"Carla"}"#);
}
