use std::sync::Arc;
use std::thread;
use wordlist_core::db::DATABASE_FILE_NAME;
use wordlist_core::{StoreError, WordDatabase};

// One test per binary: the shared instance lives for the whole process.
#[test]
fn concurrent_shared_calls_create_one_instance() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DATABASE_FILE_NAME);
    assert!(WordDatabase::shared_instance().is_none());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let path = path.clone();
            thread::spawn(move || WordDatabase::shared(&path).unwrap())
        })
        .collect();
    let instances: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert!(instances
        .windows(2)
        .all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
    assert!(Arc::ptr_eq(
        &instances[0],
        &WordDatabase::shared_instance().unwrap()
    ));
    assert_eq!(instances[0].all_words().latest().unwrap().len(), 5);

    std::fs::create_dir(dir.path().join("nested")).unwrap();
    let aliased = dir.path().join("nested").join("..").join(DATABASE_FILE_NAME);
    assert_ne!(aliased, path);
    let same = WordDatabase::shared(&aliased).unwrap();
    assert!(Arc::ptr_eq(&instances[0], &same));

    let other = dir.path().join("other_database");
    match WordDatabase::shared(&other) {
        Err(StoreError::PathConflict { active, requested }) => {
            assert_eq!(active, path);
            assert_eq!(requested, other);
        }
        Err(err) => panic!("unexpected error: {err}"),
        Ok(_) => panic!("shared database must not switch paths"),
    }
}
