//! Shared word database handle.
//!
//! # Responsibility
//! - Open the connection, seed an empty table and publish the first snapshot.
//! - Hand the connection to the writer thread and expose the live query.
//! - Guard the process-wide instance so it is created at most once.
//!
//! # Invariants
//! - `shared` returns the same instance to every caller, including callers
//!   racing on first initialization.
//! - The live query already holds a snapshot when `open*` returns.

use super::seed::seed_if_empty;
use super::worker::{Mutation, WriteWorker};
use super::{StoreError, StoreFault, StoreResult, WordSnapshot};
use crate::db::{open_db, open_db_in_memory};
use crate::live::{LiveQuery, Subscription};
use crate::repo::word_repo::{SqliteWordStore, WordStore};
use log::info;
use once_cell::sync::OnceCell;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

static SHARED_DATABASE: OnceCell<Arc<WordDatabase>> = OnceCell::new();

/// One open word database with its writer thread and live query.
pub struct WordDatabase {
    path: Option<PathBuf>,
    words: LiveQuery<WordSnapshot>,
    faults: LiveQuery<StoreFault>,
    worker: WriteWorker,
}

impl WordDatabase {
    /// Opens (or creates) the database file at `path`.
    ///
    /// Prefer `shared` in application code; this constructor exists for
    /// callers that manage the instance themselves.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = open_db(&path)?;
        Self::start(conn, Some(path))
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = open_db_in_memory()?;
        Self::start(conn, None)
    }

    /// Returns the process-wide database, opening it at `path` on first use.
    ///
    /// # Errors
    /// - Propagates open/seed failures from the first initialization.
    /// - Returns `StoreError::PathConflict` when already open at another path.
    ///   Paths naming the same file (relative vs absolute, `..` segments,
    ///   symlinks) are not a conflict.
    pub fn shared(path: impl AsRef<Path>) -> StoreResult<Arc<Self>> {
        let requested = path.as_ref();
        let database =
            SHARED_DATABASE.get_or_try_init(|| Self::open(requested).map(Arc::new))?;

        match database.path() {
            Some(active) if !same_file(active, requested) => Err(StoreError::PathConflict {
                active: active.to_path_buf(),
                requested: requested.to_path_buf(),
            }),
            _ => Ok(Arc::clone(database)),
        }
    }

    /// Returns the process-wide database if `shared` has succeeded before.
    pub fn shared_instance() -> Option<Arc<Self>> {
        SHARED_DATABASE.get().map(Arc::clone)
    }

    fn start(conn: Connection, path: Option<PathBuf>) -> StoreResult<Self> {
        let started_at = Instant::now();

        let (seeded, initial) = {
            let tx = conn.unchecked_transaction()?;
            let store = SqliteWordStore::try_new(&tx)?;
            let seeded = seed_if_empty(&store)?;
            let initial = store.all_words()?;
            tx.commit()?;
            (seeded, initial)
        };

        let words = LiveQuery::new();
        words.publish(Arc::new(initial));
        let faults = LiveQuery::events();
        let worker = WriteWorker::spawn(conn, words.clone(), faults.clone())?;

        info!(
            "event=word_store_open module=store status=ok mode={} seeded={} duration_ms={}",
            if path.is_some() { "file" } else { "memory" },
            seeded,
            started_at.elapsed().as_millis()
        );

        Ok(Self {
            path,
            words,
            faults,
            worker,
        })
    }

    /// File backing this database; `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Live query of every word ordered by id.
    pub fn all_words(&self) -> LiveQuery<WordSnapshot> {
        self.words.clone()
    }

    /// Subscribes to faults from mutations submitted after this call.
    pub fn faults(&self) -> Subscription<StoreFault> {
        self.faults.subscribe()
    }

    /// Queues a mutation on the writer thread.
    ///
    /// Blocks only while the writer queue is full.
    pub fn submit(&self, mutation: Mutation) -> StoreResult<()> {
        self.worker.submit(mutation)
    }

    /// Blocks until every mutation submitted so far has run.
    pub fn flush(&self) -> StoreResult<()> {
        self.worker.flush()
    }
}

fn same_file(active: &Path, requested: &Path) -> bool {
    if active == requested {
        return true;
    }
    match (fs::canonicalize(active), fs::canonicalize(requested)) {
        (Ok(active), Ok(requested)) => active == requested,
        _ => false,
    }
}
