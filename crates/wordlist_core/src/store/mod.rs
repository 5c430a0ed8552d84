//! Process-wide word database: one connection, one writer thread, one live query.
//!
//! # Responsibility
//! - Own the only SQLite connection and serialize every mutation on a worker.
//! - Publish a full snapshot of `word_table` after each successful mutation.
//! - Report background storage faults on a separate event feed.
//!
//! # Invariants
//! - Mutations run in FIFO submission order.
//! - The snapshot feed always holds the table contents after the last
//!   successful mutation.

use crate::db::DbError;
use crate::model::word::Word;
use crate::repo::word_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::sync::Arc;

pub mod database;
pub mod seed;
mod worker;

pub use database::WordDatabase;
pub use worker::Mutation;

/// One complete ordered row set delivered by the live query.
pub type WordSnapshot = Arc<Vec<Word>>;

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while opening or talking to the shared database.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Repo(RepoError),
    PathConflict { active: PathBuf, requested: PathBuf },
    WorkerSpawn(std::io::Error),
    WorkerDisconnected,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::PathConflict { active, requested } => write!(
                f,
                "word database already open at `{}`; refusing to switch to `{}`",
                active.display(),
                requested.display()
            ),
            Self::WorkerSpawn(err) => write!(f, "failed to start writer thread: {err}"),
            Self::WorkerDisconnected => write!(f, "writer thread is no longer running"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::WorkerSpawn(err) => Some(err),
            Self::PathConflict { .. } | Self::WorkerDisconnected => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Kind of mutation submitted to the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    Insert,
    Update,
    DeleteWord,
    DeleteAll,
}

impl MutationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Update => "update",
            Self::DeleteWord => "delete_word",
            Self::DeleteAll => "delete_all",
        }
    }
}

/// A background mutation that did not end in a published snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreFault {
    pub operation: MutationKind,
    /// `true` when the write itself was committed and only the snapshot
    /// query that follows it failed.
    pub committed: bool,
    pub message: String,
}
