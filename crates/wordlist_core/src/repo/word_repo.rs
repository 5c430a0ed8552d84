//! Word store contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide the insert/update/delete/query surface over `word_table`.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `Word::validate()` before SQL mutations.
//! - `all_words` is ordered by primary key ascending.
//! - Read paths accept every row the schema allows, including empty text.

use crate::db::schema::{current_user_version, SCHEMA_VERSION};
use crate::db::DbError;
use crate::model::word::{Word, WordId, WordValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const WORD_SELECT_SQL: &str = "SELECT id, word FROM word_table";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for word persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(WordValidationError),
    Db(DbError),
    NotFound(WordId),
    MissingId,
    InvalidData(String),
    UninitializedConnection {
        expected_version: i32,
        actual_version: i32,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "word not found: {id}"),
            Self::MissingId => write!(f, "word has no id"),
            Self::InvalidData(message) => write!(f, "invalid persisted word data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_)
            | Self::MissingId
            | Self::InvalidData(_)
            | Self::UninitializedConnection { .. } => None,
        }
    }
}

impl From<WordValidationError> for RepoError {
    fn from(value: WordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Data-access interface for `word_table`.
pub trait WordStore {
    /// Inserts a word, assigning a fresh id when `word.id` is `None`.
    fn insert(&self, word: &Word) -> RepoResult<WordId>;
    /// Replaces the text of the row matching `word.id`.
    fn update(&self, word: &Word) -> RepoResult<()>;
    /// Removes the row matching `word.id`.
    fn delete_word(&self, word: &Word) -> RepoResult<()>;
    /// Removes every row and returns how many were removed.
    fn delete_all(&self) -> RepoResult<usize>;
    /// Returns every row ordered by id.
    fn all_words(&self) -> RepoResult<Vec<Word>>;
    /// Returns at most one row; empty when the table is empty.
    fn any_word(&self) -> RepoResult<Vec<Word>>;
}

/// SQLite-backed word store.
pub struct SqliteWordStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteWordStore<'conn> {
    /// Wraps a connection that was opened through `db::open_db*`.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let actual_version = current_user_version(conn)?;
        if actual_version != SCHEMA_VERSION {
            return Err(RepoError::UninitializedConnection {
                expected_version: SCHEMA_VERSION,
                actual_version,
            });
        }
        Ok(Self { conn })
    }
}

impl WordStore for SqliteWordStore<'_> {
    fn insert(&self, word: &Word) -> RepoResult<WordId> {
        word.validate()?;

        match word.id {
            Some(id) => {
                self.conn.execute(
                    "INSERT INTO word_table (id, word) VALUES (?1, ?2);",
                    params![id, word.text.as_str()],
                )?;
                Ok(id)
            }
            None => {
                self.conn.execute(
                    "INSERT INTO word_table (word) VALUES (?1);",
                    [word.text.as_str()],
                )?;
                Ok(self.conn.last_insert_rowid())
            }
        }
    }

    fn update(&self, word: &Word) -> RepoResult<()> {
        word.validate()?;
        let id = word.id.ok_or(RepoError::MissingId)?;

        let changed = self.conn.execute(
            "UPDATE word_table SET word = ?1 WHERE id = ?2;",
            params![word.text.as_str(), id],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_word(&self, word: &Word) -> RepoResult<()> {
        let id = word.id.ok_or(RepoError::MissingId)?;

        let changed = self
            .conn
            .execute("DELETE FROM word_table WHERE id = ?1;", [id])?;
        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_all(&self) -> RepoResult<usize> {
        let removed = self.conn.execute("DELETE FROM word_table;", [])?;
        Ok(removed)
    }

    fn all_words(&self) -> RepoResult<Vec<Word>> {
        self.select(&format!("{WORD_SELECT_SQL} ORDER BY id ASC;"))
    }

    fn any_word(&self) -> RepoResult<Vec<Word>> {
        self.select(&format!("{WORD_SELECT_SQL} LIMIT 1;"))
    }
}

impl SqliteWordStore<'_> {
    fn select(&self, sql: &str) -> RepoResult<Vec<Word>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([])?;
        let mut words = Vec::new();

        while let Some(row) = rows.next()? {
            words.push(parse_word_row(row)?);
        }

        Ok(words)
    }
}

fn parse_word_row(row: &Row<'_>) -> RepoResult<Word> {
    let id: WordId = row.get("id")?;
    let text: Option<String> = row.get("word")?;
    let text = text.ok_or_else(|| {
        RepoError::InvalidData(format!("null value in word_table.word for id {id}"))
    })?;

    Ok(Word::with_id(id, text))
}
