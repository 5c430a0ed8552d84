//! Word domain model.
//!
//! # Responsibility
//! - Define the canonical record stored in `word_table`.
//! - Provide write-path validation shared by every store implementation.
//!
//! # Invariants
//! - `id` is `None` until the store assigns one, and never changes afterwards.
//! - `text` must be non-empty before persistence.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Primary key assigned by the store on first insert.
pub type WordId = i64;

/// Sentinel used by host boundaries (screen extras, FFI) for "no id".
pub const UNSAVED_WORD_ID: WordId = -1;

/// Validation failures for word write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordValidationError {
    EmptyText,
}

impl Display for WordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "word text cannot be empty"),
        }
    }
}

impl Error for WordValidationError {}

/// One row of `word_table`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Store-assigned primary key; `None` for words not yet persisted.
    pub id: Option<WordId>,
    /// User-supplied text. Serialized as `word` to match the column name.
    #[serde(rename = "word")]
    pub text: String,
}

impl Word {
    /// Creates an unsaved word from user input.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
        }
    }

    /// Creates a word that refers to an existing row.
    pub fn with_id(id: WordId, text: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            text: text.into(),
        }
    }

    /// Builds a word from a host-side id that may carry the `-1` sentinel.
    pub fn from_host(id: WordId, text: impl Into<String>) -> Self {
        Self {
            id: (id != UNSAVED_WORD_ID).then_some(id),
            text: text.into(),
        }
    }

    /// Returns the id in host form, mapping `None` to `UNSAVED_WORD_ID`.
    pub fn host_id(&self) -> WordId {
        self.id.unwrap_or(UNSAVED_WORD_ID)
    }

    /// Returns whether this word has been assigned a store id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Checks write-path invariants.
    pub fn validate(&self) -> Result<(), WordValidationError> {
        if self.text.is_empty() {
            return Err(WordValidationError::EmptyText);
        }
        Ok(())
    }
}
