//! Repository façade over the shared word database.
//!
//! # Responsibility
//! - Submit every mutation to the writer thread, fire-and-forget.
//! - Hand out the live query captured once at construction.
//!
//! # Invariants
//! - Mutation calls never wait for SQL to run; completion is only visible
//!   through the live query (or the fault feed on failure).

use crate::live::LiveQuery;
use crate::model::word::Word;
use crate::store::{Mutation, WordDatabase, WordSnapshot};
use log::warn;
use std::sync::Arc;

/// Forwarding layer between controllers and `WordDatabase`.
pub struct WordRepository {
    database: Arc<WordDatabase>,
    all_words: LiveQuery<WordSnapshot>,
}

impl WordRepository {
    /// Creates a repository over an injected database handle.
    pub fn new(database: Arc<WordDatabase>) -> Self {
        let all_words = database.all_words();
        Self {
            database,
            all_words,
        }
    }

    /// Live query of every word, ordered by id.
    pub fn all_words(&self) -> &LiveQuery<WordSnapshot> {
        &self.all_words
    }

    pub fn insert(&self, word: Word) {
        self.dispatch(Mutation::Insert(word));
    }

    pub fn update(&self, word: Word) {
        self.dispatch(Mutation::Update(word));
    }

    pub fn delete_word(&self, word: Word) {
        self.dispatch(Mutation::DeleteWord(word));
    }

    pub fn delete_all(&self) {
        self.dispatch(Mutation::DeleteAll);
    }

    fn dispatch(&self, mutation: Mutation) {
        let kind = mutation.kind();
        if let Err(err) = self.database.submit(mutation) {
            warn!(
                "event=word_mutation module=service status=dropped op={} error={}",
                kind.as_str(),
                err
            );
        }
    }
}
