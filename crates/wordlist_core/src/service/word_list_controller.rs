//! Screen-scoped controller for the word list.
//!
//! Owns exactly one `WordRepository` and delegates to it without adding
//! logic. Screens keep it in an `Arc` so recreated views share it.

use crate::live::LiveQuery;
use crate::model::word::Word;
use crate::service::word_repository::WordRepository;
use crate::store::{WordDatabase, WordSnapshot};
use std::sync::Arc;

pub struct WordListController {
    repository: WordRepository,
    all_words: LiveQuery<WordSnapshot>,
}

impl WordListController {
    pub fn new(database: Arc<WordDatabase>) -> Self {
        let repository = WordRepository::new(database);
        let all_words = repository.all_words().clone();
        Self {
            repository,
            all_words,
        }
    }

    pub fn all_words(&self) -> &LiveQuery<WordSnapshot> {
        &self.all_words
    }

    pub fn insert(&self, word: Word) {
        self.repository.insert(word);
    }

    pub fn update(&self, word: Word) {
        self.repository.update(word);
    }

    pub fn delete_word(&self, word: Word) {
        self.repository.delete_word(word);
    }

    pub fn delete_all(&self) {
        self.repository.delete_all();
    }
}
