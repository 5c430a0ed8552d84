//! Initial data for an empty word table.

use crate::model::word::Word;
use crate::repo::word_repo::{RepoResult, WordStore};
use log::info;

/// Words inserted, in this order, whenever the table is found empty on open.
pub const SEED_WORDS: [&str; 5] = ["Carla", "Ximena", "Natalia", "Julieta", "Ana"];

/// Inserts `SEED_WORDS` when `any_word()` comes back empty.
///
/// Returns the number of rows inserted (0 or 5).
pub fn seed_if_empty(store: &impl WordStore) -> RepoResult<usize> {
    if !store.any_word()?.is_empty() {
        return Ok(0);
    }

    for text in SEED_WORDS {
        store.insert(&Word::new(text))?;
    }

    info!(
        "event=db_seed module=store status=ok inserted={}",
        SEED_WORDS.len()
    );
    Ok(SEED_WORDS.len())
}
