//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the word list screen to Dart via FRB as plain sync calls.
//! - Translate host conventions (request codes, `-1` id sentinel) into core types.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - One list screen (and so one controller) exists per process.
//! - Mutations are fire-and-forget; hosts observe them via `words_snapshot`.

use log::warn;
use once_cell::sync::OnceCell;
use wordlist_core::{
    init_logging as init_logging_inner, CoreConfig, EntryResult, Notice, Word, WordDatabase,
    WordListScreen, UNSAVED_WORD_ID,
};

static LIST_SCREEN: OnceCell<WordListScreen> = OnceCell::new();

/// One row of the word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordItem {
    pub id: i64,
    pub text: String,
}

/// Latest live-query snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordListResponse {
    /// `false` until the first snapshot exists.
    pub ready: bool,
    /// Increments on every emission; hosts redraw when it changes.
    pub revision: u64,
    pub items: Vec<WordItem>,
    pub message: String,
}

/// Generic action envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordActionResponse {
    /// Whether the action was accepted.
    pub ok: bool,
    /// User-visible notice; empty when there is nothing to show.
    pub message: String,
}

impl WordActionResponse {
    fn accepted(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn rejected(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Sync call; may create the log directory.
/// - Idempotent for the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.trim()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Opens the shared word database (seeding it when empty).
///
/// # FFI contract
/// - Sync call; the first call performs DB open and seeding.
/// - Safe to call repeatedly.
#[flutter_rust_bridge::frb(sync)]
pub fn words_open() -> WordActionResponse {
    match list_screen() {
        Ok(_) => WordActionResponse::accepted(""),
        Err(err) => WordActionResponse::rejected(err),
    }
}

/// Returns the latest word snapshot.
///
/// # FFI contract
/// - Sync call, never blocks on the writer thread.
#[flutter_rust_bridge::frb(sync)]
pub fn words_snapshot() -> WordListResponse {
    let screen = match list_screen() {
        Ok(screen) => screen,
        Err(err) => {
            return WordListResponse {
                ready: false,
                revision: 0,
                items: Vec::new(),
                message: err,
            }
        }
    };

    let (revision, snapshot) = screen.controller().all_words().latest_with_revision();
    match snapshot {
        Some(words) => WordListResponse {
            ready: true,
            revision,
            items: words.iter().map(to_word_item).collect(),
            message: String::new(),
        },
        None => WordListResponse {
            ready: false,
            revision,
            items: Vec::new(),
            message: String::new(),
        },
    }
}

/// Queues insertion of a new word.
#[flutter_rust_bridge::frb(sync)]
pub fn word_insert(text: String) -> WordActionResponse {
    if text.is_empty() {
        return WordActionResponse::rejected(Notice::EmptyNotSaved.to_string());
    }
    with_list_screen(|screen| {
        screen.controller().insert(Word::new(text));
        WordActionResponse::accepted("")
    })
}

/// Queues a text update for an existing word.
#[flutter_rust_bridge::frb(sync)]
pub fn word_update(id: i64, text: String) -> WordActionResponse {
    if id == UNSAVED_WORD_ID {
        return WordActionResponse::rejected(Notice::UnableToUpdate.to_string());
    }
    if text.is_empty() {
        return WordActionResponse::rejected(Notice::EmptyNotSaved.to_string());
    }
    with_list_screen(|screen| {
        screen.controller().update(Word::with_id(id, text));
        WordActionResponse::accepted("")
    })
}

/// Queues deletion of the word with `id` from the current snapshot.
#[flutter_rust_bridge::frb(sync)]
pub fn word_delete(id: i64) -> WordActionResponse {
    with_list_screen(|screen| {
        let controller = screen.controller();
        let found = controller
            .all_words()
            .latest()
            .and_then(|words| words.iter().find(|word| word.id == Some(id)).cloned());
        match found {
            Some(word) => {
                let notice = Notice::Deleting(word.text.clone());
                controller.delete_word(word);
                WordActionResponse::accepted(notice.to_string())
            }
            None => {
                warn!("event=word_delete module=ffi status=not_found id={id}");
                WordActionResponse::rejected(format!("word not found: {id}"))
            }
        }
    })
}

/// Queues removal of every word.
#[flutter_rust_bridge::frb(sync)]
pub fn words_delete_all() -> WordActionResponse {
    with_list_screen(|screen| WordActionResponse::accepted(screen.clear_all().to_string()))
}

/// Delivers an entry screen result to the list screen.
///
/// Input semantics:
/// - `request_code`: `1` create flow, `2` edit flow.
/// - `result_ok`: host success flag; `false` means cancelled.
/// - `id`: carried word id, or `-1` when none was supplied.
///
/// # FFI contract
/// - `ok = true` means a write was queued; otherwise `message` holds the notice.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_result(
    request_code: i32,
    result_ok: bool,
    text: Option<String>,
    id: i64,
) -> WordActionResponse {
    let result = match text {
        Some(text) if result_ok && !text.is_empty() => EntryResult::Saved {
            text,
            id: (id != UNSAVED_WORD_ID).then_some(id),
        },
        _ => EntryResult::Cancelled,
    };

    with_list_screen(|screen| match screen.on_entry_result(request_code, result) {
        None => WordActionResponse::accepted(""),
        Some(notice) => WordActionResponse::rejected(notice.to_string()),
    })
}

fn list_screen() -> Result<&'static WordListScreen, String> {
    LIST_SCREEN.get_or_try_init(|| {
        let config = CoreConfig::from_env();
        let database = WordDatabase::shared(&config.db_path)
            .map_err(|err| format!("word database open failed: {err}"))?;
        Ok(WordListScreen::new(database))
    })
}

fn with_list_screen(f: impl FnOnce(&WordListScreen) -> WordActionResponse) -> WordActionResponse {
    match list_screen() {
        Ok(screen) => f(screen),
        Err(err) => WordActionResponse::rejected(err),
    }
}

fn to_word_item(word: &Word) -> WordItem {
    WordItem {
        id: word.host_id(),
        text: word.text.clone(),
    }
}
