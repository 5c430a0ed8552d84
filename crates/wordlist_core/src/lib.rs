//! Core logic for the word list.
//! This crate owns storage, the live word query and toolkit-independent screen state.

pub mod config;
pub mod db;
pub mod live;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;
pub mod ui;

pub use config::CoreConfig;
pub use live::{LiveQuery, Subscription};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::word::{Word, WordId, WordValidationError, UNSAVED_WORD_ID};
pub use repo::word_repo::{RepoError, RepoResult, SqliteWordStore, WordStore};
pub use service::word_list_controller::WordListController;
pub use service::word_repository::WordRepository;
pub use store::seed::SEED_WORDS;
pub use store::{
    Mutation, MutationKind, StoreError, StoreFault, StoreResult, WordDatabase, WordSnapshot,
};
pub use ui::entry::{EntryMode, EntryResult, EntryScreen};
pub use ui::presenter::{SwipeDirection, WordListPresenter, NO_WORD_LABEL};
pub use ui::screen::{resolve_entry_result, EntryRequest, EntryResolution, Notice, WordListScreen};
