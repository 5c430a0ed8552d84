//! The owning list screen.
//!
//! # Responsibility
//! - Own the controller for the lifetime of the logical screen.
//! - Launch entry screens with request codes and apply their results.
//! - Produce the user-visible notices for delete, clear and failed saves.
//!
//! # Invariants
//! - Recreating a view (`attach_view`) never re-queries the store.
//! - Edit results without a carried id never reach the store.

use crate::model::word::Word;
use crate::service::word_list_controller::WordListController;
use crate::store::WordDatabase;
use crate::ui::entry::{EntryResult, EntryScreen};
use crate::ui::presenter::{SwipeDirection, WordListPresenter};
use log::info;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, PoisonError};

/// Request code attached to a launched entry screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRequest {
    Create = 1,
    Edit = 2,
}

impl EntryRequest {
    pub const fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::Create),
            2 => Some(Self::Edit),
            _ => None,
        }
    }
}

/// Short user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Deleting(String),
    ClearingData,
    UnableToUpdate,
    EmptyNotSaved,
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deleting(text) => write!(f, "Deleting {text}"),
            Self::ClearingData => write!(f, "Clearing the data..."),
            Self::UnableToUpdate => write!(f, "Unable to update"),
            Self::EmptyNotSaved => write!(f, "Word not saved because it is empty."),
        }
    }
}

/// What an entry result turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryResolution {
    Insert(Word),
    Update(Word),
    Notice(Notice),
}

/// Maps a request code and entry result to a store action or notice.
pub fn resolve_entry_result(request_code: i32, result: EntryResult) -> EntryResolution {
    match (EntryRequest::from_code(request_code), result) {
        (Some(EntryRequest::Create), EntryResult::Saved { text, .. }) => {
            EntryResolution::Insert(Word::new(text))
        }
        (Some(EntryRequest::Edit), EntryResult::Saved { text, id: Some(id) }) => {
            EntryResolution::Update(Word::with_id(id, text))
        }
        (Some(EntryRequest::Edit), EntryResult::Saved { id: None, .. }) => {
            EntryResolution::Notice(Notice::UnableToUpdate)
        }
        _ => EntryResolution::Notice(Notice::EmptyNotSaved),
    }
}

pub struct WordListScreen {
    controller: Arc<WordListController>,
    pending_edit: Arc<Mutex<Option<Word>>>,
}

impl WordListScreen {
    /// Creates the screen and its single controller.
    pub fn new(database: Arc<WordDatabase>) -> Self {
        Self {
            controller: Arc::new(WordListController::new(database)),
            pending_edit: Arc::new(Mutex::new(None)),
        }
    }

    pub fn controller(&self) -> &Arc<WordListController> {
        &self.controller
    }

    /// Builds a fresh presenter for a (re)created view.
    ///
    /// Row taps queue an edit launch, collected with `take_pending_edit`.
    pub fn attach_view(&self) -> WordListPresenter {
        let mut presenter = WordListPresenter::new(Arc::clone(&self.controller));
        let pending_edit = Arc::clone(&self.pending_edit);
        presenter.set_on_item_click(Box::new(move |_: usize, word: &Word| {
            *pending_edit
                .lock()
                .unwrap_or_else(PoisonError::into_inner) = Some(word.clone());
        }));
        presenter
    }

    /// Returns the edit launch queued by the last row tap.
    pub fn take_pending_edit(&self) -> Option<(EntryRequest, EntryScreen)> {
        let word = self
            .pending_edit
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()?;
        Some(self.launch_edit(&word))
    }

    pub fn launch_create(&self) -> (EntryRequest, EntryScreen) {
        (EntryRequest::Create, EntryScreen::open_create())
    }

    pub fn launch_edit(&self, word: &Word) -> (EntryRequest, EntryScreen) {
        (
            EntryRequest::Edit,
            EntryScreen::open_edit(word.text.clone(), word.id),
        )
    }

    /// Applies an entry result; returns a notice when nothing was written.
    pub fn on_entry_result(&self, request_code: i32, result: EntryResult) -> Option<Notice> {
        match resolve_entry_result(request_code, result) {
            EntryResolution::Insert(word) => {
                self.controller.insert(word);
                None
            }
            EntryResolution::Update(word) => {
                self.controller.update(word);
                None
            }
            EntryResolution::Notice(notice) => {
                info!(
                    "event=entry_result module=ui status=not_saved request_code={}",
                    request_code
                );
                Some(notice)
            }
        }
    }

    /// Deletes the swiped row through the presenter.
    pub fn on_swipe(
        &self,
        presenter: &mut WordListPresenter,
        position: usize,
        direction: SwipeDirection,
    ) -> Option<Notice> {
        presenter
            .on_row_swiped(position, direction)
            .map(|word| Notice::Deleting(word.text))
    }

    /// Clears every word.
    pub fn clear_all(&self) -> Notice {
        self.controller.delete_all();
        Notice::ClearingData
    }
}
