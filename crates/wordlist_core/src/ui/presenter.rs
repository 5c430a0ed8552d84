//! List presenter: the latest snapshot, exposed as rows.
//!
//! # Responsibility
//! - Hold the most recently delivered snapshot and redraw on replacement.
//! - Resolve row taps and swipes to words.
//!
//! # Invariants
//! - `row_count()` is 0 until the first snapshot arrives, and never fails.
//! - Every replacement is a full redraw; no diffing.
//! - Only horizontal swipes delete.

use crate::live::Subscription;
use crate::model::word::Word;
use crate::service::word_list_controller::WordListController;
use crate::store::WordSnapshot;
use log::debug;
use std::sync::Arc;

/// Row label shown while no snapshot has arrived yet.
pub const NO_WORD_LABEL: &str = "No word";

/// Swipe direction reported by the gesture host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Tap callback; receives the tapped position and word.
pub type ItemClickListener = Box<dyn FnMut(usize, &Word) + Send>;

pub struct WordListPresenter {
    controller: Arc<WordListController>,
    subscription: Subscription<WordSnapshot>,
    words: Option<WordSnapshot>,
    redraw_count: u64,
    on_item_click: Option<ItemClickListener>,
}

impl WordListPresenter {
    /// Subscribes to the controller's live query.
    ///
    /// The current snapshot is queued immediately; call `poll` to apply it.
    pub fn new(controller: Arc<WordListController>) -> Self {
        let subscription = controller.all_words().subscribe();
        Self {
            controller,
            subscription,
            words: None,
            redraw_count: 0,
            on_item_click: None,
        }
    }

    /// Installs this instance's tap callback, replacing any previous one.
    pub fn set_on_item_click(&mut self, listener: ItemClickListener) {
        self.on_item_click = Some(listener);
    }

    /// Applies the newest pending snapshot, if any.
    ///
    /// Returns whether a redraw happened.
    pub fn poll(&mut self) -> bool {
        match self.subscription.drain_latest() {
            Some(snapshot) => {
                self.on_snapshot_replaced(snapshot);
                true
            }
            None => false,
        }
    }

    /// Replaces the held snapshot and redraws every row.
    pub fn on_snapshot_replaced(&mut self, snapshot: WordSnapshot) {
        debug!(
            "event=list_redraw module=ui status=ok rows={}",
            snapshot.len()
        );
        self.words = Some(snapshot);
        self.redraw_count += 1;
    }

    /// Whether at least one snapshot has been delivered.
    pub fn has_snapshot(&self) -> bool {
        self.words.is_some()
    }

    pub fn row_count(&self) -> usize {
        self.words.as_ref().map_or(0, |words| words.len())
    }

    /// Word at `position`; `None` before the first snapshot or out of range.
    pub fn word_at(&self, position: usize) -> Option<&Word> {
        self.words.as_ref()?.get(position)
    }

    /// Text to render for `position`.
    pub fn row_label(&self, position: usize) -> &str {
        self.word_at(position)
            .map_or(NO_WORD_LABEL, |word| word.text.as_str())
    }

    /// Number of full redraws so far.
    pub fn redraw_count(&self) -> u64 {
        self.redraw_count
    }

    /// Routes a row tap to the tap callback.
    ///
    /// Returns `false` when the position has no word or no callback is set.
    pub fn on_row_tapped(&mut self, position: usize) -> bool {
        let Some(word) = self.word_at(position).cloned() else {
            return false;
        };
        match self.on_item_click.as_mut() {
            Some(listener) => {
                listener(position, &word);
                true
            }
            None => false,
        }
    }

    /// Deletes the word under a horizontal swipe.
    ///
    /// Returns the word whose deletion was submitted.
    pub fn on_row_swiped(&mut self, position: usize, direction: SwipeDirection) -> Option<Word> {
        if !direction.is_horizontal() {
            return None;
        }
        let word = self.word_at(position)?.clone();
        self.controller.delete_word(word.clone());
        Some(word)
    }
}
