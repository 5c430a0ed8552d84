//! Modal text entry for creating or editing one word.

use crate::model::word::WordId;

/// How the entry screen was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryMode {
    Create,
    /// `id` is carried back to the caller only when present.
    Edit { id: Option<WordId> },
}

/// Outcome handed back to the screen that launched the entry screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryResult {
    /// Input was empty; nothing should be written.
    Cancelled,
    /// Non-empty input, with the carried id in edit mode.
    Saved { text: String, id: Option<WordId> },
}

/// Input state of one entry screen instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryScreen {
    mode: EntryMode,
    input: String,
    caret: usize,
}

impl EntryScreen {
    /// Opens an empty screen for a new word.
    pub fn open_create() -> Self {
        Self {
            mode: EntryMode::Create,
            input: String::new(),
            caret: 0,
        }
    }

    /// Opens a screen pre-filled with `text`, caret at the end.
    pub fn open_edit(text: impl Into<String>, id: Option<WordId>) -> Self {
        let mut screen = Self {
            mode: EntryMode::Edit { id },
            input: String::new(),
            caret: 0,
        };
        screen.set_input(text);
        screen
    }

    pub fn mode(&self) -> &EntryMode {
        &self.mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Caret position in chars.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Replaces the input and moves the caret to its end.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.caret = self.input.chars().count();
    }

    /// Closes the screen and produces its result.
    pub fn submit(self) -> EntryResult {
        if self.input.is_empty() {
            return EntryResult::Cancelled;
        }

        let id = match self.mode {
            EntryMode::Create => None,
            EntryMode::Edit { id } => id,
        };
        EntryResult::Saved {
            text: self.input,
            id,
        }
    }
}
