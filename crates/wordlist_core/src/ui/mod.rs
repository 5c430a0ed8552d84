//! Toolkit-independent screen state for the word list.
//!
//! # Responsibility
//! - Mirror the live query into rows a list widget host can render.
//! - Capture create/edit input and turn its result into store mutations.
//!
//! # Invariants
//! - Nothing here draws; hosts pull row counts and labels on demand.
//! - Tap callbacks are owned by a single presenter instance.

pub mod entry;
pub mod presenter;
pub mod screen;
