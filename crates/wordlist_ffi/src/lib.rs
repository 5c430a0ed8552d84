//! Flutter-facing bindings for the word list core.

pub mod api;
