//! Domain model for the word list.
//!
//! # Responsibility
//! - Define the single entity persisted by core.
//!
//! # Invariants
//! - Every persisted word carries a store-assigned `WordId`.
//! - Word text is never empty.

pub mod word;
