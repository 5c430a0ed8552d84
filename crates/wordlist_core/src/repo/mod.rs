//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data-access contract for words.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Store APIs return semantic errors (`NotFound`, `MissingId`) in addition to
//!   DB transport errors.

pub mod word_repo;
