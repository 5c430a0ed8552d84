//! Use-case layer between screens and the shared database.
//!
//! # Responsibility
//! - Forward word mutations to the writer without blocking the caller.
//! - Expose the live word query to screen-level code.

pub mod word_list_controller;
pub mod word_repository;
