//! `raccount` - Persistence core of a personal finance movement tracker.
//!
//! This crate owns the data-access layer for financial movements (debits and
//! credits) tied to accounts and spending concepts: CRUD operations, ordered
//! retrieval of the most recent movements per account, and time-windowed
//! expense aggregation. The graphical dialog layer lives elsewhere and calls
//! into this crate, passing the database connection explicitly to every
//! operation - the caller owns the connection lifecycle, the core only
//! borrows it per call.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::inefficient_to_string,
    clippy::needless_pass_by_value,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
)]

/// Database connection and schema configuration
pub mod config;
/// Core data-access logic - movements, accounts, concepts, and date helpers
pub mod core;
/// SeaORM entity definitions for database tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;

#[cfg(test)]
pub mod test_utils;
