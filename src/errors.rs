//! Unified error types for the movement persistence core.
//!
//! Every storage failure is surfaced to the caller as a typed error; the
//! core classifies and propagates but never swallows. The GUI layer is
//! responsible for presenting these to the user.

use thiserror::Error;

/// All errors the persistence core can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// No movement row matches the given identifier.
    #[error("movement {id} not found")]
    MovementNotFound {
        /// Identifier that matched no row
        id: i64,
    },

    /// No account row matches the given identifier.
    #[error("account {id} not found")]
    AccountNotFound {
        /// Identifier that matched no row
        id: i64,
    },

    /// No concept row matches the given identifier.
    #[error("concept {id} not found")]
    ConceptNotFound {
        /// Identifier that matched no row
        id: i64,
    },

    /// The caller supplied an incomplete or malformed record.
    #[error("validation error: {message}")]
    Validation {
        /// What was wrong with the input
        message: String,
    },

    /// Storage-level failure: constraint violation, I/O failure, malformed
    /// statement.
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
