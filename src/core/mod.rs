//! Core data-access logic.
//!
//! Every operation in this module tree borrows the database connection per
//! call; the caller (the dialog layer or a test harness) owns the
//! connection's lifecycle.

/// Account lookup provider
pub mod account;
/// Concept lookup provider
pub mod concept;
/// Pure month-boundary date helpers
pub mod dates;
/// Movement repository, ordered retrieval, and expense aggregation
pub mod movement;
