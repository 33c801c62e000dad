//! Shared test utilities for `raccount`.
//!
//! This module provides common helper functions for setting up test
//! databases and creating test entities with sensible defaults.
#![allow(clippy::unwrap_used)]

use crate::{
    core::{account, concept, movement},
    entities,
    errors::Result,
};
use chrono::{Days, NaiveDate};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Initializes a tracing subscriber for test log capture. Safe to call from
/// multiple tests; later calls are no-ops.
pub fn init_test_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("warn")
        }))
        .with_test_writer()
        .try_init();
}

/// Creates a test account with a zero starting balance.
pub async fn create_test_account(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::account::Model> {
    account::create_account(db, name.to_string(), 0.0).await
}

/// Creates a test concept with the given name.
pub async fn create_test_concept(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::concept::Model> {
    concept::create_concept(db, name.to_string()).await
}

/// Creates a test movement with sensible defaults.
///
/// # Defaults
/// * `description`: `"TEST description"`
/// * `amount`: 3.4
/// * `final_balance`: 55.0
/// * `movement_date`: 1980-05-15
pub async fn create_test_movement(
    db: &DatabaseConnection,
    account_id: i64,
    concept_id: i64,
) -> Result<entities::movement::Model> {
    movement::create_movement(
        db,
        account_id,
        concept_id,
        "TEST description".to_string(),
        3.4,
        55.0,
        NaiveDate::from_ymd_opt(1980, 5, 15).unwrap(),
    )
    .await
}

/// Creates a test movement with custom parameters.
pub async fn create_custom_movement(
    db: &DatabaseConnection,
    account_id: i64,
    concept_id: i64,
    description: &str,
    amount: f64,
    final_balance: f64,
    movement_date: NaiveDate,
) -> Result<entities::movement::Model> {
    movement::create_movement(
        db,
        account_id,
        concept_id,
        description.to_string(),
        amount,
        final_balance,
        movement_date,
    )
    .await
}

/// Sets up a complete test environment with one account and one concept.
/// Returns (db, account, concept) for common test scenarios.
pub async fn setup_with_refs() -> Result<(
    DatabaseConnection,
    entities::account::Model,
    entities::concept::Model,
)> {
    let db = setup_test_db().await?;
    let account = create_test_account(&db, "Test Account").await?;
    let concept = create_test_concept(&db, "Test Concept").await?;
    Ok((db, account, concept))
}

/// Bulk-inserts `n` synthetic movements for the given account and concept,
/// with dates advancing one day at a time from 2024-01-01.
pub async fn populate_movements(
    db: &DatabaseConnection,
    account_id: i64,
    concept_id: i64,
    n: u64,
) -> Result<Vec<entities::movement::Model>> {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    let mut created = Vec::with_capacity(n as usize);
    for i in 0..n {
        let row = create_custom_movement(
            db,
            account_id,
            concept_id,
            &format!("Synthetic movement {i}"),
            3.4,
            55.0,
            base.checked_add_days(Days::new(i)).unwrap(),
        )
        .await?;
        created.push(row);
    }
    Ok(created)
}
