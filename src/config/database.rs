//! Database configuration module.
//!
//! Handles `SQLite` database connection and table creation using `SeaORM`.
//! Table creation uses `Schema::create_table_from_entity` so the database
//! schema is generated from the entity definitions without manual SQL. The
//! caller owns the returned connection's lifecycle; every core operation
//! borrows it per call.

use crate::entities::{Account, Concept, Movement};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Returns the database URL from the `DATABASE_URL` environment variable,
/// falling back to a local `SQLite` file.
///
/// A `.env` file is loaded first if present; environment variables set
/// externally take precedence.
pub fn get_database_url() -> String {
    dotenvy::dotenv().ok();
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/raccount.sqlite?mode=rwc".to_string())
}

/// Establishes a connection to the database named by [`get_database_url`].
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates the `accounts`, `concepts`, and `movements` tables from the
/// entity definitions.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let account_table = schema.create_table_from_entity(Account);
    let concept_table = schema.create_table_from_entity(Concept);
    let movement_table = schema.create_table_from_entity(Movement);

    db.execute(builder.build(&account_table)).await?;
    db.execute(builder.build(&concept_table)).await?;
    db.execute(builder.build(&movement_table)).await?;

    Ok(())
}
