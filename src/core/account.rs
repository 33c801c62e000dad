//! Account lookup provider.
//!
//! The movement repository resolves account references through these
//! functions when hydrating movements. Account management proper (renaming,
//! balance recalculation) belongs to the dialog layer and is not part of
//! this core.

use crate::{
    entities::{Account, account},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Finds an account by its unique ID, returning None if no row matches.
pub async fn get_account_by_id(
    db: &DatabaseConnection,
    account_id: i64,
) -> Result<Option<account::Model>> {
    Account::find_by_id(account_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all accounts, ordered alphabetically by name.
pub async fn get_all_accounts(db: &DatabaseConnection) -> Result<Vec<account::Model>> {
    Account::find()
        .order_by_asc(account::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a new account with the given name and starting balance.
///
/// The name is trimmed and must not be empty.
pub async fn create_account(
    db: &DatabaseConnection,
    name: String,
    balance: f64,
) -> Result<account::Model> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "account name cannot be empty".to_string(),
        });
    }

    let account = account::ActiveModel {
        name: Set(name.trim().to_string()),
        balance: Set(balance),
        ..Default::default()
    };

    let result = account.insert(db).await?;
    info!("created account {} ({})", result.id, result.name);
    Ok(result)
}
