//! Movement repository - CRUD, ordered retrieval, and expense aggregation.
//!
//! A movement is a single financial transaction (debit or credit) owned by
//! exactly one account and classified by exactly one concept. All functions
//! borrow the database connection per call and return typed errors; storage
//! failures are never swallowed. Every query goes through SeaORM's bound
//! parameters, so descriptions containing quotes or apostrophes are handled
//! without escaping hazards.
//!
//! Known limitation: there is no optimistic concurrency control (no version
//! column), so concurrent updates to the same movement can race.

use crate::{
    entities::{Account, Concept, Movement, account, concept, movement},
    errors::{Error, Result},
};
use sea_orm::{
    FromQueryResult, PaginatorTrait, QueryOrder, QuerySelect, Set, TransactionTrait, prelude::*,
};
use tracing::{debug, info, instrument};

/// A movement row with its account and concept references resolved to full
/// records.
///
/// The raw [`movement::Model`] carries bare foreign-key ids; this is the
/// hydrated form handed to callers that need to display or compare complete
/// movements.
#[derive(Clone, Debug, PartialEq)]
pub struct HydratedMovement {
    /// The movement row itself
    pub movement: movement::Model,
    /// The owning account, fully populated
    pub account: account::Model,
    /// The classifying concept, fully populated
    pub concept: concept::Model,
}

/// Creates a new movement and returns the stored row with its assigned id.
///
/// The amount must be finite, and the referenced account and concept must
/// already exist. The existence checks and the insert run inside one
/// database transaction, so the write either fully succeeds or leaves no
/// row behind.
#[instrument(skip(db, description))]
pub async fn create_movement(
    db: &DatabaseConnection,
    account_id: i64,
    concept_id: i64,
    description: String,
    amount: f64,
    final_balance: f64,
    movement_date: Date,
) -> Result<movement::Model> {
    if !amount.is_finite() {
        return Err(Error::Validation {
            message: format!("movement amount must be finite, got {amount}"),
        });
    }

    let txn = db.begin().await?;

    Account::find_by_id(account_id)
        .one(&txn)
        .await?
        .ok_or(Error::AccountNotFound { id: account_id })?;
    Concept::find_by_id(concept_id)
        .one(&txn)
        .await?
        .ok_or(Error::ConceptNotFound { id: concept_id })?;

    let model = movement::ActiveModel {
        description: Set(description),
        amount: Set(amount),
        final_balance: Set(final_balance),
        movement_date: Set(movement_date),
        account_id: Set(account_id),
        concept_id: Set(concept_id),
        ..Default::default()
    };

    let result = model.insert(&txn).await?;
    txn.commit().await?;

    info!(
        "created movement {} for account {}: amount={}",
        result.id, result.account_id, result.amount
    );
    Ok(result)
}

/// Fetches a single movement by id, with its account and concept resolved.
///
/// Returns [`Error::MovementNotFound`] if no row matches.
pub async fn get_movement(db: &DatabaseConnection, movement_id: i64) -> Result<HydratedMovement> {
    let row = Movement::find_by_id(movement_id)
        .one(db)
        .await?
        .ok_or(Error::MovementNotFound { id: movement_id })?;
    hydrate(db, row).await
}

/// Overwrites all mutable fields of the row matching the model's id.
///
/// Re-validates the amount and the account/concept references, then writes
/// inside one database transaction. Returns [`Error::MovementNotFound`] if
/// the id does not exist, matching `delete_movement`'s behavior.
#[instrument(skip(db, updated))]
pub async fn update_movement(
    db: &DatabaseConnection,
    updated: &movement::Model,
) -> Result<movement::Model> {
    if !updated.amount.is_finite() {
        return Err(Error::Validation {
            message: format!("movement amount must be finite, got {}", updated.amount),
        });
    }

    let txn = db.begin().await?;

    Movement::find_by_id(updated.id)
        .one(&txn)
        .await?
        .ok_or(Error::MovementNotFound { id: updated.id })?;
    Account::find_by_id(updated.account_id)
        .one(&txn)
        .await?
        .ok_or(Error::AccountNotFound {
            id: updated.account_id,
        })?;
    Concept::find_by_id(updated.concept_id)
        .one(&txn)
        .await?
        .ok_or(Error::ConceptNotFound {
            id: updated.concept_id,
        })?;

    let model = movement::ActiveModel {
        id: Set(updated.id),
        description: Set(updated.description.clone()),
        amount: Set(updated.amount),
        final_balance: Set(updated.final_balance),
        movement_date: Set(updated.movement_date),
        account_id: Set(updated.account_id),
        concept_id: Set(updated.concept_id),
    };

    let result = model.update(&txn).await?;
    txn.commit().await?;

    debug!("updated movement {}", result.id);
    Ok(result)
}

/// Physically deletes the movement with the given id.
///
/// Returns [`Error::MovementNotFound`] if no row matches, matching
/// `update_movement`'s behavior on a missing id.
#[instrument(skip(db))]
pub async fn delete_movement(db: &DatabaseConnection, movement_id: i64) -> Result<()> {
    let result = Movement::delete_by_id(movement_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::MovementNotFound { id: movement_id });
    }

    debug!("deleted movement {}", movement_id);
    Ok(())
}

/// Retrieves every movement, each fully hydrated with its account and
/// concept. Order is unspecified.
pub async fn list_all_movements(db: &DatabaseConnection) -> Result<Vec<HydratedMovement>> {
    let rows = Movement::find().all(db).await?;

    let mut movements = Vec::with_capacity(rows.len());
    for row in rows {
        movements.push(hydrate(db, row).await?);
    }
    Ok(movements)
}

/// Returns the total number of persisted movements.
///
/// Always equals the length of [`list_all_movements`]'s result.
pub async fn count_movements(db: &DatabaseConnection) -> Result<u64> {
    Movement::find().count(db).await.map_err(Into::into)
}

/// Returns the `n` most recent movements for the given account, newest
/// first.
///
/// Ordering is by movement date descending with ties broken by id
/// descending. If fewer than `n` movements exist for the account, all of
/// them are returned; `n = 0` yields an empty vector.
pub async fn list_last_n(
    db: &DatabaseConnection,
    account_id: i64,
    n: u64,
) -> Result<Vec<HydratedMovement>> {
    let rows = Movement::find()
        .filter(movement::Column::AccountId.eq(account_id))
        .order_by_desc(movement::Column::MovementDate)
        .order_by_desc(movement::Column::Id)
        .limit(n)
        .all(db)
        .await?;

    let mut movements = Vec::with_capacity(rows.len());
    for row in rows {
        movements.push(hydrate(db, row).await?);
    }
    Ok(movements)
}

#[derive(FromQueryResult)]
struct ExpenseTotal {
    total: Option<f64>,
}

/// Sums movement amounts for an account and concept over the inclusive date
/// window `[start, end]`.
///
/// Returns `0.0` when no movements match. An inverted window
/// (`start > end`) matches nothing and also returns `0.0`.
pub async fn get_expenses(
    db: &DatabaseConnection,
    account_id: i64,
    concept_id: i64,
    start: Date,
    end: Date,
) -> Result<f64> {
    let row = Movement::find()
        .select_only()
        .column_as(movement::Column::Amount.sum(), "total")
        .filter(movement::Column::AccountId.eq(account_id))
        .filter(movement::Column::ConceptId.eq(concept_id))
        .filter(movement::Column::MovementDate.between(start, end))
        .into_model::<ExpenseTotal>()
        .one(db)
        .await?;

    // SUM over no rows is NULL
    Ok(row.and_then(|r| r.total).unwrap_or(0.0))
}

/// Resolves a raw movement row into its hydrated form through the account
/// and concept lookup providers.
async fn hydrate(db: &DatabaseConnection, row: movement::Model) -> Result<HydratedMovement> {
    let account = crate::core::account::get_account_by_id(db, row.account_id)
        .await?
        .ok_or(Error::AccountNotFound { id: row.account_id })?;
    let concept = crate::core::concept::get_concept_by_id(db, row.concept_id)
        .await?
        .ok_or(Error::ConceptNotFound { id: row.concept_id })?;

    Ok(HydratedMovement {
        movement: row,
        account,
        concept,
    })
}
