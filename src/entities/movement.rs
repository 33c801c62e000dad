//! Movement entity - Represents a single financial transaction.
//!
//! Each movement has a description, a signed amount (debit or credit), the
//! running balance snapshot after the movement (`final_balance`), a calendar
//! date with no time component, and non-null references to exactly one
//! account and one concept. Identifiers are assigned by storage on insert
//! and immutable afterwards.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Movement database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movements")]
pub struct Model {
    /// Unique identifier for the movement
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable description; may contain quote characters
    pub description: String,
    /// Signed amount (negative for debits, positive for credits)
    pub amount: f64,
    /// Running account balance after this movement
    pub final_balance: f64,
    /// Calendar date of the movement (no time component)
    pub movement_date: Date,
    /// ID of the owning account
    pub account_id: i64,
    /// ID of the classifying concept
    pub concept_id: i64,
}

/// Defines relationships between Movement and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each movement belongs to one account
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id"
    )]
    Account,
    /// Each movement is classified by one concept
    #[sea_orm(
        belongs_to = "super::concept::Entity",
        from = "Column::ConceptId",
        to = "super::concept::Column::Id"
    )]
    Concept,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<super::concept::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Concept.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
