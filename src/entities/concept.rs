//! Concept entity - A categorization label for movements (e.g., "groceries").

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Concept database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "concepts")]
pub struct Model {
    /// Unique identifier for the concept
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name of the concept
    pub name: String,
}

/// Defines relationships between Concept and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One concept classifies many movements
    #[sea_orm(has_many = "super::movement::Entity")]
    Movements,
}

impl Related<super::movement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movements.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
