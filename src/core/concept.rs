//! Concept lookup provider.
//!
//! Concepts are the categorization labels movements are filed under. The
//! movement repository resolves concept references through these functions
//! when hydrating movements.

use crate::{
    entities::{Concept, concept},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::info;

/// Finds a concept by its unique ID, returning None if no row matches.
pub async fn get_concept_by_id(
    db: &DatabaseConnection,
    concept_id: i64,
) -> Result<Option<concept::Model>> {
    Concept::find_by_id(concept_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all concepts, ordered alphabetically by name.
pub async fn get_all_concepts(db: &DatabaseConnection) -> Result<Vec<concept::Model>> {
    Concept::find()
        .order_by_asc(concept::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Creates a new concept with the given name.
///
/// The name is trimmed and must not be empty.
pub async fn create_concept(db: &DatabaseConnection, name: String) -> Result<concept::Model> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "concept name cannot be empty".to_string(),
        });
    }

    let concept = concept::ActiveModel {
        name: Set(name.trim().to_string()),
        ..Default::default()
    };

    let result = concept.insert(db).await?;
    info!("created concept {} ({})", result.id, result.name);
    Ok(result)
}
