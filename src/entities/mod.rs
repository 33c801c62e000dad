//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod account;
pub mod concept;
pub mod movement;

// Re-export specific types to avoid conflicts
pub use account::{Column as AccountColumn, Entity as Account, Model as AccountModel};
pub use concept::{Column as ConceptColumn, Entity as Concept, Model as ConceptModel};
pub use movement::{Column as MovementColumn, Entity as Movement, Model as MovementModel};
