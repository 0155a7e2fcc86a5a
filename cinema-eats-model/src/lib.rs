//! Core data model definitions shared across Cinema Eats crates.
#![allow(missing_docs)]

pub mod collection;
pub mod error;
pub mod filter_types;
pub mod food;
pub mod ids;
pub mod scene;

// Intentionally curated re-exports for downstream consumers.
pub use collection::Collection;
pub use error::{ModelError, Result as ModelResult};
pub use filter_types::{Decade, Facet, FilterSelection};
pub use food::{Difficulty, FoodProfile, MealType};
pub use ids::SceneId;
pub use scene::{MediaRef, Movie, SceneDetails, SceneRecord};
