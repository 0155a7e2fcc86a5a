//! Scene records: one memorable food moment from one film.
//!
//! Records are loaded once with the catalog and never mutated afterwards.
//! The serialized layout mirrors the catalog document (`camelCase` keys,
//! `genre` / `imdbId` field names, media fields inlined into `scene`).

use crate::{filter_types::Decade, food::FoodProfile, ids::SceneId};

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SceneRecord {
    pub id: SceneId,
    pub movie: Movie,
    pub scene: SceneDetails,
    pub food: FoodProfile,
    /// Curation hint used for hero placement; never enforced by the core.
    #[cfg_attr(feature = "serde", serde(default))]
    pub featured: bool,
}

impl SceneRecord {
    /// First listed food item, shown as the card headline.
    pub fn primary_food(&self) -> Option<&str> {
        self.scene.food_items.first().map(String::as_str)
    }

    pub fn decade(&self) -> Decade {
        Decade::from_year(self.movie.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Movie {
    pub title: String,
    pub year: u16,
    /// Ordered genres; the first entry is the primary genre.
    #[cfg_attr(feature = "serde", serde(rename = "genre"))]
    pub genres: Vec<String>,
    pub director: String,
    #[cfg_attr(feature = "serde", serde(rename = "imdbId"))]
    pub external_id: String,
    pub studio: String,
    pub distributor: String,
}

impl Movie {
    pub fn primary_genre(&self) -> Option<&str> {
        self.genres.first().map(String::as_str)
    }

    /// Image credit line, e.g. `© Warner Bros. - Goodfellas (1990)`.
    pub fn attribution(&self) -> String {
        format!("© {} - {} ({})", self.studio, self.title, self.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SceneDetails {
    /// Display timestamp within the film, e.g. `1:17:30`.
    pub timestamp: String,
    pub description: String,
    /// Ordered food items; the first entry is the primary item.
    pub food_items: Vec<String>,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub media: MediaRef,
    pub significance: String,
}

/// Opaque handle to the scene's image and video assets.
///
/// Resolution of these references belongs to the asset pipeline; the core
/// only carries them through to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MediaRef {
    pub thumbnail_url: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub thumbnail_alt: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub video_url: Option<String>,
}
