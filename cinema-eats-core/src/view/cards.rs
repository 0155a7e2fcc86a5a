//! Render-ready view models.

use cinema_eats_model::{Facet, MediaRef, SceneId, SceneRecord};
use serde::{Deserialize, Serialize};

use crate::query::{MatchSpan, find_ignore_case};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

/// One card in the scene list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneCard {
    pub id: SceneId,
    pub title: String,
    pub year: u16,
    pub genre: Option<String>,
    pub food: Option<String>,
    pub description_preview: String,
    pub cuisine: String,
    pub meal: &'static str,
    pub attribution: String,
    pub media: MediaRef,
    pub favorite: bool,
}

impl SceneCard {
    pub fn new(
        scene: &SceneRecord,
        favorite: bool,
        preview_len: usize,
    ) -> Self {
        Self {
            id: scene.id.clone(),
            title: scene.movie.title.clone(),
            year: scene.movie.year,
            genre: scene.movie.primary_genre().map(str::to_owned),
            food: scene.primary_food().map(str::to_owned),
            description_preview: preview(&scene.scene.description, preview_len),
            cuisine: scene.food.cuisine.clone(),
            meal: scene.food.meal_type.label(),
            attribution: scene.movie.attribution(),
            media: scene.scene.media.clone(),
            favorite,
        }
    }
}

/// First `limit` characters of `text`, with an ellipsis when cut.
pub fn preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_owned(),
    }
}

/// Display text with an optional highlighted match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlighted {
    pub text: String,
    pub span: Option<MatchSpan>,
}

impl Highlighted {
    pub fn new(text: &str, query: &str) -> Self {
        Self {
            text: text.to_owned(),
            span: find_ignore_case(text, query),
        }
    }

    /// Parts before, inside and after the highlight.
    pub fn parts(&self) -> (&str, &str, &str) {
        match self.span {
            Some(span) => span.split(&self.text),
            None => (&self.text, "", ""),
        }
    }
}

/// Autocomplete entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub scene_id: SceneId,
    pub title: Highlighted,
    pub food: Option<Highlighted>,
    /// `"{year} • {cuisine}"`
    pub meta: String,
}

impl Suggestion {
    pub fn new(scene: &SceneRecord, query: &str) -> Self {
        Self {
            scene_id: scene.id.clone(),
            title: Highlighted::new(&scene.movie.title, query),
            food: scene
                .primary_food()
                .map(|food| Highlighted::new(food, query)),
            meta: format!("{} • {}", scene.movie.year, scene.food.cuisine),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SuggestionPanel {
    #[default]
    Hidden,
    NoResults {
        query: String,
    },
    Results {
        query: String,
        suggestions: Vec<Suggestion>,
        /// All matches, not just the ones shown
        total: usize,
        selected: Option<usize>,
    },
}

impl SuggestionPanel {
    pub fn is_visible(&self) -> bool {
        !matches!(self, SuggestionPanel::Hidden)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchStatus {
    #[default]
    Inactive,
    Active {
        query: String,
        matches: usize,
    },
}

/// Everything the renderer needs to draw the scene list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderFrame {
    /// Visible window of the derived list
    pub cards: Vec<SceneCard>,
    pub has_more: bool,
    /// Length of the whole derived list
    pub total: usize,
    pub view_mode: ViewMode,
    pub active_filters: Vec<(Facet, String)>,
    pub search: SearchStatus,
}

impl RenderFrame {
    pub fn ids(&self) -> impl Iterator<Item = &SceneId> + '_ {
        self.cards.iter().map(|card| &card.id)
    }

    /// Nothing to show for the current filters or query.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn preview_truncates_long_descriptions_only() {
        assert_eq!(preview("short", 100), "short");
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("abc", 3), "abc");
        assert_eq!(preview("crème brûlée", 4), "crèm...");
    }

    #[test]
    fn card_carries_primary_fields() {
        let catalog = Catalog::builtin();
        let scene = &catalog.all_scenes()[0];
        let card = SceneCard::new(scene, true, 100);

        assert_eq!(card.id, scene.id);
        assert_eq!(card.food.as_deref(), scene.primary_food());
        assert_eq!(card.genre.as_deref(), scene.movie.primary_genre());
        assert!(card.attribution.starts_with("© "));
        assert!(card.description_preview.chars().count() <= 103);
        assert!(card.favorite);
    }

    #[test]
    fn suggestion_highlights_title_and_meta() {
        let catalog = Catalog::builtin();
        let scene = catalog
            .all_scenes()
            .iter()
            .find(|scene| scene.movie.title == "Spirited Away")
            .unwrap();

        let suggestion = Suggestion::new(scene, "spirit");
        assert_eq!(suggestion.title.parts(), ("", "Spirit", "ed Away"));
        assert_eq!(
            suggestion.meta,
            format!("{} • {}", scene.movie.year, scene.food.cuisine)
        );
    }
}
