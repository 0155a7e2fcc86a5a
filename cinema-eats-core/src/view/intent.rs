//! Messages into and out of the view controller.

use std::time::Duration;

use cinema_eats_model::{Facet, SceneId};

use super::cards::{RenderFrame, SuggestionPanel, ViewMode};
use crate::favorites::ToggleOutcome;

/// User intents accepted by [`super::ViewController::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A facet checkbox changed, or an active-filter badge was removed
    FilterToggled {
        facet: Facet,
        value: String,
        selected: bool,
    },
    /// Search box contents changed
    QueryChanged(String),
    /// Debounce timer for the given ticket elapsed
    SearchDebounced(u64),
    ClearFilters,
    ClearSearch,
    LoadMore,
    SetViewMode(ViewMode),
    FavoriteToggled(SceneId),
    SelectNextSuggestion,
    SelectPreviousSuggestion,
    /// Open the highlighted suggestion
    AcceptSuggestion,
}

impl Intent {
    /// Variant name for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FilterToggled { .. } => "FilterToggled",
            Self::QueryChanged(_) => "QueryChanged",
            Self::SearchDebounced(_) => "SearchDebounced",
            Self::ClearFilters => "ClearFilters",
            Self::ClearSearch => "ClearSearch",
            Self::LoadMore => "LoadMore",
            Self::SetViewMode(_) => "SetViewMode",
            Self::FavoriteToggled(_) => "FavoriteToggled",
            Self::SelectNextSuggestion => "SelectNextSuggestion",
            Self::SelectPreviousSuggestion => "SelectPreviousSuggestion",
            Self::AcceptSuggestion => "AcceptSuggestion",
        }
    }
}

/// Work the controller hands back to its driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Redraw the scene list
    Render(RenderFrame),
    /// Deliver `Intent::SearchDebounced(ticket)` after `delay`, replacing
    /// any earlier schedule
    ScheduleSearch { ticket: u64, delay: Duration },
    /// Redraw the autocomplete panel
    Suggestions(SuggestionPanel),
    /// Favorite membership changed; show the notice
    FavoriteChanged(ToggleOutcome),
    /// Bring a scene into view
    FocusScene(SceneId),
}
