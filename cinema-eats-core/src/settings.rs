use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cards added to the visible window per "load more".
pub const DEFAULT_PAGE_SIZE: usize = 6;
/// Quiescence required after the last keystroke before a search runs.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
/// Queries shorter than this (after trimming) leave search inactive.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;
/// Suggestions shown in the autocomplete panel.
pub const DEFAULT_AUTOCOMPLETE_LIMIT: usize = 5;
/// Characters of the description shown on a card before truncation.
pub const DEFAULT_DESCRIPTION_PREVIEW_LEN: usize = 100;

/// Tunables for the browsing experience.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub page_size: usize,
    pub search_debounce_ms: u64,
    pub min_query_len: usize,
    pub autocomplete_limit: usize,
    pub description_preview_len: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            autocomplete_limit: DEFAULT_AUTOCOMPLETE_LIMIT,
            description_preview_len: DEFAULT_DESCRIPTION_PREVIEW_LEN,
        }
    }
}

impl ViewSettings {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
