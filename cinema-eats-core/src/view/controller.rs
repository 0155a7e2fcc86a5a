use std::sync::Arc;

use cinema_eats_model::{FilterSelection, SceneId, SceneRecord};
use tracing::{debug, trace};

use super::cards::{
    RenderFrame, SceneCard, SearchStatus, Suggestion, SuggestionPanel,
    ViewMode,
};
use super::intent::{Effect, Intent};
use crate::{
    catalog::Catalog,
    favorites::FavoritesStore,
    query::{
        FacetCounts, Pagination, SearchOutcome, apply_filters, facet_counts,
        is_searchable, search_with_min_len,
    },
    settings::ViewSettings,
};

/// Owns all browsing state and turns intents into effects.
///
/// The derived list is the search result while a search is active and the
/// filter result otherwise. Every change to filters, query or view mode
/// resets pagination; "load more" only widens the window; favorite toggles
/// leave filter, search and pagination state alone.
#[derive(Debug)]
pub struct ViewController {
    catalog: Arc<Catalog>,
    favorites: FavoritesStore,
    settings: ViewSettings,
    selection: FilterSelection,
    query: String,
    /// Bumped on every query change; only the newest debounce may search.
    ticket: u64,
    filtered: Vec<SceneId>,
    searched: Option<Vec<SceneId>>,
    suggestions: Vec<SceneId>,
    selected_suggestion: Option<usize>,
    pagination: Pagination,
    view_mode: ViewMode,
}

impl ViewController {
    pub fn new(
        catalog: Arc<Catalog>,
        favorites: FavoritesStore,
        settings: ViewSettings,
    ) -> Self {
        let filtered = catalog
            .all_scenes()
            .iter()
            .map(|scene| scene.id.clone())
            .collect();
        let pagination = Pagination::new(settings.page_size);

        Self {
            catalog,
            favorites,
            settings,
            selection: FilterSelection::new(),
            query: String::new(),
            ticket: 0,
            filtered,
            searched: None,
            suggestions: Vec::new(),
            selected_suggestion: None,
            pagination,
            view_mode: ViewMode::default(),
        }
    }

    pub fn update(&mut self, intent: Intent) -> Vec<Effect> {
        trace!("View intent: {}", intent.as_str());

        match intent {
            Intent::FilterToggled {
                facet,
                value,
                selected,
            } => {
                self.selection.set(facet, &value, selected);
                self.refilter();
                self.pagination.reset();
                vec![self.render()]
            }

            Intent::QueryChanged(query) => {
                self.query = query;
                self.ticket += 1;
                self.selected_suggestion = None;

                if self.query_is_searchable() {
                    vec![Effect::ScheduleSearch {
                        ticket: self.ticket,
                        delay: self.settings.search_debounce(),
                    }]
                } else if self.end_search() {
                    vec![
                        Effect::Suggestions(SuggestionPanel::Hidden),
                        self.render(),
                    ]
                } else {
                    vec![Effect::Suggestions(SuggestionPanel::Hidden)]
                }
            }

            Intent::SearchDebounced(ticket) => {
                if ticket != self.ticket || !self.query_is_searchable() {
                    debug!("Dropping stale search ticket {}", ticket);
                    return Vec::new();
                }
                self.run_search();
                self.pagination.reset();
                vec![
                    self.render(),
                    Effect::Suggestions(self.suggestion_panel()),
                ]
            }

            Intent::ClearFilters => {
                self.selection.clear();
                self.refilter();
                self.pagination.reset();
                vec![self.render()]
            }

            Intent::ClearSearch => {
                self.clear_query();
                self.pagination.reset();
                vec![
                    Effect::Suggestions(SuggestionPanel::Hidden),
                    self.render(),
                ]
            }

            Intent::LoadMore => {
                if self.pagination.load_more(self.derived().len()) {
                    vec![self.render()]
                } else {
                    Vec::new()
                }
            }

            Intent::SetViewMode(mode) => {
                if mode == self.view_mode {
                    return Vec::new();
                }
                self.view_mode = mode;
                self.pagination.reset();
                vec![self.render()]
            }

            Intent::FavoriteToggled(id) => {
                let outcome = self.favorites.toggle(id);
                vec![Effect::FavoriteChanged(outcome), self.render()]
            }

            Intent::SelectNextSuggestion => self.move_selection(true),
            Intent::SelectPreviousSuggestion => self.move_selection(false),

            Intent::AcceptSuggestion => {
                let Some(id) = self
                    .selected_suggestion
                    .and_then(|index| self.suggestions.get(index).cloned())
                else {
                    return Vec::new();
                };
                self.clear_query();
                self.pagination.reset();
                vec![
                    Effect::FocusScene(id),
                    Effect::Suggestions(SuggestionPanel::Hidden),
                    self.render(),
                ]
            }
        }
    }

    /// Current state of the scene list.
    pub fn frame(&self) -> RenderFrame {
        let derived = self.catalog.resolve(self.derived());
        let window = self.pagination.window(&derived);

        RenderFrame {
            cards: window.iter().map(|scene| self.card(scene)).collect(),
            has_more: self.pagination.has_more(derived.len()),
            total: derived.len(),
            view_mode: self.view_mode,
            active_filters: self
                .selection
                .active()
                .map(|(facet, value)| (facet, value.to_owned()))
                .collect(),
            search: match &self.searched {
                Some(matches) => SearchStatus::Active {
                    query: self.query.trim().to_owned(),
                    matches: matches.len(),
                },
                None => SearchStatus::Inactive,
            },
        }
    }

    pub fn suggestion_panel(&self) -> SuggestionPanel {
        let Some(matches) = &self.searched else {
            return SuggestionPanel::Hidden;
        };
        let query = self.query.trim().to_owned();
        if matches.is_empty() {
            return SuggestionPanel::NoResults { query };
        }

        let suggestions = self
            .catalog
            .resolve(&self.suggestions)
            .into_iter()
            .map(|scene| Suggestion::new(scene, &query))
            .collect();

        SuggestionPanel::Results {
            query,
            suggestions,
            total: matches.len(),
            selected: self.selected_suggestion,
        }
    }

    /// Cards for every favorited scene the catalog knows, in stored order.
    pub fn favorites_view(&self) -> Vec<SceneCard> {
        self.favorites
            .resolve(&self.catalog)
            .into_iter()
            .map(|scene| self.card(scene))
            .collect()
    }

    /// Cards for the scenes flagged as featured, in catalog order.
    pub fn featured_view(&self) -> Vec<SceneCard> {
        self.catalog
            .featured()
            .map(|scene| self.card(scene))
            .collect()
    }

    pub fn favorites_count(&self) -> usize {
        self.favorites.len()
    }

    /// Facet counts over the whole catalog, for filter labels.
    pub fn facet_counts(&self) -> FacetCounts {
        facet_counts(self.catalog.all_scenes())
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    fn derived(&self) -> &[SceneId] {
        self.searched.as_deref().unwrap_or(&self.filtered)
    }

    fn render(&self) -> Effect {
        Effect::Render(self.frame())
    }

    fn card(&self, scene: &SceneRecord) -> SceneCard {
        SceneCard::new(
            scene,
            self.favorites.is_favorite(scene.id.as_str()),
            self.settings.description_preview_len,
        )
    }

    fn query_is_searchable(&self) -> bool {
        is_searchable(&self.query, self.settings.min_query_len)
    }

    fn refilter(&mut self) {
        self.filtered =
            apply_filters(self.catalog.all_scenes(), &self.selection)
                .into_iter()
                .map(|scene| scene.id.clone())
                .collect();
    }

    fn run_search(&mut self) {
        let outcome = search_with_min_len(
            self.catalog.all_scenes(),
            &self.query,
            self.settings.min_query_len,
        );
        let SearchOutcome::Active(matches) = outcome else {
            return;
        };

        debug!(
            "Search {:?} matched {} scenes",
            self.query.trim(),
            matches.len()
        );
        let ids: Vec<SceneId> =
            matches.iter().map(|scene| scene.id.clone()).collect();
        self.suggestions = ids
            .iter()
            .take(self.settings.autocomplete_limit)
            .cloned()
            .collect();
        self.selected_suggestion = None;
        self.searched = Some(ids);
    }

    /// Drop search results. Returns whether a search was active.
    fn end_search(&mut self) -> bool {
        self.suggestions.clear();
        self.selected_suggestion = None;
        if self.searched.take().is_some() {
            self.pagination.reset();
            true
        } else {
            false
        }
    }

    fn clear_query(&mut self) {
        self.query.clear();
        // Invalidates any pending debounce.
        self.ticket += 1;
        self.end_search();
    }

    fn move_selection(&mut self, forward: bool) -> Vec<Effect> {
        let len = self.suggestions.len();
        if len == 0 || self.searched.is_none() {
            return Vec::new();
        }

        let next = match (self.selected_suggestion, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(index), true) => (index + 1) % len,
            (Some(index), false) => (index + len - 1) % len,
        };
        self.selected_suggestion = Some(next);
        vec![Effect::Suggestions(self.suggestion_panel())]
    }
}
