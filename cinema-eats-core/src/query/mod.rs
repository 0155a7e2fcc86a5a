//! Derived views over the catalog: facet filters, text search and the
//! paginated visible window.

pub mod filtering;
pub mod pagination;
pub mod search;

pub use filtering::{
    FacetCounts, apply_filters, facet_counts, matches_selection,
};
pub use pagination::{Pagination, has_more, visible_window};
pub use search::{
    MatchSpan, SearchOutcome, find_ignore_case, haystack, is_searchable, search,
    search_with_min_len,
};
