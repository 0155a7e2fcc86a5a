//! Free-text search over the catalog.
//!
//! A record matches when the trimmed, lowercased query is a substring of its
//! haystack: title, description, food items, cuisine, meal type, director
//! and genres. Results keep catalog order; there is no relevance ranking.

use cinema_eats_model::SceneRecord;
use serde::Serialize;

use crate::settings::DEFAULT_MIN_QUERY_LEN;

/// Result of running a query.
///
/// `Inactive` means the query was too short to search at all, which callers
/// must treat differently from an active search that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    Inactive,
    Active(Vec<&'a SceneRecord>),
}

impl<'a> SearchOutcome<'a> {
    pub fn is_active(&self) -> bool {
        matches!(self, SearchOutcome::Active(_))
    }

    /// Matches of an active search, `None` when inactive.
    pub fn matches(&self) -> Option<&[&'a SceneRecord]> {
        match self {
            SearchOutcome::Inactive => None,
            SearchOutcome::Active(matches) => Some(matches),
        }
    }

    /// The first `limit` matches, for autocomplete-style display.
    pub fn preview(&self, limit: usize) -> &[&'a SceneRecord] {
        self.matches()
            .map(|matches| &matches[..matches.len().min(limit)])
            .unwrap_or(&[])
    }
}

/// Search with the standard two-character minimum.
pub fn search<'a, I>(scenes: I, query: &str) -> SearchOutcome<'a>
where
    I: IntoIterator<Item = &'a SceneRecord>,
{
    search_with_min_len(scenes, query, DEFAULT_MIN_QUERY_LEN)
}

pub fn search_with_min_len<'a, I>(
    scenes: I,
    query: &str,
    min_len: usize,
) -> SearchOutcome<'a>
where
    I: IntoIterator<Item = &'a SceneRecord>,
{
    if !is_searchable(query, min_len) {
        return SearchOutcome::Inactive;
    }

    let needle = query.trim().to_lowercase();
    let matches = scenes
        .into_iter()
        .filter(|scene| haystack(scene).contains(&needle))
        .collect();

    SearchOutcome::Active(matches)
}

/// Whether `query` is long enough to activate search. Blank queries never
/// are, whatever the minimum.
pub fn is_searchable(query: &str, min_len: usize) -> bool {
    let trimmed = query.trim();
    !trimmed.is_empty() && trimmed.chars().count() >= min_len
}

/// Lowercased searchable text of a record. Fields are newline separated so
/// a query never matches across two of them.
pub fn haystack(scene: &SceneRecord) -> String {
    let food_items = scene.scene.food_items.join(" ");
    let genres = scene.movie.genres.join(" ");
    [
        scene.movie.title.as_str(),
        scene.scene.description.as_str(),
        food_items.as_str(),
        scene.food.cuisine.as_str(),
        scene.food.meal_type.label(),
        scene.movie.director.as_str(),
        genres.as_str(),
    ]
    .join("\n")
    .to_lowercase()
}

/// Byte offsets of a highlighted region within a display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    /// Split `text` into the parts before, inside and after the span.
    pub fn split<'t>(&self, text: &'t str) -> (&'t str, &'t str, &'t str) {
        (
            &text[..self.start],
            &text[self.start..self.end],
            &text[self.end..],
        )
    }
}

/// First case-insensitive occurrence of `query` in `text`.
///
/// Offsets refer to `text` itself, so they stay on character boundaries
/// even when lowercasing changes the byte length of a character.
pub fn find_ignore_case(text: &str, query: &str) -> Option<MatchSpan> {
    let needle: Vec<char> =
        query.trim().chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return None;
    }

    text.char_indices()
        .find_map(|(start, _)| match_at(text, start, &needle))
}

fn match_at(text: &str, start: usize, needle: &[char]) -> Option<MatchSpan> {
    let mut pending = needle.iter();
    for (offset, ch) in text[start..].char_indices() {
        for lower in ch.to_lowercase() {
            if pending.next() != Some(&lower) {
                return None;
            }
        }
        if pending.len() == 0 {
            return Some(MatchSpan {
                start,
                end: start + offset + ch.len_utf8(),
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn ids<'a>(outcome: &SearchOutcome<'a>) -> Vec<&'a str> {
        outcome
            .matches()
            .unwrap_or_default()
            .iter()
            .copied()
            .map(|scene| scene.id.as_str())
            .collect()
    }

    #[test]
    fn short_queries_are_inactive() {
        let catalog = Catalog::builtin();
        assert_eq!(search(catalog.all_scenes(), ""), SearchOutcome::Inactive);
        assert_eq!(
            search(catalog.all_scenes(), "  p "),
            SearchOutcome::Inactive
        );
        assert!(search(catalog.all_scenes(), "pi").is_active());
    }

    #[test]
    fn food_items_are_searchable() {
        let catalog = Catalog::builtin();
        let outcome = search(catalog.all_scenes(), "pizza");
        assert_eq!(ids(&outcome), vec!["eat-pray-love-pizza"]);
    }

    #[test]
    fn unmatched_query_is_an_empty_active_search() {
        let catalog = Catalog::builtin();
        let outcome = search(catalog.all_scenes(), "xyzzy");
        assert_eq!(outcome, SearchOutcome::Active(Vec::new()));
    }

    #[test]
    fn results_keep_catalog_order() {
        let catalog = Catalog::builtin();
        let outcome = search(catalog.all_scenes(), "  PASTA ");
        assert_eq!(
            ids(&outcome),
            vec![
                "goodfellas-prison-dinner",
                "chef-pasta-aglio",
                "big-night-timpano"
            ]
        );
    }

    #[test]
    fn director_meal_and_genre_are_searchable() {
        let catalog = Catalog::builtin();
        assert_eq!(
            ids(&search(catalog.all_scenes(), "miyazaki")),
            vec!["spirited-away-feast"]
        );
        assert_eq!(
            ids(&search(catalog.all_scenes(), "dessert")),
            vec!["grand-budapest-pastries"]
        );
        assert_eq!(
            ids(&search(catalog.all_scenes(), "biography")),
            vec!["julie-julia-bruschetta", "eat-pray-love-pizza"]
        );
    }

    #[test]
    fn preview_caps_display_but_not_matches() {
        let catalog = Catalog::builtin();
        let outcome = search(catalog.all_scenes(), "dinner");
        let total = outcome.matches().map(<[_]>::len).unwrap_or(0);
        assert!(total > 5);
        assert_eq!(outcome.preview(5).len(), 5);
        assert!(SearchOutcome::Inactive.preview(5).is_empty());
    }

    #[test]
    fn spans_point_into_the_original_text() {
        let span = find_ignore_case("Margherita Pizza", "pizza").unwrap();
        assert_eq!(span, MatchSpan { start: 11, end: 16 });
        assert_eq!(
            span.split("Margherita Pizza"),
            ("Margherita ", "Pizza", "")
        );

        assert!(find_ignore_case("Ramen", "sushi").is_none());
        assert!(find_ignore_case("Ramen", "   ").is_none());
    }

    #[test]
    fn spans_respect_multibyte_characters() {
        let text = "Lasse Hallström Café";
        let span = find_ignore_case(text, "CAFÉ").unwrap();
        assert_eq!(span.split(text).1, "Café");

        let span = find_ignore_case(text, "ström").unwrap();
        assert_eq!(span.split(text), ("Lasse Hall", "ström", " Café"));
    }
}
