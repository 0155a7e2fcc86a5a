//! Facet filtering.
//!
//! Facets combine with AND; the values selected within one facet combine
//! with OR. Facets without selected values impose no constraint.

use std::collections::BTreeMap;

use cinema_eats_model::{Facet, FilterSelection, SceneRecord};

/// Keep the records that satisfy `selection`, preserving input order.
pub fn apply_filters<'a, I>(
    scenes: I,
    selection: &FilterSelection,
) -> Vec<&'a SceneRecord>
where
    I: IntoIterator<Item = &'a SceneRecord>,
{
    if selection.is_unconstrained() {
        return scenes.into_iter().collect();
    }

    scenes
        .into_iter()
        .filter(|scene| matches_selection(scene, selection))
        .collect()
}

pub fn matches_selection(
    scene: &SceneRecord,
    selection: &FilterSelection,
) -> bool {
    Facet::all().iter().all(|&facet| match selection.values(facet) {
        None => true,
        Some(selected) => facet_values(scene, facet)
            .iter()
            .any(|value| selected.contains(value)),
    })
}

/// Lowercase values `scene` carries for `facet`.
fn facet_values(scene: &SceneRecord, facet: Facet) -> Vec<String> {
    match facet {
        Facet::Genre => scene
            .movie
            .genres
            .iter()
            .map(|genre| genre.to_lowercase())
            .collect(),
        Facet::Cuisine => vec![scene.food.cuisine.to_lowercase()],
        Facet::Decade => vec![scene.decade().label()],
        Facet::Meal => vec![scene.food.meal_type.label().to_lowercase()],
    }
}

/// Number of records carrying each value, per facet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetCounts {
    counts: BTreeMap<Facet, BTreeMap<String, usize>>,
}

impl FacetCounts {
    pub fn get(&self, facet: Facet, value: &str) -> usize {
        self.counts
            .get(&facet)
            .and_then(|values| values.get(&value.to_lowercase()))
            .copied()
            .unwrap_or(0)
    }

    /// Values seen for `facet` with their counts, ordered by value.
    pub fn values(
        &self,
        facet: Facet,
    ) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts
            .get(&facet)
            .into_iter()
            .flat_map(|values| values.iter())
            .map(|(value, count)| (value.as_str(), *count))
    }
}

/// Count facet values across `scenes`. Every genre of a record counts.
pub fn facet_counts<'a, I>(scenes: I) -> FacetCounts
where
    I: IntoIterator<Item = &'a SceneRecord>,
{
    let mut counts = FacetCounts::default();
    for scene in scenes {
        for &facet in Facet::all() {
            let bucket = counts.counts.entry(facet).or_default();
            for value in facet_values(scene, facet) {
                *bucket.entry(value).or_insert(0) += 1;
            }
        }
    }
    counts
}
