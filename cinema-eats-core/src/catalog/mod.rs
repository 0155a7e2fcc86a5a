//! Read-only scene catalog.
//!
//! The catalog is populated once and never mutated. Its insertion order is
//! the default order of every list the core produces.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, LazyLock},
};

use cinema_eats_model::{Collection, SceneId, SceneRecord};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::CatalogError;

const SEED_DOCUMENT: &str = include_str!("seed.json");

static BUILTIN: LazyLock<Arc<Catalog>> = LazyLock::new(|| {
    Arc::new(
        Catalog::from_json_str(SEED_DOCUMENT)
            .expect("embedded seed catalog is valid"),
    )
});

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    scenes: Vec<SceneRecord>,
    #[serde(default)]
    collections: Vec<Collection>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    scenes: Vec<SceneRecord>,
    index: HashMap<SceneId, usize>,
    collections: Vec<Collection>,
}

impl Catalog {
    /// Catalog compiled into the binary.
    pub fn builtin() -> Arc<Catalog> {
        Arc::clone(&BUILTIN)
    }

    /// Build a catalog, rejecting duplicate scene ids.
    pub fn new(
        scenes: Vec<SceneRecord>,
        collections: Vec<Collection>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(scenes.len());
        for (position, scene) in scenes.iter().enumerate() {
            if index.insert(scene.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(scene.id.clone()));
            }
        }

        for collection in &collections {
            let missing = collection
                .scene_ids
                .iter()
                .filter(|id| !index.contains_key(*id))
                .count();
            if missing > 0 {
                warn!(
                    collection = %collection.id,
                    missing,
                    "Collection references scenes that are not in the catalog"
                );
            }
        }

        debug!(
            scenes = scenes.len(),
            collections = collections.len(),
            "Catalog loaded"
        );

        Ok(Self {
            scenes,
            index,
            collections,
        })
    }

    pub fn from_json_str(document: &str) -> Result<Self, CatalogError> {
        let CatalogDocument {
            scenes,
            collections,
        } = serde_json::from_str(document)?;
        Self::new(scenes, collections)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let document = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&document)
    }

    /// Every scene in definition order.
    pub fn all_scenes(&self) -> &[SceneRecord] {
        &self.scenes
    }

    pub fn get(&self, id: &str) -> Option<&SceneRecord> {
        self.index.get(id).map(|&position| &self.scenes[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Scenes flagged for hero placement, in catalog order.
    pub fn featured(&self) -> impl Iterator<Item = &SceneRecord> + '_ {
        self.scenes.iter().filter(|scene| scene.featured)
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn collection(&self, id: &str) -> Option<&Collection> {
        self.collections
            .iter()
            .find(|collection| collection.id == id)
    }

    /// Scenes of a collection in the collection's order. Unknown ids are
    /// skipped; an unknown collection yields an empty list.
    pub fn collection_scenes(&self, id: &str) -> Vec<&SceneRecord> {
        self.collection(id)
            .map(|collection| self.resolve(&collection.scene_ids))
            .unwrap_or_default()
    }

    /// Look up `ids` in order, dropping the ones the catalog does not know.
    pub fn resolve<'a>(&'a self, ids: &[SceneId]) -> Vec<&'a SceneRecord> {
        ids.iter().filter_map(|id| self.get(id.as_str())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_loads_in_definition_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 13);

        let first = &catalog.all_scenes()[0];
        assert_eq!(first.id.as_str(), "goodfellas-prison-dinner");
        assert_eq!(first.movie.year, 1990);
        assert_eq!(first.movie.primary_genre(), Some("Crime"));
        assert_eq!(first.primary_food(), Some("Pasta"));

        let last = catalog.all_scenes().last().unwrap();
        assert_eq!(last.id.as_str(), "no-reservations-kitchen");
    }

    #[test]
    fn builtin_ids_are_indexed() {
        let catalog = Catalog::builtin();
        for scene in catalog.all_scenes() {
            assert_eq!(catalog.get(scene.id.as_str()), Some(scene));
        }
        assert!(catalog.get("not-a-scene").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let catalog = Catalog::builtin();
        let mut scenes = catalog.all_scenes().to_vec();
        scenes.push(scenes[0].clone());

        let err = Catalog::new(scenes, Vec::new()).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateId(id)
                if id.as_str() == "goodfellas-prison-dinner"
        ));
    }

    #[test]
    fn collections_resolve_in_their_own_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<_> = catalog
            .collection_scenes("date-night")
            .into_iter()
            .map(|scene| scene.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec![
                "julie-julia-bruschetta",
                "eat-pray-love-pizza",
                "big-night-timpano"
            ]
        );
        assert!(catalog.collection_scenes("missing").is_empty());
    }

    #[test]
    fn featured_scenes_keep_catalog_order() {
        let catalog = Catalog::builtin();
        let featured: Vec<_> =
            catalog.featured().map(|scene| scene.id.as_str()).collect();
        assert_eq!(featured.first(), Some(&"goodfellas-prison-dinner"));
        assert!(featured.iter().all(|id| catalog.get(id).unwrap().featured));
        assert_eq!(featured.len(), 7);
    }

    #[test]
    fn attribution_names_studio_title_and_year() {
        let catalog = Catalog::builtin();
        let scene = catalog.get("tampopo-ramen").unwrap();
        assert_eq!(
            scene.movie.attribution(),
            "© Itami Productions - Tampopo (1985)"
        );
    }
}
