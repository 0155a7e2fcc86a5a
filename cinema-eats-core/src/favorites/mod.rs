//! The persisted favorites set.
//!
//! Membership is a set, but the stored document is an ordered JSON list of
//! scene ids, so insertion order survives across sessions. The store loads
//! once, mutates in memory and writes the whole document back after every
//! toggle. Storage failures never reach the caller: an unreadable document
//! loads as empty and a failed write is logged and dropped.

mod storage;

pub use storage::{FavoritesStorage, FileStorage, MemoryStorage};

use std::{collections::HashSet, fmt, sync::Arc};

use cinema_eats_model::{SceneId, SceneRecord};
use tracing::{debug, warn};

use crate::{catalog::Catalog, error::StorageError};

/// Storage key of the favorites document.
pub const FAVORITES_STORAGE_KEY: &str = "foodInMoviesFavorites";

/// Result of a toggle, for UI feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub scene_id: SceneId,
    /// Membership after the toggle.
    pub added: bool,
    /// Whether the resulting set reached storage.
    pub persisted: bool,
}

impl ToggleOutcome {
    /// Celebrate additions only.
    pub fn celebrate(&self) -> bool {
        self.added
    }

    pub fn notice(&self) -> &'static str {
        if self.added {
            "Added to favorites"
        } else {
            "Removed from favorites"
        }
    }
}

pub struct FavoritesStore {
    storage: Arc<dyn FavoritesStorage>,
    ids: Vec<SceneId>,
    members: HashSet<SceneId>,
}

impl fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("storage", &self.storage)
            .field("ids", &self.ids)
            .finish()
    }
}

impl FavoritesStore {
    /// Read the persisted set. Absent, unreadable or corrupt documents all
    /// produce an empty set; duplicate ids keep their first position.
    pub fn load(storage: Arc<dyn FavoritesStorage>) -> Self {
        let stored = match storage.read(FAVORITES_STORAGE_KEY) {
            Ok(Some(document)) => {
                match serde_json::from_str::<Vec<SceneId>>(&document) {
                    Ok(ids) => ids,
                    Err(err) => {
                        warn!("Discarding corrupt favorites document: {}", err);
                        Vec::new()
                    }
                }
            }
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("Failed to read favorites, starting empty: {}", err);
                Vec::new()
            }
        };

        let mut store = Self {
            storage,
            ids: Vec::with_capacity(stored.len()),
            members: HashSet::with_capacity(stored.len()),
        };
        for id in stored {
            if store.members.insert(id.clone()) {
                store.ids.push(id);
            }
        }

        debug!("Loaded {} favorites", store.ids.len());
        store
    }

    /// Flip membership of `id` and persist the resulting set.
    ///
    /// Ids unknown to the catalog are accepted; they are filtered out when
    /// the favorites view is resolved.
    pub fn toggle(&mut self, id: impl Into<SceneId>) -> ToggleOutcome {
        let id = id.into();
        let added = if self.members.remove(&id) {
            self.ids.retain(|existing| existing != &id);
            false
        } else {
            self.members.insert(id.clone());
            self.ids.push(id.clone());
            true
        };

        let persisted = self.persist();
        ToggleOutcome {
            scene_id: id,
            added,
            persisted,
        }
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.members.contains(id)
    }

    /// Write the whole set back to storage. Returns `false` on failure,
    /// which is logged and otherwise ignored.
    pub fn persist(&self) -> bool {
        let result = serde_json::to_string(&self.ids)
            .map_err(StorageError::from)
            .and_then(|document| {
                self.storage.write(FAVORITES_STORAGE_KEY, &document)
            });

        match result {
            Ok(()) => true,
            Err(err) => {
                warn!("Failed to persist favorites: {}", err);
                false
            }
        }
    }

    /// Favorited ids in insertion order, stale ones included.
    pub fn ids(&self) -> &[SceneId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Favorited scenes present in `catalog`, in insertion order.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Vec<&'a SceneRecord> {
        catalog.resolve(&self.ids)
    }
}
