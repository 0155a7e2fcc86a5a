use crate::ids::SceneId;

/// Curated, ordered list of scenes shown as a themed row.
///
/// Member ids are not guaranteed to exist in the catalog; consumers resolve
/// them and skip the ones that do not.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Collection {
    pub id: String,
    pub title: String,
    pub description: String,
    pub scene_ids: Vec<SceneId>,
}

impl Collection {
    pub fn contains(&self, id: &SceneId) -> bool {
        self.scene_ids.contains(id)
    }
}
