use std::borrow::Borrow;
use std::fmt;

/// Stable identifier of a scene record, e.g. `"goodfellas-prison-dinner"`.
///
/// Identifiers are opaque strings. Favorites may hold identifiers that no
/// longer exist in the catalog, so constructing one never validates
/// against catalog contents.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SceneId(String);

impl SceneId {
    pub fn new(id: impl Into<String>) -> Self {
        SceneId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for SceneId {
    fn from(value: &str) -> Self {
        SceneId::new(value)
    }
}

impl From<String> for SceneId {
    fn from(value: String) -> Self {
        SceneId(value)
    }
}

impl AsRef<str> for SceneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for SceneId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
