use cinema_eats_model::SceneId;
use thiserror::Error;

/// Failures while assembling a catalog from external data.
///
/// The built-in catalog is validated by tests and never produces these at
/// runtime; they surface only for catalogs loaded from a file.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("duplicate scene id in catalog: {0}")]
    DuplicateId(SceneId),
    #[error("catalog document could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("catalog document could not be read: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of the key-value document store behind favorites.
///
/// The favorites store recovers from every variant locally; none of them
/// reach the user.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage document could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
}
