use std::fmt::{self, Display};

/// Errors produced when parsing model values from user or catalog input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownFacet(String),
    InvalidDecade(String),
    UnknownMealType(String),
    UnknownDifficulty(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownFacet(raw) => write!(f, "unknown facet: {raw}"),
            ModelError::InvalidDecade(raw) => {
                write!(f, "invalid decade label: {raw}")
            }
            ModelError::UnknownMealType(raw) => {
                write!(f, "unknown meal type: {raw}")
            }
            ModelError::UnknownDifficulty(raw) => {
                write!(f, "unknown difficulty: {raw}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
