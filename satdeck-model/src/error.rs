use std::fmt::{self, Display};

/// Errors produced when parsing catalog enums from user or wire input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    UnknownObjectType(String),
    UnknownOrbitCode(String),
    UnknownAttribute(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::UnknownObjectType(raw) => {
                write!(f, "unknown object type: {raw}")
            }
            ModelError::UnknownOrbitCode(raw) => {
                write!(f, "unknown orbit code: {raw}")
            }
            ModelError::UnknownAttribute(raw) => {
                write!(f, "unknown attribute: {raw}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
