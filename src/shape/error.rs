//! Shape violation errors.

use crate::schema::FieldKind;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Result of a shape check that accumulates every violation it finds.
pub type ShapeValidation<T> = Validation<T, NonEmptyVec<ShapeError>>;

/// Ways a value can fail to match a record shape.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShapeError {
    #[error("Missing required field `{field}`")]
    MissingField { field: String },

    #[error("Unexpected field `{field}`")]
    UnexpectedField { field: String },

    #[error("Field `{field}` expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: FieldKind,
        found: String,
    },

    #[error("Expected an object, found {found}")]
    NotAnObject { found: String },

    /// A patch tried to write a field declared read-only
    #[error("Field `{field}` is read-only")]
    ReadonlyField { field: String },

    #[error("Missing discriminant field `{tag}`")]
    MissingTag { tag: String },

    #[error("Unknown variant `{found}` for discriminant `{tag}`")]
    UnknownVariant { tag: String, found: String },
}

impl ShapeError {
    /// Name of the offending field, when the error concerns one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field }
            | Self::UnexpectedField { field }
            | Self::TypeMismatch { field, .. }
            | Self::ReadonlyField { field } => Some(field),
            Self::MissingTag { tag } | Self::UnknownVariant { tag, .. } => Some(tag),
            Self::NotAnObject { .. } => None,
        }
    }
}
