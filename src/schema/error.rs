//! Build errors for schema builders.

use super::field::FieldKind;
use thiserror::Error;

/// Errors that can occur when building schemas and union schemas.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Schema has no fields. Add at least one with .field(name, kind)")]
    EmptySchema,

    #[error("Field name must not be empty")]
    EmptyFieldName,

    #[error("Field `{name}` declared more than once")]
    DuplicateField { name: String },

    #[error("Union has no variants. Add at least one with .variant(name, schema)")]
    NoVariants,

    #[error("Discriminant field name must not be empty")]
    EmptyTag,

    #[error("Variant `{name}` declared more than once")]
    DuplicateVariant { name: String },

    /// The variant redeclares the tag field with a kind a tag string never has
    #[error("Variant `{variant}` declares discriminant `{tag}` as {kind}, expected string")]
    IncompatibleTag {
        variant: String,
        tag: String,
        kind: FieldKind,
    },
}
