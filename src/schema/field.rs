//! Field descriptors for runtime schemas.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// JSON type a field is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Bool,
    Number,
    /// A JSON integer literal such as `3`. Float literals like `3.0` do
    /// not match, even when they have no fractional part.
    Integer,
    String,
    Array,
    Object,
    Null,
    Any,
}

impl FieldKind {
    /// Check whether `value` has this kind.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Bool => value.is_boolean(),
            Self::Number => value.is_number(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::String => value.is_string(),
            Self::Array => value.is_array(),
            Self::Object => value.is_object(),
            Self::Null => value.is_null(),
            Self::Any => true,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Null => "null",
            Self::Any => "any",
        };
        f.write_str(name)
    }
}

/// Name of the JSON type of `value`, for error messages.
pub fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
    .to_string()
}

/// A single named field of a schema and its modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    /// May be absent from a valid value
    pub optional: bool,
    /// May not be written by a patch
    pub readonly: bool,
}

impl FieldSpec {
    /// A mandatory, writable field.
    pub fn required(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            optional: false,
            readonly: false,
        }
    }

    pub fn as_optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn as_readonly(mut self) -> Self {
        self.readonly = true;
        self
    }
}
