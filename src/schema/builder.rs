//! Builder API for creating schemas.

use super::error::BuildError;
use super::field::{FieldKind, FieldSpec};
use super::object::Schema;
use std::collections::HashSet;

/// Builder for creating record schemas
///
/// # Example
///
/// ```rust
/// use shapekit::schema::{FieldKind, SchemaBuilder};
/// use serde_json::json;
///
/// let person = SchemaBuilder::new()
///     .readonly("name", FieldKind::String)
///     .optional("date_of_birth", FieldKind::String)
///     .build()
///     .unwrap();
///
/// assert!(person.validate(&json!({"name": "mario"})).is_success());
/// assert!(person.validate(&json!({"surname": "rossi"})).is_failure());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldSpec>,
    allow_unknown: bool,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mandatory field
    pub fn field(self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.spec(FieldSpec::required(name, kind))
    }

    /// Add a field that may be absent
    pub fn optional(self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.spec(FieldSpec::required(name, kind).as_optional())
    }

    /// Add a mandatory field that patches may not write
    pub fn readonly(self, name: impl Into<String>, kind: FieldKind) -> Self {
        self.spec(FieldSpec::required(name, kind).as_readonly())
    }

    /// Add a fully specified field
    pub fn spec(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Accept keys the schema does not declare
    pub fn allow_unknown(mut self) -> Self {
        self.allow_unknown = true;
        self
    }

    /// Build the schema.
    /// Returns an error if no fields are declared or a name is empty or repeated.
    pub fn build(self) -> Result<Schema, BuildError> {
        if self.fields.is_empty() {
            return Err(BuildError::EmptySchema);
        }

        let mut seen = HashSet::new();
        for spec in &self.fields {
            if spec.name.is_empty() {
                return Err(BuildError::EmptyFieldName);
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(BuildError::DuplicateField {
                    name: spec.name.clone(),
                });
            }
        }

        Ok(Schema {
            fields: self.fields,
            allow_unknown: self.allow_unknown,
        })
    }
}
