//! Discriminated unions: a closed set of record shapes sharing a tag field.

use super::error::BuildError;
use super::field::{describe, FieldKind};
use super::object::Schema;
use crate::shape::{ShapeError, ShapeValidation};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use stillwater::validation::Validation;

/// Runtime schema for a tagged union.
///
/// The tag field selects the variant; the remaining fields are validated
/// against that variant's schema. Tags outside the declared set fail with
/// [`ShapeError::UnknownVariant`].
///
/// # Example
///
/// ```rust
/// use shapekit::schema::{FieldKind, SchemaBuilder, UnionSchemaBuilder};
/// use serde_json::json;
///
/// let radius = SchemaBuilder::new()
///     .field("radius", FieldKind::Number)
///     .build()
///     .unwrap();
///
/// let shape = UnionSchemaBuilder::new("kind")
///     .variant("circle", radius.clone())
///     .variant("sphere", radius)
///     .build()
///     .unwrap();
///
/// let circle = json!({"kind": "circle", "radius": 2});
/// assert!(shape.validate(&circle).is_success());
/// assert_eq!(shape.variant_of(&circle), Some("circle"));
///
/// assert!(shape.validate(&json!({"kind": "cube", "radius": 2})).is_failure());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UnionSchemaDef")]
pub struct UnionSchema {
    tag: String,
    variants: BTreeMap<String, Schema>,
}

/// Unchecked wire form of a [`UnionSchema`].
#[derive(Deserialize)]
struct UnionSchemaDef {
    tag: String,
    variants: BTreeMap<String, Schema>,
}

impl TryFrom<UnionSchemaDef> for UnionSchema {
    type Error = BuildError;

    fn try_from(def: UnionSchemaDef) -> Result<Self, Self::Error> {
        def.variants
            .into_iter()
            .fold(UnionSchemaBuilder::new(def.tag), |builder, (name, schema)| {
                builder.variant(name, schema)
            })
            .build()
    }
}

impl UnionSchema {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn variants(&self) -> impl Iterator<Item = &str> + '_ {
        self.variants.keys().map(String::as_str)
    }

    pub fn variant(&self, name: &str) -> Option<&Schema> {
        self.variants.get(name)
    }

    /// Name of the declared variant `value` is tagged with, if any.
    ///
    /// Only inspects the tag; the variant's fields are not validated.
    pub fn variant_of(&self, value: &Value) -> Option<&str> {
        let tag = value.get(&self.tag)?.as_str()?;
        self.variants
            .get_key_value(tag)
            .map(|(name, _)| name.as_str())
    }

    /// Validate `value` against the variant selected by its tag.
    pub fn validate(&self, value: &Value) -> ShapeValidation<()> {
        let Some(object) = value.as_object() else {
            return Validation::fail(ShapeError::NotAnObject {
                found: describe(value),
            });
        };

        let tag_value = match object.get(&self.tag) {
            Some(Value::String(tag)) => tag,
            Some(other) => {
                return Validation::fail(ShapeError::TypeMismatch {
                    field: self.tag.clone(),
                    expected: FieldKind::String,
                    found: describe(other),
                })
            }
            None => {
                return Validation::fail(ShapeError::MissingTag {
                    tag: self.tag.clone(),
                })
            }
        };

        match self.variants.get(tag_value) {
            Some(schema) => schema.validate_object(object, Some(&self.tag)),
            None => {
                tracing::trace!(tag = %self.tag, found = %tag_value, "unknown union variant");
                Validation::fail(ShapeError::UnknownVariant {
                    tag: self.tag.clone(),
                    found: tag_value.clone(),
                })
            }
        }
    }
}

/// Builder for creating union schemas
#[derive(Debug, Clone)]
pub struct UnionSchemaBuilder {
    tag: String,
    variants: Vec<(String, Schema)>,
}

impl UnionSchemaBuilder {
    /// Start a union discriminated by the field `tag`.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            variants: Vec::new(),
        }
    }

    /// Add a variant selected by the tag value `name`
    pub fn variant(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.variants.push((name.into(), schema));
        self
    }

    /// Build the union.
    /// Returns an error if the tag is empty, there are no variants, a variant
    /// is repeated, or a variant declares the tag field as a non-string kind.
    pub fn build(self) -> Result<UnionSchema, BuildError> {
        if self.tag.is_empty() {
            return Err(BuildError::EmptyTag);
        }
        if self.variants.is_empty() {
            return Err(BuildError::NoVariants);
        }

        let mut variants = BTreeMap::new();
        for (name, schema) in self.variants {
            if variants.contains_key(&name) {
                return Err(BuildError::DuplicateVariant { name });
            }
            if let Some(spec) = schema.field(&self.tag) {
                if !matches!(spec.kind, FieldKind::String | FieldKind::Any) {
                    return Err(BuildError::IncompatibleTag {
                        variant: name,
                        tag: self.tag,
                        kind: spec.kind,
                    });
                }
            }
            variants.insert(name, schema);
        }

        Ok(UnionSchema {
            tag: self.tag,
            variants,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaBuilder;
    use serde_json::json;

    fn validation_result() -> UnionSchema {
        let success = SchemaBuilder::new()
            .field("validated_value", FieldKind::String)
            .build()
            .unwrap();
        let failure = SchemaBuilder::new()
            .field("error_reason", FieldKind::String)
            .build()
            .unwrap();

        UnionSchemaBuilder::new("status")
            .variant("valid", success)
            .variant("invalid", failure)
            .build()
            .unwrap()
    }

    fn single_error(result: ShapeValidation<()>) -> ShapeError {
        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 1);
                errors.iter().next().cloned().unwrap()
            }
            Validation::Success(_) => panic!("Expected failure, got success"),
        }
    }

    #[test]
    fn each_variant_validates_its_own_fields() {
        let union = validation_result();

        assert!(union
            .validate(&json!({"status": "valid", "validated_value": "ok"}))
            .is_success());
        assert!(union
            .validate(&json!({"status": "invalid", "error_reason": "too short"}))
            .is_success());
        assert!(union
            .validate(&json!({"status": "valid", "error_reason": "mixed"}))
            .is_failure());
    }

    #[test]
    fn missing_tag_is_reported() {
        let error = single_error(validation_result().validate(&json!({"validated_value": "x"})));
        assert_eq!(
            error,
            ShapeError::MissingTag {
                tag: "status".to_string()
            }
        );
    }

    #[test]
    fn unknown_variant_fails_loudly() {
        let error = single_error(validation_result().validate(&json!({"status": "pending"})));
        assert_eq!(
            error,
            ShapeError::UnknownVariant {
                tag: "status".to_string(),
                found: "pending".to_string(),
            }
        );
    }

    #[test]
    fn non_string_tag_is_a_type_mismatch() {
        let error = single_error(validation_result().validate(&json!({"status": true})));
        assert!(matches!(error, ShapeError::TypeMismatch { ref field, .. } if field == "status"));
    }

    #[test]
    fn non_object_is_rejected() {
        let error = single_error(validation_result().validate(&json!("valid")));
        assert!(matches!(error, ShapeError::NotAnObject { .. }));
    }

    #[test]
    fn variant_of_reads_tag_only() {
        let union = validation_result();

        assert_eq!(union.variant_of(&json!({"status": "invalid"})), Some("invalid"));
        assert_eq!(union.variant_of(&json!({"status": "other"})), None);
        assert_eq!(union.variant_of(&json!({})), None);
        assert_eq!(union.variants().collect::<Vec<_>>(), vec!["invalid", "valid"]);
    }

    #[test]
    fn builder_validates_required_fields() {
        assert_eq!(
            UnionSchemaBuilder::new("").build(),
            Err(BuildError::EmptyTag)
        );
        assert_eq!(
            UnionSchemaBuilder::new("kind").build(),
            Err(BuildError::NoVariants)
        );
    }

    #[test]
    fn builder_rejects_non_string_tag_field() {
        let circle = SchemaBuilder::new()
            .field("kind", FieldKind::Number)
            .field("radius", FieldKind::Number)
            .build()
            .unwrap();

        let result = UnionSchemaBuilder::new("kind").variant("circle", circle).build();

        assert_eq!(
            result,
            Err(BuildError::IncompatibleTag {
                variant: "circle".to_string(),
                tag: "kind".to_string(),
                kind: FieldKind::Number,
            })
        );
    }

    #[test]
    fn variant_may_declare_tag_as_string() {
        let circle = SchemaBuilder::new()
            .field("kind", FieldKind::String)
            .field("radius", FieldKind::Number)
            .build()
            .unwrap();

        let union = UnionSchemaBuilder::new("kind")
            .variant("circle", circle)
            .build()
            .unwrap();

        assert!(union
            .validate(&json!({"kind": "circle", "radius": 1}))
            .is_success());
    }

    #[test]
    fn deserialization_applies_builder_checks() {
        let empty = serde_json::from_str::<UnionSchema>(r#"{"tag":"","variants":{}}"#);
        assert!(empty.unwrap_err().to_string().contains("Discriminant"));

        let no_variants = serde_json::from_str::<UnionSchema>(r#"{"tag":"kind","variants":{}}"#);
        assert!(no_variants.unwrap_err().to_string().contains("no variants"));

        let bad_tag = r#"{
            "tag": "kind",
            "variants": {
                "circle": {"fields": [{"name": "kind", "kind": "Bool", "optional": false, "readonly": false}]}
            }
        }"#;
        let message = serde_json::from_str::<UnionSchema>(bad_tag)
            .unwrap_err()
            .to_string();
        assert!(message.contains("expected string"), "{message}");
    }

    #[test]
    fn union_serializes_correctly() {
        let union = validation_result();
        let json = serde_json::to_string(&union).unwrap();
        let deserialized: UnionSchema = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, union);
    }

    #[test]
    fn builder_rejects_duplicate_variants() {
        let schema = SchemaBuilder::new()
            .field("radius", FieldKind::Number)
            .build()
            .unwrap();

        let result = UnionSchemaBuilder::new("kind")
            .variant("circle", schema.clone())
            .variant("circle", schema)
            .build();

        assert_eq!(
            result,
            Err(BuildError::DuplicateVariant {
                name: "circle".to_string()
            })
        );
    }
}
