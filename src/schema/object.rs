//! Runtime record schemas over JSON values.

use super::builder::SchemaBuilder;
use super::error::BuildError;
use super::field::{describe, FieldSpec};
use crate::shape::{ShapeError, ShapeValidation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use stillwater::validation::Validation;

/// Runtime description of a record shape.
///
/// A schema lists named fields with their kinds and modifiers. Validation
/// accumulates ALL violations instead of stopping at the first one.
///
/// Build one with [`SchemaBuilder`]. Deserialized schemas go through the
/// same builder checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SchemaDef")]
pub struct Schema {
    pub(crate) fields: Vec<FieldSpec>,
    pub(crate) allow_unknown: bool,
}

/// Unchecked wire form of a [`Schema`].
#[derive(Deserialize)]
struct SchemaDef {
    fields: Vec<FieldSpec>,
    #[serde(default)]
    allow_unknown: bool,
}

impl TryFrom<SchemaDef> for Schema {
    type Error = BuildError;

    fn try_from(def: SchemaDef) -> Result<Self, Self::Error> {
        let builder = def
            .fields
            .into_iter()
            .fold(SchemaBuilder::new(), SchemaBuilder::spec);
        if def.allow_unknown {
            builder.allow_unknown().build()
        } else {
            builder.build()
        }
    }
}

impl Schema {
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    pub fn allows_unknown(&self) -> bool {
        self.allow_unknown
    }

    /// Validate `value` against this schema, collecting every violation.
    pub fn validate(&self, value: &Value) -> ShapeValidation<()> {
        let result = match value.as_object() {
            Some(object) => self.validate_object(object, None),
            None => Validation::fail(ShapeError::NotAnObject {
                found: describe(value),
            }),
        };

        if let Validation::Failure(errors) = &result {
            tracing::trace!(violations = errors.len(), "value rejected by schema");
        }
        result
    }

    /// Validate the members of an object. `skip` names a key that is always
    /// allowed, such as a union's discriminant.
    pub(crate) fn validate_object(
        &self,
        object: &Map<String, Value>,
        skip: Option<&str>,
    ) -> ShapeValidation<()> {
        let mut checks: Vec<ShapeValidation<()>> = Vec::new();

        for spec in &self.fields {
            let check = match object.get(&spec.name) {
                None if spec.optional => Validation::success(()),
                None => Validation::fail(ShapeError::MissingField {
                    field: spec.name.clone(),
                }),
                Some(value) if spec.kind.matches(value) => Validation::success(()),
                Some(value) => Validation::fail(ShapeError::TypeMismatch {
                    field: spec.name.clone(),
                    expected: spec.kind,
                    found: describe(value),
                }),
            };
            checks.push(check);
        }

        if !self.allow_unknown {
            for key in object.keys() {
                if Some(key.as_str()) != skip && self.field(key).is_none() {
                    checks.push(Validation::fail(ShapeError::UnexpectedField {
                        field: key.clone(),
                    }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Derive a schema where every field is optional.
    pub fn partial(&self) -> Schema {
        self.map_fields(|spec| spec.optional = true)
    }

    /// Derive a schema where every field is mandatory.
    pub fn required(&self) -> Schema {
        self.map_fields(|spec| spec.optional = false)
    }

    /// Derive a schema where no field may be written by a patch.
    pub fn readonly(&self) -> Schema {
        self.map_fields(|spec| spec.readonly = true)
    }

    fn map_fields(&self, modify: impl Fn(&mut FieldSpec)) -> Schema {
        let mut derived = self.clone();
        derived.fields.iter_mut().for_each(modify);
        derived
    }

    /// Overlay a partial `patch` onto `target`.
    ///
    /// The patch is checked against [`Schema::partial`] and may not touch
    /// read-only fields. `target` is only modified when every check passes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shapekit::schema::{FieldKind, SchemaBuilder};
    /// use serde_json::json;
    ///
    /// let schema = SchemaBuilder::new()
    ///     .readonly("x", FieldKind::Number)
    ///     .field("y", FieldKind::Number)
    ///     .build()
    ///     .unwrap();
    ///
    /// let mut point = json!({"x": 0, "y": 0});
    /// assert!(schema.apply_patch(&mut point, &json!({"y": 3})).is_success());
    /// assert_eq!(point, json!({"x": 0, "y": 3}));
    ///
    /// assert!(schema.apply_patch(&mut point, &json!({"x": 1})).is_failure());
    /// assert_eq!(point, json!({"x": 0, "y": 3}));
    /// ```
    pub fn apply_patch(&self, target: &mut Value, patch: &Value) -> ShapeValidation<()> {
        let target_check = if target.is_object() {
            Validation::success(())
        } else {
            Validation::fail(ShapeError::NotAnObject {
                found: describe(target),
            })
        };

        let checks = vec![
            target_check,
            self.partial().validate(patch),
            self.readonly_writes(patch),
        ];
        let result = Validation::all_vec(checks).map(|_| ());
        if result.is_failure() {
            return result;
        }

        if let (Some(target), Some(patch)) = (target.as_object_mut(), patch.as_object()) {
            for (key, value) in patch {
                target.insert(key.clone(), value.clone());
            }
            tracing::debug!(fields = patch.len(), "applied schema patch");
        }
        result
    }

    fn readonly_writes(&self, patch: &Value) -> ShapeValidation<()> {
        let Some(object) = patch.as_object() else {
            return Validation::success(());
        };

        let checks: Vec<ShapeValidation<()>> = self
            .fields
            .iter()
            .filter(|spec| spec.readonly && object.contains_key(&spec.name))
            .map(|spec| {
                Validation::fail(ShapeError::ReadonlyField {
                    field: spec.name.clone(),
                })
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }
}
