//! Record and partial-record traits.
//!
//! A [`Record`] is a struct of named fields. Its [`Patch`] is the partial
//! shape of the same struct: every field optional, with the same field
//! types. Both are normally generated together by the [`record!`] macro.
//!
//! [`record!`]: crate::record

use super::error::{ShapeError, ShapeValidation};
use super::readonly::Readonly;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use stillwater::validation::Validation;

/// Trait for record types: structs with a fixed, named set of fields.
///
/// # Example
///
/// ```rust
/// use shapekit::record;
/// use shapekit::shape::Record;
///
/// record! {
///     pub struct Point {
///         pub x: i32,
///         pub y: i32,
///     }
///     patch: PointPatch
/// }
///
/// assert_eq!(Point::FIELDS, &["x", "y"]);
///
/// let moved = Point { x: 0, y: 0 }.overlay(PointPatch { y: Some(3), ..Default::default() });
/// assert_eq!(moved, Point { x: 0, y: 3 });
/// ```
pub trait Record: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> {
    /// The partial shape of this record.
    type Patch: Patch<Self>;

    /// Field names in declaration order.
    const FIELDS: &'static [&'static str];

    /// Return this record with the patch's present fields overlaid.
    fn overlay(mut self, patch: Self::Patch) -> Self {
        patch.apply(&mut self);
        self
    }

    /// Freeze the record behind a [`Readonly`] wrapper.
    fn readonly(self) -> Readonly<Self> {
        Readonly::new(self)
    }
}

/// Partial shape of a record `T`.
///
/// A patch can only name fields that exist in `T`, each with `T`'s field
/// type. Absent fields mean "leave unchanged".
pub trait Patch<T>:
    Default + Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + From<T>
{
    /// Write every present field into `target`, leaving the rest untouched.
    fn apply(self, target: &mut T);

    /// Names of the fields present in this patch, in declaration order.
    fn fields(&self) -> Vec<&'static str>;

    fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Combine two patches. Fields present in `later` win.
    fn merge(self, later: Self) -> Self;

    /// Turn the partial back into a full record.
    ///
    /// Succeeds only when every field is present, otherwise reports a
    /// [`ShapeError::MissingField`] for each absent field.
    fn complete(self) -> ShapeValidation<T>;
}

/// Accumulate a `MissingField` violation for every absent field of `record`.
///
/// `record!` calls this once it has seen an absent field. A presence list
/// with nothing absent reports the record as a whole as missing.
#[doc(hidden)]
pub fn missing_fields<T>(
    record: &'static str,
    presence: &[(&'static str, bool)],
) -> ShapeValidation<T> {
    let checks: Vec<ShapeValidation<()>> = presence
        .iter()
        .filter(|(_, present)| !present)
        .map(|&(field, _)| {
            Validation::fail(ShapeError::MissingField {
                field: field.to_string(),
            })
        })
        .collect();

    match Validation::all_vec(checks) {
        Validation::Failure(errors) => Validation::Failure(errors),
        Validation::Success(_) => Validation::fail(ShapeError::MissingField {
            field: record.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;

    record! {
        struct House {
            door: u32,
            windows: u32,
            garden: bool,
        }
        patch: HousePatch
    }

    fn house() -> House {
        House {
            door: 1,
            windows: 4,
            garden: false,
        }
    }

    #[test]
    fn fields_lists_declaration_order() {
        assert_eq!(House::FIELDS, &["door", "windows", "garden"]);
    }

    #[test]
    fn apply_overwrites_only_present_fields() {
        let mut target = house();
        let patch = HousePatch {
            garden: Some(true),
            ..Default::default()
        };

        patch.apply(&mut target);

        assert_eq!(
            target,
            House {
                door: 1,
                windows: 4,
                garden: true,
            }
        );
    }

    #[test]
    fn empty_patch_is_identity() {
        let patch = HousePatch::default();
        assert!(patch.is_empty());
        assert_eq!(house().overlay(patch), house());
    }

    #[test]
    fn patch_fields_reports_present_fields() {
        let patch = HousePatch {
            door: Some(2),
            garden: Some(true),
            ..Default::default()
        };
        assert_eq!(patch.fields(), vec!["door", "garden"]);
    }

    #[test]
    fn merge_prefers_later_values() {
        let earlier = HousePatch {
            door: Some(1),
            windows: Some(2),
            ..Default::default()
        };
        let later = HousePatch {
            windows: Some(9),
            ..Default::default()
        };

        let merged = earlier.merge(later);
        assert_eq!(merged.door, Some(1));
        assert_eq!(merged.windows, Some(9));
        assert_eq!(merged.garden, None);
    }

    #[test]
    fn full_patch_completes_to_record() {
        let patch = HousePatch::from(house());
        assert_eq!(patch.fields().len(), House::FIELDS.len());

        match patch.complete() {
            Validation::Success(record) => assert_eq!(record, house()),
            Validation::Failure(errors) => panic!("Expected success, got {errors:?}"),
        }
    }

    #[test]
    fn complete_reports_every_missing_field() {
        let patch = HousePatch {
            windows: Some(2),
            ..Default::default()
        };

        match patch.complete() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                let missing: Vec<_> = errors.iter().filter_map(|e| e.field()).collect();
                assert_eq!(missing, vec!["door", "garden"]);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn readonly_exposes_fields() {
        let frozen = house().readonly();
        assert_eq!(frozen.windows, 4);
    }

    #[test]
    fn patch_serialization_skips_absent_fields() {
        let patch = HousePatch {
            door: Some(3),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"door":3}"#);

        let parsed: HousePatch = serde_json::from_str(r#"{"windows":7}"#).unwrap();
        assert_eq!(parsed.fields(), vec!["windows"]);
    }

    #[test]
    fn missing_fields_reports_only_absent_fields() {
        match missing_fields::<House>("House", &[("a", true), ("b", false)]) {
            Validation::Failure(errors) => {
                let fields: Vec<_> = errors.iter().filter_map(|e| e.field()).collect();
                assert_eq!(fields, vec!["b"]);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn missing_fields_never_succeeds() {
        match missing_fields::<House>("House", &[("a", true)]) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors.iter().next().and_then(|e| e.field()), Some("House"));
            }
            Validation::Success(_) => panic!("Expected failure, got success"),
        }
    }
}
