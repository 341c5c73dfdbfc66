//! Macros for declaring records together with their partial shapes.

/// Declare a record struct and its patch (partial) struct in one go.
///
/// The generated record derives `Clone`, `PartialEq`, `Debug`, `Serialize`
/// and `Deserialize`. The patch struct mirrors every field as `Option<_>`
/// and implements [`Patch`](crate::shape::Patch); the record implements
/// [`Record`](crate::shape::Record).
///
/// # Example
///
/// ```
/// use shapekit::record;
/// use shapekit::shape::Patch;
///
/// record! {
///     /// A point on the plane.
///     pub struct Point {
///         pub x: f64,
///         pub y: f64,
///     }
///     patch: PointPatch
/// }
///
/// let patch = PointPatch { y: Some(3.0), ..Default::default() };
/// assert_eq!(patch.fields(), vec!["y"]);
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }

        patch: $patch:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty
            ),*
        }

        #[doc = concat!("Partial shape of [`", stringify!($name), "`]: every field optional.")]
        #[derive(Clone, PartialEq, Debug, Default, serde::Serialize, serde::Deserialize)]
        $vis struct $patch {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                $field_vis $field: Option<$ty>
            ),*
        }

        impl $crate::shape::Record for $name {
            type Patch = $patch;

            const FIELDS: &'static [&'static str] = &[$(stringify!($field)),*];
        }

        impl From<$name> for $patch {
            fn from(record: $name) -> Self {
                Self {
                    $($field: Some(record.$field)),*
                }
            }
        }

        impl $crate::shape::Patch<$name> for $patch {
            fn apply(self, target: &mut $name) {
                $(
                    if let Some(value) = self.$field {
                        target.$field = value;
                    }
                )*
            }

            fn fields(&self) -> Vec<&'static str> {
                let mut present = Vec::new();
                $(
                    if self.$field.is_some() {
                        present.push(stringify!($field));
                    }
                )*
                present
            }

            fn merge(self, later: Self) -> Self {
                Self {
                    $($field: later.$field.or(self.$field)),*
                }
            }

            fn complete(self) -> $crate::shape::ShapeValidation<$name> {
                match ($(self.$field,)*) {
                    ($(Some($field),)*) => {
                        $crate::__private::Validation::success($name { $($field),* })
                    }
                    ($($field,)*) => $crate::shape::missing_fields(
                        stringify!($name),
                        &[$((stringify!($field), $field.is_some())),*],
                    ),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::shape::{Patch, Record, ShapeError};
    use stillwater::validation::Validation;

    record! {
        struct Config {
            name: String,
            retries: u8,
        }
        patch: ConfigPatch
    }

    #[test]
    fn record_macro_generates_traits() {
        assert_eq!(Config::FIELDS, &["name", "retries"]);

        let config = Config {
            name: "local".to_string(),
            retries: 1,
        };
        let updated = config.overlay(ConfigPatch {
            retries: Some(5),
            ..Default::default()
        });

        assert_eq!(updated.name, "local");
        assert_eq!(updated.retries, 5);
    }

    #[test]
    fn record_macro_supports_visibility_and_docs() {
        record! {
            /// Public record with documented fields
            pub struct Public {
                /// Identifier
                pub id: String,
            }
            patch: PublicPatch
        }

        let patch = PublicPatch {
            id: Some("123".to_string()),
        };
        assert!(patch.complete().is_success());
    }

    #[test]
    fn empty_patch_fails_to_complete() {
        match ConfigPatch::default().complete() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .all(|e| matches!(e, ShapeError::MissingField { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }
}
