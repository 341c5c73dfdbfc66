//! Runtime shape validation for dynamic (JSON) values.
//!
//! The compile-time transforms in [`crate::shape`] only cover values whose
//! type is known statically. Values that arrive as `serde_json::Value` are
//! checked against a [`Schema`] instead, and the same three transforms exist
//! as schema operations: [`Schema::partial`], [`Schema::required`] and
//! [`Schema::readonly`].
//!
//! Validation reports every violation at once using Stillwater's
//! `Validation`, rather than stopping at the first problem.
//!
//! # Example
//!
//! ```rust
//! use shapekit::schema::{FieldKind, SchemaBuilder};
//! use shapekit::shape::ShapeError;
//! use serde_json::json;
//! use stillwater::validation::Validation;
//!
//! let point = SchemaBuilder::new()
//!     .field("x", FieldKind::Number)
//!     .field("y", FieldKind::Number)
//!     .build()
//!     .unwrap();
//!
//! match point.validate(&json!({"y": "3", "z": 0})) {
//!     Validation::Failure(errors) => assert_eq!(errors.len(), 3),
//!     Validation::Success(_) => unreachable!(),
//! }
//!
//! assert!(point.partial().validate(&json!({"y": 3})).is_success());
//! ```

pub mod builder;
pub mod error;
pub mod field;
pub mod object;
pub mod union;

pub use builder::SchemaBuilder;
pub use error::BuildError;
pub use field::{FieldKind, FieldSpec};
pub use object::Schema;
pub use union::{UnionSchema, UnionSchemaBuilder};
