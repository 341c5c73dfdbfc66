//! Shapekit: typed record shapes and the containers built on them
//!
//! Shapekit provides a small set of building blocks for working with
//! record-shaped data:
//!
//! # Core Concepts
//!
//! - **Queue**: generic first-in, first-out container
//! - **State**: holds one record value and merges partial updates into it
//! - **Shapes**: the Partial / Required / Readonly transforms as Rust types,
//!   declared with the [`record!`] macro
//! - **Schemas**: runtime validators for JSON values, with the same
//!   transforms and tagged-union support
//!
//! # Example
//!
//! ```rust
//! use shapekit::core::{Queue, State};
//! use shapekit::record;
//!
//! record! {
//!     pub struct Point {
//!         pub x: i32,
//!         pub y: i32,
//!     }
//!     patch: PointPatch
//! }
//!
//! let mut queue = Queue::new();
//! queue.enqueue(PointPatch { y: Some(3), ..Default::default() });
//!
//! let mut state = State::new(Point { x: 0, y: 0 });
//! while let Some(patch) = queue.dequeue() {
//!     state.update(patch);
//! }
//!
//! assert_eq!(state.current(), &Point { x: 0, y: 3 });
//! ```

pub mod core;
pub mod schema;
pub mod shape;

// Re-export commonly used types
pub use crate::core::{Queue, State, UpdateHistory, UpdateRecord};
pub use crate::schema::{
    BuildError, FieldKind, Schema, SchemaBuilder, UnionSchema, UnionSchemaBuilder,
};
pub use crate::shape::{Patch, Readonly, Record, ShapeError, ShapeValidation};

#[doc(hidden)]
pub mod __private {
    pub use stillwater::validation::Validation;
}
