//! Compile-time shape transforms.
//!
//! Rust has no mapped types, so the three classic transforms are expressed
//! with ordinary types:
//! - **Partial**: the [`Patch`] associated type of a [`Record`], all fields optional
//! - **Required**: the record struct itself, reached from a patch through
//!   [`Patch::complete`] only after every field has been checked
//! - **Readonly**: the [`Readonly`] wrapper, which never hands out `&mut`

mod error;
pub mod macros;
mod readonly;
mod record;

pub use error::{ShapeError, ShapeValidation};
pub use readonly::Readonly;
#[doc(hidden)]
pub use record::missing_fields;
pub use record::{Patch, Record};
