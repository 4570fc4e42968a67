//! Tri-state nullable field type for serde data models.
//!
//! Distinguishes a field that is absent from the input, a field present
//! as an explicit null, and a field present with a value: the three
//! PATCH-request readings that a plain `Option` collapses into two. See
//! [`Nullable`] for the field contract.

mod codec;
mod error;
mod field;

/// Error and result aliases.
pub use error::{NullableError, Result};
/// The tri-state field type.
pub use field::Nullable;
