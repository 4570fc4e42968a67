use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, NullableError>;

/// Errors produced when reading a value out of a [`Nullable`] field.
///
/// Both variants are expected in normal control flow: a PATCH handler
/// branches on them to tell "leave the column alone" apart from "clear
/// the column". Decode failures are not represented here — a malformed
/// payload surfaces as the deserializer's own error from the containing
/// record's decode, cause included.
///
/// [`Nullable`]: crate::Nullable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NullableError {
	/// The field was never present in the input and was never set.
	#[error("value is unspecified")]
	Unspecified,
	/// The field was present and explicitly `null`.
	#[error("value is null")]
	Null,
}
