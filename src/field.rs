use crate::error::{NullableError, Result};

/// Tri-state field for models that must tell "absent" apart from "null".
///
/// A plain `Option<T>` cannot express the difference between a field that
/// was left out of a request and a field that was explicitly sent as
/// `null`. PATCH-style APIs need all three readings: leave the stored
/// value alone, clear it, or replace it. `Nullable<T>` holds exactly one
/// of those states and round-trips them through serde.
///
/// A fresh field is [`Unspecified`](Nullable::Unspecified). To keep that
/// state off the wire, the containing field must pair `#[serde(default)]`
/// with `skip_serializing_if`:
///
/// ```
/// use nullable::Nullable;
///
/// #[derive(serde::Serialize, serde::Deserialize)]
/// struct Patch {
/// 	#[serde(default, skip_serializing_if = "Nullable::is_unspecified")]
/// 	email: Nullable<String>,
/// }
///
/// let clear: Patch = serde_json::from_str(r#"{"email":null}"#).unwrap();
/// assert!(clear.email.is_null());
///
/// let keep: Patch = serde_json::from_str("{}").unwrap();
/// assert!(!keep.email.is_specified());
///
/// let replace: Patch = serde_json::from_str(r#"{"email":"a@b.c"}"#).unwrap();
/// assert_eq!(replace.email.get().unwrap(), "a@b.c");
/// ```
///
/// Without the `skip_serializing_if` attribute an `Unspecified` field
/// still encodes as `null` and can no longer be told apart from
/// [`Null`](Nullable::Null) on the way back in. That degradation is
/// intentional; fields that need the full three states must carry the
/// attribute pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
	/// Field absent from the input, or reset to "do not send".
	Unspecified,
	/// Field present with an explicit null.
	Null,
	/// Field present with a concrete value.
	Value(T),
}

impl<T> Nullable<T> {
	/// True when the field was sent at all, as either null or a value.
	pub fn is_specified(&self) -> bool {
		!matches!(self, Nullable::Unspecified)
	}

	/// True when the field was not sent. Predicate for `skip_serializing_if`.
	pub fn is_unspecified(&self) -> bool {
		matches!(self, Nullable::Unspecified)
	}

	/// True when the field was sent as an explicit null.
	pub fn is_null(&self) -> bool {
		matches!(self, Nullable::Null)
	}

	/// True when the field was sent with a concrete value.
	pub fn is_value(&self) -> bool {
		matches!(self, Nullable::Value(_))
	}

	/// Borrow the held value.
	///
	/// Fails with [`NullableError::Null`] on an explicit null and
	/// [`NullableError::Unspecified`] on an absent field, so callers are
	/// forced to handle the two cases distinctly; there is no silent
	/// default in either.
	pub fn get(&self) -> Result<&T> {
		match self {
			Nullable::Unspecified => Err(NullableError::Unspecified),
			Nullable::Null => Err(NullableError::Null),
			Nullable::Value(value) => Ok(value),
		}
	}

	/// Consume the field and return the held value, failing like [`get`](Nullable::get).
	pub fn into_value(self) -> Result<T> {
		match self {
			Nullable::Unspecified => Err(NullableError::Unspecified),
			Nullable::Null => Err(NullableError::Null),
			Nullable::Value(value) => Ok(value),
		}
	}

	/// Consume the field and return the held value, panicking where
	/// [`into_value`](Nullable::into_value) would fail.
	///
	/// For call sites that have already established "specified and
	/// non-null" as a precondition. The panic message is the propagated
	/// [`NullableError`], nothing else.
	#[track_caller]
	pub fn unwrap(self) -> T {
		match self.into_value() {
			Ok(value) => value,
			Err(err) => panic!("called `Nullable::unwrap()` on a field whose {err}"),
		}
	}

	/// Set the field to a concrete value, discarding any previous state.
	pub fn set(&mut self, value: T) {
		*self = Nullable::Value(value);
	}

	/// Set the field to an explicit null, discarding any previous state.
	pub fn set_null(&mut self) {
		*self = Nullable::Null;
	}

	/// Reset the field to "not sent", discarding any previous state.
	pub fn set_unspecified(&mut self) {
		*self = Nullable::Unspecified;
	}

	/// Convert from `&Nullable<T>` to `Nullable<&T>`.
	pub fn as_ref(&self) -> Nullable<&T> {
		match self {
			Nullable::Unspecified => Nullable::Unspecified,
			Nullable::Null => Nullable::Null,
			Nullable::Value(value) => Nullable::Value(value),
		}
	}

	/// Flatten to an `Option`, reading both `Null` and `Unspecified` as `None`.
	pub fn into_option(self) -> Option<T> {
		match self {
			Nullable::Value(value) => Some(value),
			Nullable::Null | Nullable::Unspecified => None,
		}
	}

	/// Expand to the nested-`Option` form used by serde's double-option
	/// convention: `None` for unspecified, `Some(None)` for null,
	/// `Some(Some(v))` for a value.
	pub fn into_double_option(self) -> Option<Option<T>> {
		match self {
			Nullable::Unspecified => None,
			Nullable::Null => Some(None),
			Nullable::Value(value) => Some(Some(value)),
		}
	}
}

impl<T> Default for Nullable<T> {
	// Manual impl: deriving would bound `T: Default`, and the default
	// state carries no `T` at all.
	fn default() -> Self {
		Nullable::Unspecified
	}
}

impl<T> From<T> for Nullable<T> {
	fn from(value: T) -> Self {
		Nullable::Value(value)
	}
}

impl<T> From<Option<T>> for Nullable<T> {
	/// `Option` is read as a present field: `None` means explicit null,
	/// never "unspecified".
	fn from(value: Option<T>) -> Self {
		match value {
			Some(value) => Nullable::Value(value),
			None => Nullable::Null,
		}
	}
}

impl<T> From<Option<Option<T>>> for Nullable<T> {
	/// Inverse of [`into_double_option`](Nullable::into_double_option).
	fn from(value: Option<Option<T>>) -> Self {
		match value {
			None => Nullable::Unspecified,
			Some(None) => Nullable::Null,
			Some(Some(value)) => Nullable::Value(value),
		}
	}
}
