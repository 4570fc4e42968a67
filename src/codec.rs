//! Serde wiring for [`Nullable`].
//!
//! For a field `foo` of element type string, declared with
//! `#[serde(default, skip_serializing_if = "Nullable::is_unspecified")]`:
//!
//! | Logical state | Encoded form |
//! |---|---|
//! | `Unspecified` | key absent |
//! | `Null` | `"foo": null` |
//! | `Value("bar")` | `"foo": "bar"` |
//!
//! The impls are format-agnostic: the same mapping drives serde_json and
//! serde_yaml, and the YAML null spellings (`null`, `~`, empty value) all
//! reach the null arm through the format's own deserializer. A malformed
//! payload for `T` is returned as the deserializer's error, cause
//! included, and fails the containing record's decode whole; no partially
//! decoded record is produced.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::field::Nullable;

impl<T> Serialize for Nullable<T>
where
	T: Serialize,
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match self {
			// An unspecified field is meant to be skipped by the
			// containing struct before this impl runs. When it is not,
			// null is the fallback form and the absent state is lost on
			// the next decode.
			Nullable::Unspecified | Nullable::Null => serializer.serialize_none(),
			Nullable::Value(value) => serializer.serialize_some(value),
		}
	}
}

impl<'de, T> Deserialize<'de> for Nullable<T>
where
	T: Deserialize<'de>,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		// Only invoked when the field is textually present, carrying
		// either the null literal or a payload for `T`. Absent fields
		// never reach this impl; `#[serde(default)]` on the containing
		// field supplies `Unspecified`.
		Option::<T>::deserialize(deserializer).map(Nullable::from)
	}
}

#[cfg(test)]
mod tests;
