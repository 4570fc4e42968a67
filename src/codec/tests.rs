use serde_json::json;

use crate::Nullable;

#[test]
fn bare_value_encodes_as_the_element() {
	let encoded = serde_json::to_string(&Nullable::Value(12345)).expect("encodes");
	assert_eq!(encoded, "12345");
}

#[test]
fn bare_null_encodes_as_null_literal() {
	let encoded = serde_json::to_string(&Nullable::<i32>::Null).expect("encodes");
	assert_eq!(encoded, "null");
}

#[test]
fn bare_unspecified_falls_back_to_null() {
	// Outside an omitting container there is no way to encode absence;
	// the fallback conflates it with an explicit null.
	let encoded = serde_json::to_string(&Nullable::<i32>::Unspecified).expect("encodes");
	assert_eq!(encoded, "null");
}

#[test]
fn bare_null_decodes_to_null_state() {
	let field: Nullable<i32> = serde_json::from_str("null").expect("decodes");
	assert_eq!(field, Nullable::Null);
}

#[test]
fn bare_payload_decodes_to_value_state() {
	let field: Nullable<String> = serde_json::from_str(r#""bar""#).expect("decodes");
	assert_eq!(field, Nullable::Value("bar".to_owned()));
}

#[test]
fn malformed_payload_surfaces_the_format_error() {
	let result: serde_json::Result<Nullable<String>> = serde_json::from_str("12345");
	let err = result.expect_err("number is not a string");
	assert!(err.is_data(), "expected a data error, got: {err}");
}

#[test]
fn value_tree_round_trips_through_serde_json_value() {
	let original = Nullable::Value(vec![1, 2, 3]);
	let tree = serde_json::to_value(&original).expect("encodes");
	assert_eq!(tree, json!([1, 2, 3]));

	let decoded: Nullable<Vec<i32>> = serde_json::from_value(tree).expect("decodes");
	assert_eq!(decoded, original);
}

#[test]
fn sequence_elements_keep_null_and_value_apart() {
	// Sequences have no omission convention, so only two of the three
	// states survive as elements.
	let items = vec![Nullable::Value(1), Nullable::Null, Nullable::Value(3)];
	let encoded = serde_json::to_string(&items).expect("encodes");
	assert_eq!(encoded, "[1,null,3]");

	let decoded: Vec<Nullable<i32>> = serde_json::from_str(&encoded).expect("decodes");
	assert_eq!(decoded, items);
}
