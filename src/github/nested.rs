// src/github/nested.rs
// =============================================================================
// Walks a JSON value by a path of object keys.
//
// access_nested_map(&json, &["license", "key"]) is json["license"]["key"],
// except that a missing key is an error instead of a silent Value::Null.
// Every step must land on a JSON object that contains the next key.
// =============================================================================

use serde_json::Value;

use crate::error::ClientError;

// Returns the value at `path` inside `value`
//
// Fails with ClientError::KeyNotFound naming the first key that could not be
// followed, either because it's absent or because its parent isn't an object.
// An empty path returns `value` itself.
pub fn access_nested_map<'a>(value: &'a Value, path: &[&str]) -> Result<&'a Value, ClientError> {
    path.iter().try_fold(value, |current, key| {
        current
            .as_object()
            .and_then(|map| map.get(*key))
            .ok_or_else(|| ClientError::KeyNotFound {
                key: (*key).to_string(),
            })
    })
}
