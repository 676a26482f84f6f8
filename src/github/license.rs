// src/github/license.rs
// =============================================================================
// The license predicate: does a repo record carry a given license key?
//
// A repo record from the GitHub API looks like:
//   { "name": "repo1", "license": { "key": "mit", ... }, ... }
//
// but "license" can be missing, null, or (in odd payloads) not an object,
// and "key" can be missing or null. All of those are simply "no match".
// =============================================================================

use serde_json::Value;

use super::nested::access_nested_map;

// Returns true iff repo["license"]["key"] is a string equal to `license_key`
//
// Never fails: any lookup problem means the repo doesn't have that license.
pub fn has_license(repo: &Value, license_key: &str) -> bool {
    match access_nested_map(repo, &["license", "key"]) {
        Ok(key) => key.as_str() == Some(license_key),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(json!({"license": {"key": "my_license"}}), "my_license", true ; "matching key")]
    #[test_case(json!({"license": {"key": "other_license"}}), "my_license", false ; "other key")]
    #[test_case(json!({}), "my_license", false ; "no license field")]
    #[test_case(json!({"license": null}), "my_license", false ; "null license")]
    #[test_case(json!({"license": {"key": null}}), "my_license", false ; "null key")]
    #[test_case(json!({"license": {}}), "my_license", false ; "license without key")]
    #[test_case(json!({"license": "my_license"}), "my_license", false ; "license is a string")]
    #[test_case(json!({"license": {"key": "MIT"}}), "mit", false ; "case sensitive")]
    fn test_has_license(repo: Value, license_key: &str, expected: bool) {
        assert_eq!(has_license(&repo, license_key), expected);
    }
}
