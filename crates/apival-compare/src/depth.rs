//! Recursion guard for untrusted input
//!
//! The comparator recurses once per nesting level of the expected value, and
//! only into the first [`ARRAY_SAMPLE_LIMIT`] elements of each array. Values
//! decoded by `serde_json` are already limited by its parser, but values built
//! in memory are not, so callers handling untrusted documents can check the
//! walk depth up front. The check itself never descends past the limit.

use crate::compare::{compare, ARRAY_SAMPLE_LIMIT};
use crate::error::{CompareError, CompareResult};
use crate::record::ComparisonRecord;
use serde_json::Value;

/// Whether comparing against `value` would nest deeper than `limit` levels
///
/// Scalars are 0 levels, `[]` and `{}` are 1. Array elements the comparator
/// never samples are not measured.
pub fn exceeds(value: &Value, limit: usize) -> bool {
    match value {
        Value::Array(items) => {
            limit == 0
                || items
                    .iter()
                    .take(ARRAY_SAMPLE_LIMIT)
                    .any(|item| exceeds(item, limit - 1))
        }
        Value::Object(map) => limit == 0 || map.values().any(|item| exceeds(item, limit - 1)),
        _ => false,
    }
}

/// Like [`compare`], but refuses expected values whose walk nests deeper than
/// `max_depth`
///
/// Only the expected value is measured since its shape alone drives the walk.
pub fn compare_with_limit(
    expected: &Value,
    actual: &Value,
    max_depth: usize,
) -> CompareResult<Vec<ComparisonRecord>> {
    if exceeds(expected, max_depth) {
        return Err(CompareError::TooDeep { limit: max_depth });
    }
    Ok(compare(expected, actual))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nested(levels: usize) -> Value {
        (0..levels).fold(json!(1), |inner, _| json!({ "n": inner }))
    }

    fn nested_list(levels: usize) -> Value {
        (0..levels).fold(json!(1), |inner, _| json!([inner]))
    }

    #[test]
    fn test_exceeds() {
        assert!(!exceeds(&json!(null), 0));
        assert!(exceeds(&json!([]), 0));
        assert!(!exceeds(&json!({}), 1));
        assert!(!exceeds(&json!({"a": [1, {"b": []}]}), 4));
        assert!(exceeds(&json!({"a": [1, {"b": []}]}), 3));
        assert!(!exceeds(&nested(10), 10));
        assert!(exceeds(&nested(10), 9));
    }

    #[test]
    fn test_unsampled_elements_are_not_measured() {
        let expected = json!([1, 2, 3, nested_list(100)]);
        assert!(!exceeds(&expected, 1));

        let records = compare_with_limit(&expected, &json!([1, 2, 3, 4]), 64).unwrap();
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn test_sampled_elements_are_measured() {
        let expected = json!([1, nested_list(10), 3]);
        assert!(exceeds(&expected, 10));
        assert!(!exceeds(&expected, 11));
    }

    #[test]
    fn test_within_limit_matches_compare() {
        let expected = json!({"a": [1, 2]});
        let actual = json!({"a": [1, 3]});
        assert_eq!(
            compare_with_limit(&expected, &actual, 2).unwrap(),
            compare(&expected, &actual)
        );
    }

    #[test]
    fn test_too_deep() {
        let err = compare_with_limit(&nested(5), &json!({}), 4).unwrap_err();
        assert_eq!(err, CompareError::TooDeep { limit: 4 });
    }

    #[test]
    fn test_actual_depth_is_not_measured() {
        assert!(compare_with_limit(&json!({"n": 1}), &nested(50), 1).is_ok());
    }
}
