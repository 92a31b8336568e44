//! Expected-vs-actual traversal

use crate::record::ComparisonRecord;
use crate::render::{render_slot, render_value, type_name, UNDEFINED};
use serde_json::{Map, Number, Value};
use tracing::{debug, trace};

/// How many leading array elements are compared structurally
pub const ARRAY_SAMPLE_LIMIT: usize = 3;

/// Compare an expected value against the value actually produced
///
/// Returns one record per compared leaf, in depth-first pre-order of the
/// expected value. Keys and array elements that only exist in `actual` are
/// never visited, and arrays are sampled to their first
/// [`ARRAY_SAMPLE_LIMIT`] elements after a length check.
pub fn compare(expected: &Value, actual: &Value) -> Vec<ComparisonRecord> {
    let mut records = Vec::new();
    traverse("", expected, Some(actual), &mut records);
    debug!(
        "Compared values: {} records, {} mismatched",
        records.len(),
        records.iter().filter(|r| !r.matched).count()
    );
    records
}

fn traverse(
    path: &str,
    expected: &Value,
    actual: Option<&Value>,
    records: &mut Vec<ComparisonRecord>,
) {
    match expected {
        Value::Array(items) => compare_array(path, items, actual, records),
        Value::Object(map) => compare_object(path, map, actual, records),
        _ => records.push(scalar_record(path.to_string(), expected, actual)),
    }
}

fn compare_array(
    path: &str,
    expected: &[Value],
    actual: Option<&Value>,
    records: &mut Vec<ComparisonRecord>,
) {
    let Some(Value::Array(actual_items)) = actual else {
        trace!("Array expected at '{}', found {}", path, type_name(actual));
        records.push(ComparisonRecord::new(
            path,
            "Array",
            type_name(actual),
            false,
        ));
        return;
    };

    records.push(ComparisonRecord::new(
        format!("{}.length", path),
        expected.len().to_string(),
        actual_items.len().to_string(),
        expected.len() == actual_items.len(),
    ));

    for (i, item) in expected.iter().take(ARRAY_SAMPLE_LIMIT).enumerate() {
        let new_path = format!("{}[{}]", path, i);
        traverse(&new_path, item, actual_items.get(i), records);
    }
}

fn compare_object(
    path: &str,
    expected: &Map<String, Value>,
    actual: Option<&Value>,
    records: &mut Vec<ComparisonRecord>,
) {
    for (key, expected_value) in expected {
        let new_path = if path.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", path, key)
        };

        let Some(actual) = actual else {
            records.push(ComparisonRecord::new(
                new_path,
                render_value(expected_value),
                UNDEFINED,
                false,
            ));
            continue;
        };

        // Non-object actual values have no members, so every lookup is absent
        let actual_value = actual.as_object().and_then(|obj| obj.get(key));

        if is_structured(expected_value) {
            traverse(&new_path, expected_value, actual_value, records);
        } else {
            records.push(scalar_record(new_path, expected_value, actual_value));
        }
    }
}

fn scalar_record(path: String, expected: &Value, actual: Option<&Value>) -> ComparisonRecord {
    ComparisonRecord::new(
        path,
        render_value(expected),
        render_slot(actual),
        strict_equals(expected, actual),
    )
}

fn is_structured(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_))
}

/// Same type and same value; structured values never equal anything here
fn strict_equals(expected: &Value, actual: Option<&Value>) -> bool {
    match (expected, actual) {
        (Value::Null, Some(Value::Null)) => true,
        (Value::Bool(a), Some(Value::Bool(b))) => a == b,
        (Value::Number(a), Some(Value::Number(b))) => numbers_equal(a, b),
        (Value::String(a), Some(Value::String(b))) => a == b,
        _ => false,
    }
}

/// Exact numeric equality regardless of integer/float representation
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn record(path: &str, expected: &str, actual: &str, matched: bool) -> ComparisonRecord {
        ComparisonRecord::new(path, expected, actual, matched)
    }

    #[test_case(json!(null) ; "null")]
    #[test_case(json!(true) ; "boolean")]
    #[test_case(json!(0) ; "zero")]
    #[test_case(json!(-17.25) ; "negative float")]
    #[test_case(json!("hello") ; "string")]
    #[test_case(json!("") ; "empty string")]
    fn test_scalar_equal_to_itself(value: Value) {
        let records = compare(&value, &value);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "");
        assert!(records[0].matched);
    }

    #[test_case(json!(1), json!(2) ; "different numbers")]
    #[test_case(json!(1), json!("1") ; "number and numeric string")]
    #[test_case(json!(null), json!(false) ; "null and false")]
    #[test_case(json!(0), json!(false) ; "zero and false")]
    #[test_case(json!(""), json!(null) ; "empty string and null")]
    #[test_case(json!("a"), json!("A") ; "case sensitive strings")]
    #[test_case(json!(true), json!({}) ; "scalar and object")]
    fn test_scalar_mismatch(expected: Value, actual: Value) {
        let records = compare(&expected, &actual);
        assert_eq!(records.len(), 1);
        assert!(!records[0].matched);
    }

    #[test]
    fn test_integer_and_float_forms_are_the_same_number() {
        let records = compare(&json!(1), &json!(1.0));
        assert_eq!(records, vec![record("", "1", "1", true)]);
    }

    #[test]
    fn test_no_numeric_tolerance() {
        let records = compare(&json!(0.3), &json!(0.1 + 0.2));
        assert_eq!(
            records,
            vec![record("", "0.3", "0.30000000000000004", false)]
        );
    }

    #[test]
    fn test_empty_arrays() {
        assert_eq!(
            compare(&json!([]), &json!([])),
            vec![record(".length", "0", "0", true)]
        );
    }

    #[test]
    fn test_array_sampling_stops_after_three() {
        let records = compare(&json!([1, 2, 3, 4, 5]), &json!([1, 2, 3, 9, 9]));
        assert_eq!(
            records,
            vec![
                record(".length", "5", "5", true),
                record("[0]", "1", "1", true),
                record("[1]", "2", "2", true),
                record("[2]", "3", "3", true),
            ]
        );
    }

    #[test]
    fn test_array_shorter_actual() {
        let records = compare(&json!(["a", "b"]), &json!(["a"]));
        assert_eq!(
            records,
            vec![
                record(".length", "2", "1", false),
                record("[0]", "a", "a", true),
                record("[1]", "b", "undefined", false),
            ]
        );
    }

    #[test]
    fn test_array_against_non_array() {
        assert_eq!(
            compare(&json!([1]), &json!({"0": 1})),
            vec![record("", "Array", "object", false)]
        );
        assert_eq!(
            compare(&json!([1]), &json!("1")),
            vec![record("", "Array", "string", false)]
        );
        assert_eq!(
            compare(&json!({"a": [1]}), &json!({"a": 5})),
            vec![record("a", "Array", "number", false)]
        );
        assert_eq!(
            compare(&json!({"a": [1]}), &json!({})),
            vec![record("a", "Array", "undefined", false)]
        );
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(
            compare(&json!({"a": 1}), &json!({})),
            vec![record("a", "1", "undefined", false)]
        );
    }

    #[test]
    fn test_null_is_not_undefined() {
        assert_eq!(
            compare(&json!({"a": null}), &json!({"a": null})),
            vec![record("a", "null", "null", true)]
        );
        assert_eq!(
            compare(&json!({"a": null}), &json!({})),
            vec![record("a", "null", "undefined", false)]
        );
    }

    #[test]
    fn test_nested_objects_only_report_leaves() {
        assert_eq!(
            compare(&json!({"a": {"b": 2}}), &json!({"a": {"b": 2}})),
            vec![record("a.b", "2", "2", true)]
        );
    }

    #[test]
    fn test_extra_actual_keys_are_ignored() {
        assert_eq!(
            compare(&json!({"a": 1}), &json!({"a": 1, "b": 2})),
            vec![record("a", "1", "1", true)]
        );
    }

    #[test]
    fn test_key_order_follows_expected() {
        let expected: Value = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let actual: Value = serde_json::from_str(r#"{"a": 2, "m": 3, "z": 1}"#).unwrap();
        let paths: Vec<_> = compare(&expected, &actual)
            .into_iter()
            .map(|r| r.path)
            .collect();
        assert_eq!(paths, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_missing_nested_object_descends_with_undefined() {
        // The nested object is absent as a whole, so its keys are reported
        // with their expected renderings
        assert_eq!(
            compare(&json!({"a": {"b": 1, "c": {"d": true}}}), &json!({})),
            vec![
                record("a.b", "1", "undefined", false),
                record("a.c", r#"{"d":true}"#, "undefined", false),
            ]
        );
    }

    #[test]
    fn test_object_against_scalar_actual() {
        assert_eq!(
            compare(&json!({"a": 1}), &json!(7)),
            vec![record("a", "1", "undefined", false)]
        );
        assert_eq!(
            compare(&json!({"a": 1}), &json!(null)),
            vec![record("a", "1", "undefined", false)]
        );
    }

    #[test]
    fn test_object_against_array_actual() {
        // Arrays have no named members, not even index-like or "length" keys
        assert_eq!(
            compare(&json!({"0": "a", "length": 1}), &json!(["a"])),
            vec![
                record("0", "a", "undefined", false),
                record("length", "1", "undefined", false),
            ]
        );
        assert_eq!(
            compare(&json!({"a": {"b": 1}}), &json!({"a": [1]})),
            vec![record("a.b", "1", "undefined", false)]
        );
    }

    #[test]
    fn test_structured_actual_at_scalar_leaf() {
        assert_eq!(
            compare(&json!({"a": 1}), &json!({"a": [1]})),
            vec![record("a", "1", "[1]", false)]
        );
    }

    #[test]
    fn test_empty_object_emits_nothing() {
        assert!(compare(&json!({}), &json!({"a": 1})).is_empty());
        assert!(compare(&json!({"a": {}}), &json!({})).is_empty());
    }

    #[test]
    fn test_array_of_objects_paths() {
        let records = compare(
            &json!({"items": [{"id": 1}, {"id": 2}]}),
            &json!({"items": [{"id": 1}, {"id": 3}]}),
        );
        assert_eq!(
            records,
            vec![
                record("items.length", "2", "2", true),
                record("items[0].id", "1", "1", true),
                record("items[1].id", "2", "3", false),
            ]
        );
    }

    #[test]
    fn test_nested_arrays_paths() {
        let records = compare(&json!([[1], []]), &json!([[1], [2]]));
        assert_eq!(
            records,
            vec![
                record(".length", "2", "2", true),
                record("[0].length", "1", "1", true),
                record("[0][0]", "1", "1", true),
                record("[1].length", "0", "1", false),
            ]
        );
    }

    #[test]
    fn test_deterministic() {
        let expected = json!({"a": [1, {"b": "x"}], "c": null});
        let actual = json!({"a": [2, {"b": "y"}], "d": 1});
        assert_eq!(compare(&expected, &actual), compare(&expected, &actual));
    }
}
