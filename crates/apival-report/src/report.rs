//! The validation service's response document
//!
//! The service sometimes echoes `expected_op` / `generated_op` back as JSON
//! text instead of JSON. [`ValidationReport::comparison`] decodes such text
//! when it holds a non-empty object or array; any other string, `"{}"` and
//! `"[]"` included, is compared as the string it is.

use apival_compare::render::render_value;
use apival_compare::{compare, compare_with_limit, CompareResult, ComparisonRecord};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::borrow::Cow;
use std::fmt;
use tracing::{debug, warn};

/// Discrepancy text used for reports synthesized after a failed call
const CALL_FAILED: &str = "API call failed";

/// Pass/fail verdict of a validation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Pass,
    Fail,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Pass => write!(f, "Pass"),
            Verdict::Fail => write!(f, "Fail"),
        }
    }
}

/// Discrepancy description, sent either as one newline-separated string or as
/// a list of lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Discrepancies {
    Lines(Vec<String>),
    Text(String),
    Other(Value),
}

impl Default for Discrepancies {
    fn default() -> Self {
        Discrepancies::Text(String::new())
    }
}

impl Discrepancies {
    /// Individual discrepancy lines; empty lines of a text description are dropped
    pub fn lines(&self) -> Vec<String> {
        match self {
            Discrepancies::Lines(lines) => lines.clone(),
            Discrepancies::Text(text) => split_lines(text),
            Discrepancies::Other(value) => split_lines(&render_value(value)),
        }
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Response of the validation service for one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub validation: Verdict,
    #[serde(default)]
    pub discrepancies: Discrepancies,
    #[serde(default)]
    pub test_id: String,
    /// Output the validated endpoint actually produced
    #[serde(default)]
    pub generated_op: Value,
    /// Output the user expected
    #[serde(default)]
    pub expected_op: Value,
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub bug_title: String,
    /// Status code of the validated call
    pub status_code: u16,
}

/// The parts of a submission needed to report a failed call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub endpoint: String,
    /// Expected output as the user typed it
    pub expected_op: String,
}

impl Submission {
    pub fn new(endpoint: impl Into<String>, expected_op: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            expected_op: expected_op.into(),
        }
    }

    /// The expected text as JSON, or the raw text when it does not parse
    ///
    /// Empty text stands for an empty object.
    pub fn expected_value(&self) -> Value {
        let text = self.expected_op.trim();
        if text.is_empty() {
            return json!({});
        }
        serde_json::from_str(text).unwrap_or_else(|_| Value::String(self.expected_op.clone()))
    }
}

impl ValidationReport {
    /// Build the failed report shown when the service could not be reached or
    /// answered with something unusable
    pub fn transport_failure(submission: &Submission, reason: &str) -> Self {
        warn!(
            "Validation call for '{}' failed: {}",
            submission.endpoint, reason
        );
        Self {
            validation: Verdict::Fail,
            discrepancies: Discrepancies::Text(CALL_FAILED.to_string()),
            test_id: "error".to_string(),
            generated_op: json!({}),
            expected_op: submission.expected_value(),
            endpoint: submission.endpoint.clone(),
            bug_title: CALL_FAILED.to_string(),
            status_code: 500,
        }
    }

    /// Interpret the HTTP outcome of a validation call
    ///
    /// A non-2xx status or a body that is not a validation report yields a
    /// synthesized failed report instead of an error.
    pub fn from_http(status: u16, body: &str, submission: &Submission) -> Self {
        if !(200..300).contains(&status) {
            return Self::transport_failure(submission, &format!("API error: {}", status));
        }

        match serde_json::from_str::<ValidationReport>(body) {
            Ok(report) => {
                debug!(
                    "Validation report for '{}': {}",
                    report.endpoint, report.validation
                );
                report
            }
            Err(e) => Self::transport_failure(submission, &format!("malformed response: {}", e)),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.validation == Verdict::Fail
    }

    /// Check if the validated call returned a 2xx status
    pub fn status_is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    pub fn discrepancy_lines(&self) -> Vec<String> {
        self.discrepancies.lines()
    }

    /// Compare the expected output against the generated one
    pub fn comparison(&self) -> Vec<ComparisonRecord> {
        compare(
            &decode_embedded(&self.expected_op),
            &decode_embedded(&self.generated_op),
        )
    }

    /// Like [`comparison`](Self::comparison), refusing expected outputs nested
    /// deeper than `max_depth`
    pub fn comparison_with_limit(&self, max_depth: usize) -> CompareResult<Vec<ComparisonRecord>> {
        compare_with_limit(
            &decode_embedded(&self.expected_op),
            &decode_embedded(&self.generated_op),
            max_depth,
        )
    }
}

/// Decode JSON text holding a non-empty object or array
///
/// Empty containers stay strings: decoded, `{}` would compare to no rows at all.
fn decode_embedded(value: &Value) -> Cow<'_, Value> {
    if let Value::String(text) = value {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) if !map.is_empty() => return Cow::Owned(Value::Object(map)),
            Ok(Value::Array(items)) if !items.is_empty() => {
                return Cow::Owned(Value::Array(items))
            }
            _ => {}
        }
    }
    Cow::Borrowed(value)
}
