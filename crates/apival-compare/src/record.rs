//! The comparison record emitted for each compared leaf

use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of a comparison report
///
/// Records are created once by the comparator and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    /// Location in the expected structure (e.g. `country[1].probability`),
    /// empty at the root
    pub path: String,

    /// Rendering of the expected value
    pub expected: String,

    /// Rendering of the actual value, `undefined` when absent
    pub actual: String,

    /// Whether both values were strictly equal
    #[serde(rename = "match")]
    pub matched: bool,
}

impl ComparisonRecord {
    pub(crate) fn new(
        path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
        matched: bool,
    ) -> Self {
        Self {
            path: path.into(),
            expected: expected.into(),
            actual: actual.into(),
            matched,
        }
    }
}

impl fmt::Display for ComparisonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.matched { "==" } else { "!=" };
        if self.path.is_empty() {
            write!(f, "{} {} {}", self.expected, marker, self.actual)
        } else {
            write!(
                f,
                "{}: {} {} {}",
                self.path, self.expected, marker, self.actual
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_match_field() {
        let record = ComparisonRecord::new("a.b", "1", "2", false);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"path": "a.b", "expected": "1", "actual": "2", "match": false})
        );
    }

    #[test]
    fn test_display() {
        let record = ComparisonRecord::new("count", "617", "6172", false);
        assert_eq!(record.to_string(), "count: 617 != 6172");

        let root = ComparisonRecord::new("", "x", "x", true);
        assert_eq!(root.to_string(), "x == x");
    }
}
