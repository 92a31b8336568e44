//! Expected-vs-generated JSON comparison
//!
//! This crate walks an expected JSON value alongside the value a remote call
//! actually produced and flattens the result into an ordered list of
//! [`ComparisonRecord`]s, one per compared leaf.
//!
//! The walk is driven entirely by the shape of the expected value:
//!
//! - keys that only exist in the actual value are never reported
//! - arrays report their length, then only the first three elements
//! - a missing actual value renders as `undefined`, distinct from `null`
//!
//! # Example
//!
//! ```
//! use apival_compare::compare;
//! use serde_json::json;
//!
//! let records = compare(&json!({"count": 617}), &json!({"count": 6172}));
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].path, "count");
//! assert!(!records[0].matched);
//! ```

mod compare;
pub mod depth;
mod error;
mod record;
pub mod render;
pub mod summary;

pub use compare::{compare, ARRAY_SAMPLE_LIMIT};
pub use depth::compare_with_limit;
pub use error::{CompareError, CompareResult};
pub use record::ComparisonRecord;
pub use summary::ComparisonSummary;

// Re-export serde_json::Value for convenience
pub use serde_json::Value;
