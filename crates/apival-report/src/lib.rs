//! Validation service response handling
//!
//! The validation backend answers every submission with a JSON document that
//! carries a pass/fail verdict, a discrepancy description, the expected and
//! generated outputs, and the status code of the validated call. This crate
//! models that document, synthesizes a failed report when the call itself
//! could not be completed, and loads JSON documents from files or stdin.
//!
//! # Example
//!
//! ```
//! use apival_report::ValidationReport;
//!
//! let report: ValidationReport = serde_json::from_str(r#"{
//!     "validation": "Fail",
//!     "discrepancies": "1. count differs\n2. name differs",
//!     "expected_op": {"count": 617},
//!     "generated_op": {"count": 6172},
//!     "status_code": 200
//! }"#).unwrap();
//!
//! assert!(report.is_failed());
//! assert_eq!(report.discrepancy_lines().len(), 2);
//! assert!(!report.comparison()[0].matched);
//! ```

mod error;
pub mod loader;
mod report;

pub use error::{ReportError, ReportResult};
pub use loader::{load_json, load_report, InputSource};
pub use report::{Discrepancies, Submission, ValidationReport, Verdict};
