//! Error types for guarded comparisons

use thiserror::Error;

/// Result type for guarded comparison operations
pub type CompareResult<T> = Result<T, CompareError>;

/// Errors raised before a comparison is attempted
///
/// The comparator itself is total; only the depth guard can refuse input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompareError {
    /// Expected value nests deeper than the configured limit
    #[error("expected value is nested more than {limit} levels deep")]
    TooDeep { limit: usize },
}
