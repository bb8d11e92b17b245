//! Error type for malformed `key=value` parameter strings.

use thiserror::Error;

/// Why a configured query parameter was rejected. Each variant carries the
/// offending input so the message can point at it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// No `=` separator at all.
    #[error("query parameter should be in the format key=value, got {0:?}")]
    Format(String),
    /// Nothing (or only whitespace) before the first `=`.
    #[error("query parameter has an empty key: {0:?}")]
    EmptyKey(String),
    /// Nothing after the first `=`.
    #[error("query parameter has an empty value: {0:?}")]
    EmptyValue(String),
}
