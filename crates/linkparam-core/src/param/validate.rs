//! `key=value` validation, split at the first `=`.

use super::ParamError;

/// Validates a static parameter string and returns its `(key, value)` halves.
///
/// Only the first `=` separates key from value, so `filter=price=100` is
/// valid with key `filter` and value `price=100`.
pub fn validate(spec: &str) -> Result<(&str, &str), ParamError> {
    let (key, value) = spec
        .split_once('=')
        .ok_or_else(|| ParamError::Format(spec.to_string()))?;
    if key.trim().is_empty() {
        return Err(ParamError::EmptyKey(spec.to_string()));
    }
    if value.is_empty() {
        return Err(ParamError::EmptyValue(spec.to_string()));
    }
    Ok((key, value))
}

/// Validates a bare key, as declared by a dynamic parameter.
pub fn validate_key(key: &str) -> Result<(), ParamError> {
    if key.trim().is_empty() {
        return Err(ParamError::EmptyKey(key.to_string()));
    }
    // A key with `=` would split differently once serialized.
    if key.contains('=') {
        return Err(ParamError::Format(key.to_string()));
    }
    Ok(())
}
