//! Configured query parameters: static `key=value` strings and dynamic
//! parameters whose value is computed per link.

mod error;
mod validate;

pub use error::ParamError;
pub use validate::{validate, validate_key};

use crate::context::LinkContext;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Boxed error returned by dynamic compute functions.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Compute function of a dynamic parameter.
pub type ComputeFn = Arc<dyn Fn(&LinkContext<'_>) -> Result<String, BoxError> + Send + Sync>;

/// A validated `key=value` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticParam {
    raw: String,
    /// Byte offset of the first `=`.
    split: usize,
}

impl StaticParam {
    pub fn parse(raw: impl Into<String>) -> Result<Self, ParamError> {
        let raw = raw.into();
        let (key, _) = validate(&raw)?;
        let split = key.len();
        Ok(Self { raw, split })
    }

    pub fn key(&self) -> &str {
        &self.raw[..self.split]
    }

    pub fn value(&self) -> &str {
        &self.raw[self.split + 1..]
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl FromStr for StaticParam {
    type Err = ParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for StaticParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A parameter whose key is fixed but whose value is computed per link.
#[derive(Clone)]
pub struct DynamicParam {
    key: String,
    compute: ComputeFn,
}

impl DynamicParam {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn compute(&self, ctx: &LinkContext<'_>) -> Result<String, BoxError> {
        (self.compute)(ctx)
    }
}

impl fmt::Debug for DynamicParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicParam")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// One configured query parameter.
#[derive(Debug, Clone)]
pub enum ParameterSpec {
    Static(StaticParam),
    Dynamic(DynamicParam),
}

impl ParameterSpec {
    /// Static parameter from a `key=value` string.
    pub fn fixed(raw: impl Into<String>) -> Result<Self, ParamError> {
        StaticParam::parse(raw).map(Self::Static)
    }

    /// Dynamic parameter. The key is validated now; the value is only known
    /// when `compute` runs for a link.
    pub fn dynamic<F>(key: impl Into<String>, compute: F) -> Result<Self, ParamError>
    where
        F: Fn(&LinkContext<'_>) -> Result<String, BoxError> + Send + Sync + 'static,
    {
        let key = key.into();
        validate_key(&key)?;
        Ok(Self::Dynamic(DynamicParam {
            key,
            compute: Arc::new(compute),
        }))
    }

    pub fn key(&self) -> &str {
        match self {
            ParameterSpec::Static(p) => p.key(),
            ParameterSpec::Dynamic(p) => p.key(),
        }
    }
}

/// A concrete `(key, value)` pair ready to be merged into a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParameter {
    pub key: String,
    pub value: String,
}

impl ResolvedParameter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl From<&StaticParam> for ResolvedParameter {
    fn from(p: &StaticParam) -> Self {
        Self::new(p.key(), p.value())
    }
}

impl fmt::Display for ResolvedParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
