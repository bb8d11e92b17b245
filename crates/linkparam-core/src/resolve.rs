//! Turns configured parameter specs into concrete parameters for one link.

use crate::context::LinkContext;
use crate::param::{BoxError, ParameterSpec, ResolvedParameter};
use thiserror::Error;

/// A dynamic parameter could not produce a value for this link.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("failed to compute query parameter `{key}`: {source}")]
    Dynamic {
        key: String,
        #[source]
        source: BoxError,
    },
}

impl ResolveError {
    /// Key of the parameter that failed.
    pub fn key(&self) -> &str {
        match self {
            ResolveError::Dynamic { key, .. } => key,
        }
    }
}

/// Resolves `specs` in order. Each dynamic compute function runs exactly
/// once; the first failure aborts and nothing is returned.
pub fn resolve(
    specs: &[ParameterSpec],
    ctx: &LinkContext<'_>,
) -> Result<Vec<ResolvedParameter>, ResolveError> {
    specs.iter().map(|spec| resolve_one(spec, ctx)).collect()
}

fn resolve_one(spec: &ParameterSpec, ctx: &LinkContext<'_>) -> Result<ResolvedParameter, ResolveError> {
    match spec {
        ParameterSpec::Static(p) => Ok(ResolvedParameter::from(p)),
        ParameterSpec::Dynamic(p) => {
            let value = p.compute(ctx).map_err(|source| ResolveError::Dynamic {
                key: p.key().to_string(),
                source,
            })?;
            if value.is_empty() {
                return Err(ResolveError::Dynamic {
                    key: p.key().to_string(),
                    source: "computed value is empty".into(),
                });
            }
            Ok(ResolvedParameter::new(p.key(), value))
        }
    }
}
