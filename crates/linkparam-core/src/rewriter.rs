//! Per-link rewrite: classify, resolve the matching parameter set, merge.

use crate::context::{LinkContext, SourceFile};
use crate::link_model::{classify, merge, LinkClass};
use crate::param::{ParamError, ParameterSpec};
use crate::resolve::{resolve, ResolveError};
use std::borrow::Cow;
use thiserror::Error;

/// Setup-time configuration problem; nothing has been rewritten yet.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("at least one of external or internal query parameters is required")]
    NoParams,
    #[error("invalid query parameter {param:?}: {source}")]
    InvalidParam {
        param: String,
        #[source]
        source: ParamError,
    },
}

/// The two independent parameter lists, in configuration order.
#[derive(Debug, Clone, Default)]
pub struct ParamsConfig {
    /// Applied to `http://` and `https://` links only.
    pub external: Vec<ParameterSpec>,
    /// Applied to `/`, `./` and `../` links only.
    pub internal: Vec<ParameterSpec>,
}

impl ParamsConfig {
    /// Builds a config from static `key=value` strings, validating each.
    pub fn from_static<E, I>(external: E, internal: I) -> Result<Self, ConfigError>
    where
        E: IntoIterator,
        E::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Ok(Self {
            external: static_specs(external)?,
            internal: static_specs(internal)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.external.is_empty() && self.internal.is_empty()
    }

    fn specs_for(&self, class: LinkClass) -> &[ParameterSpec] {
        match class {
            LinkClass::External => self.external.as_slice(),
            LinkClass::Internal => self.internal.as_slice(),
            LinkClass::Ineligible => &[],
        }
    }
}

fn static_specs<T>(raw: T) -> Result<Vec<ParameterSpec>, ConfigError>
where
    T: IntoIterator,
    T::Item: Into<String>,
{
    raw.into_iter()
        .map(|p| {
            let p: String = p.into();
            ParameterSpec::fixed(p.clone())
                .map_err(|source| ConfigError::InvalidParam { param: p, source })
        })
        .collect()
}

/// Outcome of rewriting one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// Ineligible link, no parameters for its class, or every key present.
    Unchanged,
    Rewritten(String),
}

impl Rewrite {
    pub fn is_changed(&self) -> bool {
        matches!(self, Rewrite::Rewritten(_))
    }

    /// The URL to write back: the new one, or `original` if unchanged.
    pub fn into_url(self, original: &str) -> String {
        match self {
            Rewrite::Unchanged => original.to_string(),
            Rewrite::Rewritten(url) => url,
        }
    }
}

/// Rewrites link URLs according to a validated [`ParamsConfig`].
///
/// Holds no per-link state; safe to share between threads.
#[derive(Debug, Clone)]
pub struct LinkRewriter {
    config: ParamsConfig,
}

impl LinkRewriter {
    /// Fails with [`ConfigError::NoParams`] if both lists are empty.
    pub fn new(config: ParamsConfig) -> Result<Self, ConfigError> {
        if config.is_empty() {
            return Err(ConfigError::NoParams);
        }
        tracing::debug!(
            external = config.external.len(),
            internal = config.internal.len(),
            "link rewriter configured"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &ParamsConfig {
        &self.config
    }

    /// Rewrites `ctx.url`. A dynamic parameter failure aborts this link only
    /// and leaves the URL untouched.
    pub fn rewrite(&self, ctx: &LinkContext<'_>) -> Result<Rewrite, ResolveError> {
        let class = classify(ctx.url);
        let specs = self.config.specs_for(class);
        if specs.is_empty() {
            return Ok(Rewrite::Unchanged);
        }

        let params = resolve(specs, ctx)?;
        match merge(ctx.url, class, &params) {
            Cow::Borrowed(_) => Ok(Rewrite::Unchanged),
            Cow::Owned(url) => {
                tracing::debug!(
                    class = class.as_str(),
                    from = ctx.url,
                    to = %url,
                    "rewrote link"
                );
                Ok(Rewrite::Rewritten(url))
            }
        }
    }

    /// Convenience for callers that only have a URL and an optional title.
    pub fn rewrite_url(
        &self,
        url: &str,
        source: &SourceFile,
        title: Option<&str>,
    ) -> Result<Rewrite, ResolveError> {
        self.rewrite(&LinkContext::new(source, url, title))
    }
}
