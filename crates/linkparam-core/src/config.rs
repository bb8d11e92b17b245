use crate::context::LinkContext;
use crate::param::ParameterSpec;
use crate::rewriter::{ConfigError, ParamsConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Link-context value a dynamic parameter can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextField {
    /// Path of the document being processed.
    SourcePath,
    /// Document file name without extension.
    SourceStem,
    /// The link's title attribute.
    LinkTitle,
    /// The link's current URL.
    LinkUrl,
}

impl ContextField {
    pub fn name(self) -> &'static str {
        match self {
            ContextField::SourcePath => "source_path",
            ContextField::SourceStem => "source_stem",
            ContextField::LinkTitle => "link_title",
            ContextField::LinkUrl => "link_url",
        }
    }

    /// Reads the field, or `None` if this link doesn't have it.
    pub fn read(self, ctx: &LinkContext<'_>) -> Option<String> {
        match self {
            ContextField::SourcePath => ctx.source.path.as_ref().map(|p| p.display().to_string()),
            ContextField::SourceStem => ctx.source.stem().map(str::to_owned),
            ContextField::LinkTitle => ctx.title.map(str::to_owned),
            ContextField::LinkUrl => Some(ctx.url.to_owned()),
        }
    }
}

/// One entry of a parameter list: `"key=value"` or `{ key = "...", from = "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamEntry {
    Static(String),
    Dynamic { key: String, from: ContextField },
}

impl ParamEntry {
    fn into_spec(self) -> Result<ParameterSpec, ConfigError> {
        match self {
            ParamEntry::Static(raw) => ParameterSpec::fixed(raw.clone())
                .map_err(|source| ConfigError::InvalidParam { param: raw, source }),
            ParamEntry::Dynamic { key, from } => ParameterSpec::dynamic(key.clone(), move |ctx| {
                from.read(ctx)
                    .ok_or_else(|| format!("{} is not available for this link", from.name()).into())
            })
            .map_err(|source| ConfigError::InvalidParam { param: key, source }),
        }
    }
}

/// A single entry or a list of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, OneOrMany::Many(items) if items.is_empty())
    }
}

/// Configuration loaded from `~/.config/linkparam/config.toml` or `--config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileConfig {
    /// Parameters for `http://` / `https://` links.
    #[serde(default, skip_serializing_if = "OneOrMany::is_empty")]
    pub external_query_params: OneOrMany<ParamEntry>,
    /// Parameters for `/`, `./` and `../` links.
    #[serde(default, skip_serializing_if = "OneOrMany::is_empty")]
    pub internal_query_params: OneOrMany<ParamEntry>,
}

impl FileConfig {
    /// Validates every entry and builds the engine configuration.
    ///
    /// Does not check that at least one list is non-empty; `LinkRewriter::new`
    /// does, after command-line parameters have been added.
    pub fn into_params_config(self) -> Result<ParamsConfig, ConfigError> {
        Ok(ParamsConfig {
            external: to_specs(self.external_query_params)?,
            internal: to_specs(self.internal_query_params)?,
        })
    }
}

fn to_specs(entries: OneOrMany<ParamEntry>) -> Result<Vec<ParameterSpec>, ConfigError> {
    entries.into_vec().into_iter().map(ParamEntry::into_spec).collect()
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkparam")?;
    Ok(xdg_dirs.get_config_home().join("config.toml"))
}

/// Load configuration from an explicit file.
pub fn load(path: &Path) -> Result<FileConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: FileConfig = toml::from_str(&data)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}

/// Load configuration from the XDG config directory.
///
/// A missing file is an error: an empty configuration can't rewrite anything.
pub fn load_default() -> Result<FileConfig> {
    let path = config_path()?;
    if !path.exists() {
        anyhow::bail!(
            "no query parameters given and no config file at {}",
            path.display()
        );
    }
    load(&path)
}
