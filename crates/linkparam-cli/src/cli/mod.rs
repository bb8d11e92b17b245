//! CLI for linkparam.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use linkparam_core::config::{self, FileConfig};
use linkparam_core::{LinkRewriter, ParameterSpec, ParamsConfig, StaticParam};
use std::path::PathBuf;

use commands::{run_check, run_classify, run_rewrite, run_url};

/// Top-level CLI for linkparam.
#[derive(Debug, Parser)]
#[command(name = "linkparam")]
#[command(about = "Add query parameters to links in markdown documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where query parameters come from. `--external`/`--internal` are added
/// after the config file's lists.
#[derive(Debug, Clone, Default, Args)]
pub struct ParamArgs {
    /// Config file (default: ~/.config/linkparam/config.toml, read only when no
    /// --external/--internal flags are given).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Query parameter for http/https links. Repeatable.
    #[arg(long = "external", value_name = "KEY=VALUE")]
    pub external: Vec<StaticParam>,

    /// Query parameter for relative links (/, ./, ../). Repeatable.
    #[arg(long = "internal", value_name = "KEY=VALUE")]
    pub internal: Vec<StaticParam>,
}

impl ParamArgs {
    fn file_config(&self) -> Result<FileConfig> {
        match &self.config {
            Some(path) => config::load(path),
            None if self.external.is_empty() && self.internal.is_empty() => config::load_default(),
            None => Ok(FileConfig::default()),
        }
    }

    /// Merged engine configuration, not yet checked for emptiness.
    pub fn params_config(&self) -> Result<ParamsConfig> {
        let mut params = self.file_config()?.into_params_config()?;
        params
            .external
            .extend(self.external.iter().cloned().map(ParameterSpec::Static));
        params
            .internal
            .extend(self.internal.iter().cloned().map(ParameterSpec::Static));
        Ok(params)
    }

    pub fn rewriter(&self) -> Result<LinkRewriter> {
        Ok(LinkRewriter::new(self.params_config()?)?)
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Rewrite links in markdown files (printed to stdout unless --in-place).
    Rewrite {
        /// Markdown files to process.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Write results back to the files instead of stdout.
        #[arg(long)]
        in_place: bool,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// Rewrite a single URL and print the result.
    Url {
        url: String,

        /// Path of the document the link belongs to (for dynamic parameters).
        #[arg(long, value_name = "PATH")]
        source: Option<PathBuf>,

        /// Link title (for dynamic parameters).
        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// Print whether a URL is external, internal or ineligible.
    Classify { url: String },

    /// Validate the configuration and print the parameter lists.
    Check {
        #[command(flatten)]
        params: ParamArgs,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Rewrite {
                files,
                in_place,
                params,
            } => {
                let rewriter = params.rewriter()?;
                run_rewrite(&rewriter, &files, in_place)?;
            }
            CliCommand::Url {
                url,
                source,
                title,
                params,
            } => {
                let rewriter = params.rewriter()?;
                run_url(&rewriter, &url, source.as_deref(), title.as_deref())?;
            }
            CliCommand::Classify { url } => run_classify(&url),
            CliCommand::Check { params } => {
                let rewriter = params.rewriter()?;
                run_check(&rewriter);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
