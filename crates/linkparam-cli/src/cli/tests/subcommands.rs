//! Tests for rewrite, url, classify and check subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_rewrite() {
    match parse(&["linkparam", "rewrite", "a.md", "b.md"]) {
        CliCommand::Rewrite {
            files,
            in_place,
            params,
        } => {
            assert_eq!(files, vec![PathBuf::from("a.md"), PathBuf::from("b.md")]);
            assert!(!in_place);
            assert!(params.config.is_none());
            assert!(params.external.is_empty());
        }
        _ => panic!("expected Rewrite"),
    }
}

#[test]
fn cli_parse_rewrite_in_place() {
    match parse(&["linkparam", "rewrite", "--in-place", "a.md"]) {
        CliCommand::Rewrite { in_place, .. } => assert!(in_place),
        _ => panic!("expected Rewrite with --in-place"),
    }
}

#[test]
fn cli_parse_rewrite_requires_files() {
    assert!(Cli::try_parse_from(["linkparam", "rewrite"]).is_err());
}

#[test]
fn cli_parse_url() {
    match parse(&[
        "linkparam",
        "url",
        "/docs",
        "--source",
        "posts/a.md",
        "--title",
        "Docs",
        "--internal",
        "src=nav",
    ]) {
        CliCommand::Url {
            url,
            source,
            title,
            params,
        } => {
            assert_eq!(url, "/docs");
            assert_eq!(source.as_deref(), Some(std::path::Path::new("posts/a.md")));
            assert_eq!(title.as_deref(), Some("Docs"));
            assert_eq!(params.internal.len(), 1);
            assert_eq!(params.internal[0].key(), "src");
        }
        _ => panic!("expected Url"),
    }
}

#[test]
fn cli_parse_classify() {
    match parse(&["linkparam", "classify", "mailto:a@b.com"]) {
        CliCommand::Classify { url } => assert_eq!(url, "mailto:a@b.com"),
        _ => panic!("expected Classify"),
    }
}

#[test]
fn cli_parse_check_with_config() {
    match parse(&["linkparam", "check", "--config", "/tmp/lp.toml"]) {
        CliCommand::Check { params } => {
            assert_eq!(params.config, Some(PathBuf::from("/tmp/lp.toml")));
        }
        _ => panic!("expected Check"),
    }
}
