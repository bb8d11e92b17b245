//! `linkparam url <url>` – rewrite one URL.

use anyhow::Result;
use linkparam_core::{LinkRewriter, SourceFile};
use std::path::Path;

pub fn run_url(
    rewriter: &LinkRewriter,
    url: &str,
    source: Option<&Path>,
    title: Option<&str>,
) -> Result<()> {
    let source = source.map_or_else(SourceFile::anonymous, SourceFile::new);
    let rewrite = rewriter.rewrite_url(url, &source, title)?;
    println!("{}", rewrite.into_url(url));
    Ok(())
}
