//! `linkparam rewrite <files>...` – add query parameters to markdown links.
//!
//! Each file is processed independently: a dynamic parameter failure in one
//! file is reported and the remaining files are still rewritten.

use anyhow::{Context, Result};
use linkparam_core::markdown::rewrite_markdown;
use linkparam_core::{LinkRewriter, SourceFile};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub fn run_rewrite(rewriter: &LinkRewriter, files: &[PathBuf], in_place: bool) -> Result<()> {
    let mut failed = 0usize;
    for path in files {
        match rewrite_file(rewriter, path, in_place) {
            Ok(count) => {
                tracing::info!(path = %path.display(), links = count, "rewrote file");
            }
            Err(err) => {
                tracing::error!(path = %path.display(), "{:#}", err);
                eprintln!("{}: {:#}", path.display(), err);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        anyhow::bail!("{} of {} file(s) failed", failed, files.len());
    }
    Ok(())
}

/// Returns the number of links rewritten.
pub(crate) fn rewrite_file(rewriter: &LinkRewriter, path: &Path, in_place: bool) -> Result<usize> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let source = SourceFile::new(path);
    let outcome = rewrite_markdown(&text, &source, rewriter)?;

    if in_place {
        if outcome.rewritten > 0 {
            fs::write(path, &outcome.text)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
    } else {
        io::stdout().lock().write_all(outcome.text.as_bytes())?;
    }
    Ok(outcome.rewritten)
}
