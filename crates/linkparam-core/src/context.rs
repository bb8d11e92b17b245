//! Per-link context handed to dynamic parameters.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Identity of the document a link was found in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFile {
    /// Path of the document, if it came from disk.
    pub path: Option<PathBuf>,
    /// Free-form metadata supplied by the host (front matter, site name, ...).
    pub metadata: BTreeMap<String, String>,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            metadata: BTreeMap::new(),
        }
    }

    /// A document without a path (e.g. read from stdin).
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// File name without extension.
    pub fn stem(&self) -> Option<&str> {
        self.path
            .as_deref()
            .and_then(Path::file_stem)
            .and_then(|s| s.to_str())
    }
}

/// Read-only view of one link, built fresh for every link.
#[derive(Debug, Clone, Copy)]
pub struct LinkContext<'a> {
    pub source: &'a SourceFile,
    /// The link's current URL.
    pub url: &'a str,
    pub title: Option<&'a str>,
}

impl<'a> LinkContext<'a> {
    pub fn new(source: &'a SourceFile, url: &'a str, title: Option<&'a str>) -> Self {
        Self { source, url, title }
    }
}
