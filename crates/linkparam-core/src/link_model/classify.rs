//! Link classification by URL prefix.

/// Which parameter set (if any) applies to a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkClass {
    /// Fragment-only, empty, or a scheme other than http/https.
    Ineligible,
    /// Absolute `http://` or `https://` URL.
    External,
    /// Root-relative or relative path (`/`, `./`, `../`).
    Internal,
}

impl LinkClass {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkClass::Ineligible => "ineligible",
            LinkClass::External => "external",
            LinkClass::Internal => "internal",
        }
    }
}

/// Classifies a link URL. Pure prefix check, no I/O.
pub fn classify(url: &str) -> LinkClass {
    if url.is_empty() || url.starts_with('#') {
        return LinkClass::Ineligible;
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        return LinkClass::External;
    }
    if url.starts_with('/') || url.starts_with("./") || url.starts_with("../") {
        return LinkClass::Internal;
    }
    LinkClass::Ineligible
}
