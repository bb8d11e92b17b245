//! `head?query#fragment` view of a link, shared by both link classes.

use std::fmt;
use url::{form_urlencoded, Position, Url};

/// A URL cut into the part before the query, the raw query, and the fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SplitUrl {
    head: String,
    query: Option<String>,
    fragment: Option<String>,
}

impl SplitUrl {
    /// Parses an absolute URL. The head is scheme, host and path as
    /// serialized by `url`. Returns `None` if the URL does not parse.
    pub(crate) fn external(url: &str) -> Option<Self> {
        let parsed = Url::parse(url).ok()?;
        Some(Self {
            head: parsed[..Position::AfterPath].to_string(),
            query: parsed.query().map(str::to_owned),
            fragment: parsed.fragment().map(str::to_owned),
        })
    }

    /// Splits a relative URL by hand, so no scheme or host is ever invented.
    pub(crate) fn internal(url: &str) -> Self {
        let (rest, fragment) = match url.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (url, None),
        };
        let (head, query) = match rest.split_once('?') {
            Some((head, query)) => (head, Some(query)),
            None => (rest, None),
        };
        Self {
            head: head.to_string(),
            query: query.map(str::to_owned),
            fragment: fragment.map(str::to_owned),
        }
    }

    /// True if `key` appears in the query, whatever its value (even empty).
    pub(crate) fn has_key(&self, key: &str) -> bool {
        self.query.as_deref().map_or(false, |q| {
            form_urlencoded::parse(q.as_bytes()).any(|(k, _)| k == key)
        })
    }

    /// Appends `key=value`, form-encoded, after the existing query text.
    /// A query that already ends in `&` gets no second separator.
    pub(crate) fn append(&mut self, key: &str, value: &str) {
        let existing = self.query.take().unwrap_or_default();
        let start = if existing.ends_with('&') { existing.len() } else { 0 };
        let mut serializer = form_urlencoded::Serializer::for_suffix(existing, start);
        serializer.append_pair(key, value);
        self.query = Some(serializer.finish());
    }
}

impl fmt::Display for SplitUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.head)?;
        if let Some(query) = self.query.as_deref().filter(|q| !q.is_empty()) {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}
