//! Markdown host adapter: finds inline links and splices rewritten URLs
//! back into the source text.
//!
//! Uses `pulldown-cmark`'s offset iterator to locate each link, so everything
//! outside the rewritten destinations stays byte-identical. Images,
//! reference-style links and autolinks are not touched.

use crate::context::{LinkContext, SourceFile};
use crate::resolve::ResolveError;
use crate::rewriter::{LinkRewriter, Rewrite};
use pulldown_cmark::{Event, LinkType, Options, Parser, Tag, TagEnd};
use std::ops::Range;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarkdownError {
    #[error("link {url:?}")]
    Resolve {
        url: String,
        #[source]
        source: ResolveError,
    },
}

/// Rewritten document text and how many links changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownOutcome {
    pub text: String,
    pub rewritten: usize,
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
}

/// An inline link whose rewrite is known but whose destination has not
/// been located yet; the link text must be consumed first.
struct PendingLink {
    range: Range<usize>,
    /// End of the last event inside the link text.
    text_end: usize,
    dest: String,
    url: String,
}

/// Rewrites every inline link in `text`.
///
/// The first dynamic parameter failure aborts the whole document; no partial
/// output is returned.
pub fn rewrite_markdown(
    text: &str,
    source: &SourceFile,
    rewriter: &LinkRewriter,
) -> Result<MarkdownOutcome, MarkdownError> {
    let mut edits: Vec<(Range<usize>, String)> = Vec::new();
    let mut pending: Option<PendingLink> = None;

    for (event, range) in Parser::new_ext(text, parser_options()).into_offset_iter() {
        match event {
            Event::Start(Tag::Link {
                link_type: LinkType::Inline,
                dest_url,
                title,
                ..
            }) => {
                if dest_url.is_empty() {
                    continue;
                }

                let title = (!title.is_empty()).then_some(&*title);
                let ctx = LinkContext::new(source, &dest_url, title);
                let url = match rewriter.rewrite(&ctx) {
                    Ok(Rewrite::Rewritten(url)) => url,
                    Ok(Rewrite::Unchanged) => continue,
                    Err(err) => {
                        return Err(MarkdownError::Resolve {
                            url: dest_url.to_string(),
                            source: err,
                        })
                    }
                };
                pending = Some(PendingLink {
                    text_end: range.start + 1,
                    range,
                    dest: dest_url.to_string(),
                    url,
                });
            }
            Event::End(TagEnd::Link) => {
                let Some(link) = pending.take() else {
                    continue;
                };
                let link_src = &text[link.range.clone()];
                let text_end = link.text_end - link.range.start;
                match locate_destination(link_src, text_end, &link.dest) {
                    Some(span) => edits.push((
                        link.range.start + span.start..link.range.start + span.end,
                        link.url,
                    )),
                    None => {
                        tracing::debug!(
                            url = %link.dest,
                            "link destination is escaped in the source; skipping"
                        );
                    }
                }
            }
            _ => {
                if let Some(link) = pending.as_mut() {
                    link.text_end = link.text_end.max(range.end);
                }
            }
        }
    }

    Ok(MarkdownOutcome {
        text: apply_edits(text, &edits),
        rewritten: edits.len(),
    })
}

/// Finds the destination inside the source of one inline link
/// (`[text](dest "title")`). `text_end` is where the link text ends; the
/// destination follows the first `](` after it and runs to the first
/// whitespace (or to `>` for `<...>` destinations). Returns `None` when the
/// source spelling differs from `dest`, e.g. because of escapes.
fn locate_destination(link_src: &str, text_end: usize, dest: &str) -> Option<Range<usize>> {
    let open = text_end + link_src.get(text_end..)?.find("](")?;
    let after = open + 2;
    let rest = &link_src[after..];
    let trimmed = rest.trim_start();
    let start = after + (rest.len() - trimmed.len());

    let (start, len) = match trimmed.strip_prefix('<') {
        Some(inner) => (start + 1, inner.find('>')?),
        None => {
            let body = trimmed.strip_suffix(')')?;
            (start, body.find(char::is_whitespace).unwrap_or(body.len()))
        }
    };
    (link_src.get(start..start + len)? == dest).then(|| start..start + len)
}

/// Edits are non-overlapping and in source order.
fn apply_edits(text: &str, edits: &[(Range<usize>, String)]) -> String {
    if edits.is_empty() {
        return text.to_string();
    }
    let extra: usize = edits.iter().map(|(_, url)| url.len()).sum();
    let mut out = String::with_capacity(text.len() + extra);
    let mut cursor = 0;
    for (span, url) in edits {
        out.push_str(&text[cursor..span.start]);
        out.push_str(url);
        cursor = span.end;
    }
    out.push_str(&text[cursor..]);
    out
}
