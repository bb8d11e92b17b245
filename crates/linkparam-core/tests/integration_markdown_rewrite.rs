//! Integration test: config file on disk → rewriter → markdown document.
//!
//! Loads a TOML config with static and dynamic parameters, rewrites a
//! document twice, and checks the second pass is a no-op.

use linkparam_core::config;
use linkparam_core::markdown::{rewrite_markdown, MarkdownError};
use linkparam_core::{LinkRewriter, SourceFile};
use std::io::Write;
use tempfile::NamedTempFile;

const CONFIG: &str = r#"
external_query_params = [
    "ref=example.com",
    { key = "utm_content", from = "source_stem" },
]
internal_query_params = "src=docs"
"#;

const DOC: &str = "\
# Release notes

Read the [announcement](https://blog.example.com/post#top \"Announcement\"),
the [guide](/guide/#install), the [faq](../faq.md?lang=en) and
[contact us](mailto:team@example.com). Jump to [details](#details).

![banner](/img/banner.png)
";

const EXPECTED: &str = "\
# Release notes

Read the [announcement](https://blog.example.com/post?ref=example.com&utm_content=v2-0#top \"Announcement\"),
the [guide](/guide/?src=docs#install), the [faq](../faq.md?lang=en&src=docs) and
[contact us](mailto:team@example.com). Jump to [details](#details).

![banner](/img/banner.png)
";

fn rewriter_from(toml: &str) -> LinkRewriter {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(toml.as_bytes()).unwrap();
    f.flush().unwrap();
    let cfg = config::load(f.path()).unwrap();
    LinkRewriter::new(cfg.into_params_config().unwrap()).unwrap()
}

#[test]
fn rewrites_document_and_is_idempotent() {
    let rewriter = rewriter_from(CONFIG);
    let source = SourceFile::new("notes/v2-0.md");

    let first = rewrite_markdown(DOC, &source, &rewriter).unwrap();
    assert_eq!(first.text, EXPECTED);
    assert_eq!(first.rewritten, 3);

    let second = rewrite_markdown(&first.text, &source, &rewriter).unwrap();
    assert_eq!(second.text, first.text);
    assert_eq!(second.rewritten, 0);
}

#[test]
fn external_only_config_never_touches_internal_links() {
    let rewriter = rewriter_from(r#"external_query_params = "ref=example.com""#);
    let doc = "[a](/a) [b](./b) [c](../c#x) [d](https://d.example)";
    let out = rewrite_markdown(doc, &SourceFile::anonymous(), &rewriter).unwrap();
    assert_eq!(
        out.text,
        "[a](/a) [b](./b) [c](../c#x) [d](https://d.example/?ref=example.com)"
    );
}

#[test]
fn dynamic_failure_aborts_document_without_output() {
    let rewriter = rewriter_from(CONFIG);
    let err = rewrite_markdown(DOC, &SourceFile::anonymous(), &rewriter).unwrap_err();
    let MarkdownError::Resolve { url, source } = err;
    assert_eq!(url, "https://blog.example.com/post#top");
    assert_eq!(source.key(), "utm_content");
}

#[test]
fn empty_config_rejected_before_any_document() {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(b"external_query_params = []\n").unwrap();
    f.flush().unwrap();
    let params = config::load(f.path())
        .unwrap()
        .into_params_config()
        .unwrap();
    assert!(LinkRewriter::new(params).is_err());
}
