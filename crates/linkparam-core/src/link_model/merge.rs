//! Merge resolved parameters into a link URL.

use super::classify::LinkClass;
use super::split::SplitUrl;
use crate::param::ResolvedParameter;
use std::borrow::Cow;

/// Appends every parameter whose key is not already in the query.
///
/// Existing parameters are never touched; a key already present (even as
/// `?key=`) blocks the addition. The result is `Cow::Borrowed(url)` whenever
/// nothing was appended, so callers can detect "no change" without
/// comparing strings. External URLs that `url` cannot parse and ineligible
/// links are also returned as-is.
///
/// # Examples
///
/// - `merge("/blog/post/#section", Internal, [ref=x])` → `"/blog/post/?ref=x#section"`
/// - `merge("https://www.google.com?ref=old", External, [ref=x])` → unchanged
pub fn merge<'a>(url: &'a str, class: LinkClass, params: &[ResolvedParameter]) -> Cow<'a, str> {
    if params.is_empty() {
        return Cow::Borrowed(url);
    }

    let mut split = match class {
        LinkClass::External => match SplitUrl::external(url) {
            Some(split) => split,
            None => {
                tracing::warn!(url, "external link is not a valid URL; leaving it unchanged");
                return Cow::Borrowed(url);
            }
        },
        LinkClass::Internal => SplitUrl::internal(url),
        LinkClass::Ineligible => return Cow::Borrowed(url),
    };

    let mut appended = 0usize;
    for param in params {
        if split.has_key(&param.key) {
            tracing::trace!(url, key = %param.key, "query parameter already present");
            continue;
        }
        split.append(&param.key, &param.value);
        appended += 1;
    }

    if appended == 0 {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(split.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(list: &[(&str, &str)]) -> Vec<ResolvedParameter> {
        list.iter()
            .map(|(k, v)| ResolvedParameter::new(*k, *v))
            .collect()
    }

    fn merged(url: &str, class: LinkClass, list: &[(&str, &str)]) -> String {
        merge(url, class, &params(list)).into_owned()
    }

    #[test]
    fn external_without_query() {
        assert_eq!(
            merged(
                "https://www.google.com",
                LinkClass::External,
                &[("ref", "myawesomewebsite.com")]
            ),
            "https://www.google.com/?ref=myawesomewebsite.com"
        );
    }

    #[test]
    fn external_with_same_key_is_unchanged() {
        let url = "https://www.google.com?ref=oldwebsite.com";
        let out = merge(url, LinkClass::External, &params(&[("ref", "new")]));
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, url);
    }

    #[test]
    fn external_with_other_key_appends() {
        assert_eq!(
            merged(
                "https://www.google.com?utm_source=oldwebsite.com",
                LinkClass::External,
                &[("ref", "myawesomewebsite.com")]
            ),
            "https://www.google.com/?utm_source=oldwebsite.com&ref=myawesomewebsite.com"
        );
    }

    #[test]
    fn external_keeps_fragment_after_query() {
        assert_eq!(
            merged("https://a.example/docs#install", LinkClass::External, &[("ref", "x")]),
            "https://a.example/docs?ref=x#install"
        );
    }

    #[test]
    fn external_value_equals_is_encoded() {
        assert_eq!(
            merged("https://shop.example/list", LinkClass::External, &[("filter", "price=100")]),
            "https://shop.example/list?filter=price%3D100"
        );
    }

    #[test]
    fn external_unparseable_is_unchanged() {
        let out = merge("http://", LinkClass::External, &params(&[("ref", "x")]));
        assert_eq!(out, "http://");
    }

    #[test]
    fn internal_root() {
        assert_eq!(
            merged("/", LinkClass::Internal, &[("ref", "myawesomewebsite.com")]),
            "/?ref=myawesomewebsite.com"
        );
    }

    #[test]
    fn internal_fragment_moves_after_query() {
        assert_eq!(
            merged("/blog/post/#section", LinkClass::Internal, &[("ref", "x")]),
            "/blog/post/?ref=x#section"
        );
    }

    #[test]
    fn internal_relative_paths_keep_shape() {
        assert_eq!(
            merged("../guide/setup.md", LinkClass::Internal, &[("ref", "x")]),
            "../guide/setup.md?ref=x"
        );
        assert_eq!(
            merged("./a?b=1#c", LinkClass::Internal, &[("ref", "x")]),
            "./a?b=1&ref=x#c"
        );
    }

    #[test]
    fn internal_same_key_unchanged_other_key_appended() {
        assert_eq!(
            merged("/?ref=oldwebsite.com", LinkClass::Internal, &[("ref", "new")]),
            "/?ref=oldwebsite.com"
        );
        assert_eq!(
            merged("/?utm_source=oldwebsite.com", LinkClass::Internal, &[("ref", "new")]),
            "/?utm_source=oldwebsite.com&ref=new"
        );
    }

    #[test]
    fn empty_existing_value_blocks_addition() {
        let out = merge("/?ref=", LinkClass::Internal, &params(&[("ref", "x")]));
        assert!(matches!(out, Cow::Borrowed("/?ref=")));
    }

    #[test]
    fn append_order_follows_configuration() {
        assert_eq!(
            merged("/p", LinkClass::Internal, &[("a", "1"), ("b", "2")]),
            "/p?a=1&b=2"
        );
    }

    #[test]
    fn partial_overlap_appends_only_missing() {
        assert_eq!(
            merged("/p?b=9", LinkClass::Internal, &[("a", "1"), ("b", "2")]),
            "/p?b=9&a=1"
        );
    }

    #[test]
    fn duplicate_configured_key_added_once() {
        assert_eq!(
            merged("/p", LinkClass::Internal, &[("a", "1"), ("a", "2")]),
            "/p?a=1"
        );
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert_eq!(
            merged("/p?REF=1", LinkClass::Internal, &[("ref", "2")]),
            "/p?REF=1&ref=2"
        );
    }

    #[test]
    fn merge_is_idempotent() {
        let list = params(&[("ref", "x"), ("filter", "price=100")]);
        for (url, class) in [
            ("https://www.google.com", LinkClass::External),
            ("https://a.example/p?q=1#f", LinkClass::External),
            ("/blog/post/#section", LinkClass::Internal),
            ("../x?y=", LinkClass::Internal),
        ] {
            let once = merge(url, class, &list).into_owned();
            let twice = merge(&once, class, &list).into_owned();
            assert_eq!(once, twice, "{url}");
        }
    }

    #[test]
    fn ineligible_or_empty_params_unchanged() {
        assert_eq!(
            merge("mailto:a@b.com", LinkClass::Ineligible, &params(&[("a", "1")])),
            "mailto:a@b.com"
        );
        assert!(matches!(
            merge("/p", LinkClass::Internal, &[]),
            Cow::Borrowed("/p")
        ));
    }
}
