/// URL canonicalization for deduplication.
///
/// Two URLs that differ only in scheme/host casing, tracking parameters, or
/// fragment must normalize to the same string, which is then used as a set
/// key by the seen store. Normalization is idempotent and never fails: a
/// string that does not parse as a URL is returned trimmed but otherwise
/// unchanged, so non-URL input flows through the pipeline harmlessly.
use url::Url;

/// Query parameter keys stripped during normalization (compared
/// case-insensitively).
pub const TRACKING_KEYS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "gclid",
    "fbclid",
    "mc_cid",
    "mc_eid",
    "mkt_tok",
];

fn is_tracking_key(key: &str) -> bool {
    TRACKING_KEYS.iter().any(|t| key.eq_ignore_ascii_case(t))
}

/// Canonicalize a raw URL string.
///
/// - Scheme and host are lowercased; a missing scheme defaults to `https`.
/// - An empty path becomes `/`.
/// - Tracking query parameters are dropped; remaining pairs keep their
///   relative order and blank values.
/// - The fragment is removed.
///
/// Empty input returns an empty string. Unparseable input returns the
/// trimmed input unchanged.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut parsed = match Url::parse(trimmed) {
        Ok(u) => u,
        // Scheme-less input like "example.com/path": retry with the default
        // scheme before giving up.
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            match Url::parse(&format!("https://{trimmed}")) {
                Ok(u) => u,
                Err(_) => return trimmed.to_string(),
            }
        }
        Err(_) => return trimmed.to_string(),
    };

    // Non-hierarchical URLs (mailto:, data:) have no host to canonicalize.
    if parsed.cannot_be_a_base() {
        return trimmed.to_string();
    }

    parsed.set_fragment(None);

    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(k, _)| !is_tracking_key(k))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    if kept.is_empty() {
        parsed.set_query(None);
    } else {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query.extend_pairs(kept.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        let query = query.finish();
        parsed.set_query(Some(&query));
    }

    parsed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_url(""), "");
        assert_eq!(normalize_url("   "), "");
    }

    #[test]
    fn test_scheme_and_host_lowercased_path_preserved() {
        assert_eq!(
            normalize_url("HTTP://Example.COM/Some/Path"),
            "http://example.com/Some/Path"
        );
    }

    #[test]
    fn test_default_scheme_is_https() {
        assert_eq!(
            normalize_url("example.com/articles/1"),
            "https://example.com/articles/1"
        );
    }

    #[test]
    fn test_empty_path_defaults_to_slash() {
        assert_eq!(normalize_url("https://example.com"), "https://example.com/");
    }

    #[test]
    fn test_tracking_params_stripped() {
        assert_eq!(
            normalize_url("https://example.com/a?utm_source=x&id=7&utm_campaign=spring"),
            "https://example.com/a?id=7"
        );
    }

    #[test]
    fn test_tracking_keys_case_insensitive() {
        assert_eq!(
            normalize_url("https://example.com/a?UTM_Source=x&FBCLID=y"),
            "https://example.com/a"
        );
    }

    #[test]
    fn test_only_tracking_params_yields_no_query() {
        let out = normalize_url("https://example.com/a?gclid=abc&fbclid=def");
        assert_eq!(out, "https://example.com/a");
        assert!(!out.contains('?'));
    }

    #[test]
    fn test_blank_values_preserved_in_order() {
        assert_eq!(
            normalize_url("https://example.com/a?b=&utm_medium=email&a=1"),
            "https://example.com/a?b=&a=1"
        );
    }

    #[test]
    fn test_fragment_removed() {
        let out = normalize_url("https://a.com/x#section-2");
        assert_eq!(out, "https://a.com/x");
        assert!(!out.contains('#'));
    }

    #[test]
    fn test_malformed_input_returned_trimmed() {
        assert_eq!(normalize_url("  not a url at all  "), "not a url at all");
        assert_eq!(normalize_url("http://"), "http://");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "HTTPS://Example.com/Path?utm_source=nl&id=3#frag",
            "example.com",
            "not a url",
            "https://a.com/x?b=&a=1",
            "https://a.com/x?q=hello%20world",
        ];
        for input in inputs {
            let once = normalize_url(input);
            assert_eq!(normalize_url(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_tracking_param_invariance() {
        let base = normalize_url("https://example.com/a?id=7");
        for key in TRACKING_KEYS {
            let with_tracker = format!("https://example.com/a?id=7&{key}=value");
            assert_eq!(normalize_url(&with_tracker), base, "key {key} not stripped");
        }
    }
}
