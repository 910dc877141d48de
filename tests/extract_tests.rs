/// Tests for query parameter extraction through the public API
use std::collections::HashMap;

use qpx::extract::{parse_query, ExtractError, QueryParamExtractor};
use qpx::models::Record;

fn expected(pairs: &[(&str, Option<&str>)]) -> HashMap<String, Option<String>> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
        .collect()
}

fn utf8() -> QueryParamExtractor {
    QueryParamExtractor::new("UTF-8", false).unwrap()
}

fn utf8_double() -> QueryParamExtractor {
    QueryParamExtractor::new("UTF-8", true).unwrap()
}

#[test]
fn test_null_input() {
    assert_eq!(utf8().extract(None).unwrap(), None);
}

#[test]
fn test_empty_record() {
    assert_eq!(utf8().extract(Some(&Record::empty())).unwrap(), None);
}

#[test]
fn test_too_many_fields() {
    let record = Record::new(vec![Some("?a=1".to_string()), Some("?b=2".to_string())]);
    let err = utf8().extract(Some(&record)).unwrap_err();
    assert_eq!(err, ExtractError::Shape { fields: 2 });
    assert_eq!(err.to_string(), "Expected single string field, got 2");
}

#[test]
fn test_single_param() {
    let params = utf8().extract(Some(&Record::single("?foo=baz"))).unwrap().unwrap();
    assert_eq!(params, expected(&[("foo", Some("baz"))]));
}

#[test]
fn test_multiple_params() {
    let params = utf8().parse_query("?foo=baz&bar=42").unwrap();
    assert_eq!(params, expected(&[("foo", Some("baz")), ("bar", Some("42"))]));
}

#[test]
fn test_null_valued_params() {
    let params = utf8().parse_query("?foo&bar=").unwrap();
    assert_eq!(params, expected(&[("foo", None), ("bar", Some(""))]));
}

#[test]
fn test_single_null_value() {
    let params = utf8().parse_query("foo").unwrap();
    assert_eq!(params, expected(&[("foo", None)]));
}

#[test]
fn test_return_first() {
    let params = utf8().parse_query("?foo=baz&foo=42").unwrap();
    assert_eq!(params, expected(&[("foo", Some("baz"))]));
}

#[test]
fn test_url_decoding() {
    let params = utf8().parse_query("?foo%5B%5D%3F%20bar=baz%3Dbaz%26baz").unwrap();
    assert_eq!(params, expected(&[("foo[]? bar", Some("baz=baz&baz"))]));
}

#[test]
fn test_full_url() {
    let params = utf8().parse_query("https://duckduckgo.com/?q=example+urls").unwrap();
    assert_eq!(params, expected(&[("q", Some("example urls"))]));
}

#[test]
fn test_ignore_fragments() {
    let params = utf8()
        .parse_query("https://duckduckgo.com/?q=example+urls#fragment")
        .unwrap();
    assert_eq!(params, expected(&[("q", Some("example urls"))]));
}

#[test]
fn test_full_url_with_no_query_params() {
    let params = utf8()
        .parse_query("https://en.wikipedia.org/wiki/Uniform_Resource_Locator#Syntax")
        .unwrap();
    assert!(params.is_empty());
}

#[test]
fn test_empty_sentinel() {
    let params = utf8().extract(Some(&Record::single("-"))).unwrap();
    assert_eq!(params.map(|p| p.len()), Some(0));
}

#[test]
fn test_char_sets() {
    let params = utf8().parse_query("?%CE%B1=%CE%B2").unwrap();
    assert_eq!(params, expected(&[("\u{03B1}", Some("\u{03B2}"))]));

    let greek = QueryParamExtractor::new("ISO-8859-7", false).unwrap();
    let params = greek.parse_query("?%E1=%E2").unwrap();
    assert_eq!(params, expected(&[("\u{03B1}", Some("\u{03B2}"))]));
}

#[test]
fn test_same_bytes_differ_by_charset() {
    let greek = QueryParamExtractor::new("ISO-8859-7", false).unwrap();
    let western = QueryParamExtractor::new("windows-1252", false).unwrap();
    assert_eq!(greek.parse_query("x=%E1").unwrap().get("x"), Some(Some("\u{03B1}")));
    assert_eq!(western.parse_query("x=%E1").unwrap().get("x"), Some(Some("\u{E1}")));
}

#[test]
fn test_double_encoded() {
    let input = "?foo%255B%255D%253F%2520bar=baz%253Dbaz%2526baz";
    let params = utf8_double().parse_query(input).unwrap();
    assert_eq!(params, expected(&[("foo[]? bar", Some("baz=baz&baz"))]));
}

#[test]
fn test_double_encoded_matches_single() {
    let double = utf8_double().parse_query("?foo%255B%255D=baz%253D").unwrap();
    let single = utf8().parse_query("?foo%5B%5D=baz%3D").unwrap();
    assert_eq!(double, single);
}

#[test]
fn test_double_encoded_without_detection_decodes_once() {
    let input = "?foo%255B%255D%253F%2520bar=baz%253Dbaz%2526baz";
    let params = utf8().parse_query(input).unwrap();
    assert_eq!(
        params,
        expected(&[("foo%5B%5D%3F%20bar", Some("baz%3Dbaz%26baz"))])
    );
}

#[test]
fn test_detection_leaves_single_encoding_alone() {
    let input = "?discount=100%25&q=a%26b";
    assert_eq!(
        utf8_double().parse_query(input).unwrap(),
        expected(&[("discount", Some("100%")), ("q", Some("a&b"))])
    );
}

#[test]
fn test_double_correction_falls_back_to_single_decoding() {
    let input = "?a=%2541%25zz";
    let params = utf8_double().parse_query(input).unwrap();
    assert_eq!(params, expected(&[("a", Some("%41%zz"))]));
    assert_eq!(params, utf8().parse_query(input).unwrap());
}

#[test]
fn test_malformed_escapes() {
    assert!(matches!(utf8().parse_query("?a=%zz"), Err(ExtractError::Decoding(_))));
    assert!(matches!(utf8().parse_query("?a=%4"), Err(ExtractError::Decoding(_))));
    assert!(matches!(utf8().parse_query("?%=1"), Err(ExtractError::Decoding(_))));
}

#[test]
fn test_unknown_encoding_fails_at_construction() {
    assert!(matches!(
        QueryParamExtractor::new("no-such-charset", false),
        Err(ExtractError::Configuration(_))
    ));
    assert!(parse_query("?a=1", "no-such-charset", false).is_err());
}

#[test]
fn test_free_function() {
    let params = parse_query("?a=1&b", "UTF-8", false).unwrap();
    assert_eq!(params, expected(&[("a", Some("1")), ("b", None)]));
}

#[test]
fn test_repeated_calls_are_identical() {
    let extractor = utf8_double();
    let input = "https://example.com/search?q=rust%2Blang&page=2&q=ignored";
    let first = extractor.parse_query(input).unwrap();
    for _ in 0..3 {
        assert_eq!(extractor.parse_query(input).unwrap(), first);
    }
    assert_eq!(first.get("q"), Some(Some("rust+lang")));
}

#[test]
fn test_shared_across_threads() {
    let extractor = utf8();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let params = extractor.parse_query(&format!("?n={}", i)).unwrap();
                params.get("n").flatten().map(str::to_string)
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Some(i.to_string()));
    }
}
