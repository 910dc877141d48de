//! The query-parameter extractor

use std::borrow::Cow;

use encoding_rs::Encoding;

use super::charset::{default_charset, resolve_charset};
use super::decode::{decode_component, looks_double_encoded};
use super::error::ExtractError;
use crate::models::{QueryParams, Record};
use crate::utils::has_http_scheme;

/// Input meaning "explicitly empty"
pub const EMPTY_SENTINEL: &str = "-";

/// Parses URLs and query strings into [`QueryParams`]
///
/// Input may be a whole URL or just the query part, with or without the
/// leading `?`. Anything from the first `#` on is ignored.
///
/// A URL with no query and a single bare key look alike
/// (`https://example.com/page` vs `key_with_null_value`). The rule applied:
/// when the input has no `?` and starts with `http://` or `https://`
/// (ignoring ASCII case) it is a URL and yields an empty map. Any other input
/// without `?` is read as a query, so `foo` gives `{foo: null}`.
///
/// The extractor holds only immutable configuration and may be shared freely
/// between threads.
#[derive(Debug, Clone, Copy)]
pub struct QueryParamExtractor {
    charset: &'static Encoding,
    detect_double_encoding: bool,
}

impl Default for QueryParamExtractor {
    /// UTF-8, double-encoding detection off
    fn default() -> Self {
        Self::with_charset(default_charset(), false)
    }
}

impl QueryParamExtractor {
    /// Create an extractor for the charset named `encoding`
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::Configuration` if the encoding is not recognised.
    ///
    /// # Examples
    ///
    /// ```
    /// use qpx::extract::QueryParamExtractor;
    ///
    /// let extractor = QueryParamExtractor::new("ISO-8859-7", false).unwrap();
    /// let params = extractor.parse_query("?%E1=%E2").unwrap();
    /// assert_eq!(params.get("\u{03B1}"), Some(Some("\u{03B2}")));
    ///
    /// assert!(QueryParamExtractor::new("klingon", false).is_err());
    /// ```
    pub fn new(encoding: &str, detect_double_encoding: bool) -> Result<Self, ExtractError> {
        let charset = resolve_charset(encoding)?;
        Ok(Self::with_charset(charset, detect_double_encoding))
    }

    pub fn with_charset(charset: &'static Encoding, detect_double_encoding: bool) -> Self {
        Self {
            charset,
            detect_double_encoding,
        }
    }

    pub fn charset(&self) -> &'static Encoding {
        self.charset
    }

    pub fn detects_double_encoding(&self) -> bool {
        self.detect_double_encoding
    }

    /// Extract parameters from a single-field record
    ///
    /// # Returns
    ///
    /// - `Ok(None)` - no record, no fields, or a null field
    /// - `Ok(Some(params))` - the parsed parameters, possibly empty
    /// - `Err(ExtractError::Shape)` - the record has more than one field
    /// - `Err(ExtractError::Decoding)` - a malformed escape in the input
    pub fn extract(&self, record: Option<&Record>) -> Result<Option<QueryParams>, ExtractError> {
        let record = match record {
            Some(r) if !r.is_empty() => r,
            _ => return Ok(None),
        };
        if record.len() > 1 {
            return Err(ExtractError::Shape {
                fields: record.len(),
            });
        }

        match record.get(0) {
            Some(input) => self.parse_query(input).map(Some),
            None => Ok(None),
        }
    }

    /// Parse one URL or query string
    ///
    /// # Examples
    ///
    /// ```
    /// use qpx::extract::QueryParamExtractor;
    ///
    /// let extractor = QueryParamExtractor::default();
    ///
    /// let params = extractor.parse_query("https://duckduckgo.com/?q=example+urls#top").unwrap();
    /// assert_eq!(params.get("q"), Some(Some("example urls")));
    ///
    /// let params = extractor.parse_query("?foo&bar=").unwrap();
    /// assert_eq!(params.get("foo"), Some(None));
    /// assert_eq!(params.get("bar"), Some(Some("")));
    ///
    /// assert!(extractor.parse_query("https://example.com/path").unwrap().is_empty());
    /// ```
    pub fn parse_query(&self, input: &str) -> Result<QueryParams, ExtractError> {
        if input == EMPTY_SENTINEL {
            return Ok(QueryParams::new());
        }

        let corrected = self.correct_double_encoding(input);
        match self.parse_trimmed(&corrected) {
            Err(ExtractError::Decoding(e)) if matches!(corrected, Cow::Owned(_)) => {
                tracing::debug!(%e, input, "corrected input failed to parse; using input as is");
                self.parse_trimmed(input)
            }
            result => result,
        }
    }

    /// Steps after double-encoding correction: trim, classify, split, decode
    fn parse_trimmed(&self, input: &str) -> Result<QueryParams, ExtractError> {
        let quest_idx = input.find('?');
        let hash_idx = input.find('#');

        if quest_idx.is_none() && has_http_scheme(input) {
            tracing::trace!(input = %input, "URL without query");
            return Ok(QueryParams::new());
        }

        let start = quest_idx.map_or(0, |i| i + 1);
        let end = hash_idx.unwrap_or(input.len());
        let query = if start <= end { &input[start..end] } else { "" };

        let mut params = QueryParams::new();
        for token in query.split('&').filter(|t| !t.is_empty()) {
            let (raw_key, raw_value) = match token.split_once('=') {
                Some((k, v)) => (k, Some(v)),
                None => (token, None),
            };

            let key = decode_component(raw_key, self.charset, true)?;
            let value = raw_value
                .map(|v| decode_component(v, self.charset, true))
                .transpose()?;

            if !params.insert_first(key, value) {
                tracing::trace!(key = raw_key, "keeping first occurrence of repeated key");
            }
        }

        Ok(params)
    }

    /// Undo one layer of percent-encoding when the input looks double-encoded
    ///
    /// Falls back to the original text if the extra decode fails.
    fn correct_double_encoding<'a>(&self, input: &'a str) -> Cow<'a, str> {
        if !self.detect_double_encoding || !looks_double_encoded(input) {
            return Cow::Borrowed(input);
        }

        match decode_component(input, self.charset, false) {
            Ok(decoded) => {
                tracing::debug!(original = input, corrected = %decoded, "corrected double-encoded input");
                Cow::Owned(decoded)
            }
            Err(e) => {
                tracing::debug!(%e, input, "double-encoding correction failed; using input as is");
                Cow::Borrowed(input)
            }
        }
    }
}

/// Parse `input` with a one-off extractor
///
/// Convenience for callers that do not keep an extractor around. Prefer
/// [`QueryParamExtractor`] when parsing many values with the same settings,
/// so the encoding is resolved only once.
pub fn parse_query(
    input: &str,
    encoding: &str,
    detect_double_encoding: bool,
) -> Result<QueryParams, ExtractError> {
    QueryParamExtractor::new(encoding, detect_double_encoding)?.parse_query(input)
}
