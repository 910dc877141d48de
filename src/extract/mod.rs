//! Query-string parameter extraction
//!
//! [`QueryParamExtractor`] turns a URL or query string into [`QueryParams`],
//! a map from key to optional value:
//!
//! - `?foo=baz` gives `foo -> "baz"`
//! - `?foo` gives `foo -> null`, `?foo=` gives `foo -> ""`
//! - repeated keys keep their first value
//! - keys and values are percent-decoded with the configured charset, and
//!   `+` decodes to a space
//! - `-` is an explicitly empty input
//!
//! With double-encoding detection on, input containing an encoded percent
//! sign followed by hex digits (`%255B`) is decoded once more before parsing.
//!
//! # Examples
//!
//! ```
//! use qpx::extract::QueryParamExtractor;
//!
//! let extractor = QueryParamExtractor::new("UTF-8", true).unwrap();
//! let params = extractor.parse_query("?foo%255B%255D=baz%253D").unwrap();
//! assert_eq!(params.get("foo[]"), Some(Some("baz=")));
//! ```
//!
//! [`QueryParams`]: crate::models::QueryParams

mod charset;
mod decode;
mod error;
mod extractor;

pub use charset::{default_charset, resolve_charset, DEFAULT_ENCODING};
pub use decode::{decode_component, looks_double_encoded};
pub use error::ExtractError;
pub use extractor::{parse_query, QueryParamExtractor, EMPTY_SENTINEL};
