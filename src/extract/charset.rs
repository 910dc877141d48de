//! Charset lookup for percent-decoded bytes

use encoding_rs::{Encoding, UTF_8};

use super::error::ExtractError;

/// Charset label used when none is configured
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Resolve a charset label to an encoding
///
/// Labels follow the WHATWG Encoding Standard, so lookup is case-insensitive
/// and ignores surrounding whitespace. Labels that WHATWG maps to the
/// "replacement" encoding are rejected along with unknown ones.
///
/// # Examples
///
/// ```
/// use qpx::extract::resolve_charset;
///
/// assert_eq!(resolve_charset("utf8").unwrap().name(), "UTF-8");
/// assert_eq!(resolve_charset("ISO-8859-7").unwrap().name(), "ISO-8859-7");
/// assert!(resolve_charset("no-such-charset").is_err());
/// ```
pub fn resolve_charset(label: &str) -> Result<&'static Encoding, ExtractError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(ExtractError::Configuration(
            "Encoding name must not be empty".to_string(),
        ));
    }

    match Encoding::for_label_no_replacement(trimmed.as_bytes()) {
        Some(encoding) => {
            tracing::debug!(label = trimmed, charset = encoding.name(), "resolved charset");
            Ok(encoding)
        }
        None => Err(ExtractError::Configuration(format!(
            "Unsupported encoding: {}",
            trimmed
        ))),
    }
}

/// The charset used by default-constructed extractors
pub fn default_charset() -> &'static Encoding {
    UTF_8
}
