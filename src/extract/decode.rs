//! Percent-decoding of query components

use encoding_rs::Encoding;

use super::error::ExtractError;

/// Check for a percent sign that was itself percent-encoded
///
/// Matches `%25` immediately followed by two hex digits, e.g. the `%255B` in
/// `foo%255B%255D`.
///
/// # Examples
///
/// ```
/// use qpx::extract::looks_double_encoded;
///
/// assert!(looks_double_encoded("?foo%255B%255D=baz"));
/// assert!(!looks_double_encoded("?foo%5B%5D=baz"));
/// assert!(!looks_double_encoded("?discount=100%25"));
/// ```
pub fn looks_double_encoded(input: &str) -> bool {
    input.as_bytes().windows(5).any(|w| {
        w[0] == b'%'
            && w[1] == b'2'
            && w[2] == b'5'
            && w[3].is_ascii_hexdigit()
            && w[4].is_ascii_hexdigit()
    })
}

/// Decode one query component
///
/// Runs of consecutive `%xx` escapes are turned into bytes and decoded as a
/// unit with `charset`, so multi-byte characters split across escapes come
/// back whole. Literal text is copied through unchanged, except that `+`
/// becomes a space when `plus_as_space` is set.
///
/// # Errors
///
/// Returns `ExtractError::Decoding` for a `%` not followed by two hex digits,
/// and for escaped bytes that are not valid in `charset`.
///
/// # Examples
///
/// ```
/// use qpx::extract::decode_component;
///
/// let text = decode_component("example+urls%21", encoding_rs::UTF_8, true).unwrap();
/// assert_eq!(text, "example urls!");
/// ```
pub fn decode_component(
    raw: &str,
    charset: &'static Encoding,
    plus_as_space: bool,
) -> Result<String, ExtractError> {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    let mut offset = 0;

    while let Some(start) = rest.find('%') {
        push_literal(&mut out, &rest[..start], plus_as_space);

        let run_len = escape_run_len(&rest[start..], raw, offset + start)?;
        let run = &rest[start..start + run_len];
        let bytes = urlencoding::decode_binary(run.as_bytes());
        let text = charset
            .decode_without_bom_handling_and_without_replacement(&bytes)
            .ok_or_else(|| {
                ExtractError::Decoding(format!(
                    "Escaped bytes {} in {:?} are not valid {}",
                    run,
                    raw,
                    charset.name()
                ))
            })?;
        out.push_str(&text);

        offset += start + run_len;
        rest = &rest[start + run_len..];
    }
    push_literal(&mut out, rest, plus_as_space);

    Ok(out)
}

fn push_literal(out: &mut String, literal: &str, plus_as_space: bool) {
    if plus_as_space {
        out.extend(literal.chars().map(|c| if c == '+' { ' ' } else { c }));
    } else {
        out.push_str(literal);
    }
}

/// Length in bytes of the run of `%xx` escapes at the start of `s`
fn escape_run_len(s: &str, whole: &str, at: usize) -> Result<usize, ExtractError> {
    let bytes = s.as_bytes();
    let mut len = 0;

    while bytes.get(len) == Some(&b'%') {
        match bytes.get(len + 1..len + 3) {
            Some(pair) if pair.iter().all(u8::is_ascii_hexdigit) => len += 3,
            Some(_) => {
                return Err(ExtractError::Decoding(format!(
                    "Invalid escape sequence at offset {} in {:?}",
                    at + len,
                    whole
                )))
            }
            None => {
                return Err(ExtractError::Decoding(format!(
                    "Truncated escape sequence at offset {} in {:?}",
                    at + len,
                    whole
                )))
            }
        }
    }

    Ok(len)
}
