/// Check whether a string starts with an `http://` or `https://` scheme
///
/// The comparison ignores ASCII case.
pub fn has_http_scheme(s: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        s.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}
