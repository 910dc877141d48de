/// Read an on/off setting such as `QPX_DETECT_DOUBLE_ENCODING` or the second
/// `ExtractQueryParams` argument
///
/// `1`, `true`, `yes` and `on` switch the setting on, in any case. Unset or
/// blank leaves `default` in place. Any other text switches it off.
pub fn parse_flag(value: Option<&str>, default: bool) -> bool {
    const ON: [&str; 4] = ["1", "true", "yes", "on"];

    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => ON.iter().any(|on| v.eq_ignore_ascii_case(on)),
        None => default,
    }
}
