use serde_json::Value;

/// Escape tabs, newlines and backslashes so a cell stays on one TSV column
fn escape_cell(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}

/// One row holding the values of `keys`, in that order
///
/// Missing keys, bare keys and absent records give empty cells.
pub fn selected_row(params: Option<&Value>, keys: &[String]) -> String {
    keys.iter()
        .map(|k| match params.and_then(|p| p.get(k)) {
            Some(Value::String(s)) => escape_cell(s),
            _ => String::new(),
        })
        .collect::<Vec<_>>()
        .join("\t")
}

/// One row of `key=value` cells in the object's key order; bare keys print
/// as just `key`
pub fn pairs_row(params: &Value) -> String {
    let Some(obj) = params.as_object() else {
        return String::new();
    };
    obj.iter()
        .map(|(k, v)| match v {
            Value::String(s) => format!("{}={}", escape_cell(k), escape_cell(s)),
            _ => escape_cell(k),
        })
        .collect::<Vec<_>>()
        .join("\t")
}
