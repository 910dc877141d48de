use std::env;
use std::path::Path;

use crate::utils::parse_flag;

// Default configuration constants
pub const DEFAULT_ENCODING: &str = crate::extract::DEFAULT_ENCODING;
pub const DEFAULT_DETECT_DOUBLE_ENCODING: bool = false;
pub const DEFAULT_OUTPUT_FIELD: &str = "query";

// Environment variable names
pub const ENCODING_VAR: &str = "QPX_ENCODING";
pub const DETECT_DOUBLE_ENCODING_VAR: &str = "QPX_DETECT_DOUBLE_ENCODING";
pub const OUTPUT_FIELD_VAR: &str = "QPX_OUTPUT_FIELD";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        if let Err(e) = dotenvy::from_path(Path::new(path)) {
            tracing::warn!(%e, path, "could not load env file");
        }
    } else {
        dotenvy::dotenv().ok();
    }
}

/// Charset label for percent-decoding; blank values fall back to the default
pub fn get_encoding() -> String {
    non_blank(ENCODING_VAR).unwrap_or_else(|| DEFAULT_ENCODING.to_string())
}

pub fn get_detect_double_encoding() -> bool {
    parse_flag(
        env::var(DETECT_DOUBLE_ENCODING_VAR).ok().as_deref(),
        DEFAULT_DETECT_DOUBLE_ENCODING,
    )
}

/// Name for the output field, if one is configured
pub fn get_output_field() -> Option<String> {
    non_blank(OUTPUT_FIELD_VAR)
}

fn non_blank(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
