// Input classification
pub mod url_scheme;

// Output formatting
pub mod tsv;

// Parsing utilities
pub mod parse_flag;

pub use url_scheme::has_http_scheme;
pub use parse_flag::parse_flag;
pub use tsv::{pairs_row, selected_row};
