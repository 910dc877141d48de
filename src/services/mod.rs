pub mod error;
pub mod line_source;

// Re-export commonly used items
pub use error::SourceError;
pub use line_source::{read_indirect, read_lines, read_stdin_lines};
