//! Line-oriented input sources

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use super::error::SourceError;

/// Read every line of a text file
pub fn read_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    tracing::info!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Read the lines of every file named in `list_path`
///
/// The list file holds one input path per line. Blank lines and surrounding
/// whitespace are ignored, and relative paths are taken as given (relative
/// to the working directory). Lines come back in list order.
///
/// # Examples
///
/// ```no_run
/// use qpx::services::read_indirect;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let lines = read_indirect(Path::new("inputs.txt"))?;
/// println!("{} lines across all listed files", lines.len());
/// # Ok(())
/// # }
/// ```
pub fn read_indirect(list_path: &Path) -> Result<Vec<String>, SourceError> {
    let paths = list_paths(list_path)?;
    tracing::debug!("{} lists {} input files", list_path.display(), paths.len());

    let mut lines = Vec::new();
    for path in &paths {
        lines.extend(read_lines(path)?);
    }
    Ok(lines)
}

fn list_paths(list_path: &Path) -> Result<Vec<PathBuf>, SourceError> {
    Ok(read_lines(list_path)?
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .map(PathBuf::from)
        .collect())
}

/// Read every line from standard input
pub fn read_stdin_lines() -> Result<Vec<String>, SourceError> {
    io::stdin()
        .lock()
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(SourceError::Stdin)
}
