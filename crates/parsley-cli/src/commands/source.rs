//! Input loading: inline text, a file, or stdin.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", path.display())]
    File { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("no input: pass a SOURCE file or --source TEXT")]
    Missing,
}

pub fn load_source(text: Option<&str>, path: Option<&Path>) -> Result<String, SourceError> {
    if let Some(text) = text {
        return Ok(text.to_owned());
    }
    let Some(path) = path else {
        return Err(SourceError::Missing);
    };
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(SourceError::Stdin)?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|source| SourceError::File {
        path: path.to_owned(),
        source,
    })
}

/// Name shown in diagnostics, if the input came from a file.
pub fn display_path(path: Option<&Path>) -> Option<String> {
    path.filter(|p| p.as_os_str() != "-")
        .map(|p| p.display().to_string())
}
