//! Repository list
use std::{fs::read_to_string, path::Path};

use crate::errors::{MirrorError, MirrorErrorKind};

/// Default repository list, in the working directory
pub const DEFAULT_REPOS_FILE: &str = "repos.txt";

/// Split a newline-delimited list, one entry per line.
///
/// Lines are kept as-is: a trailing newline yields a trailing empty entry.
pub fn split_repo_list(contents: &str) -> Vec<String> {
    contents.split('\n').map(str::to_string).collect()
}

/// Read the repository list at `path`
/// # Errors
/// Error if the file can't be read
pub fn read_repo_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>, MirrorError> {
    let path = path.as_ref();
    let contents = read_to_string(path).map_err(|e| {
        MirrorError::new(MirrorErrorKind::Io)
            .with_text(&format!("unable to read repos file {}: {e}", path.display()))
    })?;
    Ok(split_repo_list(&contents))
}
