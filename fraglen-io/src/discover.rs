use std::path::{Path, PathBuf};

use glob::Pattern;
use log::debug;
use walkdir::WalkDir;

use crate::error::Result;

///
/// Collect the input files under `root`.
///
/// A file path is returned as is. A directory is walked recursively and every regular file
/// whose name matches the glob `pattern` is kept. The result is sorted by path.
///
/// # Arguments
/// - root: file or directory to search
/// - pattern: glob matched against file names, e.g. `*.txt`
pub fn discover_files(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let pattern = Pattern::new(pattern)?;
    let mut matches: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if pattern.matches(&entry.file_name().to_string_lossy()) {
            debug!("Found input file {}", entry.path().display());
            matches.push(entry.into_path());
        }
    }

    matches.sort();
    Ok(matches)
}

///
/// [discover_files] over several roots, keeping the first occurrence of each path.
///
pub fn discover_all<P: AsRef<Path>>(roots: &[P], pattern: &str) -> Result<Vec<PathBuf>> {
    let mut all: Vec<PathBuf> = Vec::new();
    for root in roots {
        for path in discover_files(root.as_ref(), pattern)? {
            if !all.contains(&path) {
                all.push(path);
            }
        }
    }
    Ok(all)
}
