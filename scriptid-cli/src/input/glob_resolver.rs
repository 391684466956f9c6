//! File pattern resolution using glob

use crate::error::CliError;
use crate::table::LANG_SUFFIX;
use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

/// Resolve file patterns to actual file paths
///
/// Wildcard matches that look like earlier annotated outputs
/// (`<stem>_lang.<ext>`) are skipped; naming such a file literally still
/// selects it.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;
        let wildcard = pattern.contains(['*', '?', '[']);

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if !path.is_file() {
                continue;
            }
            if wildcard && is_annotated_output(&path) {
                log::debug!("Skipping annotated output {}", path.display());
                continue;
            }
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

fn is_annotated_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.ends_with(LANG_SUFFIX))
}
