//! File pattern resolution using glob

use anyhow::Context;
use glob::glob;
use std::path::PathBuf;

use crate::error::{CliError, CliResult};

/// Resolve file patterns to actual file paths
///
/// Matches are sorted and deduplicated so multi-pattern runs stay
/// deterministic. Fails when nothing matches at all.
pub fn resolve_patterns(patterns: &[String]) -> CliResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    files.sort();
    files.dedup();

    Ok(files)
}
