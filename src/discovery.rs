use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Configuration for gold file discovery
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Glob appended to the root directory
    pub pattern: String,
    /// Whether to fail on the first unreadable entry or skip it
    pub fail_fast: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            pattern: "**/*.json".to_string(),
            fail_fast: false,
        }
    }
}

/// Resolve a gold path into the files to evaluate.
///
/// A file path is returned as-is. A directory is searched recursively with `config.pattern`;
/// matches are returned sorted so runs are reproducible.
pub fn discover_gold_files(root: impl AsRef<Path>, config: &DiscoveryConfig) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let metadata = std::fs::metadata(root)
        .with_context(|| format!("Cannot access gold path {}", root.display()))?;

    if metadata.is_file() {
        debug!("Gold path is a single file: {}", root.display());
        return Ok(vec![root.to_path_buf()]);
    }

    let pattern = root.join(&config.pattern);
    let pattern = pattern
        .to_str()
        .with_context(|| format!("Gold path is not valid UTF-8: {}", root.display()))?;

    let mut files = Vec::new();
    for entry in glob(pattern).context("Failed to create glob pattern")? {
        match entry {
            Ok(path) if path.is_file() => {
                debug!("Found gold file: {}", path.display());
                files.push(path);
            }
            Ok(_) => {}
            Err(e) => {
                if config.fail_fast {
                    return Err(e).context("Glob error during gold file discovery");
                }
                warn!("Skipping unreadable path during discovery: {}", e);
            }
        }
    }

    files.sort();
    info!("Discovered {} gold files under {}", files.len(), root.display());
    Ok(files)
}
