use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};

/// Capability for expanding a shell-style glob pattern into file paths.
#[cfg_attr(test, mockall::automock)]
pub trait FilePatternMatcher {
    /// Paths matching `pattern`, in a deterministic order.
    fn find_matches(&self, pattern: &str) -> Result<Vec<PathBuf>>;
}

/// Filesystem matcher backed by the `glob` crate.
///
/// Patterns are evaluated relative to the process working directory, or to
/// `root` when one is configured. Matches come back in alphabetical order.
#[derive(Clone, Debug, Default)]
pub struct GlobMatcher {
    root: Option<PathBuf>,
}

impl GlobMatcher {
    /// Matcher rooted at the process working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Matcher rooted at `root`
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn full_pattern(&self, pattern: &str) -> String {
        match &self.root {
            Some(root) => {
                let escaped = glob::Pattern::escape(&root.to_string_lossy());
                Path::new(&escaped).join(pattern).to_string_lossy().to_string()
            }
            None => pattern.to_string(),
        }
    }
}

impl FilePatternMatcher for GlobMatcher {
    fn find_matches(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let full_pattern = self.full_pattern(pattern);
        let entries = glob::glob(&full_pattern)
            .with_context(|| format!("Invalid file pattern: {}", full_pattern))?;

        let mut matches = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => matches.push(path),
                Ok(path) => debug!("Skipping non-file match: {}", path.display()),
                Err(e) => warn!("Unreadable path while matching {}: {}", full_pattern, e),
            }
        }

        debug!("Pattern {} matched {} file(s)", full_pattern, matches.len());
        Ok(matches)
    }
}
