//! Version-control branch lookup.
//!
//! The uploader only needs one fact from version control: the name of the
//! checked-out branch. [`BranchResolver`] abstracts that query so the upload
//! flow can be exercised without a git binary or repository.

use std::path::PathBuf;
use std::process::Command;

use anyhow::{anyhow, bail, Context, Result};
use log::debug;

/// Capability for querying the current branch name.
#[cfg_attr(test, mockall::automock)]
pub trait BranchResolver {
    /// Name of the currently checked-out branch.
    fn current_branch(&self) -> Result<String>;
}

/// Resolves the branch by running `git branch --show-current`.
#[derive(Clone, Debug, Default)]
pub struct GitBranchResolver {
    work_dir: Option<PathBuf>,
}

impl GitBranchResolver {
    /// Resolver that runs git in the process working directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver that runs git inside `work_dir`
    pub fn in_dir(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: Some(work_dir.into()),
        }
    }
}

impl BranchResolver for GitBranchResolver {
    fn current_branch(&self) -> Result<String> {
        let mut command = Command::new("git");
        command.args(["branch", "--show-current"]);
        if let Some(dir) = &self.work_dir {
            command.current_dir(dir);
        }

        let output = command
            .output()
            .context("Failed to run git to determine the current branch")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "git branch --show-current exited with {}: {}",
                output.status,
                stderr.trim()
            ));
        }

        let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if branch.is_empty() {
            bail!("Not on a branch (detached HEAD)");
        }

        debug!("Current git branch: {}", branch);
        Ok(branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_outside_repository_fails() {
        // A fresh temp dir is not inside a git work tree
        let temp_dir = TempDir::new().unwrap();
        let resolver = GitBranchResolver::in_dir(temp_dir.path());

        assert!(resolver.current_branch().is_err());
    }

    #[test]
    fn test_missing_work_dir_fails() {
        let resolver = GitBranchResolver::in_dir("/nonexistent/asset-uploader/work-dir");
        assert!(resolver.current_branch().is_err());
    }
}
