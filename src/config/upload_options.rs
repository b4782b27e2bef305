use crate::cli::Args;

/// Options controlling a single upload run, resolved from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadOptions {
    /// Deployment key, also the expected git branch
    pub key: String,
    /// Skip the branch check
    pub ignore_branch: bool,
    /// Remote directory prefix
    pub base_path: String,
    /// Treat session-phase failures as fatal
    pub strict: bool,
}

impl From<&Args> for UploadOptions {
    fn from(args: &Args) -> Self {
        Self {
            key: args.key.clone(),
            ignore_branch: args.ignore_branch,
            base_path: args.base_path.clone(),
            strict: args.strict,
        }
    }
}
