use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use log::LevelFilter;

use crate::constants::{DEFAULT_BASE_PATH, EXIT_FAILURE};

/// Command-line arguments for the upload-assets tool.
///
/// The branch key doubles as the deployment target: it names the remote
/// subdirectory and the uploaded file names, and by default must equal the
/// currently checked-out git branch.
#[derive(Parser, Debug)]
#[clap(
    name = "upload-assets",
    version,
    about = "Upload built CSS/JS bundles to the FTP server under a branch key"
)]
pub struct Args {
    /// Deployment key; must match the current git branch unless --ignore-branch is set
    #[clap(value_name = "BRANCH_KEY", value_parser = NonEmptyStringValueParser::new())]
    pub key: String,

    /// Skip the check that the key matches the current git branch
    #[clap(short, long)]
    pub ignore_branch: bool,

    /// Remote directory prefix the per-key directory is created under
    #[clap(short, long, default_value = DEFAULT_BASE_PATH)]
    pub base_path: String,

    /// Verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Exit with a failure status when the connection or any transfer fails
    #[clap(long)]
    pub strict: bool,
}

/// Exit status for an argument parsing outcome.
///
/// Help and version output exit 0; every usage error exits 1.
pub fn exit_code_for(error: &clap::Error) -> i32 {
    if error.use_stderr() {
        EXIT_FAILURE
    } else {
        0
    }
}

/// Log level for the `--verbose` flag
pub fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
