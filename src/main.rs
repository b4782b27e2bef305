use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use asset_uploader::assets::GlobMatcher;
use asset_uploader::cli::{self, Args};
use asset_uploader::cloud::SuppaFtpConnector;
use asset_uploader::config::{FtpCredentials, UploadOptions};
use asset_uploader::constants::EXIT_FAILURE;
use asset_uploader::uploader;
use asset_uploader::vcs::GitBranchResolver;

fn main() -> Result<()> {
    // Parse arguments; help and version exit 0, usage errors exit 1
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            process::exit(cli::exit_code_for(&e));
        }
    };

    // Initialize logging
    initialize_logging(args.verbose)?;

    let options = UploadOptions::from(&args);
    let credentials = FtpCredentials::from_env();

    // Branch check happens before any network activity
    if let Err(e) = uploader::validate_branch(&options.key, options.ignore_branch, &GitBranchResolver::new()) {
        error!("{:#}", e);
        process::exit(EXIT_FAILURE);
    }

    info!("Uploading bundles for key {} under {}", options.key, options.base_path);

    let report = uploader::deploy(
        &options,
        &credentials,
        &GlobMatcher::new(),
        &SuppaFtpConnector::new(),
    );
    uploader::log_summary(&report);

    let code = report.exit_code(options.strict);
    if code != 0 {
        process::exit(code);
    }

    Ok(())
}

/// Terminal logging; suppaftp's own records are dropped since they echo
/// the control channel, login included
fn initialize_logging(verbose: bool) -> Result<()> {
    let config = ConfigBuilder::new()
        .add_filter_ignore_str("suppaftp")
        .build();

    TermLogger::init(
        cli::log_level(verbose),
        config,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}
