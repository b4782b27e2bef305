//! Branch-gated bundle upload.
//!
//! A run has two phases. The pre-network phase checks that the key matches
//! the checked-out branch; any failure there is fatal and nothing touches the
//! network. The session phase connects, discovers the local bundles and
//! transfers them one at a time. Failures in the session phase are logged and
//! recorded in the returned [`UploadReport`] instead of propagating.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use log::{debug, error, info};

use crate::assets::{AssetKind, FilePatternMatcher, RemoteTargets};
use crate::cloud::ftp::{FtpConnector, FtpSession, SessionGuard};
use crate::config::{FtpCredentials, UploadOptions};
use crate::constants::{EXIT_FAILURE, LOCAL_FILE_PATTERNS};
use crate::security::safe_error_message;
use crate::vcs::BranchResolver;

/// A file that reached the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedFile {
    pub local_path: PathBuf,
    pub remote_path: String,
    pub bytes: u64,
}

/// Outcome of the session phase.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadReport {
    /// Files transferred, in transfer order
    pub uploaded: Vec<UploadedFile>,
    /// Matched files that were neither `.js` nor `.css`
    pub skipped: Vec<PathBuf>,
    /// No local file matched any pattern
    pub no_matches: bool,
    /// Scrubbed message of the error that ended the session, if any
    pub failure: Option<String>,
}

impl UploadReport {
    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }

    /// Process exit status for this outcome.
    ///
    /// Session failures only fail the process in strict mode.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if strict && self.is_failure() {
            EXIT_FAILURE
        } else {
            0
        }
    }
}

/// Check that `key` names the current branch unless the check is skipped.
pub fn validate_branch(key: &str, ignore_branch: bool, resolver: &dyn BranchResolver) -> Result<()> {
    if ignore_branch {
        debug!("Branch check skipped for key {}", key);
        return Ok(());
    }

    let current_branch = resolver
        .current_branch()
        .context("Error getting current branch")?;

    if key != current_branch {
        bail!(
            "The provided key \"{}\" does not match the current branch \"{}\".",
            key,
            current_branch
        );
    }

    debug!("Key {} matches the current branch", key);
    Ok(())
}

/// Evaluate each pattern in order and concatenate the matches.
pub fn discover_files(matcher: &dyn FilePatternMatcher, patterns: &[&str]) -> Result<Vec<PathBuf>> {
    let mut local_files = Vec::new();
    for pattern in patterns {
        local_files.extend(matcher.find_matches(pattern)?);
    }
    Ok(local_files)
}

/// Connect, discover and transfer the bundles for `options.key`.
pub fn deploy(
    options: &UploadOptions,
    credentials: &FtpCredentials,
    matcher: &dyn FilePatternMatcher,
    connector: &dyn FtpConnector,
) -> UploadReport {
    let targets = RemoteTargets::new(&options.key, &options.base_path);
    let mut report = UploadReport::default();

    let session = match connector.connect(credentials) {
        Ok(session) => session,
        Err(e) => {
            record_failure(&mut report, &e, credentials);
            return report;
        }
    };

    let mut guard = SessionGuard::new(session);
    let outcome = guard
        .session()
        .login(credentials)
        .and_then(|()| transfer_bundles(guard.session(), matcher, &targets, &mut report));
    if let Err(e) = outcome {
        record_failure(&mut report, &e, credentials);
    }
    drop(guard);

    report
}

/// Validate the branch, then run the session phase.
///
/// Only pre-network failures are returned as errors.
pub fn run(
    options: &UploadOptions,
    credentials: &FtpCredentials,
    resolver: &dyn BranchResolver,
    matcher: &dyn FilePatternMatcher,
    connector: &dyn FtpConnector,
) -> Result<UploadReport> {
    validate_branch(&options.key, options.ignore_branch, resolver)?;
    Ok(deploy(options, credentials, matcher, connector))
}

fn transfer_bundles(
    session: &mut dyn FtpSession,
    matcher: &dyn FilePatternMatcher,
    targets: &RemoteTargets,
    report: &mut UploadReport,
) -> Result<()> {
    let local_files = discover_files(matcher, &LOCAL_FILE_PATTERNS)?;

    if local_files.is_empty() {
        error!(
            "No files found matching the specified patterns: {}",
            LOCAL_FILE_PATTERNS.join(", ")
        );
        report.no_matches = true;
        return Ok(());
    }

    for local_path in local_files {
        match AssetKind::classify(&local_path) {
            Some(kind) => {
                let remote_path = targets.for_kind(kind);
                let bytes = session.upload(&local_path, remote_path)?;
                info!(
                    "File {} uploaded as {} successfully.",
                    local_path.display(),
                    remote_path
                );
                report.uploaded.push(UploadedFile {
                    local_path,
                    remote_path: remote_path.to_string(),
                    bytes,
                });
            }
            None => {
                debug!("Skipping {}: not a .js or .css bundle", local_path.display());
                report.skipped.push(local_path);
            }
        }
    }

    Ok(())
}

fn record_failure(report: &mut UploadReport, e: &anyhow::Error, credentials: &FtpCredentials) {
    let message = safe_error_message("Error", e, credentials);
    error!("{}", message);
    report.failure = Some(message);
}

/// Log a one-line summary of a finished run
pub fn log_summary(report: &UploadReport) {
    if report.is_failure() {
        info!(
            "Upload finished with errors: {} file(s) uploaded before the failure",
            report.uploaded.len()
        );
    } else if !report.no_matches {
        info!(
            "Upload finished: {} file(s) uploaded, {} skipped",
            report.uploaded.len(),
            report.skipped.len()
        );
    }
}
