//! # asset-uploader
//!
//! Deployment helper that pushes locally built CSS/JS bundles to an FTP
//! server under a branch key.
//!
//! ## Overview
//!
//! A run is linear: parse arguments, check that the key matches the current
//! git branch (unless told not to), open one FTP session, glob the bundle
//! output directory and upload each `.js`/`.css` match to a fixed remote
//! path, then close the session.
//!
//! ```text
//! dist/assets/index-3f2a.css  ──▶  public/assets/<key>/index-<key>.css
//! dist/assets/index-3f2a.js   ──▶  public/assets/<key>/index-<key>.js
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use asset_uploader::assets::GlobMatcher;
//! use asset_uploader::cloud::SuppaFtpConnector;
//! use asset_uploader::config::{FtpCredentials, UploadOptions};
//! use asset_uploader::uploader;
//! use asset_uploader::vcs::GitBranchResolver;
//!
//! # fn main() -> anyhow::Result<()> {
//! let options = UploadOptions {
//!     key: "main".to_string(),
//!     ignore_branch: false,
//!     base_path: "public/assets".to_string(),
//!     strict: false,
//! };
//!
//! let report = uploader::run(
//!     &options,
//!     &FtpCredentials::from_env(),
//!     &GitBranchResolver::new(),
//!     &GlobMatcher::new(),
//!     &SuppaFtpConnector::new(),
//! )?;
//!
//! println!("Uploaded {} file(s)", report.uploaded.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions and argument parsing
//! - [`config`]: Credentials from the environment and per-run options
//! - [`vcs`]: Current branch lookup
//! - [`assets`]: Local bundle discovery and remote path mapping
//! - [`cloud`]: FTP session handling
//! - [`uploader`]: The branch-gated upload procedure
//! - [`security`]: Credential scrubbing for log output
//! - [`constants`]: Application-wide constants

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Configuration from the environment and the command line
pub mod config;

/// Version-control branch lookup
pub mod vcs;

/// Bundle discovery and remote layout
pub mod assets;

/// FTP upload integration
pub mod cloud;

/// Branch-gated upload procedure
pub mod uploader;

/// Security utilities for credential protection
pub mod security;

/// Application constants and configuration values
pub mod constants;

/// Test utilities and helpers
#[cfg(test)]
pub mod test_utils;
