//! Remote storage integration for bundle uploads.
//!
//! Uploads go over a single plain-FTP session per run. The session is
//! opened through an [`ftp::FtpConnector`], wrapped in an
//! [`ftp::SessionGuard`], authenticated, and released when the guard leaves
//! scope, whether the login was refused, the transfer loop finished, or it
//! bailed out early.
//!
//! ## Usage Example
//!
//! ```no_run
//! use asset_uploader::cloud::ftp::{FtpConnector, SessionGuard, SuppaFtpConnector};
//! use asset_uploader::config::FtpCredentials;
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let credentials = FtpCredentials::from_env();
//! let session = SuppaFtpConnector::new().connect(&credentials)?;
//!
//! let mut guard = SessionGuard::new(session);
//! guard.session().login(&credentials)?;
//! guard.session().upload(
//!     Path::new("dist/assets/index-3f2a.js"),
//!     "public/assets/main/index-main.js",
//! )?;
//! # Ok(())
//! # }
//! ```

/// FTP session capabilities and the `suppaftp` implementation
pub mod ftp;

pub use ftp::{FtpConnector, FtpSession, SessionGuard, SuppaFtpConnector};
