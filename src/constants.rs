//! Global constants for the asset uploader.
//!
//! This module centralizes the fixed values of the deployment contract:
//! credential variable names, local bundle locations and remote layout.

// Credential environment variables
/// Environment variable holding the FTP host (optionally `host:port`)
pub const FTP_HOST_VAR: &str = "JNKR_FTP_HOST";

/// Environment variable holding the FTP username
pub const FTP_USER_VAR: &str = "JNKR_FTP_USER";

/// Environment variable holding the FTP password
pub const FTP_PASS_VAR: &str = "JNKR_FTP_PASS";

// Local bundle discovery
/// Glob patterns searched for bundle files, in evaluation order
pub const LOCAL_FILE_PATTERNS: [&str; 2] = [
    "dist/assets/index*.css",
    "dist/assets/index*.js",
];

// Remote layout
/// Default remote directory prefix
pub const DEFAULT_BASE_PATH: &str = "public/assets";

/// File name stem of uploaded bundles (`index-<key>.<ext>`)
pub const REMOTE_FILE_STEM: &str = "index";

// FTP connection
/// Default FTP control port
pub const FTP_DEFAULT_PORT: u16 = 21;

/// Connection timeout in seconds
pub const FTP_CONNECTION_TIMEOUT_SECS: u64 = 30;

// Exit codes
/// Exit status for usage errors, branch failures and strict-mode upload failures
pub const EXIT_FAILURE: i32 = 1;
