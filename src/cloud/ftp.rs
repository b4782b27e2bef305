use std::fs;
use std::net::ToSocketAddrs;
use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use suppaftp::types::FileType;
use suppaftp::FtpStream;

use crate::config::FtpCredentials;
use crate::constants::FTP_CONNECTION_TIMEOUT_SECS;

/// An open FTP control connection.
pub trait FtpSession {
    /// Authenticate and prepare the session for binary transfers.
    fn login(&mut self, credentials: &FtpCredentials) -> Result<()>;

    /// Upload a local file to `remote_path`, returning the number of bytes sent.
    fn upload(&mut self, local_path: &Path, remote_path: &str) -> Result<u64>;

    /// End the session.
    fn close(&mut self) -> Result<()>;
}

/// Opens unauthenticated FTP sessions.
///
/// Authentication happens through [`FtpSession::login`] so a rejected login
/// still leaves a session to close.
pub trait FtpConnector {
    fn connect(&self, credentials: &FtpCredentials) -> Result<Box<dyn FtpSession>>;
}

/// Owns a session and closes it exactly once when dropped.
pub struct SessionGuard {
    session: Box<dyn FtpSession>,
}

impl SessionGuard {
    pub fn new(session: Box<dyn FtpSession>) -> Self {
        Self { session }
    }

    /// Borrow the guarded session
    pub fn session(&mut self) -> &mut dyn FtpSession {
        self.session.as_mut()
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        match self.session.close() {
            Ok(()) => debug!("FTP session closed"),
            Err(e) => warn!("Failed to close FTP session cleanly: {}", e),
        }
    }
}

/// Connector backed by `suppaftp` over plain FTP in passive mode.
#[derive(Clone, Debug)]
pub struct SuppaFtpConnector {
    timeout: Duration,
}

impl Default for SuppaFtpConnector {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(FTP_CONNECTION_TIMEOUT_SECS),
        }
    }
}

impl SuppaFtpConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl FtpConnector for SuppaFtpConnector {
    fn connect(&self, credentials: &FtpCredentials) -> Result<Box<dyn FtpSession>> {
        let address = credentials.address();
        let socket_addr = address
            .to_socket_addrs()
            .with_context(|| format!("Failed to resolve FTP host {}", address))?
            .next()
            .ok_or_else(|| anyhow!("FTP host {} resolved to no addresses", address))?;

        debug!("Connecting to ftp://{}@{}", credentials.user, address);

        let stream = FtpStream::connect_timeout(socket_addr, self.timeout)
            .with_context(|| format!("Failed to connect to {}", address))?;

        Ok(Box::new(SuppaFtpSession { stream }))
    }
}

/// Session over a live `suppaftp` control connection.
pub struct SuppaFtpSession {
    stream: FtpStream,
}

impl SuppaFtpSession {
    /// Create the parent directories of `remote_path`, ignoring failures.
    ///
    /// MKD on an existing directory is an error on most servers. STOR
    /// reports a directory that is really missing.
    fn ensure_parent_dirs(&mut self, remote_path: &str) {
        for dir in parent_dirs(remote_path) {
            if let Err(e) = self.stream.mkdir(dir.as_str()) {
                debug!("MKD {} not applied: {}", dir, e);
            }
        }
    }
}

impl FtpSession for SuppaFtpSession {
    fn login(&mut self, credentials: &FtpCredentials) -> Result<()> {
        let address = credentials.address();
        self.stream
            .login(credentials.user.as_str(), credentials.password.as_str())
            .with_context(|| format!("Failed to log in to {} as {}", address, credentials.user))?;

        self.stream
            .transfer_type(FileType::Binary)
            .context("Failed to switch to binary transfer mode")?;

        info!("Connected to FTP server {}", address);
        Ok(())
    }

    fn upload(&mut self, local_path: &Path, remote_path: &str) -> Result<u64> {
        let mut local_file = fs::File::open(local_path)
            .with_context(|| format!("Failed to open local file {}", local_path.display()))?;

        self.ensure_parent_dirs(remote_path);

        let bytes = self
            .stream
            .put_file(remote_path, &mut local_file)
            .with_context(|| {
                format!("Failed to upload {} to {}", local_path.display(), remote_path)
            })?;

        debug!("Sent {} bytes to {}", bytes, remote_path);
        Ok(bytes)
    }

    fn close(&mut self) -> Result<()> {
        self.stream.quit().context("Failed to send QUIT")?;
        Ok(())
    }
}

/// Directory prefixes of a remote file path, shortest first.
///
/// `public/assets/main/index-main.js` yields `public`, `public/assets`,
/// `public/assets/main`.
pub fn parent_dirs(remote_path: &str) -> Vec<String> {
    let absolute = remote_path.starts_with('/');
    let segments: Vec<&str> = remote_path.split('/').filter(|s| !s.is_empty()).collect();

    let mut dirs = Vec::new();
    let mut current = String::new();
    for segment in segments.iter().take(segments.len().saturating_sub(1)) {
        if absolute || !current.is_empty() {
            current.push('/');
        }
        current.push_str(segment);
        dirs.push(current.clone());
    }
    dirs
}
