//! Test utilities for the asset uploader
//!
//! This module provides on-disk bundle fixtures and fake FTP sessions
//! for use across all unit test modules.

#![cfg(test)]

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a temporary project with the given files under `dist/assets`
pub fn create_bundle_dir(file_names: &[&str]) -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let assets = temp_dir.path().join("dist/assets");
    fs::create_dir_all(&assets)?;

    for name in file_names {
        fs::write(assets.join(name), format!("/* {} */", name))?;
    }

    Ok(temp_dir)
}

/// Paths as the default matcher reports them, relative to the project root
pub fn bundle_paths(file_names: &[&str]) -> Vec<PathBuf> {
    file_names
        .iter()
        .map(|name| PathBuf::from("dist/assets").join(name))
        .collect()
}

/// Fake FTP sessions that record what happened to them
pub mod fakes {
    use anyhow::{anyhow, bail, Result};
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};

    use crate::cloud::ftp::{FtpConnector, FtpSession};
    use crate::config::FtpCredentials;

    #[derive(Default)]
    struct LogInner {
        connects: usize,
        uploads: Vec<(PathBuf, String)>,
        upload_attempts: usize,
        closes: usize,
    }

    /// Shared record of session activity
    #[derive(Clone, Default)]
    pub struct SessionLog {
        inner: Arc<Mutex<LogInner>>,
    }

    impl SessionLog {
        pub fn connect_count(&self) -> usize {
            self.inner.lock().unwrap().connects
        }

        pub fn close_count(&self) -> usize {
            self.inner.lock().unwrap().closes
        }

        pub fn upload_attempts(&self) -> usize {
            self.inner.lock().unwrap().upload_attempts
        }

        /// Successful uploads as `(local, remote)` pairs
        pub fn uploads(&self) -> Vec<(PathBuf, String)> {
            self.inner.lock().unwrap().uploads.clone()
        }
    }

    /// Session that records uploads and can be told to fail
    pub struct RecordingSession {
        log: SessionLog,
        refuse_login: bool,
        fail_on_attempt: Option<usize>,
        fail_close: bool,
    }

    impl RecordingSession {
        pub fn new(log: SessionLog) -> Self {
            Self {
                log,
                refuse_login: false,
                fail_on_attempt: None,
                fail_close: false,
            }
        }

        /// Reject the login like a server answering 530
        pub fn refusing_login(mut self) -> Self {
            self.refuse_login = true;
            self
        }

        /// Fail the n-th upload attempt (1-based)
        pub fn failing_upload(mut self, attempt: usize) -> Self {
            self.fail_on_attempt = Some(attempt);
            self
        }

        pub fn failing_close(mut self) -> Self {
            self.fail_close = true;
            self
        }
    }

    impl FtpSession for RecordingSession {
        fn login(&mut self, credentials: &FtpCredentials) -> Result<()> {
            if self.refuse_login {
                bail!(
                    "530 Login incorrect for {} with PASS {}",
                    credentials.user,
                    credentials.password
                );
            }
            Ok(())
        }

        fn upload(&mut self, local_path: &Path, remote_path: &str) -> Result<u64> {
            let mut inner = self.log.inner.lock().unwrap();
            inner.upload_attempts += 1;
            if self.fail_on_attempt == Some(inner.upload_attempts) {
                bail!("553 Could not create file {}", remote_path);
            }
            inner
                .uploads
                .push((local_path.to_path_buf(), remote_path.to_string()));
            Ok(0)
        }

        fn close(&mut self) -> Result<()> {
            self.log.inner.lock().unwrap().closes += 1;
            if self.fail_close {
                bail!("421 Connection closed by server");
            }
            Ok(())
        }
    }

    /// Connector handing out `RecordingSession`s that share one log
    #[derive(Clone, Default)]
    pub struct RecordingConnector {
        pub log: SessionLog,
        unreachable: bool,
        refuse_login: bool,
        fail_on_attempt: Option<usize>,
    }

    impl RecordingConnector {
        pub fn new() -> Self {
            Self::default()
        }

        /// Every connection attempt fails before a session exists
        pub fn unreachable() -> Self {
            Self {
                unreachable: true,
                ..Self::default()
            }
        }

        /// Sessions open but reject the login
        pub fn refusing() -> Self {
            Self {
                refuse_login: true,
                ..Self::default()
            }
        }

        /// Sessions fail their n-th upload attempt
        pub fn failing_upload(attempt: usize) -> Self {
            Self {
                fail_on_attempt: Some(attempt),
                ..Self::default()
            }
        }
    }

    impl FtpConnector for RecordingConnector {
        fn connect(&self, credentials: &FtpCredentials) -> Result<Box<dyn FtpSession>> {
            self.log.inner.lock().unwrap().connects += 1;
            if self.unreachable {
                return Err(anyhow!("Connection refused (os error 111) to {}", credentials.address()));
            }

            let mut session = RecordingSession::new(self.log.clone());
            if self.refuse_login {
                session = session.refusing_login();
            }
            if let Some(attempt) = self.fail_on_attempt {
                session = session.failing_upload(attempt);
            }
            Ok(Box::new(session))
        }
    }
}
