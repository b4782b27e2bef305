use std::fmt;

use crate::constants::{FTP_DEFAULT_PORT, FTP_HOST_VAR, FTP_PASS_VAR, FTP_USER_VAR};

/// FTP credentials read once at startup.
///
/// Missing variables are kept as empty strings and passed through to the
/// connection attempt, which then fails at connect or login time.
#[derive(Clone, PartialEq, Eq)]
pub struct FtpCredentials {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
}

impl FtpCredentials {
    /// Build credentials from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build credentials from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_host = lookup(FTP_HOST_VAR).unwrap_or_default();
        let (host, port) = split_host_port(raw_host.trim());

        Self {
            host,
            port,
            user: lookup(FTP_USER_VAR).unwrap_or_default(),
            password: lookup(FTP_PASS_VAR).unwrap_or_default(),
        }
    }

    /// `host:port` address of the control connection
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for FtpCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FtpCredentials")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<REDACTED>")
            .finish()
    }
}

/// Split an optional `:port` suffix off a host value.
///
/// A suffix that is not a valid port is left in the host so the failure
/// surfaces at connect time.
fn split_host_port(raw: &str) -> (String, u16) {
    if let Some((host, port)) = raw.rsplit_once(':') {
        if let Ok(port) = port.parse::<u16>() {
            return (host.to_string(), port);
        }
    }
    (raw.to_string(), FTP_DEFAULT_PORT)
}
