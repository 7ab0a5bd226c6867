// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Configuration is read from an optional TOML file and then overridden by
//! command-line flags, each of which can also be given through the
//! environment.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `SUI_RELAY_CONFIG` | Path to the TOML configuration file | none |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `SUI_EXECUTABLE_PATH` | `sui` binary to run | `sui` (looked up in `PATH`) |
//! | `SUI_COMMAND_TIMEOUT_SECS` | Kill a command after this many seconds | no timeout |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |
//!
//! ## File Layout
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 9000
//!
//! [sui]
//! executable_path = "/usr/local/bin/sui"
//! command_timeout_secs = 60
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;

pub const CONFIG_FILE_ENV: &str = "SUI_RELAY_CONFIG";
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const SUI_EXECUTABLE_ENV: &str = "SUI_EXECUTABLE_PATH";
pub const COMMAND_TIMEOUT_ENV: &str = "SUI_COMMAND_TIMEOUT_SECS";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Program name used when no executable path is configured.
///
/// Resolved through the `PATH` of the server process.
pub const DEFAULT_SUI_EXECUTABLE: &str = "sui";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub sui: SuiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// `host:port` in a form accepted by `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            // Bare IPv6 literal.
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiConfig {
    #[serde(default)]
    pub executable_path: Option<PathBuf>,
    #[serde(default)]
    pub command_timeout_secs: Option<u64>,
}

impl SuiConfig {
    /// Executable to spawn; an unset or empty path means [`DEFAULT_SUI_EXECUTABLE`].
    pub fn executable(&self) -> PathBuf {
        match &self.executable_path {
            Some(path) if !path.as_os_str().is_empty() => path.clone(),
            _ => PathBuf::from(DEFAULT_SUI_EXECUTABLE),
        }
    }

    /// Per-command timeout; zero disables it.
    pub fn command_timeout(&self) -> Option<Duration> {
        self.command_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

/// Values supplied on the command line or through the environment.
///
/// `None` leaves the file (or default) value in place.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub executable_path: Option<PathBuf>,
    pub command_timeout_secs: Option<u64>,
}

impl Config {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Read `path` if given, otherwise start from defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(path) = overrides.executable_path {
            self.sui.executable_path = Some(path);
        }
        if let Some(secs) = overrides.command_timeout_secs {
            self.sui.command_timeout_secs = Some(secs);
        }
        self
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}
