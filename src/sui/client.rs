// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Sui CLI client: runs the configured `sui` executable and captures its output.

use std::{
    path::PathBuf,
    process::Stdio,
    sync::Arc,
    time::Duration,
};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use super::command::SuiCommand;
use crate::config::SuiConfig;

/// Executes one `sui` invocation and returns its standard output.
///
/// Implementations must not trim or otherwise rewrite the captured text.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, args: &[String]) -> Result<String, SuiClientError>;
}

/// Runs the real executable as a child process.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    executable: PathBuf,
    timeout: Option<Duration>,
}

impl ProcessRunner {
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            timeout: None,
        }
    }

    /// Kill the child and fail the request once `timeout` elapses.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(&self, args: &[String]) -> Result<String, SuiClientError> {
        debug!(program = %self.executable.display(), ?args, "running sui command");

        let mut command = Command::new(&self.executable);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, command.output())
                .await
                .map_err(|_| SuiClientError::TimedOut(limit))?,
            None => command.output().await,
        }
        .map_err(|source| SuiClientError::Spawn { source })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            warn!(
                program = %self.executable.display(),
                ?args,
                code = ?output.status.code(),
                "sui command exited unsuccessfully"
            );
            return Err(SuiClientError::Failed {
                code: output.status.code(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Thin client over a [`CommandRunner`], one method per relayed subcommand.
#[derive(Clone)]
pub struct SuiClient {
    runner: Arc<dyn CommandRunner>,
}

impl SuiClient {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    /// Build a client that spawns the executable named in `config`.
    pub fn from_config(config: &SuiConfig) -> Self {
        let runner = ProcessRunner::new(config.executable()).with_timeout(config.command_timeout());
        Self::new(Arc::new(runner))
    }

    /// Run `command` once and return its raw standard output.
    pub async fn execute(&self, command: &SuiCommand<'_>) -> Result<String, SuiClientError> {
        let args = command.args();
        self.runner.run(&args).await.inspect_err(|error| {
            debug!(command = command.name(), %error, "sui command failed");
        })
    }

    /// `sui --version`, whitespace trimmed.
    pub async fn version(&self) -> Result<String, SuiClientError> {
        let output = self.execute(&SuiCommand::Version).await?;
        Ok(output.trim().to_string())
    }

    pub async fn gas(&self, address: &str) -> Result<String, SuiClientError> {
        self.execute(&SuiCommand::Gas { address }).await
    }

    pub async fn objects(&self, address: &str) -> Result<String, SuiClientError> {
        self.execute(&SuiCommand::Objects { address }).await
    }

    pub async fn active_validators(&self) -> Result<String, SuiClientError> {
        self.execute(&SuiCommand::ActiveValidators).await
    }

    pub async fn envs(&self) -> Result<String, SuiClientError> {
        self.execute(&SuiCommand::Envs).await
    }

    pub async fn transaction(&self, digest: &str) -> Result<String, SuiClientError> {
        self.execute(&SuiCommand::Transaction { digest }).await
    }

    /// Transfer `amount` MIST to `recipient`.
    ///
    /// `gas_budget` is forwarded only when it is present and non-empty.
    pub async fn transfer_sui(
        &self,
        recipient: &str,
        amount: u64,
        gas_budget: Option<&str>,
    ) -> Result<String, SuiClientError> {
        self.execute(&SuiCommand::TransferSui {
            recipient,
            amount,
            gas_budget,
        })
        .await
    }
}

/// Errors raised while running the `sui` executable.
#[derive(Debug, thiserror::Error)]
pub enum SuiClientError {
    #[error("error executing sui command: {source}\nStderr: ")]
    Spawn {
        #[source]
        source: std::io::Error,
    },

    #[error("error executing sui command: {}\nStderr: {stderr}", exit_reason(.code))]
    Failed { code: Option<i32>, stderr: String },

    #[error("error executing sui command: timed out after {0:?}\nStderr: ")]
    TimedOut(Duration),
}

fn exit_reason(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    }
}
