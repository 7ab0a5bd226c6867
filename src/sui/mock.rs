// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Recording stand-in for the `sui` executable, used by tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::client::{CommandRunner, SuiClientError};

#[derive(Debug, Clone)]
enum Reply {
    Stdout(String),
    Exit { code: i32, stderr: String },
}

/// Returns a canned reply and remembers every argument vector it was given.
#[derive(Debug)]
pub struct MockRunner {
    reply: Reply,
    calls: Mutex<Vec<Vec<String>>>,
}

impl MockRunner {
    /// Succeed with `stdout` on every call.
    pub fn stdout(stdout: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Stdout(stdout.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Fail as if the program exited with `code` after writing `stderr`.
    pub fn failing(code: i32, stderr: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Exit {
                code,
                stderr: stderr.into(),
            },
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn run(&self, args: &[String]) -> Result<String, SuiClientError> {
        self.calls.lock().unwrap().push(args.to_vec());
        match &self.reply {
            Reply::Stdout(stdout) => Ok(stdout.clone()),
            Reply::Exit { code, stderr } => Err(SuiClientError::Failed {
                code: Some(*code),
                stderr: stderr.clone(),
            }),
        }
    }
}
