// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Integration with the `sui` command-line client.
//!
//! This module provides:
//! - Argument construction for each relayed subcommand
//! - Process execution with captured stdout/stderr
//! - Best-effort decoding of the client's output

pub mod client;
pub mod command;
pub mod service;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{CommandRunner, ProcessRunner, SuiClient, SuiClientError};
pub use command::SuiCommand;
pub use service::SuiService;
pub use types::*;
