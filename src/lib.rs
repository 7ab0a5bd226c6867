// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Sui Relay Server - HTTP front for the `sui` command-line client
//!
//! Each API request runs exactly one `sui` subcommand, then relays its output
//! as `{"data": ...}` (decoded JSON, or trimmed text when the output is not
//! JSON) or `{"error": ...}`.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `sui` - Command construction, process execution and output decoding
//! - `config` - TOML file + flag/environment configuration
//! - `logging` - Tracing subscriber setup

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod state;
pub mod sui;
