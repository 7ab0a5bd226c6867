// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response bodies of the REST API. Every endpoint answers with
//! one of two envelopes:
//!
//! - `{"data": ...}` on success, carrying decoded JSON or trimmed text
//! - `{"error": "..."}` on failure
//!
//! The version and health endpoints use their own flat bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Success envelope.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Failure envelope.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VersionResponse {
    /// Output of `sui --version`, trimmed.
    pub version: String,
}

/// Body of `POST /api/sui/transfer`.
///
/// Missing string fields deserialize as empty and are rejected by the handler,
/// so the caller gets a field-specific message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct TransferRequest {
    /// Destination address.
    #[serde(default)]
    pub recipient: String,
    /// Amount in MIST as a decimal string; must fit in an unsigned 64-bit integer.
    #[serde(default)]
    #[schema(example = "1000000")]
    pub amount: String,
    /// Gas budget forwarded to the client when non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_budget: Option<String>,
}
