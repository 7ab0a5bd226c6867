// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Higher-level Sui operations built on [`SuiClient`].
//!
//! Every method performs exactly one command invocation. Invocation failures
//! propagate unchanged; everything after that is best effort:
//!
//! 1. an optional structured summary is attempted on the captured output,
//! 2. if that fails the output is decoded as JSON,
//! 3. if that fails too the trimmed text is returned.
//!
//! Neither fallback is an error.

use serde_json::Value;
use tracing::debug;

use super::client::{SuiClient, SuiClientError};
use super::types::{BalanceData, BalanceSummary, CliOutput, SummaryError};

pub struct SuiService {
    client: SuiClient,
}

impl SuiService {
    pub fn new(client: SuiClient) -> Self {
        Self { client }
    }

    /// Client version string, whitespace trimmed.
    pub async fn formatted_version(&self) -> Result<String, SuiClientError> {
        let version = self.client.version().await?;
        Ok(version.trim().to_string())
    }

    /// Gas coins owned by `address`, summarised when the output allows it.
    pub async fn balance(&self, address: &str) -> Result<BalanceData, SuiClientError> {
        let output = self.client.gas(address).await?;
        match BalanceSummary::from_output(address, &output) {
            Ok(summary) => Ok(BalanceData::Summary(summary)),
            Err(error) => {
                debug!(%address, %error, "balance summary unavailable, relaying raw output");
                Ok(BalanceData::Output(CliOutput::decode(&output)))
            }
        }
    }

    /// Objects owned by `address`.
    pub async fn objects(&self, address: &str) -> Result<CliOutput, SuiClientError> {
        let output = self.client.objects(address).await?;
        Ok(enrich("objects", &output, parse_json("objects")))
    }

    pub async fn active_validators(&self) -> Result<CliOutput, SuiClientError> {
        let output = self.client.active_validators().await?;
        Ok(CliOutput::decode(&output))
    }

    /// Configured environments and the active one.
    pub async fn network(&self) -> Result<CliOutput, SuiClientError> {
        let output = self.client.envs().await?;
        Ok(CliOutput::decode(&output))
    }

    /// Details of the transaction identified by `digest`.
    pub async fn transaction(&self, digest: &str) -> Result<CliOutput, SuiClientError> {
        let output = self.client.transaction(digest).await?;
        Ok(enrich("transaction", &output, parse_json("transaction")))
    }

    /// Transfer `amount` MIST to `recipient` and relay the client's result.
    pub async fn transfer(
        &self,
        recipient: &str,
        amount: u64,
        gas_budget: Option<&str>,
    ) -> Result<CliOutput, SuiClientError> {
        let output = self
            .client
            .transfer_sui(recipient, amount, gas_budget)
            .await?;
        Ok(CliOutput::decode(&output))
    }
}

/// Apply `summarize` to `output`, swallowing its failure.
fn enrich<F>(kind: &'static str, output: &str, summarize: F) -> CliOutput
where
    F: FnOnce(&str) -> Result<Value, SummaryError>,
{
    match summarize(output) {
        Ok(value) => CliOutput::Json(value),
        Err(error) => {
            debug!(kind, %error, "structured summary unavailable, relaying raw output");
            CliOutput::decode(output)
        }
    }
}

fn parse_json(kind: &'static str) -> impl FnOnce(&str) -> Result<Value, SummaryError> {
    move |raw| serde_json::from_str(raw).map_err(|source| SummaryError::Parse { kind, source })
}
