// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Decoded forms of `sui` command output.

use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Output of one command, decoded as far as possible.
///
/// Serialises untagged: a JSON document is relayed as-is, anything else as a
/// trimmed string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CliOutput {
    Json(Value),
    Text(String),
}

impl CliOutput {
    /// Decode `raw` as JSON, falling back to the trimmed text.
    ///
    /// Never fails: text output is a degraded representation, not an error.
    pub fn decode(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(value) => CliOutput::Json(value),
            Err(_) => CliOutput::Text(raw.trim().to_string()),
        }
    }
}

/// Why a structured summary could not be produced.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("failed to parse {kind} output: {source}")]
    Parse {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected response format, missing {0}")]
    MissingField(&'static str),
}

/// Summary of the gas coins owned by an address.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BalanceSummary {
    /// Queried address.
    pub address: String,
    /// Sum of the `balance` fields of all coins, in MIST.
    pub total_coins: u64,
    /// Number of coin entries reported.
    pub coin_count: usize,
    /// The client's `result` member, unmodified. Empty when it is `null`.
    #[schema(value_type = Vec<Object>)]
    pub coin_objects: Vec<Value>,
}

impl BalanceSummary {
    /// Build a summary from `sui client gas` output.
    ///
    /// Requires a JSON object carrying a `result` member.
    pub fn from_output(address: &str, raw: &str) -> Result<Self, SummaryError> {
        let decoded: Map<String, Value> =
            serde_json::from_str(raw).map_err(|source| SummaryError::Parse {
                kind: "balance",
                source,
            })?;
        let result = decoded
            .get("result")
            .ok_or(SummaryError::MissingField("result"))?;

        let coins: Vec<&Value> = match result {
            Value::Array(items) => items.iter().collect(),
            Value::Null => Vec::new(),
            other => vec![other],
        };
        let total_coins = coins
            .iter()
            .filter_map(|coin| coin_balance(coin))
            .fold(0u64, u64::saturating_add);

        Ok(Self {
            address: address.to_string(),
            total_coins,
            coin_count: coins.len(),
            coin_objects: match result {
                Value::Null => Vec::new(),
                other => vec![other.clone()],
            },
        })
    }
}

/// `balance` of a coin entry, given either as a number or a decimal string.
fn coin_balance(coin: &Value) -> Option<u64> {
    match coin.get("balance")? {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.parse().ok(),
        _ => None,
    }
}

/// Balance endpoint payload: the summary when available, raw output otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BalanceData {
    Summary(BalanceSummary),
    Output(CliOutput),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_keeps_json_documents() {
        let output = CliOutput::decode("\n{\"envs\": [\"devnet\"]}\n");
        assert_eq!(output, CliOutput::Json(json!({"envs": ["devnet"]})));
    }

    #[test]
    fn decode_trims_plain_text() {
        assert_eq!(
            CliOutput::decode("  active env: testnet \n"),
            CliOutput::Text("active env: testnet".into())
        );
        assert_eq!(CliOutput::decode(""), CliOutput::Text(String::new()));
    }

    #[test]
    fn cli_output_serializes_untagged() {
        let text = serde_json::to_value(CliOutput::Text("X".into())).unwrap();
        assert_eq!(text, json!("X"));

        let doc = serde_json::to_value(CliOutput::Json(json!([1, 2]))).unwrap();
        assert_eq!(doc, json!([1, 2]));
    }

    #[test]
    fn summary_counts_and_sums_coins() {
        let raw = json!({
            "result": [
                {"gasCoinId": "0x1", "mistBalance": 10, "balance": 10},
                {"gasCoinId": "0x2", "balance": "32"},
                {"gasCoinId": "0x3"}
            ]
        })
        .to_string();

        let summary = BalanceSummary::from_output("0xabc", &raw).unwrap();
        assert_eq!(summary.address, "0xabc");
        assert_eq!(summary.coin_count, 3);
        assert_eq!(summary.total_coins, 42);
        assert_eq!(summary.coin_objects.len(), 1);
        assert!(summary.coin_objects[0].is_array());
    }

    #[test]
    fn null_result_counts_no_coins() {
        let summary = BalanceSummary::from_output("0x1", r#"{"result": null}"#).unwrap();
        assert_eq!(summary.coin_count, 0);
        assert_eq!(summary.total_coins, 0);
        assert!(summary.coin_objects.is_empty());
    }

    #[test]
    fn summary_total_saturates() {
        let raw = json!({"result": [{"balance": u64::MAX}, {"balance": 5}]}).to_string();
        let summary = BalanceSummary::from_output("0x1", &raw).unwrap();
        assert_eq!(summary.total_coins, u64::MAX);
    }

    #[test]
    fn summary_requires_result_member() {
        let error = BalanceSummary::from_output("0x1", r#"{"data": []}"#).unwrap_err();
        assert!(matches!(error, SummaryError::MissingField("result")));
        assert_eq!(error.to_string(), "unexpected response format, missing result");
    }

    #[test]
    fn summary_rejects_non_objects() {
        assert!(matches!(
            BalanceSummary::from_output("0x1", "[]"),
            Err(SummaryError::Parse { .. })
        ));
        assert!(matches!(
            BalanceSummary::from_output("0x1", "╭────╮ table"),
            Err(SummaryError::Parse { kind: "balance", .. })
        ));
    }
}
