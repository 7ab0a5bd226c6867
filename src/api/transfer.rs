// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{body::Bytes, extract::State, Json};

use crate::{
    error::ApiError,
    models::{DataResponse, ErrorResponse, TransferRequest},
    state::AppState,
    sui::CliOutput,
};

/// Parse a transfer amount as an unsigned 64-bit decimal.
///
/// Only ASCII digits are accepted; signs and whitespace are rejected.
fn parse_amount(raw: &str) -> Result<u64, String> {
    if !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(format!("parsing {raw:?}: invalid syntax"));
    }
    raw.parse::<u64>()
        .map_err(|error| format!("parsing {raw:?}: {error}"))
}

/// Transfer SUI to a recipient.
///
/// The body is decoded as JSON whatever its `Content-Type` header says.
#[utoipa::path(
    post,
    path = "/api/sui/transfer",
    request_body = TransferRequest,
    tag = "Sui",
    responses(
        (status = 200, description = "Transfer result as {\"data\": ...}"),
        (status = 400, description = "Invalid request body or amount", body = ErrorResponse),
        (status = 500, description = "sui command failed", body = ErrorResponse)
    )
)]
pub async fn transfer_sui(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<DataResponse<CliOutput>>, ApiError> {
    let request: TransferRequest =
        serde_json::from_slice(&body).map_err(|error| ApiError::bad_request(error.to_string()))?;

    if request.recipient.is_empty() {
        return Err(ApiError::bad_request("recipient is required"));
    }
    if request.amount.is_empty() {
        return Err(ApiError::bad_request("amount is required"));
    }
    let amount = parse_amount(&request.amount)
        .map_err(|reason| ApiError::bad_request(format!("invalid amount: {reason}")))?;

    tracing::info!(recipient = %request.recipient, amount, "relaying transfer");

    let data = state
        .service
        .transfer(&request.recipient, amount, request.gas_budget.as_deref())
        .await?;
    Ok(Json(DataResponse::new(data)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sui::{mock::MockRunner, SuiClient, SuiService};
    use axum::http::StatusCode;

    fn state(runner: &std::sync::Arc<MockRunner>) -> AppState {
        AppState::new(SuiService::new(SuiClient::new(runner.clone())))
    }

    fn request(recipient: &str, amount: &str, gas_budget: Option<&str>) -> Bytes {
        let request = TransferRequest {
            recipient: recipient.into(),
            amount: amount.into(),
            gas_budget: gas_budget.map(Into::into),
        };
        Bytes::from(serde_json::to_vec(&request).unwrap())
    }

    #[test]
    fn amount_parsing() {
        assert_eq!(parse_amount("100"), Ok(100));
        assert_eq!(parse_amount("007"), Ok(7));
        assert_eq!(parse_amount("18446744073709551615"), Ok(u64::MAX));
        assert!(parse_amount("18446744073709551616").is_err());
        assert!(parse_amount("abc").unwrap_err().contains("invalid syntax"));
        assert!(parse_amount("+5").is_err());
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("1.5").is_err());
    }

    #[tokio::test]
    async fn invalid_amount_is_a_client_error() {
        let runner = MockRunner::stdout("{}");

        let error = transfer_sui(State(state(&runner)), request("0xabc", "abc", None))
            .await
            .unwrap_err();
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert!(error.message.starts_with("invalid amount"));
        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn missing_fields_are_rejected() {
        let runner = MockRunner::stdout("{}");

        let error = transfer_sui(State(state(&runner)), request("", "1", None))
            .await
            .unwrap_err();
        assert_eq!(error.message, "recipient is required");

        let error = transfer_sui(State(state(&runner)), request("0xabc", "", None))
            .await
            .unwrap_err();
        assert_eq!(error.message, "amount is required");
    }

    #[tokio::test]
    async fn undecodable_body_is_a_client_error() {
        let runner = MockRunner::stdout("{}");

        for body in ["", "{not json", r#"{"recipient": "0xabc", "amount": 100}"#] {
            let error = transfer_sui(State(state(&runner)), Bytes::from(body))
                .await
                .unwrap_err();
            assert_eq!(error.status, StatusCode::BAD_REQUEST, "{body}");
            assert!(!error.message.is_empty(), "{body}");
        }
        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn amount_is_forwarded_in_canonical_form() {
        let runner = MockRunner::stdout("Transaction Digest: Dg5t\n");

        let Json(response) = transfer_sui(
            State(state(&runner)),
            request("0xabc", "0100", Some("5000")),
        )
        .await
        .unwrap();

        assert_eq!(response.data, CliOutput::Text("Transaction Digest: Dg5t".into()));
        assert_eq!(
            runner.calls(),
            vec![vec![
                "client",
                "transfer-sui",
                "--to",
                "0xabc",
                "--amount",
                "100",
                "--gas-budget",
                "5000"
            ]]
        );
    }
}
