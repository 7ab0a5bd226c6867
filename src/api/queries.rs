// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Read-only Sui endpoints.
//!
//! Each handler runs one `sui` command. The identifier routes are also
//! registered with an empty trailing segment so that `/balance/` and friends
//! answer 400 instead of 404.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::ApiError,
    models::{DataResponse, ErrorResponse, VersionResponse},
    state::AppState,
    sui::{BalanceData, CliOutput},
};

const ADDRESS_REQUIRED: &str = "address is required";
const TRANSACTION_ID_REQUIRED: &str = "transaction ID is required";

/// Reject an empty path identifier with `message`.
fn required<'a>(value: &'a str, message: &str) -> Result<&'a str, ApiError> {
    if value.is_empty() {
        Err(ApiError::bad_request(message))
    } else {
        Ok(value)
    }
}

#[utoipa::path(
    get,
    path = "/api/sui/version",
    tag = "Sui",
    responses(
        (status = 200, description = "Client version", body = VersionResponse),
        (status = 500, description = "sui command failed", body = ErrorResponse)
    )
)]
pub async fn get_version(State(state): State<AppState>) -> Result<Json<VersionResponse>, ApiError> {
    let version = state.service.formatted_version().await?;
    Ok(Json(VersionResponse { version }))
}

/// Gas coins owned by an address.
///
/// Returns a balance summary when the client prints a JSON object with a
/// `result` member, otherwise the decoded output or its trimmed text.
#[utoipa::path(
    get,
    path = "/api/sui/balance/{address}",
    tag = "Sui",
    params(("address" = String, Path, description = "Owner address")),
    responses(
        (status = 200, description = "Balance as {\"data\": ...}"),
        (status = 400, description = "Address missing", body = ErrorResponse),
        (status = 500, description = "sui command failed", body = ErrorResponse)
    )
)]
pub async fn get_balance(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<DataResponse<BalanceData>>, ApiError> {
    balance(&state, &address).await
}

pub async fn get_balance_without_address(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<BalanceData>>, ApiError> {
    balance(&state, "").await
}

async fn balance(
    state: &AppState,
    address: &str,
) -> Result<Json<DataResponse<BalanceData>>, ApiError> {
    let address = required(address, ADDRESS_REQUIRED)?;
    let data = state.service.balance(address).await?;
    Ok(Json(DataResponse::new(data)))
}

#[utoipa::path(
    get,
    path = "/api/sui/objects/{address}",
    tag = "Sui",
    params(("address" = String, Path, description = "Owner address")),
    responses(
        (status = 200, description = "Owned objects as {\"data\": ...}"),
        (status = 400, description = "Address missing", body = ErrorResponse),
        (status = 500, description = "sui command failed", body = ErrorResponse)
    )
)]
pub async fn get_objects(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<DataResponse<CliOutput>>, ApiError> {
    objects(&state, &address).await
}

pub async fn get_objects_without_address(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<CliOutput>>, ApiError> {
    objects(&state, "").await
}

async fn objects(
    state: &AppState,
    address: &str,
) -> Result<Json<DataResponse<CliOutput>>, ApiError> {
    let address = required(address, ADDRESS_REQUIRED)?;
    let data = state.service.objects(address).await?;
    Ok(Json(DataResponse::new(data)))
}

#[utoipa::path(
    get,
    path = "/api/sui/validators",
    tag = "Sui",
    responses(
        (status = 200, description = "Active validators as {\"data\": ...}"),
        (status = 500, description = "sui command failed", body = ErrorResponse)
    )
)]
pub async fn get_active_validators(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<CliOutput>>, ApiError> {
    let data = state.service.active_validators().await?;
    Ok(Json(DataResponse::new(data)))
}

#[utoipa::path(
    get,
    path = "/api/sui/network",
    tag = "Sui",
    responses(
        (status = 200, description = "Client environments as {\"data\": ...}"),
        (status = 500, description = "sui command failed", body = ErrorResponse)
    )
)]
pub async fn get_network(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<CliOutput>>, ApiError> {
    let data = state.service.network().await?;
    Ok(Json(DataResponse::new(data)))
}

#[utoipa::path(
    get,
    path = "/api/sui/transaction/{txid}",
    tag = "Sui",
    params(("txid" = String, Path, description = "Transaction digest")),
    responses(
        (status = 200, description = "Transaction details as {\"data\": ...}"),
        (status = 400, description = "Transaction ID missing", body = ErrorResponse),
        (status = 500, description = "sui command failed", body = ErrorResponse)
    )
)]
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(txid): Path<String>,
) -> Result<Json<DataResponse<CliOutput>>, ApiError> {
    transaction(&state, &txid).await
}

pub async fn get_transaction_without_id(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<CliOutput>>, ApiError> {
    transaction(&state, "").await
}

async fn transaction(
    state: &AppState,
    txid: &str,
) -> Result<Json<DataResponse<CliOutput>>, ApiError> {
    let txid = required(txid, TRANSACTION_ID_REQUIRED)?;
    let data = state.service.transaction(txid).await?;
    Ok(Json(DataResponse::new(data)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sui::{mock::MockRunner, SuiClient, SuiService};
    use axum::http::StatusCode;
    use serde_json::json;

    fn state(runner: &std::sync::Arc<MockRunner>) -> AppState {
        AppState::new(SuiService::new(SuiClient::new(runner.clone())))
    }

    #[tokio::test]
    async fn empty_address_is_rejected_before_running_anything() {
        let runner = MockRunner::stdout("{}");

        let error = get_balance_without_address(State(state(&runner)))
            .await
            .unwrap_err();
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
        assert_eq!(error.message, "address is required");

        let error = get_objects(State(state(&runner)), Path(String::new()))
            .await
            .unwrap_err();
        assert_eq!(error.message, "address is required");

        let error = get_transaction_without_id(State(state(&runner)))
            .await
            .unwrap_err();
        assert_eq!(error.message, "transaction ID is required");

        assert!(runner.calls().is_empty());
    }

    #[tokio::test]
    async fn version_handler_wraps_trimmed_version() {
        let runner = MockRunner::stdout("sui 1.45.0\n");

        let Json(response) = get_version(State(state(&runner))).await.unwrap();
        assert_eq!(response.version, "sui 1.45.0");
    }

    #[tokio::test]
    async fn network_handler_relays_json() {
        let runner = MockRunner::stdout(r#"[[{"alias": "testnet"}], "testnet"]"#);

        let Json(response) = get_network(State(state(&runner))).await.unwrap();
        assert_eq!(
            response.data,
            CliOutput::Json(json!([[{"alias": "testnet"}], "testnet"]))
        );
    }

    #[tokio::test]
    async fn failed_command_becomes_internal_error() {
        let runner = MockRunner::failing(2, "no such transaction");

        let error = get_transaction(State(state(&runner)), Path("Dg5t".into()))
            .await
            .unwrap_err();
        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(error.message.contains("no such transaction"));
    }
}
