// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{ErrorResponse, TransferRequest, VersionResponse},
    state::AppState,
    sui::BalanceSummary,
};

pub mod health;
pub mod queries;
pub mod transfer;

pub fn router(state: AppState) -> Router {
    let sui_routes = Router::new()
        .route("/version", get(queries::get_version))
        .route("/balance/", get(queries::get_balance_without_address))
        .route("/balance/{address}", get(queries::get_balance))
        .route("/objects/", get(queries::get_objects_without_address))
        .route("/objects/{address}", get(queries::get_objects))
        .route("/validators", get(queries::get_active_validators))
        .route("/network", get(queries::get_network))
        .route("/transaction/", get(queries::get_transaction_without_id))
        .route("/transaction/{txid}", get(queries::get_transaction))
        .route("/transfer", post(transfer::transfer_sui))
        .with_state(state);

    Router::new()
        .route("/health", get(health::health))
        .nest("/api/sui", sui_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        queries::get_version,
        queries::get_balance,
        queries::get_objects,
        queries::get_active_validators,
        queries::get_network,
        queries::get_transaction,
        transfer::transfer_sui
    ),
    components(
        schemas(
            health::HealthResponse,
            VersionResponse,
            ErrorResponse,
            TransferRequest,
            BalanceSummary
        )
    ),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Sui", description = "Queries and transfers relayed to the sui client")
    )
)]
struct ApiDoc;
