use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::shared::MessageResponse;
use crate::models::status::*;
use crate::state::AppState;
use crate::store::TryOnStore;

/// Liveness message.
#[utoipa::path(
    get,
    path = "/",
    tag = "Status",
    operation_id = "root",
    summary = "Liveness check",
    responses(
        (status = 200, description = "Service is up", body = MessageResponse),
    ),
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Saree Virtual Try-On API Ready"))
}

/// Record a client status check.
#[utoipa::path(
    post,
    path = "/status",
    tag = "Status",
    operation_id = "createStatusCheck",
    summary = "Record a status check",
    request_body = CreateStatusCheckRequest,
    responses(
        (status = 200, description = "Status check recorded", body = StatusCheckResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(client_name = %payload.client_name))]
pub async fn create_status_check(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateStatusCheckRequest>,
) -> Result<Json<StatusCheckResponse>, AppError> {
    validate_create_status_check(&payload)?;

    let model = TryOnStore::new(&state.db)
        .insert_status(payload.client_name.trim().to_string())
        .await?;

    Ok(Json(model.into()))
}

/// List recorded status checks.
#[utoipa::path(
    get,
    path = "/status",
    tag = "Status",
    operation_id = "listStatusChecks",
    summary = "List status checks",
    description = "Returns at most 1000 status checks, oldest first.",
    responses(
        (status = 200, description = "Recorded status checks", body = Vec<StatusCheckResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheckResponse>>, AppError> {
    let checks = TryOnStore::new(&state.db).list_status().await?;
    Ok(Json(checks.into_iter().map(Into::into).collect()))
}
