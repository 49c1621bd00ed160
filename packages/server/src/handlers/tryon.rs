use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{info, instrument};

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::tryon::*;
use crate::state::AppState;
use crate::store::TryOnStore;

/// Generate a try-on image.
#[utoipa::path(
    post,
    path = "/virtual-tryon",
    tag = "Try-On",
    operation_id = "virtualTryOn",
    summary = "Generate a virtual try-on",
    description = "Builds a prompt from the uploaded saree components or the referenced catalog \
        item and renders the saree on a model. Without a configured credential a placeholder \
        image is returned. The result is stored and can be fetched or favorited by its id.",
    request_body = TryOnRequest,
    responses(
        (status = 200, description = "Try-on generated", body = TryOnResponse),
        (status = 400, description = "Invalid pose or blouse style (VALIDATION_ERROR)", body = ErrorBody),
        (status = 500, description = "Generation failed (GENERATION_FAILED, INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(session_id = ?payload.session_id))]
pub async fn virtual_tryon(
    State(state): State<AppState>,
    AppJson(payload): AppJson<TryOnRequest>,
) -> Result<Json<TryOnResponse>, AppError> {
    let outcome = state.orchestrator.run(&state.db, payload).await?;
    let result = outcome.result;
    info!(id = %result.id, source = ?outcome.source, "Try-on completed");

    Ok(Json(TryOnResponse {
        id: result.id,
        result_image_base64: result.result_image_base64,
        pose_style: result.pose_style,
        blouse_style: result.blouse_style,
        message: "Virtual try-on completed successfully".into(),
    }))
}

/// Fetch the image of a stored result.
#[utoipa::path(
    get,
    path = "/tryon/{tryon_id}/base64",
    tag = "Try-On",
    operation_id = "getTryOnImage",
    summary = "Get a try-on image",
    params(("tryon_id" = String, Path, description = "Try-on result ID")),
    responses(
        (status = 200, description = "Stored image", body = TryOnImageResponse),
        (status = 404, description = "Result not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_tryon_image(
    State(state): State<AppState>,
    Path(tryon_id): Path<String>,
) -> Result<Json<TryOnImageResponse>, AppError> {
    let result = TryOnStore::new(&state.db)
        .find_result_by_id(&tryon_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Try-on result not found".into()))?;

    Ok(Json(result.into()))
}
