use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{info, instrument};

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::favorite::*;
use crate::models::shared::MessageResponse;
use crate::models::tryon::TryOnResultResponse;
use crate::state::AppState;
use crate::store::{FavoriteUpdate, TryOnStore};

/// Mark a result as favorite.
#[utoipa::path(
    post,
    path = "/favorites",
    tag = "Favorites",
    operation_id = "addFavorite",
    summary = "Add a favorite",
    description = "Marks the result as favorite and assigns it to `user_id`.",
    request_body = AddFavoriteRequest,
    responses(
        (status = 200, description = "Favorite added", body = MessageResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Result not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(tryon_id = %payload.tryon_id, user_id = %payload.user_id))]
pub async fn add_favorite(
    State(state): State<AppState>,
    AppJson(payload): AppJson<AddFavoriteRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    validate_add_favorite(&payload)?;

    let update = TryOnStore::new(&state.db)
        .set_favorite(payload.tryon_id.trim(), true, Some(payload.user_id.trim()))
        .await?;
    if update == FavoriteUpdate::NotFound {
        return Err(AppError::NotFound("Try-on result not found".into()));
    }
    info!("Favorite added");

    Ok(Json(MessageResponse::new("Added to favorites successfully")))
}

/// List a user's favorites.
#[utoipa::path(
    get,
    path = "/favorites/{id}",
    tag = "Favorites",
    operation_id = "listFavorites",
    summary = "List favorites of a user",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "Favorited results", body = Vec<TryOnResultResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<TryOnResultResponse>>, AppError> {
    let results = TryOnStore::new(&state.db)
        .list_favorites_for_user(&user_id)
        .await?;
    Ok(Json(results.into_iter().map(Into::into).collect()))
}

/// Clear the favorite flag of a result.
#[utoipa::path(
    delete,
    path = "/favorites/{id}",
    tag = "Favorites",
    operation_id = "removeFavorite",
    summary = "Remove a favorite",
    params(("id" = String, Path, description = "Try-on result ID")),
    responses(
        (status = 200, description = "Favorite removed", body = MessageResponse),
        (status = 404, description = "Result not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path(tryon_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let update = TryOnStore::new(&state.db)
        .set_favorite(&tryon_id, false, None)
        .await?;
    if update == FavoriteUpdate::NotFound {
        return Err(AppError::NotFound("Try-on result not found".into()));
    }

    Ok(Json(MessageResponse::new("Removed from favorites successfully")))
}
