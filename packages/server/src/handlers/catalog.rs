use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{info, instrument};

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::catalog::*;
use crate::state::AppState;
use crate::store::TryOnStore;

/// Add a saree to the catalog.
#[utoipa::path(
    post,
    path = "/saree-catalog",
    tag = "Catalog",
    operation_id = "createSareeItem",
    summary = "Add a catalog item",
    request_body = CreateSareeItemRequest,
    responses(
        (status = 200, description = "Catalog item created", body = SareeItemResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(name = %payload.name, category = %payload.category))]
pub async fn create_saree_item(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateSareeItemRequest>,
) -> Result<Json<SareeItemResponse>, AppError> {
    validate_create_saree_item(&payload)?;

    let model = TryOnStore::new(&state.db)
        .insert_catalog_item(payload.into())
        .await?;
    info!(id = %model.id, "Catalog item created");

    Ok(Json(model.into()))
}

/// List the whole catalog.
#[utoipa::path(
    get,
    path = "/saree-catalog",
    tag = "Catalog",
    operation_id = "listSareeCatalog",
    summary = "List catalog items",
    responses(
        (status = 200, description = "Catalog items", body = Vec<SareeItemResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_saree_catalog(
    State(state): State<AppState>,
) -> Result<Json<Vec<SareeItemResponse>>, AppError> {
    let items = TryOnStore::new(&state.db).list_catalog(None).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

/// List catalog items of one category.
#[utoipa::path(
    get,
    path = "/saree-catalog/{category}",
    tag = "Catalog",
    operation_id = "listSareeCatalogByCategory",
    summary = "List catalog items by category",
    description = "Unknown categories yield an empty list.",
    params(("category" = String, Path, description = "Exact category name")),
    responses(
        (status = 200, description = "Catalog items in the category", body = Vec<SareeItemResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_saree_catalog_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<Vec<SareeItemResponse>>, AppError> {
    let items = TryOnStore::new(&state.db)
        .list_catalog(Some(&category))
        .await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}
