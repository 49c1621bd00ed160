use axum::extract::DefaultBodyLimit;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::config::AppConfig;
use crate::handlers::{catalog, favorite, status, tryon};
use crate::state::AppState;

pub fn api_routes(config: &AppConfig) -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(status::root))
        .routes(routes!(
            status::create_status_check,
            status::list_status_checks
        ))
        .routes(routes!(
            catalog::create_saree_item,
            catalog::list_saree_catalog
        ))
        .routes(routes!(catalog::list_saree_catalog_by_category))
        .routes(routes!(tryon::virtual_tryon))
        .routes(routes!(tryon::get_tryon_image))
        .routes(routes!(favorite::add_favorite))
        .routes(routes!(
            favorite::list_favorites,
            favorite::remove_favorite
        ))
        // Try-on and catalog bodies carry base64 images.
        .layer(DefaultBodyLimit::max(config.server.max_body_bytes))
}
