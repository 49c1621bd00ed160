use serde::Deserialize;

use super::shared::validate_short_text;
use crate::error::AppError;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct AddFavoriteRequest {
    pub tryon_id: String,
    #[schema(example = "user-123")]
    pub user_id: String,
}

pub fn validate_add_favorite(payload: &AddFavoriteRequest) -> Result<(), AppError> {
    validate_short_text(&payload.tryon_id, "tryon_id")?;
    validate_short_text(&payload.user_id, "user_id")?;
    Ok(())
}
