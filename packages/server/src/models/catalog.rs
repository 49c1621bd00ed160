use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::shared::validate_short_text;
use crate::error::AppError;
use crate::store::NewSareeItem;

/// Request body for adding a saree to the catalog.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateSareeItemRequest {
    #[schema(example = "Kanjivaram Silk")]
    pub name: String,
    #[schema(example = "Pure silk with zari work")]
    pub description: String,
    /// Reference image, base64-encoded.
    pub image_base64: String,
    #[schema(example = "traditional")]
    pub category: String,
    #[schema(example = "maroon")]
    pub color: String,
    #[schema(example = "temple border")]
    pub pattern: String,
}

pub fn validate_create_saree_item(payload: &CreateSareeItemRequest) -> Result<(), AppError> {
    validate_short_text(&payload.name, "name")?;
    validate_short_text(&payload.category, "category")?;
    Ok(())
}

impl From<CreateSareeItemRequest> for NewSareeItem {
    fn from(r: CreateSareeItemRequest) -> Self {
        Self {
            name: r.name.trim().to_string(),
            description: r.description,
            image_base64: r.image_base64,
            category: r.category.trim().to_string(),
            color: r.color,
            pattern: r.pattern,
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct SareeItemResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_base64: String,
    pub category: String,
    pub color: String,
    pub pattern: String,
    pub timestamp: DateTime<Utc>,
}

impl From<crate::entity::saree_item::Model> for SareeItemResponse {
    fn from(m: crate::entity::saree_item::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            image_base64: m.image_base64,
            category: m.category,
            color: m.color,
            pattern: m.pattern,
            timestamp: m.created_at,
        }
    }
}
