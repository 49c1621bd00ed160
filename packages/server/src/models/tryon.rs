use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tryon::style::{BlouseStyle, Pose};

fn default_pose() -> String {
    "front".into()
}
fn default_blouse() -> String {
    "traditional".into()
}
fn default_model_type() -> String {
    "indian_woman".into()
}

/// Request body for a virtual try-on.
///
/// Styles are plain strings here so that unknown values are reported as
/// validation errors naming the accepted set.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct TryOnRequest {
    /// Main fabric image, base64 or data URL.
    pub saree_body_base64: Option<String>,
    /// Decorative end-piece image.
    pub saree_pallu_base64: Option<String>,
    pub saree_border_base64: Option<String>,
    /// Catalog item to describe the garment with.
    pub saree_item_id: Option<String>,
    #[serde(default = "default_pose")]
    #[schema(example = "front")]
    pub pose_style: String,
    #[serde(default = "default_blouse")]
    #[schema(example = "traditional")]
    pub blouse_style: String,
    /// Accepted for compatibility; not used.
    #[serde(default = "default_model_type")]
    pub model_type: String,
    /// Reuse across calls to keep the generated model consistent.
    pub session_id: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct TryOnResponse {
    pub id: String,
    pub result_image_base64: String,
    pub pose_style: Pose,
    pub blouse_style: BlouseStyle,
    #[schema(example = "Virtual try-on completed successfully")]
    pub message: String,
}

/// Which inputs a result was generated from.
#[derive(Serialize, Debug, PartialEq, Eq, utoipa::ToSchema)]
pub struct SareeDetails {
    pub has_body: bool,
    pub has_pallu: bool,
    pub has_border: bool,
    pub saree_item_id: Option<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct TryOnResultResponse {
    pub id: String,
    pub user_id: String,
    pub result_image_base64: String,
    pub pose_style: Pose,
    pub blouse_style: BlouseStyle,
    pub saree_details: SareeDetails,
    pub is_favorite: bool,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct TryOnImageResponse {
    pub image_base64: String,
    pub pose_style: Pose,
    pub blouse_style: BlouseStyle,
}

impl From<&crate::entity::tryon_result::Model> for SareeDetails {
    fn from(m: &crate::entity::tryon_result::Model) -> Self {
        Self {
            has_body: m.has_body,
            has_pallu: m.has_pallu,
            has_border: m.has_border,
            saree_item_id: m.saree_item_id.clone(),
        }
    }
}

impl From<crate::entity::tryon_result::Model> for TryOnResultResponse {
    fn from(m: crate::entity::tryon_result::Model) -> Self {
        Self {
            saree_details: SareeDetails::from(&m),
            id: m.id,
            user_id: m.user_id,
            result_image_base64: m.result_image_base64,
            pose_style: m.pose_style,
            blouse_style: m.blouse_style,
            is_favorite: m.is_favorite,
            timestamp: m.created_at,
        }
    }
}

impl From<crate::entity::tryon_result::Model> for TryOnImageResponse {
    fn from(m: crate::entity::tryon_result::Model) -> Self {
        Self {
            image_base64: m.result_image_base64,
            pose_style: m.pose_style,
            blouse_style: m.blouse_style,
        }
    }
}
