use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::shared::validate_short_text;
use crate::error::AppError;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateStatusCheckRequest {
    #[schema(example = "mobile-app")]
    pub client_name: String,
}

pub fn validate_create_status_check(payload: &CreateStatusCheckRequest) -> Result<(), AppError> {
    validate_short_text(&payload.client_name, "client_name")
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct StatusCheckResponse {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl From<crate::entity::status_check::Model> for StatusCheckResponse {
    fn from(m: crate::entity::status_check::Model) -> Self {
        Self {
            id: m.id,
            client_name: m.client_name,
            timestamp: m.timestamp,
        }
    }
}
