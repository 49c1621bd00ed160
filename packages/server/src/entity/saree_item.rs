use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A reusable catalog garment. Never updated after insertion.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "saree_item")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text")]
    pub image_base64: String,

    #[sea_orm(indexed)]
    pub category: String,

    pub color: String,
    pub pattern: String,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
