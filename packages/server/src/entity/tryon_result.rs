use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::tryon::style::{BlouseStyle, Pose};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tryon_result")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Generated per result; rewritten by the favoriting user.
    #[sea_orm(indexed)]
    pub user_id: String,

    #[sea_orm(column_type = "Text")]
    pub result_image_base64: String,

    pub pose_style: Pose,
    pub blouse_style: BlouseStyle,

    // Which inputs were supplied with the request.
    pub has_body: bool,
    pub has_pallu: bool,
    pub has_border: bool,
    pub saree_item_id: Option<String>,

    #[sea_orm(default_value = false, indexed)]
    pub is_favorite: bool,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
