use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Client heartbeat record written by `POST /status`.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "status_check")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub client_name: String,

    pub timestamp: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
