//! Persistence adapter for catalog items, try-on results and status checks.
//!
//! Lookups return `Option` for absent rows and favorite toggles report
//! [`FavoriteUpdate::NotFound`] when no row matched; only genuine database
//! failures surface as `DbErr`.

use chrono::Utc;
use sea_orm::prelude::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entity::{saree_item, status_check, tryon_result};

/// Upper bound on rows returned by list operations.
pub const LIST_LIMIT: u64 = 1000;

/// Outcome of a favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteUpdate {
    Updated,
    /// No try-on result with the given id.
    NotFound,
}

/// Fields of a catalog item supplied by the caller.
#[derive(Debug, Clone)]
pub struct NewSareeItem {
    pub name: String,
    pub description: String,
    pub image_base64: String,
    pub category: String,
    pub color: String,
    pub pattern: String,
}

pub struct TryOnStore<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> TryOnStore<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn insert_status(&self, client_name: String) -> Result<status_check::Model, DbErr> {
        status_check::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            client_name: Set(client_name),
            timestamp: Set(Utc::now()),
        }
        .insert(self.conn)
        .await
    }

    pub async fn list_status(&self) -> Result<Vec<status_check::Model>, DbErr> {
        status_check::Entity::find()
            .order_by_asc(status_check::Column::Timestamp)
            .limit(LIST_LIMIT)
            .all(self.conn)
            .await
    }

    pub async fn insert_catalog_item(&self, item: NewSareeItem) -> Result<saree_item::Model, DbErr> {
        saree_item::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            name: Set(item.name),
            description: Set(item.description),
            image_base64: Set(item.image_base64),
            category: Set(item.category),
            color: Set(item.color),
            pattern: Set(item.pattern),
            created_at: Set(Utc::now()),
        }
        .insert(self.conn)
        .await
    }

    /// List catalog items, optionally restricted to one category.
    pub async fn list_catalog(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<saree_item::Model>, DbErr> {
        let mut query = saree_item::Entity::find();
        if let Some(category) = category {
            query = query.filter(saree_item::Column::Category.eq(category));
        }

        query
            .order_by_asc(saree_item::Column::CreatedAt)
            .limit(LIST_LIMIT)
            .all(self.conn)
            .await
    }

    pub async fn find_catalog_by_id(&self, id: &str) -> Result<Option<saree_item::Model>, DbErr> {
        saree_item::Entity::find_by_id(id.to_string())
            .one(self.conn)
            .await
    }

    pub async fn insert_result(
        &self,
        result: tryon_result::Model,
    ) -> Result<tryon_result::Model, DbErr> {
        tryon_result::ActiveModel {
            id: Set(result.id),
            user_id: Set(result.user_id),
            result_image_base64: Set(result.result_image_base64),
            pose_style: Set(result.pose_style),
            blouse_style: Set(result.blouse_style),
            has_body: Set(result.has_body),
            has_pallu: Set(result.has_pallu),
            has_border: Set(result.has_border),
            saree_item_id: Set(result.saree_item_id),
            is_favorite: Set(result.is_favorite),
            created_at: Set(result.created_at),
        }
        .insert(self.conn)
        .await
    }

    pub async fn find_result_by_id(
        &self,
        id: &str,
    ) -> Result<Option<tryon_result::Model>, DbErr> {
        tryon_result::Entity::find_by_id(id.to_string())
            .one(self.conn)
            .await
    }

    /// Set the favorite flag of a result.
    ///
    /// When `user_id` is given the result is also reassigned to that user, so
    /// it shows up in their favorites list.
    pub async fn set_favorite(
        &self,
        id: &str,
        favorite: bool,
        user_id: Option<&str>,
    ) -> Result<FavoriteUpdate, DbErr> {
        let mut update = tryon_result::Entity::update_many()
            .col_expr(tryon_result::Column::IsFavorite, Expr::value(favorite));
        if let Some(user_id) = user_id {
            update = update.col_expr(tryon_result::Column::UserId, Expr::value(user_id));
        }

        let result = update
            .filter(tryon_result::Column::Id.eq(id))
            .exec(self.conn)
            .await?;

        if result.rows_affected == 0 {
            Ok(FavoriteUpdate::NotFound)
        } else {
            Ok(FavoriteUpdate::Updated)
        }
    }

    pub async fn list_favorites_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<tryon_result::Model>, DbErr> {
        tryon_result::Entity::find()
            .filter(tryon_result::Column::UserId.eq(user_id))
            .filter(tryon_result::Column::IsFavorite.eq(true))
            .order_by_asc(tryon_result::Column::CreatedAt)
            .limit(LIST_LIMIT)
            .all(self.conn)
            .await
    }
}
