use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::errors::internal::InternalError;
use crate::types::db::link::{self, Entity as UserLink};

/// LinkStore manages the ordered links shown on a public page.
pub struct LinkStore {
    db: DatabaseConnection,
}

impl LinkStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Add a link for a user
    ///
    /// Rejects URLs without an http(s) scheme before touching the store.
    pub async fn add(
        &self,
        user_id: &str,
        title: &str,
        url: &str,
        icon: Option<String>,
        display_order: i32,
    ) -> Result<link::Model, InternalError> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(InternalError::parse("url", format!("not an http(s) URL: {}", url)));
        }

        let row = link::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            user_id: Set(user_id.to_string()),
            title: Set(title.to_string()),
            url: Set(url.to_string()),
            icon: Set(icon),
            display_order: Set(display_order),
            created_at: Set(Utc::now().timestamp()),
        };

        row.insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert link", e))
    }

    /// All links for a user, ordered by display_order ascending.
    ///
    /// Ties break on created_at so the order is stable across reads.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<link::Model>, InternalError> {
        UserLink::find()
            .filter(link::Column::UserId.eq(user_id))
            .order_by_asc(link::Column::DisplayOrder)
            .order_by_asc(link::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list links", e))
    }

    /// Remove all links for a user (part of the deletion cascade)
    pub async fn delete_for_user(&self, user_id: &str) -> Result<(), InternalError> {
        UserLink::delete_many()
            .filter(link::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete links for user", e))?;

        Ok(())
    }
}
