use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::errors::internal::InternalError;
use crate::types::db::badge::{self, Entity as Badge};

pub struct BadgeStore {
    db: DatabaseConnection,
}

impl BadgeStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn add(
        &self,
        user_id: &str,
        badge_type: &str,
        badge_data: Option<String>,
        display_order: i32,
    ) -> Result<badge::Model, InternalError> {
        let row = badge::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            user_id: Set(user_id.to_string()),
            badge_type: Set(badge_type.to_string()),
            badge_data: Set(badge_data),
            display_order: Set(display_order),
            created_at: Set(Utc::now().timestamp()),
        };

        row.insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert badge", e))
    }

    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<badge::Model>, InternalError> {
        Badge::find()
            .filter(badge::Column::UserId.eq(user_id))
            .order_by_asc(badge::Column::DisplayOrder)
            .order_by_asc(badge::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list badges", e))
    }

    pub async fn delete_for_user(&self, user_id: &str) -> Result<(), InternalError> {
        Badge::delete_many()
            .filter(badge::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete badges for user", e))?;

        Ok(())
    }
}
