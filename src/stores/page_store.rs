use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::errors::internal::{InternalError, ProfileError};
use crate::types::db::page_config::{self, Entity as UserPage};

/// PageStore manages the one-per-profile page configuration row.
pub struct PageStore {
    db: DatabaseConnection,
}

impl PageStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create the default page config for a new profile
    pub async fn create_defaults(&self, user_id: &str) -> Result<(), InternalError> {
        let now = Utc::now().timestamp();

        let row = page_config::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            user_id: Set(user_id.to_string()),
            background_type: Set("color".to_string()),
            layout_stacked: Set(false),
            layout_showcase: Set(false),
            premium_bg_effects: Set(false),
            premium_name_effect: Set(false),
            premium_cursor_trail: Set(false),
            premium_starry_bg: Set(false),
            premium_audio_visualizer: Set(false),
            premium_tilting_card: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        row.insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert page config", e))?;

        Ok(())
    }

    /// Fetch a user's page config, erroring when the row is missing
    pub async fn get_for_user(&self, user_id: &str) -> Result<page_config::Model, InternalError> {
        UserPage::find()
            .filter(page_config::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find page config", e))?
            .ok_or_else(|| ProfileError::PageNotFound(user_id.to_string()).into())
    }

    /// Remove a user's page config (part of the deletion cascade)
    pub async fn delete_for_user(&self, user_id: &str) -> Result<(), InternalError> {
        UserPage::delete_many()
            .filter(page_config::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete page config", e))?;

        Ok(())
    }
}
