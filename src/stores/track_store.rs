use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::errors::internal::InternalError;
use crate::types::db::track::{self, Entity as Track};

/// TrackStore manages the ordered audio tracks shown on a public page.
/// Audio and cover assets are opaque URLs hosted elsewhere.
pub struct TrackStore {
    db: DatabaseConnection,
}

impl TrackStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Add a track for a user
    pub async fn add(
        &self,
        user_id: &str,
        title: &str,
        artist: Option<String>,
        audio_url: &str,
        display_order: i32,
    ) -> Result<track::Model, InternalError> {
        let row = track::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            user_id: Set(user_id.to_string()),
            title: Set(title.to_string()),
            artist: Set(artist),
            audio_url: Set(audio_url.to_string()),
            display_order: Set(display_order),
            created_at: Set(Utc::now().timestamp()),
            ..Default::default()
        };

        row.insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert track", e))
    }

    /// All tracks for a user, ordered by display_order ascending with a
    /// created_at tie-break
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<track::Model>, InternalError> {
        Track::find()
            .filter(track::Column::UserId.eq(user_id))
            .order_by_asc(track::Column::DisplayOrder)
            .order_by_asc(track::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list tracks", e))
    }

    /// Remove all tracks for a user (part of the deletion cascade)
    pub async fn delete_for_user(&self, user_id: &str) -> Result<(), InternalError> {
        Track::delete_many()
            .filter(track::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete tracks for user", e))?;

        Ok(())
    }
}
