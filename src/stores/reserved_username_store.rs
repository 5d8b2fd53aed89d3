use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::errors::internal::{InternalError, UsernameError};
use crate::types::db::reserved_username::{self, Entity as ReservedUsername};

/// ReservedUsernameStore manages the admin-curated list of usernames
/// blocked from self-service claiming. Rows are stored lowercase, so the
/// membership test lowercases the query side to stay case-insensitive.
pub struct ReservedUsernameStore {
    db: DatabaseConnection,
}

impl ReservedUsernameStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Case-insensitive membership test
    pub async fn is_reserved(&self, username: &str) -> Result<bool, InternalError> {
        let normalized = username.trim().to_lowercase();

        let found = ReservedUsername::find()
            .filter(reserved_username::Column::Username.eq(&normalized))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find reserved username", e))?;

        Ok(found.is_some())
    }

    /// Reserve a username
    ///
    /// # Arguments
    /// * `username` - Normalized (trimmed, lowercased) before storage
    /// * `reason` - Optional operator note
    ///
    /// # Returns
    /// * `Ok(Model)` - The created reservation row
    /// * `Err` - `UsernameError::Duplicate` when the name is already reserved
    pub async fn add(
        &self,
        username: &str,
        reason: Option<String>,
    ) -> Result<reserved_username::Model, InternalError> {
        let normalized = username.trim().to_lowercase();

        let row = reserved_username::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            username: Set(normalized.clone()),
            reason: Set(reason),
            created_at: Set(Utc::now().timestamp()),
        };

        row.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                InternalError::from(UsernameError::Duplicate(normalized.clone()))
            } else {
                InternalError::database("insert reserved username", e)
            }
        })
    }

    /// Remove a reservation by id
    pub async fn remove(&self, id: &str) -> Result<(), InternalError> {
        ReservedUsername::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete reserved username", e))?;

        Ok(())
    }

    /// List all reservations ordered by username
    pub async fn list_all(&self) -> Result<Vec<reserved_username::Model>, InternalError> {
        ReservedUsername::find()
            .order_by_asc(reserved_username::Column::Username)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list reserved usernames", e))
    }
}
