use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::errors::internal::{InternalError, ProfileError, UsernameError};
use crate::types::db::profile::{self, Entity as Profile};

/// ProfileStore manages the public identity rows keyed by account id.
///
/// Username uniqueness is enforced here by the database constraint, not by
/// the username policy; a violation surfaces as `UsernameError::Duplicate`
/// so callers can show it distinctly from a reservation rejection.
pub struct ProfileStore {
    db: DatabaseConnection,
}

impl ProfileStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert a profile for a freshly created account
    ///
    /// # Arguments
    /// * `account_id` - The owning account id (becomes the profile id)
    /// * `username` - Already normalized by the username policy
    pub async fn insert(&self, account_id: &str, username: &str) -> Result<(), InternalError> {
        let now = Utc::now().timestamp();

        let new_profile = profile::ActiveModel {
            id: Set(account_id.to_string()),
            username: Set(username.to_string()),
            display_name: Set(Some(username.to_string())),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        new_profile.insert(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                InternalError::from(UsernameError::Duplicate(username.to_string()))
            } else {
                InternalError::database("insert profile", e)
            }
        })?;

        Ok(())
    }

    /// Look up a profile by its (normalized) username
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<profile::Model>, InternalError> {
        Profile::find()
            .filter(profile::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find profile by username", e))
    }

    /// Fetch a profile by user id, erroring when absent
    pub async fn get_by_id(&self, user_id: &str) -> Result<profile::Model, InternalError> {
        Profile::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find profile by id", e))?
            .ok_or_else(|| ProfileError::NotFound(user_id.to_string()).into())
    }

    /// Change a profile's username
    ///
    /// `new_username` must already have passed the username policy. The
    /// unique constraint still backstops concurrent claims of the same name.
    pub async fn update_username(
        &self,
        user_id: &str,
        new_username: &str,
    ) -> Result<(), InternalError> {
        let profile = self.get_by_id(user_id).await?;

        let mut active: profile::ActiveModel = profile.into();
        active.username = Set(new_username.to_string());
        active.updated_at = Set(Utc::now().timestamp());

        active.update(&self.db).await.map_err(|e| {
            if e.to_string().contains("UNIQUE") {
                InternalError::from(UsernameError::Duplicate(new_username.to_string()))
            } else {
                InternalError::database("update profile username", e)
            }
        })?;

        Ok(())
    }

    /// List every profile for the admin dashboard
    pub async fn list_all(&self) -> Result<Vec<profile::Model>, InternalError> {
        Profile::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list profiles", e))
    }

    /// Delete a profile row
    ///
    /// Dependent rows (links, tracks, page, roles, badges, widgets) must be
    /// deleted before this is called.
    pub async fn delete(&self, user_id: &str) -> Result<(), InternalError> {
        Profile::delete_by_id(user_id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete profile", e))?;

        Ok(())
    }
}
