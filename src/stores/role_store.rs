use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::errors::internal::InternalError;
use crate::types::db::role_grant::{self, Entity as RoleGrant};
use crate::types::Role;

/// RoleStore manages (user, role) grant rows.
///
/// The table carries a unique index on (user_id, role), so grant/revoke are
/// idempotent conditional writes rather than unguarded read-then-write: two
/// sessions toggling the same grant concurrently cannot create duplicates.
pub struct RoleStore {
    db: DatabaseConnection,
}

impl RoleStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Does this user currently hold the role?
    pub async fn has_role(&self, user_id: &str, role: Role) -> Result<bool, InternalError> {
        let found = RoleGrant::find()
            .filter(role_grant::Column::UserId.eq(user_id))
            .filter(role_grant::Column::Role.eq(role.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find role grant", e))?;

        Ok(found.is_some())
    }

    /// Grant a role; a no-op when the grant already exists
    pub async fn grant(&self, user_id: &str, role: Role) -> Result<(), InternalError> {
        let row = role_grant::ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            user_id: Set(user_id.to_string()),
            role: Set(role.as_str().to_string()),
            created_at: Set(Utc::now().timestamp()),
        };

        RoleGrant::insert(row)
            .on_conflict(
                OnConflict::columns([role_grant::Column::UserId, role_grant::Column::Role])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| InternalError::database("insert role grant", e))?;

        Ok(())
    }

    /// Revoke a role; a no-op when no grant exists
    ///
    /// # Returns
    /// * `Ok(true)` - A grant was removed
    /// * `Ok(false)` - The user did not hold the role
    pub async fn revoke(&self, user_id: &str, role: Role) -> Result<bool, InternalError> {
        let result = RoleGrant::delete_many()
            .filter(role_grant::Column::UserId.eq(user_id))
            .filter(role_grant::Column::Role.eq(role.as_str()))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete role grant", e))?;

        Ok(result.rows_affected > 0)
    }

    /// Flip role membership and return the new state
    ///
    /// Delete-first: when the delete removes a row the user held the role
    /// and is now without it; otherwise insert (conflict-ignoring, so a
    /// concurrent duplicate submission cannot double-grant).
    ///
    /// # Returns
    /// * `Ok(true)` - Role is now granted
    /// * `Ok(false)` - Role is now revoked
    pub async fn toggle(&self, user_id: &str, role: Role) -> Result<bool, InternalError> {
        if self.revoke(user_id, role).await? {
            return Ok(false);
        }

        self.grant(user_id, role).await?;
        Ok(true)
    }

    /// All roles granted to one user
    pub async fn roles_for_user(&self, user_id: &str) -> Result<Vec<String>, InternalError> {
        let rows = RoleGrant::find()
            .filter(role_grant::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list role grants for user", e))?;

        Ok(rows.into_iter().map(|r| r.role).collect())
    }

    /// Every grant row, for the admin dashboard
    pub async fn list_all(&self) -> Result<Vec<role_grant::Model>, InternalError> {
        RoleGrant::find()
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list role grants", e))
    }

    /// Remove all grants for a user (part of the deletion cascade)
    pub async fn delete_for_user(&self, user_id: &str) -> Result<(), InternalError> {
        RoleGrant::delete_many()
            .filter(role_grant::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete role grants for user", e))?;

        Ok(())
    }
}
