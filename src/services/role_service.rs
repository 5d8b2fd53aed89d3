use std::sync::Arc;

use crate::errors::internal::InternalError;
use crate::stores::RoleStore;
use crate::types::db::role_grant;
use crate::types::Role;

/// Role authorization service
///
/// Answers "does user X hold role Y" and mutates grants. Only `admin` and
/// `premium` exist as stored grants; the implicit `user` role is every
/// authenticated account and is never written.
pub struct RoleService {
    role_store: Arc<RoleStore>,
}

impl RoleService {
    pub fn new(role_store: Arc<RoleStore>) -> Self {
        Self { role_store }
    }

    /// Current membership state
    pub async fn has_role(&self, user_id: &str, role: Role) -> Result<bool, InternalError> {
        self.role_store.has_role(user_id, role).await
    }

    /// Grant a role (idempotent)
    pub async fn grant(&self, user_id: &str, role: Role) -> Result<(), InternalError> {
        self.role_store.grant(user_id, role).await?;
        tracing::info!("Role {} granted to user {}", role, user_id);
        Ok(())
    }

    /// Revoke a role (idempotent)
    pub async fn revoke(&self, user_id: &str, role: Role) -> Result<(), InternalError> {
        if self.role_store.revoke(user_id, role).await? {
            tracing::info!("Role {} revoked from user {}", role, user_id);
        }
        Ok(())
    }

    /// Flip membership and return the new state
    ///
    /// Sequential double-toggle is an involution: two calls return the user
    /// to their original membership.
    pub async fn toggle(&self, user_id: &str, role: Role) -> Result<bool, InternalError> {
        let granted = self.role_store.toggle(user_id, role).await?;
        tracing::info!(
            "Role {} toggled for user {}: now {}",
            role,
            user_id,
            if granted { "granted" } else { "revoked" }
        );
        Ok(granted)
    }

    /// Role names held by one user
    pub async fn roles_for_user(&self, user_id: &str) -> Result<Vec<String>, InternalError> {
        self.role_store.roles_for_user(user_id).await
    }

    /// Every grant row, for the admin dashboard
    pub async fn list_grants(&self) -> Result<Vec<role_grant::Model>, InternalError> {
        self.role_store.list_all().await
    }

    /// Drop all grants for a user (part of the deletion cascade)
    pub async fn revoke_all(&self, user_id: &str) -> Result<(), InternalError> {
        self.role_store.delete_for_user(user_id).await
    }
}

#[cfg(test)]
#[path = "role_service_tests.rs"]
mod role_service_tests;
