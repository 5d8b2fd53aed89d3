use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use crate::errors::internal::InternalError;
use crate::services::{RoleService, UsernamePolicy};
use crate::stores::{
    AccountStore, BadgeStore, LinkStore, PageStore, ProfileStore, ReservedUsernameStore,
    TrackStore, WidgetStore,
};
use crate::types::dto::admin::{
    DashboardAnalytics, DashboardResponse, DashboardUser, ReservedUsernameEntry,
};
use crate::types::Role;

/// Admin action surface behind the admin gate
///
/// Every method here assumes the caller already passed token verification;
/// this service holds no authorization state of its own.
pub struct AdminService {
    account_store: Arc<AccountStore>,
    profile_store: Arc<ProfileStore>,
    reserved_username_store: Arc<ReservedUsernameStore>,
    role_service: Arc<RoleService>,
    page_store: Arc<PageStore>,
    link_store: Arc<LinkStore>,
    track_store: Arc<TrackStore>,
    badge_store: Arc<BadgeStore>,
    widget_store: Arc<WidgetStore>,
    username_policy: Arc<UsernamePolicy>,
}

impl AdminService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        account_store: Arc<AccountStore>,
        profile_store: Arc<ProfileStore>,
        reserved_username_store: Arc<ReservedUsernameStore>,
        role_service: Arc<RoleService>,
        page_store: Arc<PageStore>,
        link_store: Arc<LinkStore>,
        track_store: Arc<TrackStore>,
        badge_store: Arc<BadgeStore>,
        widget_store: Arc<WidgetStore>,
        username_policy: Arc<UsernamePolicy>,
    ) -> Self {
        Self {
            account_store,
            profile_store,
            reserved_username_store,
            role_service,
            page_store,
            link_store,
            track_store,
            badge_store,
            widget_store,
            username_policy,
        }
    }

    /// Assemble the full dashboard payload
    ///
    /// Users are joined with their emails and role grants in memory; the
    /// tables are small enough that three full scans beat a SQL join here.
    pub async fn load_dashboard(&self) -> Result<DashboardResponse, InternalError> {
        let profiles = self.profile_store.list_all().await?;
        let accounts = self.account_store.list_all().await?;
        let grants = self.role_service.list_grants().await?;
        let reserved = self.reserved_username_store.list_all().await?;

        let emails: HashMap<String, String> = accounts
            .into_iter()
            .map(|a| (a.id, a.email))
            .collect();

        let mut roles_by_user: HashMap<String, Vec<String>> = HashMap::new();
        for grant in grants {
            roles_by_user.entry(grant.user_id).or_default().push(grant.role);
        }

        let mut premium_count = 0u64;
        let mut admin_count = 0u64;
        for roles in roles_by_user.values() {
            if roles.iter().any(|r| r == Role::Premium.as_str()) {
                premium_count += 1;
            }
            if roles.iter().any(|r| r == Role::Admin.as_str()) {
                admin_count += 1;
            }
        }

        let users: Vec<DashboardUser> = profiles
            .into_iter()
            .map(|p| {
                let roles = roles_by_user.remove(&p.id).unwrap_or_default();
                let email = emails.get(&p.id).cloned().unwrap_or_default();
                DashboardUser {
                    id: p.id,
                    username: p.username,
                    email,
                    created_at: p.created_at,
                    roles,
                }
            })
            .collect();

        let reserved_usernames: Vec<ReservedUsernameEntry> = reserved
            .into_iter()
            .map(|r| ReservedUsernameEntry {
                id: r.id,
                username: r.username,
                reason: r.reason,
                created_at: r.created_at,
            })
            .collect();

        let analytics = DashboardAnalytics {
            total_users: users.len() as u64,
            reserved_count: reserved_usernames.len() as u64,
            premium_count,
            admin_count,
        };

        Ok(DashboardResponse {
            users,
            reserved_usernames,
            analytics,
        })
    }

    /// Delete a user and everything hanging off their profile
    ///
    /// Child rows go first so a crash mid-way never leaves orphans pointing
    /// at a missing profile: badges, widgets, links, tracks, page config and
    /// role grants, then the profile, and the account row last. A re-run
    /// after a partial failure completes the remainder; every step is
    /// idempotent.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), InternalError> {
        // Existence check up front so callers get a clean not-found
        self.profile_store.get_by_id(user_id).await?;

        self.badge_store.delete_for_user(user_id).await?;
        self.widget_store.delete_for_user(user_id).await?;
        self.link_store.delete_for_user(user_id).await?;
        self.track_store.delete_for_user(user_id).await?;
        self.page_store.delete_for_user(user_id).await?;
        self.role_service.revoke_all(user_id).await?;
        self.profile_store.delete(user_id).await?;
        self.account_store.delete(user_id).await?;

        tracing::info!("Admin deleted user {}", user_id);
        Ok(())
    }

    /// Flip a role grant for a user
    ///
    /// # Returns
    /// * `Ok((role, granted))` - The parsed role and the new membership state
    pub async fn toggle_role(
        &self,
        user_id: &str,
        role: &str,
    ) -> Result<(Role, bool), InternalError> {
        let role = Role::from_str(role)?;

        // Reject unknown users rather than writing a dangling grant
        self.profile_store.get_by_id(user_id).await?;

        let granted = self.role_service.toggle(user_id, role).await?;
        Ok((role, granted))
    }

    /// Reserve a username so it can never be self-claimed
    ///
    /// The candidate must pass format validation; reserving garbage would
    /// block nothing. Names already claimed by a profile may still be
    /// reserved, which blocks future claims without evicting the holder.
    pub async fn add_reserved_username(
        &self,
        username: &str,
        reason: Option<String>,
    ) -> Result<ReservedUsernameEntry, InternalError> {
        let normalized = self.username_policy.validate(username)?;

        let row = self.reserved_username_store.add(&normalized, reason).await?;

        tracing::info!("Admin reserved username {}", row.username);
        Ok(ReservedUsernameEntry {
            id: row.id,
            username: row.username,
            reason: row.reason,
            created_at: row.created_at,
        })
    }

    /// Drop a reservation by id
    pub async fn delete_reserved_username(&self, id: &str) -> Result<(), InternalError> {
        self.reserved_username_store.remove(id).await?;
        tracing::info!("Admin removed reserved username {}", id);
        Ok(())
    }

    /// Admin edit of a user's profile
    ///
    /// Username changes run the same claim policy as self-service; admins
    /// cannot assign a reserved or taken name either.
    pub async fn update_user(
        &self,
        user_id: &str,
        new_username: Option<&str>,
    ) -> Result<(), InternalError> {
        // Fails with not-found before any write
        self.profile_store.get_by_id(user_id).await?;

        if let Some(candidate) = new_username {
            let normalized = self.username_policy.check_available(candidate).await?;
            self.profile_store.update_username(user_id, &normalized).await?;
            tracing::info!("Admin renamed user {} to {}", user_id, normalized);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "admin_service_tests.rs"]
mod admin_service_tests;
