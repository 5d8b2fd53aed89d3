use std::sync::Arc;

use crate::errors::auth::AuthError;
use crate::errors::internal::InternalError;
use crate::services::{TokenService, UsernamePolicy};
use crate::stores::{AccountStore, PageStore, ProfileStore};
use crate::types::internal::auth::Claims;

/// Orchestrates sign-up, login and session introspection
///
/// Sign-up spans three stores without a wrapping transaction, so it runs as
/// a compensated sequence: if a later step fails, the earlier writes are
/// rolled back explicitly. The username claim itself is settled by the
/// profiles unique constraint, never by a read-then-write check.
pub struct AccountService {
    account_store: Arc<AccountStore>,
    profile_store: Arc<ProfileStore>,
    page_store: Arc<PageStore>,
    username_policy: Arc<UsernamePolicy>,
    token_service: Arc<TokenService>,
}

impl AccountService {
    pub fn new(
        account_store: Arc<AccountStore>,
        profile_store: Arc<ProfileStore>,
        page_store: Arc<PageStore>,
        username_policy: Arc<UsernamePolicy>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            account_store,
            profile_store,
            page_store,
            username_policy,
            token_service,
        }
    }

    /// Create an account, claim a username and seed the default page
    ///
    /// Order matters: the username is checked before any write, then the
    /// account row, then the profile (where the unique constraint decides
    /// races), then the page defaults. A failure after the account insert
    /// deletes what was written so the email is immediately reusable.
    ///
    /// # Returns
    /// * `Ok((user_id, username))` - The new account id and normalized username
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        username: &str,
    ) -> Result<(String, String), AuthError> {
        let normalized = self.username_policy.check_available(username).await?;

        let user_id = self.account_store.add_account(email, password).await?;

        if let Err(e) = self.profile_store.insert(&user_id, &normalized).await {
            self.compensate_sign_up(&user_id, false).await;
            return Err(e.into());
        }

        if let Err(e) = self.page_store.create_defaults(&user_id).await {
            self.compensate_sign_up(&user_id, true).await;
            return Err(e.into());
        }

        tracing::info!("Account created: user {} claimed username {}", user_id, normalized);
        Ok((user_id, normalized))
    }

    /// Roll back a partially completed sign-up
    ///
    /// Compensation failures are logged, not propagated; the caller already
    /// has the original error to report.
    async fn compensate_sign_up(&self, user_id: &str, profile_written: bool) {
        if profile_written {
            if let Err(e) = self.profile_store.delete(user_id).await {
                tracing::error!("Sign-up rollback failed to delete profile {}: {}", user_id, e);
            }
        }
        if let Err(e) = self.account_store.delete(user_id).await {
            tracing::error!("Sign-up rollback failed to delete account {}: {}", user_id, e);
        }
    }

    /// Verify credentials and issue a session token
    ///
    /// # Returns
    /// * `Ok((token, expires_in))` - The session JWT and its lifetime in seconds
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<(String, i64), AuthError> {
        let user_id = self.account_store.verify_credentials(email, password).await?;

        let token = self.token_service.generate_jwt(&user_id)?;

        tracing::info!("Login succeeded for user {}", user_id);
        Ok((token, self.token_service.expires_in_seconds()))
    }

    /// Resolve a session token to its claims
    pub fn authenticate(&self, token: &str) -> Result<Claims, AuthError> {
        self.token_service.validate_jwt(token)
    }

    /// Look up the email for an authenticated user
    pub async fn email_for(&self, user_id: &str) -> Result<String, AuthError> {
        let account = self.account_store.get_by_id(user_id).await?;
        Ok(account.email)
    }

    /// Change the caller's username
    ///
    /// Runs the full claim policy; the profiles unique constraint settles
    /// concurrent claims of the same name.
    ///
    /// # Returns
    /// * `Ok(String)` - The normalized username now on the profile
    pub async fn claim_username(
        &self,
        user_id: &str,
        candidate: &str,
    ) -> Result<String, InternalError> {
        let normalized = self.username_policy.check_available(candidate).await?;

        self.profile_store.update_username(user_id, &normalized).await?;

        tracing::info!("User {} changed username to {}", user_id, normalized);
        Ok(normalized)
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod account_service_tests;
