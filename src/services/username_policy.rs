use std::sync::Arc;

use crate::errors::internal::{InternalError, UsernameError};
use crate::stores::ReservedUsernameStore;

/// Username policy deciding whether a candidate may be claimed
///
/// Two layers, checked in order (fail fast):
/// 1. Syntactic validation: lowercase-normalized, length 3-20, `[a-z0-9_]`
/// 2. Reservation lookup against the admin-curated blocklist
///
/// Uniqueness against existing profiles is NOT checked here; the profile
/// store's unique constraint enforces it and surfaces `Duplicate`, which
/// callers must present distinctly from `Reserved`.
pub struct UsernamePolicy {
    min_length: usize,
    max_length: usize,
    reserved_store: Arc<ReservedUsernameStore>,
}

impl UsernamePolicy {
    /// Create a policy with the standard 3-20 character bounds
    pub fn new(reserved_store: Arc<ReservedUsernameStore>) -> Self {
        Self {
            min_length: 3,
            max_length: 20,
            reserved_store,
        }
    }

    /// Normalize a candidate: trim surrounding whitespace, lowercase
    pub fn normalize(candidate: &str) -> String {
        candidate.trim().to_lowercase()
    }

    /// Syntactic validation only; pure
    ///
    /// # Returns
    /// * `Ok(String)` - The normalized username
    /// * `Err(UsernameError::InvalidFormat)` - Length or charset violation
    pub fn validate(&self, candidate: &str) -> Result<String, UsernameError> {
        let normalized = Self::normalize(candidate);

        if normalized.len() < self.min_length || normalized.len() > self.max_length {
            return Err(UsernameError::InvalidFormat(normalized));
        }

        let charset_ok = normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !charset_ok {
            return Err(UsernameError::InvalidFormat(normalized));
        }

        Ok(normalized)
    }

    /// Full claim check: syntax, then case-insensitive reservation lookup
    ///
    /// # Returns
    /// * `Ok(String)` - The normalized username, clear to attempt a claim
    /// * `Err` - `UsernameError::InvalidFormat` or `UsernameError::Reserved`
    pub async fn check_available(&self, candidate: &str) -> Result<String, InternalError> {
        let normalized = self.validate(candidate)?;

        if self.reserved_store.is_reserved(&normalized).await? {
            return Err(UsernameError::Reserved(normalized).into());
        }

        Ok(normalized)
    }
}

#[cfg(test)]
#[path = "username_policy_test.rs"]
mod username_policy_test;
