use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::fmt;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::errors::internal::{AdminGateError, InternalError};
use crate::types::internal::auth::AdminClaims;

/// Default lifetime of an admin token
const ADMIN_TOKEN_MINUTES: i64 = 30;

/// Failed attempts allowed per throttle window
const MAX_FAILED_ATTEMPTS: usize = 5;

/// Sliding throttle window
const THROTTLE_WINDOW: Duration = Duration::from_secs(60);

/// Scope claim value stamped into every admin token
const ADMIN_SCOPE: &str = "admin";

/// Gate in front of all admin operations
///
/// Exchanges the shared admin panel secret for a short-lived signed token.
/// Every admin endpoint re-verifies the token on each call; there is no
/// ambient "is admin" session state to forget to clear.
///
/// Failed secret checks are throttled with a sliding window so the secret
/// cannot be brute-forced online. The throttle is in-process state and
/// resets on restart, which is acceptable for a single-instance deployment.
pub struct AdminGate {
    admin_secret: String,
    jwt_secret: String,
    token_minutes: i64,
    max_failures: usize,
    window: Duration,
    failed_attempts: Mutex<Vec<Instant>>,
}

impl AdminGate {
    pub fn new(admin_secret: String, jwt_secret: String) -> Self {
        Self::with_limits(
            admin_secret,
            jwt_secret,
            MAX_FAILED_ATTEMPTS,
            THROTTLE_WINDOW,
        )
    }

    /// Construct with explicit throttle limits
    pub fn with_limits(
        admin_secret: String,
        jwt_secret: String,
        max_failures: usize,
        window: Duration,
    ) -> Self {
        Self {
            admin_secret,
            jwt_secret,
            token_minutes: ADMIN_TOKEN_MINUTES,
            max_failures,
            window,
            failed_attempts: Mutex::new(Vec::new()),
        }
    }

    /// Seconds a freshly issued admin token stays valid
    pub fn expires_in_seconds(&self) -> i64 {
        self.token_minutes * 60
    }

    /// Exchange the admin secret for a signed admin token
    ///
    /// # Returns
    /// * `Ok(String)` - An HS256 token carrying the admin scope
    /// * `Err(AdminGateError::Throttled)` - Too many recent failures
    /// * `Err(AdminGateError::InvalidSecret)` - Secret mismatch
    pub fn authenticate(&self, secret: &str) -> Result<String, InternalError> {
        self.check_throttle()?;

        if secret != self.admin_secret {
            self.record_failure();
            tracing::warn!("Admin login failed: invalid secret");
            return Err(AdminGateError::InvalidSecret.into());
        }

        self.clear_failures();

        let now = Utc::now().timestamp();
        let claims = AdminClaims {
            scope: ADMIN_SCOPE.to_string(),
            exp: now + (self.token_minutes * 60),
            iat: now,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| InternalError::crypto("admin token encode", e.to_string()))?;

        tracing::info!("Admin login succeeded; token issued");
        Ok(token)
    }

    /// Verify an admin token; called on every admin endpoint
    ///
    /// # Returns
    /// * `Ok(AdminClaims)` - The decoded claims
    /// * `Err(AdminGateError::ExpiredToken)` - Token past its expiry
    /// * `Err(AdminGateError::InvalidToken)` - Anything else wrong with it
    pub fn verify(&self, token: &str) -> Result<AdminClaims, InternalError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // A 30-minute token gets no expiry slack; expiry is exact
        validation.leeway = 0;

        let token_data = decode::<AdminClaims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| {
            if e.to_string().contains("ExpiredSignature") {
                AdminGateError::ExpiredToken
            } else {
                AdminGateError::InvalidToken
            }
        })?;

        // A session token signed with the same key must not pass as admin
        if token_data.claims.scope != ADMIN_SCOPE {
            return Err(AdminGateError::InvalidToken.into());
        }

        Ok(token_data.claims)
    }

    fn check_throttle(&self) -> Result<(), InternalError> {
        let mut attempts = self
            .failed_attempts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let cutoff = Instant::now();
        attempts.retain(|t| cutoff.duration_since(*t) < self.window);

        if attempts.len() >= self.max_failures {
            tracing::warn!("Admin login throttled after {} failures", attempts.len());
            return Err(AdminGateError::Throttled.into());
        }

        Ok(())
    }

    fn record_failure(&self) {
        let mut attempts = self
            .failed_attempts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        attempts.push(Instant::now());
    }

    fn clear_failures(&self) {
        let mut attempts = self
            .failed_attempts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        attempts.clear();
    }
}

impl fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminGate")
            .field("admin_secret", &"<redacted>")
            .field("jwt_secret", &"<redacted>")
            .field("token_minutes", &self.token_minutes)
            .field("max_failures", &self.max_failures)
            .finish()
    }
}
