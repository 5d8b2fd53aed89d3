use std::env;
use std::fmt;

/// Minimum length accepted for signing secrets
const MIN_SECRET_LENGTH: usize = 32;

/// Loads and validates all secrets at startup
///
/// Secrets are read once from the environment and held in memory for the
/// process lifetime. Failing fast here is preferable to discovering a
/// missing secret on the first admin login.
pub struct SecretManager {
    jwt_secret: String,
    admin_panel_secret: String,
    password_pepper: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    #[error("Missing required secret: {0}")]
    Missing(&'static str),

    #[error("Secret {0} is too short (minimum {MIN_SECRET_LENGTH} characters)")]
    TooShort(&'static str),
}

impl SecretManager {
    /// Read secrets from the environment and validate them
    ///
    /// Required variables:
    /// * `JWT_SECRET` - HS256 signing key for session and admin tokens
    /// * `ADMIN_PANEL_SECRET` - shared secret unlocking the admin panel
    /// * `PASSWORD_PEPPER` - secret mixed into credential hashes
    pub fn init() -> Result<Self, SecretError> {
        let jwt_secret = Self::require("JWT_SECRET")?;
        if jwt_secret.len() < MIN_SECRET_LENGTH {
            return Err(SecretError::TooShort("JWT_SECRET"));
        }

        // The admin secret is whatever the operator chose; no length floor
        // beyond non-empty, since it is compared by equality, not used as
        // key material.
        let admin_panel_secret = Self::require("ADMIN_PANEL_SECRET")?;

        let password_pepper = Self::require("PASSWORD_PEPPER")?;

        Ok(Self {
            jwt_secret,
            admin_panel_secret,
            password_pepper,
        })
    }

    fn require(name: &'static str) -> Result<String, SecretError> {
        match env::var(name) {
            Ok(v) if !v.trim().is_empty() => Ok(v),
            _ => Err(SecretError::Missing(name)),
        }
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }

    pub fn admin_panel_secret(&self) -> &str {
        &self.admin_panel_secret
    }

    pub fn password_pepper(&self) -> &str {
        &self.password_pepper
    }
}

impl fmt::Debug for SecretManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretManager")
            .field("jwt_secret", &"<redacted>")
            .field("admin_panel_secret", &"<redacted>")
            .field("password_pepper", &"<redacted>")
            .finish()
    }
}
