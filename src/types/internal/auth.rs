use serde::{Deserialize, Serialize};

/// JWT Claims structure for user session tokens
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user_id)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// JWT Claims structure for admin panel tokens
///
/// Kept separate from session claims so a user session token can never be
/// replayed as an admin credential; the `scope` claim is checked on decode.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Fixed scope marker, always "admin"
    pub scope: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,
}
