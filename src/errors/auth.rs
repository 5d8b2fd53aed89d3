use poem_openapi::{payload::Json, ApiResponse, Object};
use std::fmt;

use crate::errors::internal::{AccountError, InternalError, UsernameError};

/// Standardized error response for authentication endpoints
#[derive(Object, Debug)]
pub struct AuthErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Authentication error types
#[derive(ApiResponse, Debug)]
pub enum AuthError {
    /// Invalid email or password
    #[oai(status = 401)]
    InvalidCredentials(Json<AuthErrorResponse>),

    /// An account already exists for this email
    #[oai(status = 409)]
    DuplicateEmail(Json<AuthErrorResponse>),

    /// Username failed syntactic validation
    #[oai(status = 400)]
    InvalidUsername(Json<AuthErrorResponse>),

    /// Username is reserved
    #[oai(status = 403)]
    ReservedUsername(Json<AuthErrorResponse>),

    /// Username already claimed by another profile
    #[oai(status = 409)]
    DuplicateUsername(Json<AuthErrorResponse>),

    /// Invalid or malformed session token
    #[oai(status = 401)]
    InvalidToken(Json<AuthErrorResponse>),

    /// Session token has expired
    #[oai(status = 401)]
    ExpiredToken(Json<AuthErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<AuthErrorResponse>),
}

impl AuthError {
    /// Create an InvalidCredentials error
    pub fn invalid_credentials() -> Self {
        AuthError::InvalidCredentials(Json(AuthErrorResponse {
            error: "invalid_credentials".to_string(),
            message: "Invalid email or password".to_string(),
            status_code: 401,
        }))
    }

    /// Create a DuplicateEmail error
    pub fn duplicate_email() -> Self {
        AuthError::DuplicateEmail(Json(AuthErrorResponse {
            error: "duplicate_email".to_string(),
            message: "An account with this email already exists".to_string(),
            status_code: 409,
        }))
    }

    /// Create an InvalidUsername error
    pub fn invalid_username() -> Self {
        AuthError::InvalidUsername(Json(AuthErrorResponse {
            error: "invalid_username".to_string(),
            message: "Username must be 3-20 characters: lowercase letters, digits, underscore"
                .to_string(),
            status_code: 400,
        }))
    }

    /// Create a ReservedUsername error
    pub fn reserved_username() -> Self {
        AuthError::ReservedUsername(Json(AuthErrorResponse {
            error: "reserved_username".to_string(),
            message: "This username is reserved and cannot be used".to_string(),
            status_code: 403,
        }))
    }

    /// Create a DuplicateUsername error
    pub fn duplicate_username() -> Self {
        AuthError::DuplicateUsername(Json(AuthErrorResponse {
            error: "duplicate_username".to_string(),
            message: "Username already taken".to_string(),
            status_code: 409,
        }))
    }

    /// Create an InvalidToken error
    pub fn invalid_token() -> Self {
        AuthError::InvalidToken(Json(AuthErrorResponse {
            error: "invalid_token".to_string(),
            message: "Invalid or malformed token".to_string(),
            status_code: 401,
        }))
    }

    /// Create an ExpiredToken error
    pub fn expired_token() -> Self {
        AuthError::ExpiredToken(Json(AuthErrorResponse {
            error: "expired_token".to_string(),
            message: "Session has expired".to_string(),
            status_code: 401,
        }))
    }

    /// Create an InternalError
    ///
    /// Always carries a generic message; internal detail goes to the log,
    /// never to the client.
    pub fn internal_error() -> Self {
        AuthError::InternalError(Json(AuthErrorResponse {
            error: "internal_error".to_string(),
            message: "Something went wrong. Please try again.".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AuthError::InvalidCredentials(json) => json.0.message.clone(),
            AuthError::DuplicateEmail(json) => json.0.message.clone(),
            AuthError::InvalidUsername(json) => json.0.message.clone(),
            AuthError::ReservedUsername(json) => json.0.message.clone(),
            AuthError::DuplicateUsername(json) => json.0.message.clone(),
            AuthError::InvalidToken(json) => json.0.message.clone(),
            AuthError::ExpiredToken(json) => json.0.message.clone(),
            AuthError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<InternalError> for AuthError {
    fn from(e: InternalError) -> Self {
        match e {
            InternalError::Username(UsernameError::InvalidFormat(_)) => Self::invalid_username(),
            InternalError::Username(UsernameError::Reserved(_)) => Self::reserved_username(),
            InternalError::Username(UsernameError::Duplicate(_)) => Self::duplicate_username(),
            InternalError::Account(AccountError::InvalidCredentials) => Self::invalid_credentials(),
            InternalError::Account(AccountError::DuplicateEmail(_)) => Self::duplicate_email(),
            // A valid token whose account is gone reads as a stale session
            InternalError::Account(AccountError::NotFound(_)) => Self::invalid_token(),
            other => {
                tracing::error!("Internal error on auth endpoint: {}", other);
                Self::internal_error()
            }
        }
    }
}
