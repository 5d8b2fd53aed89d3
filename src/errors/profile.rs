use poem_openapi::{payload::Json, ApiResponse, Object};
use std::fmt;

use crate::errors::internal::{InternalError, ProfileError, UsernameError};

/// Standardized error response for profile endpoints
#[derive(Object, Debug)]
pub struct ProfileErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Profile endpoint error types
#[derive(ApiResponse, Debug)]
pub enum ProfileApiError {
    /// No profile for this username
    #[oai(status = 404)]
    NotFound(Json<ProfileErrorResponse>),

    /// Username failed syntactic validation
    #[oai(status = 400)]
    InvalidUsername(Json<ProfileErrorResponse>),

    /// Username is reserved
    #[oai(status = 403)]
    ReservedUsername(Json<ProfileErrorResponse>),

    /// Username already claimed by another profile
    #[oai(status = 409)]
    DuplicateUsername(Json<ProfileErrorResponse>),

    /// Missing or invalid session token
    #[oai(status = 401)]
    Unauthorized(Json<ProfileErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ProfileErrorResponse>),
}

impl ProfileApiError {
    /// Create a NotFound error
    pub fn not_found() -> Self {
        ProfileApiError::NotFound(Json(ProfileErrorResponse {
            error: "not_found".to_string(),
            message: "Profile not found".to_string(),
            status_code: 404,
        }))
    }

    /// Create an InvalidUsername error
    pub fn invalid_username() -> Self {
        ProfileApiError::InvalidUsername(Json(ProfileErrorResponse {
            error: "invalid_username".to_string(),
            message: "Username must be 3-20 characters: lowercase letters, digits, underscore"
                .to_string(),
            status_code: 400,
        }))
    }

    /// Create a ReservedUsername error
    pub fn reserved_username() -> Self {
        ProfileApiError::ReservedUsername(Json(ProfileErrorResponse {
            error: "reserved_username".to_string(),
            message: "This username is reserved and cannot be used".to_string(),
            status_code: 403,
        }))
    }

    /// Create a DuplicateUsername error
    pub fn duplicate_username() -> Self {
        ProfileApiError::DuplicateUsername(Json(ProfileErrorResponse {
            error: "duplicate_username".to_string(),
            message: "Username already taken".to_string(),
            status_code: 409,
        }))
    }

    /// Create an Unauthorized error
    pub fn unauthorized() -> Self {
        ProfileApiError::Unauthorized(Json(ProfileErrorResponse {
            error: "unauthorized".to_string(),
            message: "Authentication required".to_string(),
            status_code: 401,
        }))
    }

    /// Create an InternalError with a generic message
    pub fn internal_error() -> Self {
        ProfileApiError::InternalError(Json(ProfileErrorResponse {
            error: "internal_error".to_string(),
            message: "Something went wrong. Please try again.".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            ProfileApiError::NotFound(json) => json.0.message.clone(),
            ProfileApiError::InvalidUsername(json) => json.0.message.clone(),
            ProfileApiError::ReservedUsername(json) => json.0.message.clone(),
            ProfileApiError::DuplicateUsername(json) => json.0.message.clone(),
            ProfileApiError::Unauthorized(json) => json.0.message.clone(),
            ProfileApiError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for ProfileApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<InternalError> for ProfileApiError {
    fn from(e: InternalError) -> Self {
        match e {
            InternalError::Profile(ProfileError::NotFound(_)) => Self::not_found(),
            InternalError::Username(UsernameError::InvalidFormat(_)) => Self::invalid_username(),
            InternalError::Username(UsernameError::Reserved(_)) => Self::reserved_username(),
            InternalError::Username(UsernameError::Duplicate(_)) => Self::duplicate_username(),
            other => {
                tracing::error!("Internal error on profile endpoint: {}", other);
                Self::internal_error()
            }
        }
    }
}
