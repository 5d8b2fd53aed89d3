use poem_openapi::{payload::Json, ApiResponse, Object};
use std::fmt;

use crate::errors::internal::{AdminGateError, InternalError, ProfileError, UsernameError};

/// Standardized error response for admin endpoints
#[derive(Object, Debug)]
pub struct AdminErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Admin operation error types
#[derive(ApiResponse, Debug)]
pub enum AdminError {
    /// Wrong secret or bad/expired admin token. Deliberately generic.
    #[oai(status = 401)]
    Unauthorized(Json<AdminErrorResponse>),

    /// Too many failed login attempts
    #[oai(status = 429)]
    Throttled(Json<AdminErrorResponse>),

    /// Target user not found
    #[oai(status = 404)]
    UserNotFound(Json<AdminErrorResponse>),

    /// Payload failed validation
    #[oai(status = 400)]
    InvalidPayload(Json<AdminErrorResponse>),

    /// Username is reserved
    #[oai(status = 403)]
    ReservedUsername(Json<AdminErrorResponse>),

    /// Username or reservation already exists
    #[oai(status = 409)]
    Duplicate(Json<AdminErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<AdminErrorResponse>),
}

impl AdminError {
    /// Create an Unauthorized error
    ///
    /// The same response is used for a wrong secret and a bad token so the
    /// caller cannot tell which check failed.
    pub fn unauthorized() -> Self {
        AdminError::Unauthorized(Json(AdminErrorResponse {
            error: "unauthorized".to_string(),
            message: "Invalid password".to_string(),
            status_code: 401,
        }))
    }

    /// Create a Throttled error
    pub fn throttled() -> Self {
        AdminError::Throttled(Json(AdminErrorResponse {
            error: "throttled".to_string(),
            message: "Too many attempts. Try again later.".to_string(),
            status_code: 429,
        }))
    }

    /// Create a UserNotFound error
    pub fn user_not_found(user_id: &str) -> Self {
        AdminError::UserNotFound(Json(AdminErrorResponse {
            error: "user_not_found".to_string(),
            message: format!("User not found: {}", user_id),
            status_code: 404,
        }))
    }

    /// Create an InvalidPayload error
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        AdminError::InvalidPayload(Json(AdminErrorResponse {
            error: "invalid_payload".to_string(),
            message: message.into(),
            status_code: 400,
        }))
    }

    /// Create a ReservedUsername error
    pub fn reserved_username() -> Self {
        AdminError::ReservedUsername(Json(AdminErrorResponse {
            error: "reserved_username".to_string(),
            message: "This username is reserved and cannot be used".to_string(),
            status_code: 403,
        }))
    }

    /// Create a Duplicate error
    pub fn duplicate(message: impl Into<String>) -> Self {
        AdminError::Duplicate(Json(AdminErrorResponse {
            error: "duplicate".to_string(),
            message: message.into(),
            status_code: 409,
        }))
    }

    /// Create an InternalError with a generic message
    pub fn internal_error() -> Self {
        AdminError::InternalError(Json(AdminErrorResponse {
            error: "internal_error".to_string(),
            message: "Something went wrong. Please try again.".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            AdminError::Unauthorized(json) => json.0.message.clone(),
            AdminError::Throttled(json) => json.0.message.clone(),
            AdminError::UserNotFound(json) => json.0.message.clone(),
            AdminError::InvalidPayload(json) => json.0.message.clone(),
            AdminError::ReservedUsername(json) => json.0.message.clone(),
            AdminError::Duplicate(json) => json.0.message.clone(),
            AdminError::InternalError(json) => json.0.message.clone(),
        }
    }
}

impl fmt::Display for AdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<InternalError> for AdminError {
    fn from(e: InternalError) -> Self {
        match e {
            InternalError::AdminGate(AdminGateError::Throttled) => Self::throttled(),
            InternalError::AdminGate(_) => Self::unauthorized(),
            InternalError::Username(UsernameError::InvalidFormat(_)) => {
                Self::invalid_payload("Username must be 3-20 characters: lowercase letters, digits, underscore")
            }
            InternalError::Username(UsernameError::Reserved(_)) => Self::reserved_username(),
            InternalError::Username(UsernameError::Duplicate(_)) => {
                Self::duplicate("Username already taken")
            }
            InternalError::Profile(ProfileError::NotFound(id)) => Self::user_not_found(&id),
            InternalError::Parse { value_type, message } if value_type == "role" => {
                Self::invalid_payload(message)
            }
            other => {
                tracing::error!("Internal error on admin endpoint: {}", other);
                Self::internal_error()
            }
        }
    }
}
