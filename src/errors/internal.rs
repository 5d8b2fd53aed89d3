use thiserror::Error;

use crate::types::role::InvalidRole;

/// Internal error type for store and service operations
///
/// Hybrid taxonomy separating:
/// - Infrastructure errors (Database, Transaction, Parse, Crypto) - shared by all stores
/// - Domain errors (Username, Account, Profile, AdminGate) - specific to one area
///
/// This error type is NOT exposed via API. API endpoints must explicitly
/// convert these to AuthError, AdminError or ProfileApiError.
#[derive(Error, Debug)]
pub enum InternalError {
    // ============================================================
    // Infrastructure Errors (shared by all stores)
    // ============================================================

    /// Database query or operation failed. Covers timeouts and lost
    /// connections; callers surface these as a retryable generic failure.
    #[error("Database error: {operation} failed: {source}")]
    Database {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    /// Database transaction failed
    #[error("Transaction error: {operation} failed: {source}")]
    Transaction {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    /// Failed to parse a value (UUID, JSON, role name, etc.)
    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse {
        value_type: String,
        message: String,
    },

    /// Cryptographic operation failed (hashing, verification, etc.)
    #[error("Crypto error: {operation} failed: {message}")]
    Crypto {
        operation: String,
        message: String,
    },

    // ============================================================
    // Domain-Specific Errors
    // ============================================================

    /// Username policy errors (format, reservation, uniqueness)
    #[error(transparent)]
    Username(#[from] UsernameError),

    /// Account/identity errors (credentials, duplicate email)
    #[error(transparent)]
    Account(#[from] AccountError),

    /// Profile errors (missing profile or page)
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// Admin gate errors (secret check, admin token)
    #[error(transparent)]
    AdminGate(#[from] AdminGateError),
}

impl InternalError {
    /// Create a database error with context
    pub fn database(operation: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::Database {
            operation: operation.into(),
            source,
        }
    }

    /// Create a transaction error with context
    pub fn transaction(operation: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::Transaction {
            operation: operation.into(),
            source,
        }
    }

    /// Create a parse error with context
    pub fn parse(value_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            value_type: value_type.into(),
            message: message.into(),
        }
    }

    /// Create a crypto error with context
    pub fn crypto(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Crypto {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

impl From<InvalidRole> for InternalError {
    fn from(e: InvalidRole) -> Self {
        Self::Parse {
            value_type: "role".to_string(),
            message: e.to_string(),
        }
    }
}

/// Username policy errors
///
/// Reserved and Duplicate are expected, recoverable outcomes of a claim
/// attempt, not exceptional conditions. They must surface to users as two
/// distinct messages.
#[derive(Error, Debug)]
pub enum UsernameError {
    /// Candidate failed syntactic validation (length 3-20, [a-z0-9_])
    #[error("Invalid username format: {0}")]
    InvalidFormat(String),

    /// Candidate appears in the reserved username list
    #[error("Username is reserved: {0}")]
    Reserved(String),

    /// Candidate is already claimed by another profile
    #[error("Username already taken: {0}")]
    Duplicate(String),
}

/// Account/identity errors
#[derive(Error, Debug)]
pub enum AccountError {
    /// Invalid email or password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// An account already exists for this email
    #[error("Account already exists: {0}")]
    DuplicateEmail(String),

    /// Account not found
    #[error("Account not found: {0}")]
    NotFound(String),
}

/// Profile errors
#[derive(Error, Debug)]
pub enum ProfileError {
    /// No profile for this username or user id. Terminal, not retryable.
    #[error("Profile not found: {0}")]
    NotFound(String),

    /// Profile exists but its page config row is missing
    #[error("Page config not found for user: {0}")]
    PageNotFound(String),
}

/// Admin gate errors
#[derive(Error, Debug)]
pub enum AdminGateError {
    /// Supplied secret did not match. Callers show a generic message and
    /// must not reveal which check failed.
    #[error("Invalid admin secret")]
    InvalidSecret,

    /// Too many failed attempts in the current window
    #[error("Too many failed attempts")]
    Throttled,

    /// Admin token is invalid or malformed
    #[error("Invalid admin token")]
    InvalidToken,

    /// Admin token has expired
    #[error("Expired admin token")]
    ExpiredToken,
}
