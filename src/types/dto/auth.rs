use poem_openapi::Object;

/// Request body for account sign-up
#[derive(Object, Debug)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    /// Desired username; normalized to lowercase before any check
    pub username: String,
}

/// Response for a successful sign-up
#[derive(Object, Debug)]
pub struct SignUpResponse {
    pub user_id: String,
    /// The normalized username that was claimed
    pub username: String,
}

/// Request body for login
#[derive(Object, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Session token response
#[derive(Object, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    /// Seconds until the access token expires
    pub expires_in: i64,
}

/// Authenticated caller identity
#[derive(Object, Debug)]
pub struct WhoAmIResponse {
    pub user_id: String,
    pub email: String,
    pub expires_at: i64,
}
