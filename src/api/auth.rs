use poem_openapi::{auth::Bearer, payload::Json, OpenApi, SecurityScheme, Tags};
use std::sync::Arc;

use crate::errors::auth::AuthError;
use crate::services::AccountService;
use crate::types::dto::auth::{
    LoginRequest, SignUpRequest, SignUpResponse, TokenResponse, WhoAmIResponse,
};

/// Authentication API endpoints
pub struct AuthApi {
    account_service: Arc<AccountService>,
}

impl AuthApi {
    pub fn new(account_service: Arc<AccountService>) -> Self {
        Self { account_service }
    }
}

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct BearerAuth(pub Bearer);

/// API tags for authentication endpoints
#[derive(Tags)]
enum AuthTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/auth")]
impl AuthApi {
    /// Create an account and claim a username
    #[oai(path = "/signup", method = "post", tag = "AuthTags::Authentication")]
    async fn signup(&self, body: Json<SignUpRequest>) -> Result<Json<SignUpResponse>, AuthError> {
        let (user_id, username) = self
            .account_service
            .sign_up(&body.email, &body.password, &body.username)
            .await?;

        Ok(Json(SignUpResponse { user_id, username }))
    }

    /// Login with email and password to receive a session token
    #[oai(path = "/login", method = "post", tag = "AuthTags::Authentication")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<Json<TokenResponse>, AuthError> {
        let (access_token, expires_in) = self
            .account_service
            .sign_in(&body.email, &body.password)
            .await?;

        Ok(Json(TokenResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
        }))
    }

    /// Verify the session token and return the caller's identity
    #[oai(path = "/whoami", method = "get", tag = "AuthTags::Authentication")]
    async fn whoami(&self, auth: BearerAuth) -> Result<Json<WhoAmIResponse>, AuthError> {
        let claims = self.account_service.authenticate(&auth.0.token)?;
        let email = self.account_service.email_for(&claims.sub).await?;

        Ok(Json(WhoAmIResponse {
            user_id: claims.sub,
            email,
            expires_at: claims.exp,
        }))
    }
}
