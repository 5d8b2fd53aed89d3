use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::auth::BearerAuth;
use crate::errors::profile::ProfileApiError;
use crate::services::{AccountService, ProfileAssembler};
use crate::types::dto::profile::{ClaimUsernameRequest, ClaimUsernameResponse, ProfileView};

/// Public profile and self-service profile endpoints
pub struct ProfileApi {
    profile_assembler: Arc<ProfileAssembler>,
    account_service: Arc<AccountService>,
}

impl ProfileApi {
    pub fn new(
        profile_assembler: Arc<ProfileAssembler>,
        account_service: Arc<AccountService>,
    ) -> Self {
        Self {
            profile_assembler,
            account_service,
        }
    }
}

/// API tags for profile endpoints
#[derive(Tags)]
enum ProfileTags {
    /// Public profile pages
    Profiles,
}

#[OpenApi]
impl ProfileApi {
    /// Fetch the fully assembled public page for a username
    ///
    /// Unauthenticated; this is the page visitors see.
    #[oai(
        path = "/profiles/:username",
        method = "get",
        tag = "ProfileTags::Profiles"
    )]
    async fn get_profile(
        &self,
        username: Path<String>,
    ) -> Result<Json<ProfileView>, ProfileApiError> {
        let view = self.profile_assembler.assemble(&username.0).await?;
        Ok(Json(view))
    }

    /// Change the authenticated caller's username
    #[oai(path = "/me/username", method = "put", tag = "ProfileTags::Profiles")]
    async fn claim_username(
        &self,
        auth: BearerAuth,
        body: Json<ClaimUsernameRequest>,
    ) -> Result<Json<ClaimUsernameResponse>, ProfileApiError> {
        let claims = self
            .account_service
            .authenticate(&auth.0.token)
            .map_err(|_| ProfileApiError::unauthorized())?;

        let username = self
            .account_service
            .claim_username(&claims.sub, &body.username)
            .await?;

        Ok(Json(ClaimUsernameResponse { username }))
    }
}
