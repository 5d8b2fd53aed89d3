use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::api::auth::BearerAuth;
use crate::errors::admin::AdminError;
use crate::services::{AdminGate, AdminService};
use crate::types::dto::admin::{
    AddReservedUsernameRequest, AdminLoginRequest, AdminOkResponse, AdminTokenResponse,
    DashboardResponse, ReservedUsernameEntry, ToggleRoleRequest, ToggleRoleResponse,
    UpdateUserRequest,
};

/// Admin panel API endpoints
///
/// Every endpoint except login re-verifies the admin token on each call;
/// nothing here trusts prior requests.
pub struct AdminApi {
    admin_gate: Arc<AdminGate>,
    admin_service: Arc<AdminService>,
}

impl AdminApi {
    pub fn new(admin_gate: Arc<AdminGate>, admin_service: Arc<AdminService>) -> Self {
        Self {
            admin_gate,
            admin_service,
        }
    }
}

/// API tags for admin endpoints
#[derive(Tags)]
enum AdminTags {
    /// Admin panel endpoints
    Admin,
}

#[OpenApi(prefix_path = "/admin")]
impl AdminApi {
    /// Exchange the admin panel secret for a short-lived admin token
    #[oai(path = "/login", method = "post", tag = "AdminTags::Admin")]
    async fn login(
        &self,
        body: Json<AdminLoginRequest>,
    ) -> Result<Json<AdminTokenResponse>, AdminError> {
        let token = self.admin_gate.authenticate(&body.secret)?;

        Ok(Json(AdminTokenResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.admin_gate.expires_in_seconds(),
        }))
    }

    /// Load the full admin dashboard
    #[oai(path = "/dashboard", method = "get", tag = "AdminTags::Admin")]
    async fn dashboard(&self, auth: BearerAuth) -> Result<Json<DashboardResponse>, AdminError> {
        self.admin_gate.verify(&auth.0.token)?;

        let dashboard = self.admin_service.load_dashboard().await?;
        Ok(Json(dashboard))
    }

    /// Delete a user and all of their content
    #[oai(path = "/users/:id", method = "delete", tag = "AdminTags::Admin")]
    async fn delete_user(
        &self,
        auth: BearerAuth,
        id: Path<String>,
    ) -> Result<Json<AdminOkResponse>, AdminError> {
        self.admin_gate.verify(&auth.0.token)?;

        self.admin_service.delete_user(&id.0).await?;
        Ok(Json(AdminOkResponse { success: true }))
    }

    /// Toggle a role grant for a user
    #[oai(
        path = "/users/:id/toggle-role",
        method = "post",
        tag = "AdminTags::Admin"
    )]
    async fn toggle_role(
        &self,
        auth: BearerAuth,
        id: Path<String>,
        body: Json<ToggleRoleRequest>,
    ) -> Result<Json<ToggleRoleResponse>, AdminError> {
        self.admin_gate.verify(&auth.0.token)?;

        let (role, granted) = self.admin_service.toggle_role(&id.0, &body.role).await?;
        Ok(Json(ToggleRoleResponse {
            role: role.as_str().to_string(),
            granted,
        }))
    }

    /// Admin edit of a user's profile
    #[oai(path = "/users/:id", method = "patch", tag = "AdminTags::Admin")]
    async fn update_user(
        &self,
        auth: BearerAuth,
        id: Path<String>,
        body: Json<UpdateUserRequest>,
    ) -> Result<Json<AdminOkResponse>, AdminError> {
        self.admin_gate.verify(&auth.0.token)?;

        if body.username.is_none() {
            return Err(AdminError::invalid_payload("No fields to update"));
        }

        self.admin_service
            .update_user(&id.0, body.username.as_deref())
            .await?;
        Ok(Json(AdminOkResponse { success: true }))
    }

    /// Reserve a username
    #[oai(path = "/reserved-usernames", method = "post", tag = "AdminTags::Admin")]
    async fn add_reserved_username(
        &self,
        auth: BearerAuth,
        body: Json<AddReservedUsernameRequest>,
    ) -> Result<Json<ReservedUsernameEntry>, AdminError> {
        self.admin_gate.verify(&auth.0.token)?;

        let entry = self
            .admin_service
            .add_reserved_username(&body.username, body.reason.clone())
            .await?;
        Ok(Json(entry))
    }

    /// Drop a username reservation
    #[oai(
        path = "/reserved-usernames/:id",
        method = "delete",
        tag = "AdminTags::Admin"
    )]
    async fn delete_reserved_username(
        &self,
        auth: BearerAuth,
        id: Path<String>,
    ) -> Result<Json<AdminOkResponse>, AdminError> {
        self.admin_gate.verify(&auth.0.token)?;

        self.admin_service.delete_reserved_username(&id.0).await?;
        Ok(Json(AdminOkResponse { success: true }))
    }
}
