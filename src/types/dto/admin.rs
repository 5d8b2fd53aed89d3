use poem_openapi::Object;

/// Request body for the admin panel login
#[derive(Object, Debug)]
pub struct AdminLoginRequest {
    pub secret: String,
}

/// Short-lived admin token issued after a successful secret check
#[derive(Object, Debug)]
pub struct AdminTokenResponse {
    pub token: String,
    pub token_type: String,
    /// Seconds until the admin token expires
    pub expires_in: i64,
}

/// One user row on the admin dashboard
#[derive(Object, Debug)]
pub struct DashboardUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: i64,
    /// Granted roles ("admin", "premium"); empty for plain users
    pub roles: Vec<String>,
}

/// One reserved username row on the admin dashboard
#[derive(Object, Debug)]
pub struct ReservedUsernameEntry {
    pub id: String,
    pub username: String,
    pub reason: Option<String>,
    pub created_at: i64,
}

/// Aggregate counts shown on the admin dashboard
#[derive(Object, Debug)]
pub struct DashboardAnalytics {
    pub total_users: u64,
    pub reserved_count: u64,
    pub premium_count: u64,
    pub admin_count: u64,
}

/// Full admin dashboard payload
#[derive(Object, Debug)]
pub struct DashboardResponse {
    pub users: Vec<DashboardUser>,
    pub reserved_usernames: Vec<ReservedUsernameEntry>,
    pub analytics: DashboardAnalytics,
}

/// Request body for toggling a role grant
#[derive(Object, Debug)]
pub struct ToggleRoleRequest {
    /// "admin" or "premium"
    pub role: String,
}

/// New membership state after a toggle
#[derive(Object, Debug)]
pub struct ToggleRoleResponse {
    pub role: String,
    /// true when the toggle granted the role, false when it revoked it
    pub granted: bool,
}

/// Request body for reserving a username
#[derive(Object, Debug)]
pub struct AddReservedUsernameRequest {
    pub username: String,
    pub reason: Option<String>,
}

/// Request body for admin edits to a user
#[derive(Object, Debug)]
pub struct UpdateUserRequest {
    /// New username; runs the full claim policy when present
    pub username: Option<String>,
}

/// Generic success acknowledgement
#[derive(Object, Debug)]
pub struct AdminOkResponse {
    pub success: bool,
}
