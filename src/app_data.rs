use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::SecretManager;
use crate::errors::InternalError;
use crate::services::{
    AccountService, AdminGate, AdminService, ProfileAssembler, RoleService, TokenService,
    UsernamePolicy,
};
use crate::stores::{
    AccountStore, BadgeStore, LinkStore, PageStore, ProfileStore, ReservedUsernameStore,
    RoleStore, TrackStore, WidgetStore,
};

/// Centralized application data following the main-owned stores pattern
///
/// All stores and services are created once in main.rs and shared across the
/// API structs. This eliminates store duplication and keeps every API
/// constructor signature stable.
pub struct AppData {
    pub db: DatabaseConnection,
    pub secret_manager: Arc<SecretManager>,
    pub account_service: Arc<AccountService>,
    pub admin_gate: Arc<AdminGate>,
    pub admin_service: Arc<AdminService>,
    pub profile_assembler: Arc<ProfileAssembler>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The database should be connected and migrated before calling this.
    ///
    /// # Errors
    ///
    /// Returns `InternalError` when secret manager initialization fails
    pub fn init(db: DatabaseConnection) -> Result<Self, InternalError> {
        tracing::info!("Initializing AppData...");

        tracing::debug!("Initializing secret manager...");
        let secret_manager = Arc::new(SecretManager::init().map_err(|e| {
            InternalError::parse("secret_manager", format!("Secret manager init failed: {}", e))
        })?);
        tracing::debug!("Secret manager initialized");

        tracing::debug!("Creating stores...");
        let account_store = Arc::new(AccountStore::new(
            db.clone(),
            secret_manager.password_pepper().to_string(),
        ));
        let profile_store = Arc::new(ProfileStore::new(db.clone()));
        let reserved_username_store = Arc::new(ReservedUsernameStore::new(db.clone()));
        let role_store = Arc::new(RoleStore::new(db.clone()));
        let page_store = Arc::new(PageStore::new(db.clone()));
        let link_store = Arc::new(LinkStore::new(db.clone()));
        let track_store = Arc::new(TrackStore::new(db.clone()));
        let badge_store = Arc::new(BadgeStore::new(db.clone()));
        let widget_store = Arc::new(WidgetStore::new(db.clone()));
        tracing::debug!("Stores created");

        tracing::debug!("Creating services...");
        let username_policy = Arc::new(UsernamePolicy::new(reserved_username_store.clone()));
        let token_service = Arc::new(TokenService::new(secret_manager.jwt_secret().to_string()));
        let role_service = Arc::new(RoleService::new(role_store));

        let admin_gate = Arc::new(AdminGate::new(
            secret_manager.admin_panel_secret().to_string(),
            secret_manager.jwt_secret().to_string(),
        ));

        let account_service = Arc::new(AccountService::new(
            account_store.clone(),
            profile_store.clone(),
            page_store.clone(),
            username_policy.clone(),
            token_service,
        ));

        let profile_assembler = Arc::new(ProfileAssembler::new(
            profile_store.clone(),
            page_store.clone(),
            link_store.clone(),
            track_store.clone(),
            badge_store.clone(),
            widget_store.clone(),
            role_service.clone(),
        ));

        let admin_service = Arc::new(AdminService::new(
            account_store,
            profile_store,
            reserved_username_store,
            role_service,
            page_store,
            link_store,
            track_store,
            badge_store,
            widget_store,
            username_policy,
        ));
        tracing::debug!("Services created");

        tracing::info!("AppData initialization complete");

        Ok(Self {
            db,
            secret_manager,
            account_service,
            admin_gate,
            admin_service,
            profile_assembler,
        })
    }
}
