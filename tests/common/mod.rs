// Common test utilities for integration tests

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

use biolink_backend::services::{
    AccountService, AdminGate, AdminService, ProfileAssembler, RoleService, TokenService,
    UsernamePolicy,
};
use biolink_backend::stores::{
    AccountStore, BadgeStore, LinkStore, PageStore, ProfileStore, ReservedUsernameStore,
    RoleStore, TrackStore, WidgetStore,
};

pub const ADMIN_SECRET: &str = "aP$92!mT37^rKq#ZxL0@wF";
pub const JWT_SECRET: &str = "integration-secret-key-at-least-32-chars";
pub const PASSWORD_PEPPER: &str = "integration-pepper";
pub const PASSWORD: &str = "correct-horse-battery";

/// The full service graph wired the way main wires it, against an
/// in-memory database.
#[allow(dead_code)]
pub struct TestApp {
    pub db: DatabaseConnection,
    pub account_service: Arc<AccountService>,
    pub admin_gate: Arc<AdminGate>,
    pub admin_service: Arc<AdminService>,
    pub profile_assembler: Arc<ProfileAssembler>,
    pub link_store: Arc<LinkStore>,
    pub track_store: Arc<TrackStore>,
    pub badge_store: Arc<BadgeStore>,
    pub widget_store: Arc<WidgetStore>,
    pub profile_store: Arc<ProfileStore>,
    pub reserved_username_store: Arc<ReservedUsernameStore>,
}

pub async fn setup_app() -> TestApp {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let account_store = Arc::new(AccountStore::new(db.clone(), PASSWORD_PEPPER.to_string()));
    let profile_store = Arc::new(ProfileStore::new(db.clone()));
    let reserved_username_store = Arc::new(ReservedUsernameStore::new(db.clone()));
    let role_store = Arc::new(RoleStore::new(db.clone()));
    let page_store = Arc::new(PageStore::new(db.clone()));
    let link_store = Arc::new(LinkStore::new(db.clone()));
    let track_store = Arc::new(TrackStore::new(db.clone()));
    let badge_store = Arc::new(BadgeStore::new(db.clone()));
    let widget_store = Arc::new(WidgetStore::new(db.clone()));

    let username_policy = Arc::new(UsernamePolicy::new(reserved_username_store.clone()));
    let token_service = Arc::new(TokenService::new(JWT_SECRET.to_string()));
    let role_service = Arc::new(RoleService::new(role_store));

    let admin_gate = Arc::new(AdminGate::new(
        ADMIN_SECRET.to_string(),
        JWT_SECRET.to_string(),
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
        profile_store.clone(),
        reserved_username_store.clone(),
        role_service,
        page_store,
        link_store.clone(),
        track_store.clone(),
        badge_store.clone(),
        widget_store.clone(),
        username_policy,
    ));

    TestApp {
        db,
        account_service,
        admin_gate,
        admin_service,
        profile_assembler,
        link_store,
        track_store,
        badge_store,
        widget_store,
        profile_store,
        reserved_username_store,
    }
}

/// Sign up a user through the real flow, returning the user id
#[allow(dead_code)]
pub async fn sign_up_user(app: &TestApp, email: &str, username: &str) -> String {
    let (user_id, _) = app
        .account_service
        .sign_up(email, PASSWORD, username)
        .await
        .expect("Failed to sign up test user");
    user_id
}
