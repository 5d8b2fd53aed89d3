// Test utilities shared across unit and integration tests
// Only compiled when running tests

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::sync::{Arc, Mutex};

use crate::stores::{
    AccountStore, BadgeStore, LinkStore, PageStore, ProfileStore, ReservedUsernameStore,
    RoleStore, TrackStore, WidgetStore,
};

/// Creates an in-memory test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Every store wired to one in-memory database
pub struct TestStores {
    pub db: DatabaseConnection,
    pub account_store: Arc<AccountStore>,
    pub profile_store: Arc<ProfileStore>,
    pub reserved_username_store: Arc<ReservedUsernameStore>,
    pub role_store: Arc<RoleStore>,
    pub page_store: Arc<PageStore>,
    pub link_store: Arc<LinkStore>,
    pub track_store: Arc<TrackStore>,
    pub badge_store: Arc<BadgeStore>,
    pub widget_store: Arc<WidgetStore>,
}

/// Creates test stores with standard configuration
pub async fn setup_test_stores() -> TestStores {
    let db = setup_test_db().await;

    let password_pepper = "test-pepper-for-unit-tests".to_string();

    TestStores {
        account_store: Arc::new(AccountStore::new(db.clone(), password_pepper)),
        profile_store: Arc::new(ProfileStore::new(db.clone())),
        reserved_username_store: Arc::new(ReservedUsernameStore::new(db.clone())),
        role_store: Arc::new(RoleStore::new(db.clone())),
        page_store: Arc::new(PageStore::new(db.clone())),
        link_store: Arc::new(LinkStore::new(db.clone())),
        track_store: Arc::new(TrackStore::new(db.clone())),
        badge_store: Arc::new(BadgeStore::new(db.clone())),
        widget_store: Arc::new(WidgetStore::new(db.clone())),
        db,
    }
}

/// Creates an account, profile and default page config, returning the user id
pub async fn create_test_user(stores: &TestStores, email: &str, username: &str) -> String {
    let user_id = stores
        .account_store
        .add_account(email, "test-password")
        .await
        .expect("Failed to create test account");

    stores
        .profile_store
        .insert(&user_id, username)
        .await
        .expect("Failed to create test profile");

    stores
        .page_store
        .create_defaults(&user_id)
        .await
        .expect("Failed to create test page config");

    user_id
}

/// Helper to manage environment variables in tests
///
/// Cleans up specified environment variables on creation and drop,
/// ensuring test isolation when dealing with global environment state.
pub struct EnvGuard {
    vars: Vec<String>,
}

impl EnvGuard {
    pub fn new(vars: Vec<&str>) -> Self {
        // Clean up before setting new values
        for var in &vars {
            unsafe {
                std::env::remove_var(var);
            }
        }
        Self {
            vars: vars.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for var in &self.vars {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }
}

/// Global mutex for tests that modify environment variables
///
/// Environment variables are process-global, so tests that modify them
/// must run serially to avoid race conditions.
pub static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());
