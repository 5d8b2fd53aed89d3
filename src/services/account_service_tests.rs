use std::sync::Arc;

use crate::errors::auth::AuthError;
use crate::errors::internal::{InternalError, UsernameError};
use crate::services::{AccountService, TokenService, UsernamePolicy};
use crate::test::utils::{setup_test_stores, TestStores};

fn service_for(stores: &TestStores) -> AccountService {
    let policy = Arc::new(UsernamePolicy::new(Arc::clone(
        &stores.reserved_username_store,
    )));
    let tokens = Arc::new(TokenService::new(
        "test-secret-key-minimum-32-characters-long".to_string(),
    ));
    AccountService::new(
        Arc::clone(&stores.account_store),
        Arc::clone(&stores.profile_store),
        Arc::clone(&stores.page_store),
        policy,
        tokens,
    )
}

#[tokio::test]
async fn sign_up_creates_account_profile_and_page() {
    let stores = setup_test_stores().await;
    let service = service_for(&stores);

    let (user_id, username) = service
        .sign_up("a@example.com", "hunter2-but-longer", "  Raid_01 ")
        .await
        .unwrap();

    assert_eq!(username, "raid_01");

    let profile = stores.profile_store.get_by_id(&user_id).await.unwrap();
    assert_eq!(profile.username, "raid_01");

    // Default page config exists
    let page = stores.page_store.get_for_user(&user_id).await.unwrap();
    assert_eq!(page.background_type, "color");
    assert!(!page.premium_bg_effects);
}

#[tokio::test]
async fn sign_up_rejects_duplicate_email() {
    let stores = setup_test_stores().await;
    let service = service_for(&stores);

    service
        .sign_up("a@example.com", "hunter2-but-longer", "user_one")
        .await
        .unwrap();

    let result = service
        .sign_up("a@example.com", "hunter2-but-longer", "user_two")
        .await;

    assert!(matches!(result, Err(AuthError::DuplicateEmail(_))));
}

#[tokio::test]
async fn sign_up_rejects_reserved_username_before_any_write() {
    let stores = setup_test_stores().await;
    stores
        .reserved_username_store
        .add("admin_panel", None)
        .await
        .unwrap();
    let service = service_for(&stores);

    let result = service
        .sign_up("a@example.com", "hunter2-but-longer", "Admin_Panel")
        .await;
    assert!(matches!(result, Err(AuthError::ReservedUsername(_))));

    // Nothing was written, so the email is free for a valid attempt
    service
        .sign_up("a@example.com", "hunter2-but-longer", "fine_name")
        .await
        .unwrap();
}

#[tokio::test]
async fn failed_username_claim_rolls_back_the_account() {
    let stores = setup_test_stores().await;
    let service = service_for(&stores);

    service
        .sign_up("first@example.com", "hunter2-but-longer", "taken_name")
        .await
        .unwrap();

    // Second sign-up loses the username claim after its account insert
    let result = service
        .sign_up("second@example.com", "hunter2-but-longer", "taken_name")
        .await;
    assert!(matches!(result, Err(AuthError::DuplicateUsername(_))));

    // The compensating delete freed the email for a retry
    let (user_id, username) = service
        .sign_up("second@example.com", "hunter2-but-longer", "other_name")
        .await
        .unwrap();
    assert_eq!(username, "other_name");
    assert!(stores.profile_store.get_by_id(&user_id).await.is_ok());
}

#[tokio::test]
async fn sign_in_returns_a_valid_session_token() {
    let stores = setup_test_stores().await;
    let service = service_for(&stores);

    let (user_id, _) = service
        .sign_up("a@example.com", "hunter2-but-longer", "raid_01")
        .await
        .unwrap();

    let (token, expires_in) = service
        .sign_in("a@example.com", "hunter2-but-longer")
        .await
        .unwrap();
    assert_eq!(expires_in, 900);

    let claims = service.authenticate(&token).unwrap();
    assert_eq!(claims.sub, user_id);

    let email = service.email_for(&claims.sub).await.unwrap();
    assert_eq!(email, "a@example.com");
}

#[tokio::test]
async fn sign_in_rejects_wrong_password_and_unknown_email() {
    let stores = setup_test_stores().await;
    let service = service_for(&stores);

    service
        .sign_up("a@example.com", "hunter2-but-longer", "raid_01")
        .await
        .unwrap();

    let result = service.sign_in("a@example.com", "wrong-password").await;
    assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));

    let result = service.sign_in("ghost@example.com", "hunter2-but-longer").await;
    assert!(matches!(result, Err(AuthError::InvalidCredentials(_))));
}

#[tokio::test]
async fn claim_username_changes_the_profile() {
    let stores = setup_test_stores().await;
    let service = service_for(&stores);

    let (user_id, _) = service
        .sign_up("a@example.com", "hunter2-but-longer", "old_name")
        .await
        .unwrap();

    let new_name = service.claim_username(&user_id, " NEW_name ").await.unwrap();
    assert_eq!(new_name, "new_name");

    let profile = stores.profile_store.get_by_id(&user_id).await.unwrap();
    assert_eq!(profile.username, "new_name");

    // The old name is released and claimable again
    service
        .sign_up("b@example.com", "hunter2-but-longer", "old_name")
        .await
        .unwrap();
}

#[tokio::test]
async fn claim_username_enforces_policy_and_uniqueness() {
    let stores = setup_test_stores().await;
    stores
        .reserved_username_store
        .add("support", None)
        .await
        .unwrap();
    let service = service_for(&stores);

    let (user_a, _) = service
        .sign_up("a@example.com", "hunter2-but-longer", "user_a")
        .await
        .unwrap();
    service
        .sign_up("b@example.com", "hunter2-but-longer", "user_b")
        .await
        .unwrap();

    let result = service.claim_username(&user_a, "x").await;
    assert!(matches!(
        result,
        Err(InternalError::Username(UsernameError::InvalidFormat(_)))
    ));

    let result = service.claim_username(&user_a, "support").await;
    assert!(matches!(
        result,
        Err(InternalError::Username(UsernameError::Reserved(_)))
    ));

    let result = service.claim_username(&user_a, "user_b").await;
    assert!(matches!(
        result,
        Err(InternalError::Username(UsernameError::Duplicate(_)))
    ));

    // Failed claims left the original username in place
    let profile = stores.profile_store.get_by_id(&user_a).await.unwrap();
    assert_eq!(profile.username, "user_a");
}
