use std::sync::Arc;

use crate::errors::internal::{InternalError, ProfileError, UsernameError};
use crate::services::{AdminService, RoleService, UsernamePolicy};
use crate::test::utils::{create_test_user, setup_test_stores, TestStores};
use crate::types::Role;

fn service_for(stores: &TestStores) -> AdminService {
    let policy = Arc::new(UsernamePolicy::new(Arc::clone(
        &stores.reserved_username_store,
    )));
    AdminService::new(
        Arc::clone(&stores.account_store),
        Arc::clone(&stores.profile_store),
        Arc::clone(&stores.reserved_username_store),
        Arc::new(RoleService::new(Arc::clone(&stores.role_store))),
        Arc::clone(&stores.page_store),
        Arc::clone(&stores.link_store),
        Arc::clone(&stores.track_store),
        Arc::clone(&stores.badge_store),
        Arc::clone(&stores.widget_store),
        policy,
    )
}

#[tokio::test]
async fn dashboard_joins_users_emails_and_roles() {
    let stores = setup_test_stores().await;
    let user_a = create_test_user(&stores, "a@example.com", "user_a").await;
    let user_b = create_test_user(&stores, "b@example.com", "user_b").await;
    stores.role_store.grant(&user_a, Role::Premium).await.unwrap();
    stores.role_store.grant(&user_a, Role::Admin).await.unwrap();
    stores
        .reserved_username_store
        .add("staff", Some("internal".to_string()))
        .await
        .unwrap();

    let service = service_for(&stores);
    let dashboard = service.load_dashboard().await.unwrap();

    assert_eq!(dashboard.users.len(), 2);
    let row_a = dashboard.users.iter().find(|u| u.id == user_a).unwrap();
    assert_eq!(row_a.email, "a@example.com");
    assert_eq!(row_a.username, "user_a");
    assert!(row_a.roles.contains(&"premium".to_string()));
    assert!(row_a.roles.contains(&"admin".to_string()));

    let row_b = dashboard.users.iter().find(|u| u.id == user_b).unwrap();
    assert!(row_b.roles.is_empty());

    assert_eq!(dashboard.reserved_usernames.len(), 1);
    assert_eq!(dashboard.reserved_usernames[0].username, "staff");
    assert_eq!(
        dashboard.reserved_usernames[0].reason.as_deref(),
        Some("internal")
    );

    assert_eq!(dashboard.analytics.total_users, 2);
    assert_eq!(dashboard.analytics.reserved_count, 1);
    assert_eq!(dashboard.analytics.premium_count, 1);
    assert_eq!(dashboard.analytics.admin_count, 1);
}

#[tokio::test]
async fn delete_user_cascades_through_all_content() {
    let stores = setup_test_stores().await;
    let user_id = create_test_user(&stores, "a@example.com", "doomed").await;
    let survivor = create_test_user(&stores, "b@example.com", "survivor").await;

    stores
        .link_store
        .add(&user_id, "Site", "https://example.com", None, 1)
        .await
        .unwrap();
    stores
        .track_store
        .add(&user_id, "Song", None, "https://example.com/a.mp3", 1)
        .await
        .unwrap();
    stores.badge_store.add(&user_id, "verified", None, 1).await.unwrap();
    stores.widget_store.add(&user_id, "clock", None, 1).await.unwrap();
    stores.role_store.grant(&user_id, Role::Premium).await.unwrap();

    stores
        .link_store
        .add(&survivor, "Keep", "https://keep.example.com", None, 1)
        .await
        .unwrap();

    let service = service_for(&stores);
    service.delete_user(&user_id).await.unwrap();

    // Everything belonging to the user is gone
    assert!(matches!(
        stores.profile_store.get_by_id(&user_id).await,
        Err(InternalError::Profile(ProfileError::NotFound(_)))
    ));
    assert!(stores.link_store.list_for_user(&user_id).await.unwrap().is_empty());
    assert!(stores.track_store.list_for_user(&user_id).await.unwrap().is_empty());
    assert!(stores.badge_store.list_for_user(&user_id).await.unwrap().is_empty());
    assert!(stores.widget_store.list_for_user(&user_id).await.unwrap().is_empty());
    assert!(!stores.role_store.has_role(&user_id, Role::Premium).await.unwrap());
    assert!(matches!(
        stores.page_store.get_for_user(&user_id).await,
        Err(InternalError::Profile(ProfileError::PageNotFound(_)))
    ));
    assert!(stores.account_store.get_by_id(&user_id).await.is_err());

    // The other user is untouched
    assert!(stores.profile_store.get_by_id(&survivor).await.is_ok());
    assert_eq!(stores.link_store.list_for_user(&survivor).await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_user_frees_email_and_username_for_reuse() {
    let stores = setup_test_stores().await;
    let user_id = create_test_user(&stores, "a@example.com", "recycled").await;

    let service = service_for(&stores);
    service.delete_user(&user_id).await.unwrap();

    // Both identifiers are claimable again
    create_test_user(&stores, "a@example.com", "recycled").await;
}

#[tokio::test]
async fn delete_unknown_user_is_not_found() {
    let stores = setup_test_stores().await;
    let service = service_for(&stores);

    let result = service.delete_user("no-such-id").await;
    assert!(matches!(
        result,
        Err(InternalError::Profile(ProfileError::NotFound(_)))
    ));
}

#[tokio::test]
async fn toggle_role_flips_membership() {
    let stores = setup_test_stores().await;
    let user_id = create_test_user(&stores, "a@example.com", "user_a").await;
    let service = service_for(&stores);

    let (role, granted) = service.toggle_role(&user_id, "premium").await.unwrap();
    assert_eq!(role, Role::Premium);
    assert!(granted);

    let (_, granted) = service.toggle_role(&user_id, "premium").await.unwrap();
    assert!(!granted);
}

#[tokio::test]
async fn toggle_role_rejects_unknown_role_and_user() {
    let stores = setup_test_stores().await;
    let user_id = create_test_user(&stores, "a@example.com", "user_a").await;
    let service = service_for(&stores);

    // "user" is implicit and never a grant
    let result = service.toggle_role(&user_id, "user").await;
    assert!(matches!(result, Err(InternalError::Parse { .. })));

    let result = service.toggle_role(&user_id, "superuser").await;
    assert!(matches!(result, Err(InternalError::Parse { .. })));

    let result = service.toggle_role("no-such-id", "premium").await;
    assert!(matches!(
        result,
        Err(InternalError::Profile(ProfileError::NotFound(_)))
    ));
}

#[tokio::test]
async fn reserved_usernames_round_trip() {
    let stores = setup_test_stores().await;
    let service = service_for(&stores);

    let entry = service
        .add_reserved_username("  Staff ", Some("ops".to_string()))
        .await
        .unwrap();
    assert_eq!(entry.username, "staff");

    assert!(stores.reserved_username_store.is_reserved("STAFF").await.unwrap());

    // Duplicate reservation is rejected
    let result = service.add_reserved_username("staff", None).await;
    assert!(matches!(
        result,
        Err(InternalError::Username(UsernameError::Duplicate(_)))
    ));

    service.delete_reserved_username(&entry.id).await.unwrap();
    assert!(!stores.reserved_username_store.is_reserved("staff").await.unwrap());
}

#[tokio::test]
async fn reserving_garbage_is_rejected() {
    let stores = setup_test_stores().await;
    let service = service_for(&stores);

    let result = service.add_reserved_username("no spaces!", None).await;
    assert!(matches!(
        result,
        Err(InternalError::Username(UsernameError::InvalidFormat(_)))
    ));
}

#[tokio::test]
async fn update_user_renames_through_the_claim_policy() {
    let stores = setup_test_stores().await;
    let user_a = create_test_user(&stores, "a@example.com", "user_a").await;
    create_test_user(&stores, "b@example.com", "user_b").await;
    stores
        .reserved_username_store
        .add("staff", None)
        .await
        .unwrap();
    let service = service_for(&stores);

    service.update_user(&user_a, Some("Fresh_Name")).await.unwrap();
    let profile = stores.profile_store.get_by_id(&user_a).await.unwrap();
    assert_eq!(profile.username, "fresh_name");

    // Admins obey reservations and uniqueness too
    let result = service.update_user(&user_a, Some("staff")).await;
    assert!(matches!(
        result,
        Err(InternalError::Username(UsernameError::Reserved(_)))
    ));
    let result = service.update_user(&user_a, Some("user_b")).await;
    assert!(matches!(
        result,
        Err(InternalError::Username(UsernameError::Duplicate(_)))
    ));

    // No username in the payload means no change
    service.update_user(&user_a, None).await.unwrap();
    let profile = stores.profile_store.get_by_id(&user_a).await.unwrap();
    assert_eq!(profile.username, "fresh_name");
}
