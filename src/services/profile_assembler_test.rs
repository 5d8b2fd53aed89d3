#[cfg(test)]
mod tests {
    use sea_orm::{ActiveModelTrait, Set};
    use std::sync::Arc;

    use crate::errors::internal::{InternalError, ProfileError};
    use crate::services::{ProfileAssembler, RoleService};
    use crate::test::utils::{create_test_user, setup_test_stores, TestStores};
    use crate::types::db::page_config;
    use crate::types::Role;

    fn assembler_for(stores: &TestStores) -> ProfileAssembler {
        ProfileAssembler::new(
            Arc::clone(&stores.profile_store),
            Arc::clone(&stores.page_store),
            Arc::clone(&stores.link_store),
            Arc::clone(&stores.track_store),
            Arc::clone(&stores.badge_store),
            Arc::clone(&stores.widget_store),
            Arc::new(RoleService::new(Arc::clone(&stores.role_store))),
        )
    }

    /// Flip every stored premium flag on for a user's page
    async fn enable_premium_flags(stores: &TestStores, user_id: &str) {
        let page = stores.page_store.get_for_user(user_id).await.unwrap();
        let mut active: page_config::ActiveModel = page.into();
        active.premium_bg_effects = Set(true);
        active.premium_name_effect = Set(true);
        active.premium_cursor_trail = Set(true);
        active.premium_starry_bg = Set(true);
        active.premium_audio_visualizer = Set(true);
        active.premium_tilting_card = Set(true);
        active.update(&stores.db).await.unwrap();
    }

    #[tokio::test]
    async fn unknown_username_is_not_found() {
        let stores = setup_test_stores().await;
        let assembler = assembler_for(&stores);

        let result = assembler.assemble("nobody_here").await;
        assert!(matches!(
            result,
            Err(InternalError::Profile(ProfileError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn lookup_is_case_insensitive() {
        let stores = setup_test_stores().await;
        create_test_user(&stores, "a@example.com", "raid_01").await;
        let assembler = assembler_for(&stores);

        let view = assembler.assemble("  RaId_01 ").await.unwrap();
        assert_eq!(view.username, "raid_01");
    }

    #[tokio::test]
    async fn fresh_profile_assembles_with_defaults() {
        let stores = setup_test_stores().await;
        create_test_user(&stores, "a@example.com", "raid_01").await;
        let assembler = assembler_for(&stores);

        let view = assembler.assemble("raid_01").await.unwrap();

        assert_eq!(view.username, "raid_01");
        assert_eq!(view.display_name.as_deref(), Some("raid_01"));
        assert_eq!(view.page.background_type, "color");
        assert!(!view.premium);
        assert!(view.links.is_empty());
        assert!(view.tracks.is_empty());
        assert!(view.badges.is_empty());
        assert!(view.widgets.is_empty());
        assert!(view.tags.is_empty());
    }

    #[tokio::test]
    async fn collections_come_back_in_display_order() {
        let stores = setup_test_stores().await;
        let user_id = create_test_user(&stores, "a@example.com", "raid_01").await;

        // Inserted out of order on purpose
        stores
            .link_store
            .add(&user_id, "Third", "https://c.example.com", None, 3)
            .await
            .unwrap();
        stores
            .link_store
            .add(&user_id, "First", "https://a.example.com", None, 1)
            .await
            .unwrap();
        stores
            .link_store
            .add(&user_id, "Second", "https://b.example.com", None, 2)
            .await
            .unwrap();

        stores
            .track_store
            .add(&user_id, "B side", None, "https://x.example.com/b.mp3", 2)
            .await
            .unwrap();
        stores
            .track_store
            .add(&user_id, "A side", None, "https://x.example.com/a.mp3", 1)
            .await
            .unwrap();

        let assembler = assembler_for(&stores);
        let view = assembler.assemble("raid_01").await.unwrap();

        let titles: Vec<&str> = view.links.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);

        let tracks: Vec<&str> = view.tracks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(tracks, vec!["A side", "B side"]);
    }

    #[tokio::test]
    async fn premium_flags_masked_without_premium_role() {
        let stores = setup_test_stores().await;
        let user_id = create_test_user(&stores, "a@example.com", "raid_01").await;
        enable_premium_flags(&stores, &user_id).await;

        let assembler = assembler_for(&stores);
        let view = assembler.assemble("raid_01").await.unwrap();

        // Flags are stored true but the owner holds no premium role
        assert!(!view.premium);
        assert!(!view.page.premium_bg_effects);
        assert!(!view.page.premium_name_effect);
        assert!(!view.page.premium_cursor_trail);
        assert!(!view.page.premium_starry_bg);
        assert!(!view.page.premium_audio_visualizer);
        assert!(!view.page.premium_tilting_card);
    }

    #[tokio::test]
    async fn premium_flags_pass_through_for_premium_owner() {
        let stores = setup_test_stores().await;
        let user_id = create_test_user(&stores, "a@example.com", "raid_01").await;
        enable_premium_flags(&stores, &user_id).await;
        stores.role_store.grant(&user_id, Role::Premium).await.unwrap();

        let assembler = assembler_for(&stores);
        let view = assembler.assemble("raid_01").await.unwrap();

        assert!(view.premium);
        assert!(view.page.premium_bg_effects);
        assert!(view.page.premium_tilting_card);
    }

    #[tokio::test]
    async fn revoking_premium_downgrades_without_touching_stored_settings() {
        let stores = setup_test_stores().await;
        let user_id = create_test_user(&stores, "a@example.com", "raid_01").await;
        enable_premium_flags(&stores, &user_id).await;
        stores.role_store.grant(&user_id, Role::Premium).await.unwrap();

        let assembler = assembler_for(&stores);
        assert!(assembler.assemble("raid_01").await.unwrap().page.premium_bg_effects);

        stores.role_store.revoke(&user_id, Role::Premium).await.unwrap();
        let view = assembler.assemble("raid_01").await.unwrap();
        assert!(!view.page.premium_bg_effects);

        // Stored settings survived the downgrade
        let page = stores.page_store.get_for_user(&user_id).await.unwrap();
        assert!(page.premium_bg_effects);

        // Re-granting restores the rendered flags with no page write
        stores.role_store.grant(&user_id, Role::Premium).await.unwrap();
        assert!(assembler.assemble("raid_01").await.unwrap().page.premium_bg_effects);
    }

    #[tokio::test]
    async fn tags_parse_from_stored_json() {
        let stores = setup_test_stores().await;
        let user_id = create_test_user(&stores, "a@example.com", "raid_01").await;

        let profile = stores.profile_store.get_by_id(&user_id).await.unwrap();
        let mut active: crate::types::db::profile::ActiveModel = profile.into();
        active.tags = Set(Some(r#"["music","dev"]"#.to_string()));
        active.update(&stores.db).await.unwrap();

        let assembler = assembler_for(&stores);
        let view = assembler.assemble("raid_01").await.unwrap();
        assert_eq!(view.tags, vec!["music".to_string(), "dev".to_string()]);
    }
}
