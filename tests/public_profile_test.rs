mod common;

#[tokio::test]
async fn assembled_page_orders_every_collection() {
    let app = common::setup_app().await;
    let user_id = common::sign_up_user(&app, "a@example.com", "collector").await;

    app.link_store
        .add(&user_id, "Second", "https://b.example.com", None, 2)
        .await
        .unwrap();
    app.link_store
        .add(&user_id, "First", "https://a.example.com", None, 1)
        .await
        .unwrap();
    app.badge_store.add(&user_id, "late", None, 9).await.unwrap();
    app.badge_store.add(&user_id, "early", None, 1).await.unwrap();
    app.widget_store.add(&user_id, "clock", None, 2).await.unwrap();
    app.widget_store.add(&user_id, "weather", None, 1).await.unwrap();

    let view = app.profile_assembler.assemble("collector").await.unwrap();

    let links: Vec<&str> = view.links.iter().map(|l| l.title.as_str()).collect();
    assert_eq!(links, vec!["First", "Second"]);
    let badges: Vec<&str> = view.badges.iter().map(|b| b.badge_type.as_str()).collect();
    assert_eq!(badges, vec!["early", "late"]);
    let widgets: Vec<&str> = view.widgets.iter().map(|w| w.widget_type.as_str()).collect();
    assert_eq!(widgets, vec!["weather", "clock"]);
}

#[tokio::test]
async fn premium_visuals_follow_the_role_grant() {
    let app = common::setup_app().await;
    let user_id = common::sign_up_user(&app, "a@example.com", "flashy").await;

    // Stored flags are on, but the grant decides what renders
    use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
    let page = biolink_backend::types::db::page_config::Entity::find()
        .filter(biolink_backend::types::db::page_config::Column::UserId.eq(user_id.as_str()))
        .one(&app.db)
        .await
        .unwrap()
        .unwrap();
    let mut active: biolink_backend::types::db::page_config::ActiveModel = page.into();
    active.premium_starry_bg = Set(true);
    active.premium_name_effect = Set(true);
    active.update(&app.db).await.unwrap();

    let view = app.profile_assembler.assemble("flashy").await.unwrap();
    assert!(!view.premium);
    assert!(!view.page.premium_starry_bg);

    app.admin_service.toggle_role(&user_id, "premium").await.unwrap();
    let view = app.profile_assembler.assemble("flashy").await.unwrap();
    assert!(view.premium);
    assert!(view.page.premium_starry_bg);
    assert!(view.page.premium_name_effect);

    app.admin_service.toggle_role(&user_id, "premium").await.unwrap();
    let view = app.profile_assembler.assemble("flashy").await.unwrap();
    assert!(!view.page.premium_starry_bg);
}

#[tokio::test]
async fn username_change_moves_the_public_page() {
    let app = common::setup_app().await;
    let user_id = common::sign_up_user(&app, "a@example.com", "before").await;

    app.account_service
        .claim_username(&user_id, "after")
        .await
        .unwrap();

    assert!(app.profile_assembler.assemble("before").await.is_err());
    let view = app.profile_assembler.assemble("AFTER").await.unwrap();
    assert_eq!(view.username, "after");
}
