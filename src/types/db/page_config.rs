use sea_orm::entity::prelude::*;

/// Per-user page presentation settings, one row per profile.
///
/// The premium_* flags are stored unconditionally; entitlement is checked
/// when the page is assembled for rendering, not at save time.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_pages")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(unique)]
    pub user_id: String,
    pub background_type: String,
    pub background_value: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub text_color: Option<String>,
    pub font_family: Option<String>,
    pub status: Option<String>,
    pub layout_stacked: bool,
    pub layout_showcase: bool,
    pub premium_bg_effects: bool,
    pub premium_name_effect: bool,
    pub premium_cursor_trail: bool,
    pub premium_starry_bg: bool,
    pub premium_audio_visualizer: bool,
    pub premium_tilting_card: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
