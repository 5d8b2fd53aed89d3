use poem_openapi::Object;

use crate::types::db;

/// Fully assembled public page for one username.
///
/// This is the read model behind the unauthenticated profile route. It is
/// pure data composition; the only business rule applied during assembly is
/// the premium entitlement check on the page flags.
#[derive(Object, Debug)]
pub struct ProfileView {
    pub username: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub banner_url: Option<String>,
    pub location: Option<String>,
    pub occupation: Option<String>,
    pub tags: Vec<String>,
    /// Whether the owner currently holds the premium role
    pub premium: bool,
    pub page: PageView,
    pub links: Vec<LinkView>,
    pub tracks: Vec<TrackView>,
    pub badges: Vec<BadgeView>,
    pub widgets: Vec<WidgetView>,
}

/// Page presentation settings as rendered to visitors
#[derive(Object, Debug)]
pub struct PageView {
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
}

#[derive(Object, Debug)]
pub struct LinkView {
    pub id: String,
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
    pub display_order: i32,
}

#[derive(Object, Debug)]
pub struct TrackView {
    pub id: String,
    pub title: String,
    pub artist: Option<String>,
    pub audio_url: String,
    pub cover_url: Option<String>,
    pub duration: Option<i32>,
    pub display_order: i32,
}

#[derive(Object, Debug)]
pub struct BadgeView {
    pub id: String,
    pub badge_type: String,
    pub badge_data: Option<String>,
    pub display_order: i32,
}

#[derive(Object, Debug)]
pub struct WidgetView {
    pub id: String,
    pub widget_type: String,
    pub widget_data: Option<String>,
    pub display_order: i32,
}

/// Request body for claiming a new username
#[derive(Object, Debug)]
pub struct ClaimUsernameRequest {
    pub username: String,
}

/// Response for a successful username claim
#[derive(Object, Debug)]
pub struct ClaimUsernameResponse {
    /// The normalized username now on the profile
    pub username: String,
}

impl From<db::link::Model> for LinkView {
    fn from(m: db::link::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            url: m.url,
            icon: m.icon,
            display_order: m.display_order,
        }
    }
}

impl From<db::track::Model> for TrackView {
    fn from(m: db::track::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            artist: m.artist,
            audio_url: m.audio_url,
            cover_url: m.cover_url,
            duration: m.duration,
            display_order: m.display_order,
        }
    }
}

impl From<db::badge::Model> for BadgeView {
    fn from(m: db::badge::Model) -> Self {
        Self {
            id: m.id,
            badge_type: m.badge_type,
            badge_data: m.badge_data,
            display_order: m.display_order,
        }
    }
}

impl From<db::widget::Model> for WidgetView {
    fn from(m: db::widget::Model) -> Self {
        Self {
            id: m.id,
            widget_type: m.widget_type,
            widget_data: m.widget_data,
            display_order: m.display_order,
        }
    }
}
