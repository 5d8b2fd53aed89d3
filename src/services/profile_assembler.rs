use std::sync::Arc;

use crate::errors::internal::{InternalError, ProfileError};
use crate::services::username_policy::UsernamePolicy;
use crate::services::RoleService;
use crate::stores::{BadgeStore, LinkStore, PageStore, ProfileStore, TrackStore, WidgetStore};
use crate::types::db::page_config;
use crate::types::dto::profile::{PageView, ProfileView};
use crate::types::Role;

/// Builds the full public page payload for one username
///
/// Pure read-side composition: profile, page settings and the four ordered
/// content collections are fetched and merged into a single view. The one
/// business rule applied here is the premium entitlement check; stored
/// premium flags are masked off when the owner does not currently hold the
/// premium role, so revoking the role immediately downgrades the public
/// page without touching stored settings.
pub struct ProfileAssembler {
    profile_store: Arc<ProfileStore>,
    page_store: Arc<PageStore>,
    link_store: Arc<LinkStore>,
    track_store: Arc<TrackStore>,
    badge_store: Arc<BadgeStore>,
    widget_store: Arc<WidgetStore>,
    role_service: Arc<RoleService>,
}

impl ProfileAssembler {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        profile_store: Arc<ProfileStore>,
        page_store: Arc<PageStore>,
        link_store: Arc<LinkStore>,
        track_store: Arc<TrackStore>,
        badge_store: Arc<BadgeStore>,
        widget_store: Arc<WidgetStore>,
        role_service: Arc<RoleService>,
    ) -> Self {
        Self {
            profile_store,
            page_store,
            link_store,
            track_store,
            badge_store,
            widget_store,
            role_service,
        }
    }

    /// Assemble the public page for a username
    ///
    /// The lookup key is normalized first, so any casing of a claimed
    /// username resolves to the same page.
    ///
    /// # Returns
    /// * `Ok(ProfileView)` - The complete page payload
    /// * `Err(ProfileError::NotFound)` - No profile with this username
    /// * `Err(ProfileError::PageNotFound)` - Profile exists but its page row is gone
    pub async fn assemble(&self, username: &str) -> Result<ProfileView, InternalError> {
        let normalized = UsernamePolicy::normalize(username);

        let profile = self
            .profile_store
            .find_by_username(&normalized)
            .await?
            .ok_or_else(|| ProfileError::NotFound(normalized.clone()))?;

        let user_id = profile.id.clone();

        let page = self.page_store.get_for_user(&user_id).await?;
        let links = self.link_store.list_for_user(&user_id).await?;
        let tracks = self.track_store.list_for_user(&user_id).await?;
        let badges = self.badge_store.list_for_user(&user_id).await?;
        let widgets = self.widget_store.list_for_user(&user_id).await?;

        let premium = self.role_service.has_role(&user_id, Role::Premium).await?;

        let tags = profile
            .tags
            .as_deref()
            .and_then(|raw| serde_json::from_str::<Vec<String>>(raw).ok())
            .unwrap_or_default();

        Ok(ProfileView {
            username: profile.username,
            display_name: profile.display_name,
            bio: profile.bio,
            avatar_url: profile.avatar_url,
            banner_url: profile.banner_url,
            location: profile.location,
            occupation: profile.occupation,
            tags,
            premium,
            page: Self::page_view(page, premium),
            links: links.into_iter().map(Into::into).collect(),
            tracks: tracks.into_iter().map(Into::into).collect(),
            badges: badges.into_iter().map(Into::into).collect(),
            widgets: widgets.into_iter().map(Into::into).collect(),
        })
    }

    /// Project stored page settings into the rendered view
    ///
    /// Premium flags pass through only for entitled owners; the stored
    /// values are preserved so re-granting the role restores them.
    fn page_view(page: page_config::Model, premium: bool) -> PageView {
        PageView {
            background_type: page.background_type,
            background_value: page.background_value,
            primary_color: page.primary_color,
            secondary_color: page.secondary_color,
            text_color: page.text_color,
            font_family: page.font_family,
            status: page.status,
            layout_stacked: page.layout_stacked,
            layout_showcase: page.layout_showcase,
            premium_bg_effects: premium && page.premium_bg_effects,
            premium_name_effect: premium && page.premium_name_effect,
            premium_cursor_trail: premium && page.premium_cursor_trail,
            premium_starry_bg: premium && page.premium_starry_bg,
            premium_audio_visualizer: premium && page.premium_audio_visualizer,
            premium_tilting_card: premium && page.premium_tilting_card,
        }
    }
}

#[cfg(test)]
#[path = "profile_assembler_test.rs"]
mod profile_assembler_test;
