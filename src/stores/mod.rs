pub mod account_store;
pub mod badge_store;
pub mod link_store;
pub mod page_store;
pub mod profile_store;
pub mod reserved_username_store;
pub mod role_store;
pub mod track_store;
pub mod widget_store;

pub use account_store::AccountStore;
pub use badge_store::BadgeStore;
pub use link_store::LinkStore;
pub use page_store::PageStore;
pub use profile_store::ProfileStore;
pub use reserved_username_store::ReservedUsernameStore;
pub use role_store::RoleStore;
pub use track_store::TrackStore;
pub use widget_store::WidgetStore;
