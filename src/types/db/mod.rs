pub mod account;
pub mod badge;
pub mod link;
pub mod page_config;
pub mod profile;
pub mod reserved_username;
pub mod role_grant;
pub mod track;
pub mod widget;
