pub mod db;
pub mod dto;
pub mod internal;
pub mod role;

pub use role::Role;
