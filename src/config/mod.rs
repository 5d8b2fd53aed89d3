pub mod logging;
pub mod secret_manager;

pub use logging::init_logging;
pub use secret_manager::SecretManager;
