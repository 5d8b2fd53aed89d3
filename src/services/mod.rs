// Services layer - Business logic and orchestration
pub mod account_service;
pub mod admin_gate;
pub mod admin_service;
pub mod profile_assembler;
pub mod role_service;
pub mod token_service;
pub mod username_policy;

pub use account_service::AccountService;
pub use admin_gate::AdminGate;
pub use admin_service::AdminService;
pub use profile_assembler::ProfileAssembler;
pub use role_service::RoleService;
pub use token_service::TokenService;
pub use username_policy::UsernamePolicy;
