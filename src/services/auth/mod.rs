pub mod factory;
pub mod password;
pub mod role;
pub mod token;

pub use factory::build_token_service;
pub use token::{AuthError, Claims, TokenService};
