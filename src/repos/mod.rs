pub mod error;
pub mod service_repo;
pub mod user_repo;
