pub mod auth;
pub mod services;
pub mod users;
