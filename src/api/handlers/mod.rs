pub mod auth;
pub mod health;
pub mod services;
pub mod users;
