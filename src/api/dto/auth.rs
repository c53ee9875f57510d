/*
 * Responsibility
 * - /register, /login の request/response DTO
 * - validate() は「値があるか」だけを見る (形式チェックはしない)
 */
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if is_blank(&self.email) || is_blank(&self.password) || is_blank(&self.role) {
            return Err("Email, password and role are required");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if is_blank(&self.email) || is_blank(&self.password) {
            return Err("Email and password are required");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
    pub role: String,
}

// Empty string counts as missing; whitespace-only passwords are still passwords.
fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}
