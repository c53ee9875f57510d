/*
 * Responsibility
 * - GET / と GET /health (疎通用、認証なし)
 * - 未定義パスの fallback
 */
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::error::AppError;

pub async fn root() -> &'static str {
    "Hello World from the barber booking API!"
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Router fallback, so unknown paths also get a `{"error": ...}` body.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
