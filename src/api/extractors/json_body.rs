use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` の request 側。rejection (形式不正 / Content-Type 無し / 型違い) を
/// AppError 経由にして `{"error": ...}` で返す。
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
