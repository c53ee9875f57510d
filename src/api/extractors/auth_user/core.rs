use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::Claims;

/// Handler で検証済み Claims を受け取るための extractor
///
/// access middleware の内側でのみ使う前提。
/// 見つからない場合は配線ミスなので 500 を返す (401 ではない)。
pub struct AuthUser(pub Claims);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::error!(uri = %parts.uri, "AuthUser used on a route without access middleware");
                AppError::Internal
            })
    }
}
