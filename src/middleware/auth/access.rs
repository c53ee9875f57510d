//! Bearer token verification → `Claims` を extensions に入れる
//!
//! - `Authorization` が無い / token 部分が無い: 401
//! - 署名不一致 / 形式不正 / 期限切れ: 403
//!
//! どちらもクライアント側の想定内エラーなので debug ログのみ。

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::services::auth::TokenService;

/// Require a verified token on every route currently in `router`.
///
/// Uses `route_layer`, so unmatched paths still 404 instead of 401.
pub fn apply<S>(router: Router<S>, tokens: Arc<TokenService>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn_with_state(tokens, require_auth))
}

pub async fn require_auth(
    State(tokens): State<Arc<TokenService>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    // Non-ASCII header values count as "no token".
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let claims = match tokens.authenticate(authorization) {
        Ok(claims) => claims,
        Err(err) => {
            tracing::debug!(error = ?err, "access token rejected");
            return Err(err.into());
        }
    };

    // middleware → extractor / role guard への受け渡し
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
