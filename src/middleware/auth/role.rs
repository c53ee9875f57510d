//! Role guard. Must sit inside (after) `access::apply`.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::services::auth::{Claims, role};

#[derive(Debug, Clone, Copy)]
pub struct RequiredRole(pub &'static str);

/// Restrict every route currently in `router` to callers whose role equals `required`.
///
/// Layer order matters: call this before `access::apply` on the same router so the
/// token check wraps (and runs ahead of) the role check.
pub fn apply<S>(router: Router<S>, required: &'static str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn_with_state(
        RequiredRole(required),
        require_role,
    ))
}

pub async fn require_role(
    State(RequiredRole(required)): State<RequiredRole>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let Some(claims) = req.extensions().get::<Claims>() else {
        // Route wiring bug, not a client error.
        tracing::error!(required, "role guard reached without verified claims");
        return Err(AppError::Internal);
    };

    if let Err(err) = role::ensure_role(claims, required) {
        tracing::debug!(user_id = claims.user_id, role = %claims.role, required, "role rejected");
        return Err(err.into());
    }

    Ok(next.run(req).await)
}
