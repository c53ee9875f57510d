//! HTTP-level middleware (cross-cutting concerns).
//!
//! Responsibility:
//! - Request-Id generation + propagation (X-Request-Id), carried on the trace span
//! - Access logging (TraceLayer), body size limit, global timeout
//! - CORS: permissive in development, allowlist from Config in production
//! - Security response headers for browser clients
//!
//! Applied once in `app.rs` after state is bound, so it wraps every route
//! including the auth failures.

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::error_handling::HandleErrorLayer;
use axum::http::{HeaderName, HeaderValue, Method, Request, StatusCode, header};
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;

const REQUEST_ID_HEADER: &str = "x-request-id";
const BODY_LIMIT_BYTES: usize = 1024 * 1024;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

// Set only if the handler did not set them already.
const SECURITY_HEADERS: [(&str, &str); 5] = [
    ("x-frame-options", "DENY"),
    ("content-security-policy", "frame-ancestors 'none'"),
    ("x-content-type-options", "nosniff"),
    ("referrer-policy", "no-referrer"),
    ("permissions-policy", "camera=(), microphone=(), geolocation=()"),
];

pub fn apply(router: Router, config: &Config) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    let trace = TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");
        tracing::info_span!(
            "http",
            method = %req.method(),
            uri = %req.uri(),
            request_id = %request_id,
        )
    });

    let layers = ServiceBuilder::new()
        // Make the service error `Infallible` by converting errors into responses.
        .layer(HandleErrorLayer::new(|err: BoxError| async move {
            if err.is::<tower::timeout::error::Elapsed>() {
                StatusCode::REQUEST_TIMEOUT
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }))
        .layer(SetRequestIdLayer::new(
            request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header))
        .layer(trace)
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT));

    let mut router = router.layer(layers);
    for (name, value) in SECURITY_HEADERS {
        router = router.layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        ));
    }

    router.layer(cors_layer(config))
}

/// Never combines a wildcard origin with credentials.
fn cors_layer(config: &Config) -> CorsLayer {
    let cors = if config.app_env.is_production() {
        // Empty allowlist allows nothing.
        let allowed: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        CorsLayer::new().allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _req| allowed.iter().any(|v| v == origin),
        ))
    } else {
        CorsLayer::new().allow_origin(Any)
    };

    cors.allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .max_age(Duration::from_secs(60 * 10))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppEnv;
    use axum::routing::get;
    use std::net::SocketAddr;
    use tower::ServiceExt;

    fn config(app_env: AppEnv, origins: &[&str]) -> Config {
        Config {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            app_env,
            cors_allowed_origins: origins.iter().map(|s| s.to_string()).collect(),
            database_url: "postgres://localhost/test".to_string(),
            database_max_connections: 1,
            jwt_secret: "secret".to_string(),
            access_token_ttl_seconds: 60,
            access_token_leeway_seconds: 0,
        }
    }

    fn app(config: &Config) -> Router {
        apply(Router::new().route("/", get(|| async { "ok" })), config)
    }

    #[tokio::test]
    async fn responses_carry_request_id_and_security_headers() {
        let res = app(&config(AppEnv::Development, &[]))
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key(REQUEST_ID_HEADER));
        for (name, value) in SECURITY_HEADERS {
            assert_eq!(res.headers()[name], value);
        }
    }

    #[tokio::test]
    async fn incoming_request_id_is_propagated() {
        let res = app(&config(AppEnv::Development, &[]))
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(REQUEST_ID_HEADER, "abc-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.headers()[REQUEST_ID_HEADER], "abc-123");
    }

    #[tokio::test]
    async fn production_cors_only_echoes_allowlisted_origins() {
        let config = config(AppEnv::Production, &["https://shop.example"]);

        let allowed = app(&config)
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, "https://shop.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://shop.example"
        );

        let denied = app(&config)
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::ORIGIN, "https://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(
            !denied
                .headers()
                .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        );
    }
}
