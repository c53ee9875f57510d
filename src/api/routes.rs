/*
 * Responsibility
 * - URL 構造を定義
 * - 認証 / barber 認可が必要な範囲を route_layer で決める
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::auth::{access, role};
use crate::services::auth::role::BARBER;
use crate::state::AppState;

use crate::api::handlers::{
    auth::{login, register},
    health::{health, not_found, root},
    services::{create_service, list_services},
    users::list_users,
};

pub fn routes(state: &AppState) -> Router<AppState> {
    // role first, access second: access ends up outermost and runs first
    let barber_only = Router::new().route("/services", get(list_services).post(create_service));
    let barber_only = role::apply(barber_only, BARBER);
    let barber_only = access::apply(barber_only, state.auth.clone());

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/users", get(list_users))
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(barber_only)
        .fallback(not_found)
}
