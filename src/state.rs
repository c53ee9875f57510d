/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - db: PgPool, auth: TokenService
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::auth::TokenService;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub auth: Arc<TokenService>,
}

impl AppState {
    pub fn new(db: sqlx::PgPool, auth: Arc<TokenService>) -> Self {
        Self { db, auth }
    }
}
