/*
 * Responsibility
 * - ドメインに依存しないサービス層 (token / password / role)
 */
pub mod auth;
