/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth: route 単位 (route_layer)、http: Router 全体
 */
pub mod auth;
pub mod http;
