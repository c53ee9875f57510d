/*
 * Responsibility
 * - HTTP 層 (routes / handlers / dto / extractors) の公開ポイント
 */
pub mod dto;
pub mod extractors;
pub mod handlers;
mod routes;

pub use routes::routes;
