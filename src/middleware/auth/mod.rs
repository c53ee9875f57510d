/*
 * Responsibility
 * - 認証 (access) → 認可 (role) の 2 段パイプライン
 * - access が Claims を extensions に載せ、role はそれを前提に判定する
 */
pub mod access;
pub mod role;
