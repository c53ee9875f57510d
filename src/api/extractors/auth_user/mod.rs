/*!
 * Authenticated user extractor
 *
 * Responsibility:
 * - middleware (access) が検証済み Claims を extensions に載せた後、handler に渡す
 * - handler は Option ではなく Claims そのものを受け取る
 *
 * Public API:
 * - AuthUser
 */

mod core;

pub use core::AuthUser;
