use crate::services::auth::token::{AuthError, Claims};

pub const BARBER: &str = "barber";

/// Exact, case-sensitive role check against an already verified claim set.
pub fn ensure_role(claims: &Claims, required: &str) -> Result<(), AuthError> {
    if claims.role != required {
        return Err(AuthError::RoleMismatch {
            required: required.to_string(),
        });
    }
    Ok(())
}
