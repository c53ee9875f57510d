/*
 * Responsibility
 * - GET /users (一覧、認証なし)
 */
use axum::{Json, extract::State};

use crate::{api::dto::users::UserResponse, error::AppError, repos::user_repo, state::AppState};

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let rows = user_repo::list(&state.db).await?;

    Ok(Json(rows.into_iter().map(UserResponse::from).collect()))
}
