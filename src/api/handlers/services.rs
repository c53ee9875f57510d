/*
 * Responsibility
 * - /services (barber 専用): 作成と自分のサービス一覧
 * - barber_id は body ではなく検証済み claims の userId から取る
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::{
        dto::services::{CreateServiceRequest, CreateServiceResponse, ServiceResponse},
        extractors::{AuthUser, JsonBody},
    },
    error::AppError,
    repos::service_repo,
    state::AppState,
};

pub async fn create_service(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
    JsonBody(req): JsonBody<CreateServiceRequest>,
) -> Result<(StatusCode, Json<CreateServiceResponse>), AppError> {
    let new = req.validate().map_err(AppError::bad_request)?;

    let service_id = service_repo::create(
        &state.db,
        claims.user_id,
        new.name,
        new.duration_minutes,
        new.price,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateServiceResponse {
            message: "Service created successfully",
            service_id,
        }),
    ))
}

pub async fn list_services(
    State(state): State<AppState>,
    AuthUser(claims): AuthUser,
) -> Result<Json<Vec<ServiceResponse>>, AppError> {
    let rows = service_repo::list_by_barber(&state.db, claims.user_id).await?;

    Ok(Json(rows.into_iter().map(ServiceResponse::from).collect()))
}
