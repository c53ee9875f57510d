/*
 * Responsibility
 * - POST /register: password を hash して users に insert
 * - POST /login: password 照合 → token 発行
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::{
        dto::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
        extractors::JsonBody,
    },
    error::AppError,
    repos::{
        error::RepoError,
        user_repo::{self, NewUser},
    },
    services::auth::password,
    state::AppState,
};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    req.validate().map_err(AppError::bad_request)?;

    // validate() guarantees these are present
    let (Some(email), Some(raw_password), Some(role)) = (req.email, req.password, req.role) else {
        return Err(AppError::bad_request("Email, password and role are required"));
    };

    let password_hash = password::hash_password_blocking(raw_password).await?;

    let user_id = user_repo::create(
        &state.db,
        NewUser {
            email: &email,
            password_hash: &password_hash,
            role: &role,
            first_name: req.first_name.as_deref(),
            last_name: req.last_name.as_deref(),
        },
    )
    .await
    .map_err(|e| match e {
        RepoError::Conflict => AppError::conflict("Email is already registered"),
        e => e.into(),
    })?;

    tracing::info!(user_id, %role, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created successfully",
            user_id,
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    req.validate().map_err(AppError::bad_request)?;

    let (Some(email), Some(raw_password)) = (req.email, req.password) else {
        return Err(AppError::bad_request("Email and password are required"));
    };

    let user = user_repo::find_by_email(&state.db, &email)
        .await?
        .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

    let matches = password::verify_password_blocking(raw_password, user.password_hash).await?;
    if !matches {
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    }

    let token = state
        .auth
        .issue(user.id, &user.role, user.first_name.as_deref())
        .map_err(|e| {
            tracing::error!(error = %e, "failed to sign token");
            AppError::Internal
        })?;

    Ok(Json(LoginResponse {
        message: "Login successful",
        token,
        role: user.role,
    }))
}
