/*
 * Responsibility
 * - users テーブル向け SQLx 操作
 * - PgPool を受け取り list / create / find_by_email を提供
 * - email の重複は RepoError::Conflict として返す
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewUser<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: &'a str,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
}

pub async fn list(db: &PgPool) -> Result<Vec<UserRow>, RepoError> {
    let rows = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, email, password_hash, role, first_name, last_name, created_at
        FROM users
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

/// Insert a user and return its id.
pub async fn create(db: &PgPool, user: NewUser<'_>) -> Result<i64, RepoError> {
    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO users (email, password_hash, role, first_name, last_name)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(user.email)
    .bind(user.password_hash)
    .bind(user.role)
    .bind(user.first_name)
    .bind(user.last_name)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(id)
}

pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<UserRow>, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, email, password_hash, role, first_name, last_name, created_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(db)
    .await?;

    Ok(row)
}
