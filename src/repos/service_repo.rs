/*
 * Responsibility
 * - services テーブル向け SQLx 操作
 * - barber_id は必ず認証済み claims の userId から渡される
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct ServiceRow {
    pub id: i64,
    pub barber_id: i64,
    pub name: String,
    pub duration_minutes: i32,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

pub async fn create(
    db: &PgPool,
    barber_id: i64,
    name: &str,
    duration_minutes: i32,
    price: f64,
) -> Result<i64, RepoError> {
    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO services (barber_id, name, duration_minutes, price)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(barber_id)
    .bind(name)
    .bind(duration_minutes)
    .bind(price)
    .fetch_one(db)
    .await?;

    Ok(id)
}

pub async fn list_by_barber(db: &PgPool, barber_id: i64) -> Result<Vec<ServiceRow>, RepoError> {
    let rows = sqlx::query_as::<_, ServiceRow>(
        r#"
        SELECT id, barber_id, name, duration_minutes, price, created_at
        FROM services
        WHERE barber_id = $1
        ORDER BY id
        "#,
    )
    .bind(barber_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}
