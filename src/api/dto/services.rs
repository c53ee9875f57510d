/*
 * Responsibility
 * - /services の request/response DTO
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::repos::service_repo::ServiceRow;

#[derive(Debug, Deserialize)]
pub struct CreateServiceRequest {
    pub name: Option<String>,
    pub duration_minutes: Option<i32>,
    pub price: Option<f64>,
}

/// Validated form of `CreateServiceRequest`.
#[derive(Debug, PartialEq)]
pub struct NewService<'a> {
    pub name: &'a str,
    pub duration_minutes: i32,
    pub price: f64,
}

impl CreateServiceRequest {
    pub fn validate(&self) -> Result<NewService<'_>, &'static str> {
        let (Some(name), Some(duration_minutes), Some(price)) =
            (self.name.as_deref(), self.duration_minutes, self.price)
        else {
            return Err("Name, duration and price are required");
        };

        // zero is treated the same as absent
        if name.is_empty() || duration_minutes == 0 || price == 0.0 {
            return Err("Name, duration and price are required");
        }
        if duration_minutes < 0 || !price.is_finite() || price < 0.0 {
            return Err("Duration and price must be positive");
        }

        Ok(NewService {
            name,
            duration_minutes,
            price,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CreateServiceResponse {
    pub message: &'static str,
    #[serde(rename = "serviceId")]
    pub service_id: i64,
}

#[derive(Debug, Serialize)]
pub struct ServiceResponse {
    pub id: i64,
    pub barber_id: i64,
    pub name: String,
    pub duration_minutes: i32,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl From<ServiceRow> for ServiceResponse {
    fn from(row: ServiceRow) -> Self {
        Self {
            id: row.id,
            barber_id: row.barber_id,
            name: row.name,
            duration_minutes: row.duration_minutes,
            price: row.price,
            created_at: row.created_at,
        }
    }
}
