//! Plan database model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for plans table
#[derive(Debug, Clone, FromRow)]
pub struct PlanModel {
    pub id: i64,
    pub name: String,
    /// NUMERIC(10, 2), CHECK price >= 0
    pub price: Decimal,
    /// CHECK duration_days > 0
    pub duration_days: i32,
    pub activation: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
