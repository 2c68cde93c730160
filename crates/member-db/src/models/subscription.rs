//! Subscription database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for subscriptions table
#[derive(Debug, Clone, FromRow)]
pub struct SubscriptionModel {
    pub id: i64,
    /// FK to members, ON DELETE CASCADE
    pub member_id: i64,
    /// FK to plans, ON DELETE RESTRICT
    pub plan_id: i64,
    pub start_date: NaiveDate,
    /// CHECK end_date >= start_date
    pub end_date: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
