//! Member database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for members table
#[derive(Debug, Clone, FromRow)]
pub struct MemberModel {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub join_date: NaiveDate,
    /// Guarded by a CHECK constraint: active/inactive/suspended
    pub status: String,
    pub total_check_ins: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
