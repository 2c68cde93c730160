//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. IDs are
//! store-assigned integers and serialize as numbers.

use chrono::{DateTime, NaiveDate, Utc};
use member_core::value_objects::{MemberStatus, PlanActivation, SubscriptionStatus};
use rust_decimal::Decimal;
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Unpaginated list response: the full materialized result plus its size
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub total: usize,
    pub items: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }
}

// ============================================================================
// Member Responses
// ============================================================================

/// Member response
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub join_date: NaiveDate,
    pub status: MemberStatus,
    pub total_check_ins: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Plan Responses
// ============================================================================

/// Plan response
#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub duration_days: i32,
    pub activation: PlanActivation,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Subscription Responses
// ============================================================================

/// Subscription response
#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionResponse {
    pub id: i64,
    pub member_id: i64,
    pub plan_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: SubscriptionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Attendance Responses
// ============================================================================

/// Attendance response
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceResponse {
    pub id: i64,
    pub member_id: i64,
    pub check_in_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "healthy" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "not_ready" },
            database,
        }
    }
}
