//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Member registration request
#[derive(Debug, Serialize)]
pub struct RegisterMemberRequest {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
}

impl RegisterMemberRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Member {suffix}"),
            // 10-20 chars, unique per test run
            phone: format!("555{suffix:09}"),
            status: None,
            join_date: None,
        }
    }
}

/// Member update request
#[derive(Debug, Default, Serialize)]
pub struct UpdateMemberRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Member response
#[derive(Debug, Deserialize)]
pub struct MemberResponse {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub join_date: String,
    pub status: String,
    pub total_check_ins: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// Plan creation request
#[derive(Debug, Serialize)]
pub struct CreatePlanRequest {
    pub name: String,
    pub price: Decimal,
    pub duration_days: i32,
}

impl CreatePlanRequest {
    pub fn unique(price: Decimal, duration_days: i32) -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Plan {suffix}"),
            price,
            duration_days,
        }
    }

    pub fn monthly() -> Self {
        Self::unique(Decimal::new(2999, 2), 30)
    }
}

/// Plan response
#[derive(Debug, Deserialize)]
pub struct PlanResponse {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub duration_days: i32,
    pub activation: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Subscription creation request
#[derive(Debug, Serialize)]
pub struct CreateSubscriptionRequest {
    pub member_id: i64,
    pub plan_id: i64,
    pub start_date: String,
}

/// Subscription response
#[derive(Debug, Deserialize)]
pub struct SubscriptionResponse {
    pub id: i64,
    pub member_id: i64,
    pub plan_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Check-in request
#[derive(Debug, Serialize)]
pub struct CheckInRequest {
    pub member_id: i64,
}

/// Attendance response
#[derive(Debug, Deserialize)]
pub struct AttendanceResponse {
    pub id: i64,
    pub member_id: i64,
    pub check_in_time: String,
    pub check_out_time: Option<String>,
    pub note: Option<String>,
    pub created_at: String,
}

/// Unpaginated list response
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    pub total: usize,
    pub items: Vec<T>,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
