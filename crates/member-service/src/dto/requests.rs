//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Shape checks (lengths, ranges, the non-negative price) are
//! rejected here, before any request reaches the lifecycle.

use chrono::NaiveDate;
use member_core::value_objects::{MemberStatus, PlanActivation};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Price must be zero or positive; zero is a legal price (free trials)
fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        return Err(ValidationError::new("price_negative"));
    }
    Ok(())
}

// ============================================================================
// Member Requests
// ============================================================================

/// Member registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterMemberRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 10, max = 20, message = "Phone must be 10-20 characters"))]
    pub phone: String,

    /// Defaults to active
    #[serde(default)]
    pub status: Option<MemberStatus>,

    /// Defaults to today
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
}

/// Update member request (partial)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMemberRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 10, max = 20, message = "Phone must be 10-20 characters"))]
    pub phone: Option<String>,

    pub status: Option<MemberStatus>,
}

// ============================================================================
// Plan Requests
// ============================================================================

/// Create plan request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlanRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(custom(function = "validate_price", message = "Price must not be negative"))]
    pub price: Decimal,

    #[validate(range(min = 1, message = "Duration must be at least one day"))]
    pub duration_days: i32,
}

/// Update plan request (partial)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePlanRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(custom(function = "validate_price", message = "Price must not be negative"))]
    pub price: Option<Decimal>,

    #[validate(range(min = 1, message = "Duration must be at least one day"))]
    pub duration_days: Option<i32>,

    pub activation: Option<PlanActivation>,
}

// ============================================================================
// Subscription Requests
// ============================================================================

/// Create subscription request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSubscriptionRequest {
    #[validate(range(min = 1, message = "member_id must be positive"))]
    pub member_id: i64,

    #[validate(range(min = 1, message = "plan_id must be positive"))]
    pub plan_id: i64,

    pub start_date: NaiveDate,
}

// ============================================================================
// Attendance Requests
// ============================================================================

/// Check-in request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckInRequest {
    #[validate(range(min = 1, message = "member_id must be positive"))]
    pub member_id: i64,
}
