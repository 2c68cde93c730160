//! Error handling utilities for repositories

use member_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::Database(e.to_string())
}

/// Create a "member not found" error
pub fn member_not_found(id: i64) -> DomainError {
    DomainError::MemberNotFound(id)
}

/// Create a "plan not found" error
pub fn plan_not_found(id: i64) -> DomainError {
    DomainError::PlanNotFound(id)
}

/// Create a "subscription not found" error
pub fn subscription_not_found(id: i64) -> DomainError {
    DomainError::SubscriptionNotFound(id)
}
