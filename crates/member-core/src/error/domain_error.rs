//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Member not found: {0}")]
    MemberNotFound(i64),

    #[error("Plan not found: {0}")]
    PlanNotFound(i64),

    #[error("Subscription not found: {0}")]
    SubscriptionNotFound(i64),

    #[error("No active subscription found for member {0}")]
    NoCurrentSubscription(i64),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Phone number already registered")]
    PhoneAlreadyRegistered,

    #[error("Plan name already exists")]
    PlanNameTaken,

    #[error("Subscription already cancelled: {0}")]
    AlreadyCancelled(i64),

    // =========================================================================
    // Invalid State
    // =========================================================================
    #[error("Cannot subscribe to inactive plan: {0}")]
    InactivePlan(i64),

    #[error("No active subscription for member {0}")]
    NoActiveSubscription(i64),

    // =========================================================================
    // Validation
    // =========================================================================
    #[error("Validation error: {0}")]
    Validation(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::MemberNotFound(_) => "UNKNOWN_MEMBER",
            Self::PlanNotFound(_) => "UNKNOWN_PLAN",
            Self::SubscriptionNotFound(_) => "UNKNOWN_SUBSCRIPTION",
            Self::NoCurrentSubscription(_) => "NO_CURRENT_SUBSCRIPTION",

            Self::PhoneAlreadyRegistered => "PHONE_ALREADY_REGISTERED",
            Self::PlanNameTaken => "PLAN_NAME_TAKEN",
            Self::AlreadyCancelled(_) => "SUBSCRIPTION_ALREADY_CANCELLED",

            Self::InactivePlan(_) => "INACTIVE_PLAN",
            Self::NoActiveSubscription(_) => "NO_ACTIVE_SUBSCRIPTION",

            Self::Validation(_) => "VALIDATION_ERROR",

            Self::Database(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::MemberNotFound(_)
                | Self::PlanNotFound(_)
                | Self::SubscriptionNotFound(_)
                | Self::NoCurrentSubscription(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::PhoneAlreadyRegistered | Self::PlanNameTaken | Self::AlreadyCancelled(_)
        )
    }

    /// Check if this is an invalid-state error (rejected business operation)
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InactivePlan(_) | Self::NoActiveSubscription(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
