//! Plan entity - a priced, fixed-duration offering

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::value_objects::PlanActivation;

/// Subscription plan entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub id: i64,
    /// Unique across the catalog, enforced at the store
    pub name: String,
    /// Fixed-point, two fraction digits, never negative
    pub price: Decimal,
    /// Whole days a subscription bought against this plan remains valid
    pub duration_days: i32,
    pub activation: PlanActivation,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Plan {
    /// Check if the plan can currently be subscribed to
    #[inline]
    pub fn is_active(&self) -> bool {
        self.activation.is_active()
    }

    /// Derive the end date for a subscription starting on `start`.
    ///
    /// Pure calendar-day arithmetic: `start + duration_days`, no timezone
    /// shifting. Computed once at subscription creation and never
    /// recomputed, even if the plan's duration is edited later.
    #[must_use]
    pub fn term_end(&self, start: NaiveDate) -> NaiveDate {
        start + Duration::days(i64::from(self.duration_days))
    }

    /// Rename the plan (uniqueness is re-checked by the caller)
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update the price
    pub fn set_price(&mut self, price: Decimal) {
        self.price = price;
        self.updated_at = Utc::now();
    }

    /// Update the duration; existing subscriptions keep their end dates
    pub fn set_duration_days(&mut self, duration_days: i32) {
        self.duration_days = duration_days;
        self.updated_at = Utc::now();
    }

    /// Soft-deactivate the plan; existing subscriptions are untouched
    pub fn deactivate(&mut self) {
        self.activation = PlanActivation::Inactive;
        self.updated_at = Utc::now();
    }
}

/// Payload for creating a new catalog entry; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewPlan {
    pub name: String,
    pub price: Decimal,
    pub duration_days: i32,
}
