//! Subscription entity - links a member to a plan over a date range
//!
//! The stored status and the coverage predicate are deliberately distinct:
//! `status == Active` is an administrative flag, while [`Subscription::covers`]
//! is the date-range test the rest of the system must consult when gating
//! access. Nothing here transitions a row to `Expired`.

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::SubscriptionStatus;

/// Subscription entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub id: i64,
    pub member_id: i64,
    pub plan_id: i64,
    pub start_date: NaiveDate,
    /// Derived once at creation as `start_date + plan.duration_days`;
    /// invariant `end_date >= start_date` holds from day-count > 0
    pub end_date: NaiveDate,
    pub status: SubscriptionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subscription {
    /// The coverage predicate: does this subscription authorize access on
    /// `date`?
    ///
    /// True iff `start_date <= date <= end_date` and the stored status is
    /// `Active`. Evaluated on demand, never stored.
    #[inline]
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.status == SubscriptionStatus::Active
            && self.start_date <= date
            && date <= self.end_date
    }

    /// Check the administrative flag only (no date test)
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.status == SubscriptionStatus::Cancelled
    }

    /// Administrative cancel; terminal
    pub fn cancel(&mut self) {
        self.status = SubscriptionStatus::Cancelled;
        self.updated_at = Utc::now();
    }
}

/// Payload for creating a subscription; the store assigns the id.
///
/// Built only by the lifecycle's create operation, which derives `end_date`
/// from the plan before the payload exists.
#[derive(Debug, Clone)]
pub struct NewSubscription {
    pub member_id: i64,
    pub plan_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
