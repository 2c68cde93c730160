//! Member entity - a registered member of the service

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::MemberStatus;

/// Member entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: i64,
    pub name: String,
    /// Globally unique, enforced at the store
    pub phone: String,
    pub join_date: NaiveDate,
    pub status: MemberStatus,
    /// Display-only running counter; never written by the check-in path
    pub total_check_ins: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Check if the member record is flagged active.
    ///
    /// This reads the denormalized status cache. Check-in eligibility must
    /// go through the subscription coverage predicate instead.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }

    /// Soft delete: flip status to inactive
    pub fn deactivate(&mut self) {
        self.status = MemberStatus::Inactive;
        self.updated_at = Utc::now();
    }

    /// Reactivation trigger fired when a new subscription is acquired
    pub fn reactivate(&mut self) {
        self.status = MemberStatus::Active;
        self.updated_at = Utc::now();
    }

    /// Update the member name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update the phone number (uniqueness is re-checked by the caller)
    pub fn set_phone(&mut self, phone: String) {
        self.phone = phone;
        self.updated_at = Utc::now();
    }

    /// Set the status directly (manual suspension etc.)
    pub fn set_status(&mut self, status: MemberStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

/// Payload for registering a new member; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewMember {
    pub name: String,
    pub phone: String,
    pub join_date: NaiveDate,
    pub status: MemberStatus,
}
