//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.
//!
//! Compound operations (subscription create with member reactivation,
//! cancel, check-in) are single trait methods so the implementation can run
//! each as one store transaction.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::entities::{Attendance, Member, NewMember, NewPlan, NewSubscription, Plan, Subscription};
use crate::error::DomainError;
use crate::value_objects::{MemberStatus, PlanActivation, SubscriptionStatus};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Default window for bounded list queries
pub const DEFAULT_LIST_WINDOW: i64 = 100;
/// Hard cap for bounded list queries, per call
pub const MAX_LIST_WINDOW: i64 = 1000;

// ============================================================================
// Query types
// ============================================================================

/// Filter for member search; all criteria are conjunctive
#[derive(Debug, Clone, Default)]
pub struct MemberQuery {
    pub status: Option<MemberStatus>,
    /// Case-insensitive substring match against name OR phone
    pub search: Option<String>,
}

/// Filter for plan listing
#[derive(Debug, Clone, Default)]
pub struct PlanQuery {
    pub activation: Option<PlanActivation>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

/// Filter and window for subscription listing.
///
/// Unlike member and attendance listings (intentionally unbounded), the
/// subscription listing is windowed: default 100 rows, hard cap 1000.
#[derive(Debug, Clone)]
pub struct SubscriptionQuery {
    pub status: Option<SubscriptionStatus>,
    pub offset: i64,
    pub limit: i64,
}

impl Default for SubscriptionQuery {
    fn default() -> Self {
        Self {
            status: None,
            offset: 0,
            limit: DEFAULT_LIST_WINDOW,
        }
    }
}

// ============================================================================
// Member Repository
// ============================================================================

#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Find member by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>>;

    /// Check if a phone number is already registered
    async fn phone_exists(&self, phone: &str) -> RepoResult<bool>;

    /// Register a new member; the store assigns the id
    async fn create(&self, member: &NewMember) -> RepoResult<Member>;

    /// Update an existing member (name, phone, status)
    async fn update(&self, member: &Member) -> RepoResult<()>;

    /// Soft delete: flip status to inactive, keep the record
    async fn deactivate(&self, id: i64) -> RepoResult<()>;

    /// Search members; unbounded by design (full materialized result)
    async fn search(&self, query: &MemberQuery) -> RepoResult<Vec<Member>>;
}

// ============================================================================
// Plan Repository
// ============================================================================

#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Find plan by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Plan>>;

    /// Check if a plan name is already taken
    async fn name_exists(&self, name: &str) -> RepoResult<bool>;

    /// Create a new catalog entry
    async fn create(&self, plan: &NewPlan) -> RepoResult<Plan>;

    /// Update an existing plan; never touches subscriptions
    async fn update(&self, plan: &Plan) -> RepoResult<()>;

    /// Soft-deactivate the plan
    async fn deactivate(&self, id: i64) -> RepoResult<()>;

    /// List plans matching the filter; unbounded by design
    async fn list(&self, query: &PlanQuery) -> RepoResult<Vec<Plan>>;
}

// ============================================================================
// Subscription Repository
// ============================================================================

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Find subscription by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Subscription>>;

    /// Find the subscription covering `on` for the member, per the coverage
    /// predicate. Overlap tie-break: most recently created wins.
    async fn find_covering(&self, member_id: i64, on: NaiveDate) -> RepoResult<Option<Subscription>>;

    /// Persist a new subscription and, in the same transaction, reactivate
    /// the owning member if its status is not already active.
    async fn create(&self, subscription: &NewSubscription) -> RepoResult<Subscription>;

    /// Cancel a subscription. Fails with `SubscriptionNotFound` or
    /// `AlreadyCancelled`; runs as one transaction. Member status is not
    /// altered.
    async fn cancel(&self, id: i64) -> RepoResult<Subscription>;

    /// List subscriptions by creation time descending, windowed
    async fn list(&self, query: &SubscriptionQuery) -> RepoResult<Vec<Subscription>>;
}

// ============================================================================
// Attendance Repository
// ============================================================================

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Record a check-in for `member_id` at `at`.
    ///
    /// Re-derives coverage for `at`'s date inside the same transaction as
    /// the insert; fails with `NoActiveSubscription` when no subscription
    /// covers it. The member's stored status is deliberately not consulted.
    async fn check_in(&self, member_id: i64, at: DateTime<Utc>) -> RepoResult<Attendance>;

    /// Full check-in history for a member, newest first; unbounded by
    /// design (audit view), never silently capped
    async fn find_by_member(&self, member_id: i64) -> RepoResult<Vec<Attendance>>;
}
