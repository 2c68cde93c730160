//! Shared mocks and fixtures for service tests

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use mockall::mock;
use rust_decimal::Decimal;

use member_core::entities::{
    Attendance, Member, NewMember, NewPlan, NewSubscription, Plan, Subscription,
};
use member_core::traits::{
    AttendanceRepository, MemberQuery, MemberRepository, PlanQuery, PlanRepository, RepoResult,
    SubscriptionQuery, SubscriptionRepository,
};
use member_core::value_objects::{MemberStatus, PlanActivation, SubscriptionStatus};

use super::context::ServiceContext;

mock! {
    pub MemberRepo {}

    #[async_trait]
    impl MemberRepository for MemberRepo {
        async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>>;
        async fn phone_exists(&self, phone: &str) -> RepoResult<bool>;
        async fn create(&self, member: &NewMember) -> RepoResult<Member>;
        async fn update(&self, member: &Member) -> RepoResult<()>;
        async fn deactivate(&self, id: i64) -> RepoResult<()>;
        async fn search(&self, query: &MemberQuery) -> RepoResult<Vec<Member>>;
    }
}

mock! {
    pub PlanRepo {}

    #[async_trait]
    impl PlanRepository for PlanRepo {
        async fn find_by_id(&self, id: i64) -> RepoResult<Option<Plan>>;
        async fn name_exists(&self, name: &str) -> RepoResult<bool>;
        async fn create(&self, plan: &NewPlan) -> RepoResult<Plan>;
        async fn update(&self, plan: &Plan) -> RepoResult<()>;
        async fn deactivate(&self, id: i64) -> RepoResult<()>;
        async fn list(&self, query: &PlanQuery) -> RepoResult<Vec<Plan>>;
    }
}

mock! {
    pub SubscriptionRepo {}

    #[async_trait]
    impl SubscriptionRepository for SubscriptionRepo {
        async fn find_by_id(&self, id: i64) -> RepoResult<Option<Subscription>>;
        async fn find_covering(
            &self,
            member_id: i64,
            on: NaiveDate,
        ) -> RepoResult<Option<Subscription>>;
        async fn create(&self, subscription: &NewSubscription) -> RepoResult<Subscription>;
        async fn cancel(&self, id: i64) -> RepoResult<Subscription>;
        async fn list(&self, query: &SubscriptionQuery) -> RepoResult<Vec<Subscription>>;
    }
}

mock! {
    pub AttendanceRepo {}

    #[async_trait]
    impl AttendanceRepository for AttendanceRepo {
        async fn check_in(&self, member_id: i64, at: DateTime<Utc>) -> RepoResult<Attendance>;
        async fn find_by_member(&self, member_id: i64) -> RepoResult<Vec<Attendance>>;
    }
}

/// All four repository mocks, bundled for a test to configure
pub struct MockRepos {
    pub members: MockMemberRepo,
    pub plans: MockPlanRepo,
    pub subscriptions: MockSubscriptionRepo,
    pub attendance: MockAttendanceRepo,
}

impl MockRepos {
    pub fn new() -> Self {
        Self {
            members: MockMemberRepo::new(),
            plans: MockPlanRepo::new(),
            subscriptions: MockSubscriptionRepo::new(),
            attendance: MockAttendanceRepo::new(),
        }
    }
}

/// Build a ServiceContext over the configured mocks
pub fn context_with(repos: MockRepos) -> ServiceContext {
    ServiceContext::new(
        Arc::new(repos.members),
        Arc::new(repos.plans),
        Arc::new(repos.subscriptions),
        Arc::new(repos.attendance),
    )
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn member(id: i64, status: MemberStatus) -> Member {
    let now = Utc::now();
    Member {
        id,
        name: "Ana".to_string(),
        phone: "5551112222".to_string(),
        join_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        status,
        total_check_ins: 0,
        created_at: now,
        updated_at: now,
    }
}

pub fn active_plan(id: i64, duration_days: i32) -> Plan {
    let now = Utc::now();
    Plan {
        id,
        name: "Monthly".to_string(),
        price: Decimal::new(2999, 2),
        duration_days,
        activation: PlanActivation::Active,
        created_at: now,
        updated_at: now,
    }
}

pub fn subscription(id: i64, member_id: i64, status: SubscriptionStatus) -> Subscription {
    let now = Utc::now();
    Subscription {
        id,
        member_id,
        plan_id: 1,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        status,
        created_at: now,
        updated_at: now,
    }
}

pub fn attendance(id: i64, member_id: i64, at: DateTime<Utc>) -> Attendance {
    Attendance {
        id,
        member_id,
        check_in_time: at,
        check_out_time: None,
        note: None,
        created_at: at,
    }
}
