//! Service context - dependency container for services
//!
//! Holds the repositories needed by services.

use std::sync::Arc;

use member_core::traits::{
    AttendanceRepository, MemberRepository, PlanRepository, SubscriptionRepository,
};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to the four repositories behind their ports, so the
/// services stay independent of the concrete store.
#[derive(Clone)]
pub struct ServiceContext {
    member_repo: Arc<dyn MemberRepository>,
    plan_repo: Arc<dyn PlanRepository>,
    subscription_repo: Arc<dyn SubscriptionRepository>,
    attendance_repo: Arc<dyn AttendanceRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        member_repo: Arc<dyn MemberRepository>,
        plan_repo: Arc<dyn PlanRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
        attendance_repo: Arc<dyn AttendanceRepository>,
    ) -> Self {
        Self {
            member_repo,
            plan_repo,
            subscription_repo,
            attendance_repo,
        }
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the plan repository
    pub fn plan_repo(&self) -> &dyn PlanRepository {
        self.plan_repo.as_ref()
    }

    /// Get the subscription repository
    pub fn subscription_repo(&self) -> &dyn SubscriptionRepository {
        self.subscription_repo.as_ref()
    }

    /// Get the attendance repository
    pub fn attendance_repo(&self) -> &dyn AttendanceRepository {
        self.attendance_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    member_repo: Option<Arc<dyn MemberRepository>>,
    plan_repo: Option<Arc<dyn PlanRepository>>,
    subscription_repo: Option<Arc<dyn SubscriptionRepository>>,
    attendance_repo: Option<Arc<dyn AttendanceRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            member_repo: None,
            plan_repo: None,
            subscription_repo: None,
            attendance_repo: None,
        }
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn plan_repo(mut self, repo: Arc<dyn PlanRepository>) -> Self {
        self.plan_repo = Some(repo);
        self
    }

    pub fn subscription_repo(mut self, repo: Arc<dyn SubscriptionRepository>) -> Self {
        self.subscription_repo = Some(repo);
        self
    }

    pub fn attendance_repo(mut self, repo: Arc<dyn AttendanceRepository>) -> Self {
        self.attendance_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.member_repo
                .ok_or_else(|| super::error::ServiceError::validation("member_repo is required"))?,
            self.plan_repo
                .ok_or_else(|| super::error::ServiceError::validation("plan_repo is required"))?,
            self.subscription_repo.ok_or_else(|| {
                super::error::ServiceError::validation("subscription_repo is required")
            })?,
            self.attendance_repo.ok_or_else(|| {
                super::error::ServiceError::validation("attendance_repo is required")
            })?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
