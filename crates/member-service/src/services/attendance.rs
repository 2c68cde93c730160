//! Attendance gate service
//!
//! Authorizes check-ins against the subscription coverage predicate and
//! records the event. A member flagged "active" with no date-covering
//! subscription is still rejected: the gate re-derives coverage, it never
//! trusts the stored member status.

use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use crate::dto::{AttendanceResponse, ListResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Attendance gate service
pub struct AttendanceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AttendanceService<'a> {
    /// Create a new AttendanceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a check-in for the member at the current time
    #[instrument(skip(self))]
    pub async fn check_in(&self, member_id: i64) -> ServiceResult<AttendanceResponse> {
        self.check_in_at(member_id, Utc::now()).await
    }

    /// Record a check-in at an explicit time.
    ///
    /// Coverage for `at`'s date is verified in the same store transaction
    /// as the insert. The member's running check-in counter is not
    /// touched; it is display-only.
    #[instrument(skip(self))]
    pub async fn check_in_at(
        &self,
        member_id: i64,
        at: DateTime<Utc>,
    ) -> ServiceResult<AttendanceResponse> {
        let member = self
            .ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Member", member_id.to_string()))?;

        let attendance = self.ctx.attendance_repo().check_in(member.id, at).await?;

        info!(
            member_id = member.id,
            attendance_id = attendance.id,
            "Member checked in"
        );

        Ok(AttendanceResponse::from(&attendance))
    }

    /// Full check-in history for a member, newest first.
    ///
    /// Intentionally unpaginated: this is the audit view and must never be
    /// capped silently.
    #[instrument(skip(self))]
    pub async fn list_for_member(
        &self,
        member_id: i64,
    ) -> ServiceResult<ListResponse<AttendanceResponse>> {
        let member = self
            .ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Member", member_id.to_string()))?;

        let records = self.ctx.attendance_repo().find_by_member(member.id).await?;

        Ok(ListResponse::new(
            records.iter().map(AttendanceResponse::from).collect(),
        ))
    }
}
