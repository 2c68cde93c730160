//! Subscription lifecycle service
//!
//! The stored subscription status is an administrative flag; the coverage
//! predicate (date range + stored status) is what authorizes access. The
//! listing below filters on the stored flag only and may therefore show a
//! date-expired-but-uncancelled subscription as "active" — check-in gating
//! never relies on it.

use chrono::{NaiveDate, Utc};
use member_core::entities::NewSubscription;
use member_core::error::DomainError;
use member_core::traits::SubscriptionQuery;
use tracing::{info, instrument};

use crate::dto::{CreateSubscriptionRequest, SubscriptionResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Subscription lifecycle service
pub struct SubscriptionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubscriptionService<'a> {
    /// Create a new SubscriptionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a subscription.
    ///
    /// Derives `end_date = start_date + plan.duration_days` once, persists
    /// the subscription, and reactivates the owning member in the same
    /// store transaction. Reactivation is unconditional on the date range:
    /// a future-dated or back-dated purchase still flips the member to
    /// active.
    #[instrument(skip(self, request))]
    pub async fn create_subscription(
        &self,
        request: CreateSubscriptionRequest,
    ) -> ServiceResult<SubscriptionResponse> {
        let member = self
            .ctx
            .member_repo()
            .find_by_id(request.member_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Member", request.member_id.to_string()))?;

        let plan = self
            .ctx
            .plan_repo()
            .find_by_id(request.plan_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Plan", request.plan_id.to_string()))?;

        if !plan.is_active() {
            return Err(DomainError::InactivePlan(plan.id).into());
        }

        let new_subscription = NewSubscription {
            member_id: member.id,
            plan_id: plan.id,
            start_date: request.start_date,
            end_date: plan.term_end(request.start_date),
        };

        let subscription = self
            .ctx
            .subscription_repo()
            .create(&new_subscription)
            .await?;

        info!(
            subscription_id = subscription.id,
            member_id = member.id,
            plan_id = plan.id,
            "Subscription created"
        );

        Ok(SubscriptionResponse::from(&subscription))
    }

    /// Get the subscription covering `as_of` (today when not given) for a
    /// member, per the coverage predicate
    #[instrument(skip(self))]
    pub async fn current_for(
        &self,
        member_id: i64,
        as_of: Option<NaiveDate>,
    ) -> ServiceResult<SubscriptionResponse> {
        let member = self
            .ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Member", member_id.to_string()))?;

        let on = as_of.unwrap_or_else(|| Utc::now().date_naive());

        let subscription = self
            .ctx
            .subscription_repo()
            .find_covering(member.id, on)
            .await?
            .ok_or(DomainError::NoCurrentSubscription(member.id))?;

        Ok(SubscriptionResponse::from(&subscription))
    }

    /// Cancel a subscription. Idempotent in effect: the second attempt
    /// fails with AlreadyCancelled and the row does not change again.
    /// Member status is not altered.
    #[instrument(skip(self))]
    pub async fn cancel_subscription(
        &self,
        subscription_id: i64,
    ) -> ServiceResult<SubscriptionResponse> {
        let subscription = self.ctx.subscription_repo().cancel(subscription_id).await?;

        info!(subscription_id = subscription.id, "Subscription cancelled");

        Ok(SubscriptionResponse::from(&subscription))
    }

    /// List subscriptions, newest first, windowed (default 100, cap 1000)
    #[instrument(skip(self))]
    pub async fn list_subscriptions(
        &self,
        query: SubscriptionQuery,
    ) -> ServiceResult<Vec<SubscriptionResponse>> {
        let subscriptions = self.ctx.subscription_repo().list(&query).await?;

        Ok(subscriptions
            .iter()
            .map(SubscriptionResponse::from)
            .collect())
    }
}
