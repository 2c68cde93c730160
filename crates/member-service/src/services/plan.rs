//! Plan catalog service
//!
//! Side effects of every operation here are confined to the plan record
//! itself; nothing cascades to subscriptions sold against a plan.

use member_core::entities::NewPlan;
use member_core::error::DomainError;
use member_core::traits::PlanQuery;
use tracing::{info, instrument};

use crate::dto::{CreatePlanRequest, ListResponse, PlanResponse, UpdatePlanRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Plan catalog service
pub struct PlanService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PlanService<'a> {
    /// Create a new PlanService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new catalog entry
    #[instrument(skip(self, request))]
    pub async fn create_plan(&self, request: CreatePlanRequest) -> ServiceResult<PlanResponse> {
        if self.ctx.plan_repo().name_exists(&request.name).await? {
            return Err(DomainError::PlanNameTaken.into());
        }

        let new_plan = NewPlan {
            name: request.name,
            price: request.price,
            duration_days: request.duration_days,
        };

        let plan = self.ctx.plan_repo().create(&new_plan).await?;

        info!(plan_id = plan.id, name = %plan.name, "Plan created");

        Ok(PlanResponse::from(&plan))
    }

    /// Get plan by ID
    #[instrument(skip(self))]
    pub async fn get_plan(&self, plan_id: i64) -> ServiceResult<PlanResponse> {
        let plan = self
            .ctx
            .plan_repo()
            .find_by_id(plan_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Plan", plan_id.to_string()))?;

        Ok(PlanResponse::from(&plan))
    }

    /// List plans; unpaginated by design
    #[instrument(skip(self))]
    pub async fn list_plans(&self, query: PlanQuery) -> ServiceResult<ListResponse<PlanResponse>> {
        let plans = self.ctx.plan_repo().list(&query).await?;

        Ok(ListResponse::new(
            plans.iter().map(PlanResponse::from).collect(),
        ))
    }

    /// Update a plan (partial: name, price, duration, activation).
    ///
    /// End dates of existing subscriptions were derived at their creation
    /// and are never recomputed here.
    #[instrument(skip(self, request))]
    pub async fn update_plan(
        &self,
        plan_id: i64,
        request: UpdatePlanRequest,
    ) -> ServiceResult<PlanResponse> {
        let mut plan = self
            .ctx
            .plan_repo()
            .find_by_id(plan_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Plan", plan_id.to_string()))?;

        if let Some(name) = request.name {
            if name != plan.name {
                if self.ctx.plan_repo().name_exists(&name).await? {
                    return Err(DomainError::PlanNameTaken.into());
                }
                plan.set_name(name);
            }
        }

        if let Some(price) = request.price {
            plan.set_price(price);
        }

        if let Some(duration_days) = request.duration_days {
            plan.set_duration_days(duration_days);
        }

        if let Some(activation) = request.activation {
            plan.activation = activation;
        }

        self.ctx.plan_repo().update(&plan).await?;

        info!(plan_id = plan.id, "Plan updated");

        Ok(PlanResponse::from(&plan))
    }

    /// Soft-deactivate a plan; existing subscriptions are untouched
    #[instrument(skip(self))]
    pub async fn deactivate_plan(&self, plan_id: i64) -> ServiceResult<()> {
        let plan = self
            .ctx
            .plan_repo()
            .find_by_id(plan_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Plan", plan_id.to_string()))?;

        self.ctx.plan_repo().deactivate(plan.id).await?;

        info!(plan_id = plan.id, "Plan deactivated");

        Ok(())
    }
}
