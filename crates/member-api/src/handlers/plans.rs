//! Plan catalog handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use member_core::traits::PlanQuery;
use member_core::value_objects::PlanActivation;
use member_service::{
    CreatePlanRequest, ListResponse, PlanResponse, PlanService, UpdatePlanRequest,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

use super::parse_id;

/// Query parameters for plan listing
#[derive(Debug, Deserialize)]
pub struct PlanListParams {
    pub is_active: Option<bool>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

/// Create a new plan
///
/// POST /plans
pub async fn create_plan(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreatePlanRequest>,
) -> ApiResult<Created<Json<PlanResponse>>> {
    let service = PlanService::new(state.service_context());
    let response = service.create_plan(request).await?;
    Ok(Created(Json(response)))
}

/// List plans with optional filtering
///
/// GET /plans
pub async fn list_plans(
    State(state): State<AppState>,
    Query(params): Query<PlanListParams>,
) -> ApiResult<Json<ListResponse<PlanResponse>>> {
    for bound in [params.min_price, params.max_price].into_iter().flatten() {
        if bound < Decimal::ZERO {
            return Err(ApiError::invalid_query("Price bounds must not be negative"));
        }
    }

    let query = PlanQuery {
        activation: params.is_active.map(|active| {
            if active {
                PlanActivation::Active
            } else {
                PlanActivation::Inactive
            }
        }),
        min_price: params.min_price,
        max_price: params.max_price,
    };

    let service = PlanService::new(state.service_context());
    let response = service.list_plans(query).await?;
    Ok(Json(response))
}

/// Get plan by ID
///
/// GET /plans/:plan_id
pub async fn get_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
) -> ApiResult<Json<PlanResponse>> {
    let plan_id = parse_id(&plan_id, "plan_id")?;

    let service = PlanService::new(state.service_context());
    let response = service.get_plan(plan_id).await?;
    Ok(Json(response))
}

/// Update plan (partial)
///
/// PUT /plans/:plan_id
pub async fn update_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdatePlanRequest>,
) -> ApiResult<Json<PlanResponse>> {
    let plan_id = parse_id(&plan_id, "plan_id")?;

    let service = PlanService::new(state.service_context());
    let response = service.update_plan(plan_id, request).await?;
    Ok(Json(response))
}

/// Deactivate plan (soft delete; existing subscriptions untouched)
///
/// DELETE /plans/:plan_id
pub async fn deactivate_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<String>,
) -> ApiResult<NoContent> {
    let plan_id = parse_id(&plan_id, "plan_id")?;

    let service = PlanService::new(state.service_context());
    service.deactivate_plan(plan_id).await?;
    Ok(NoContent)
}
