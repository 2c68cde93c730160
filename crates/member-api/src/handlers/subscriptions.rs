//! Subscription lifecycle handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use member_core::traits::SubscriptionQuery;
use member_service::{CreateSubscriptionRequest, SubscriptionResponse, SubscriptionService};
use serde::Deserialize;

use crate::extractors::{ListWindow, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

use super::parse_id;

/// Query parameters for subscription listing
#[derive(Debug, Deserialize)]
pub struct SubscriptionListParams {
    /// Filter by stored status (active/expired/cancelled)
    pub status: Option<String>,
}

/// Create a subscription
///
/// POST /subscriptions
pub async fn create_subscription(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateSubscriptionRequest>,
) -> ApiResult<Created<Json<SubscriptionResponse>>> {
    let service = SubscriptionService::new(state.service_context());
    let response = service.create_subscription(request).await?;
    Ok(Created(Json(response)))
}

/// List subscriptions, newest first, windowed
///
/// GET /subscriptions
pub async fn list_subscriptions(
    State(state): State<AppState>,
    Query(params): Query<SubscriptionListParams>,
    window: ListWindow,
) -> ApiResult<Json<Vec<SubscriptionResponse>>> {
    let status = params
        .status
        .map(|s| {
            s.parse()
                .map_err(|_| ApiError::invalid_query("Invalid status value"))
        })
        .transpose()?;

    let query = SubscriptionQuery {
        status,
        offset: window.offset,
        limit: window.limit,
    };

    let service = SubscriptionService::new(state.service_context());
    let response = service.list_subscriptions(query).await?;
    Ok(Json(response))
}

/// Get the subscription currently covering a member
///
/// GET /members/:member_id/current-subscription
pub async fn current_subscription(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> ApiResult<Json<SubscriptionResponse>> {
    let member_id = parse_id(&member_id, "member_id")?;

    let service = SubscriptionService::new(state.service_context());
    let response = service.current_for(member_id, None).await?;
    Ok(Json(response))
}

/// Cancel a subscription
///
/// PUT /subscriptions/:subscription_id/cancel
pub async fn cancel_subscription(
    State(state): State<AppState>,
    Path(subscription_id): Path<String>,
) -> ApiResult<Json<SubscriptionResponse>> {
    let subscription_id = parse_id(&subscription_id, "subscription_id")?;

    let service = SubscriptionService::new(state.service_context());
    let response = service.cancel_subscription(subscription_id).await?;
    Ok(Json(response))
}
