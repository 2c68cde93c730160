//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{attendance, health, members, plans, subscriptions};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health, which is
/// mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass the API middleware)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(member_routes())
        .merge(plan_routes())
        .merge(subscription_routes())
        .merge(attendance_routes())
}

/// Member routes
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members", post(members::register_member))
        .route("/members", get(members::list_members))
        .route("/members/:member_id", get(members::get_member))
        .route("/members/:member_id", patch(members::update_member))
        .route("/members/:member_id", delete(members::deactivate_member))
        .route(
            "/members/:member_id/current-subscription",
            get(subscriptions::current_subscription),
        )
        .route(
            "/members/:member_id/attendance",
            get(attendance::member_attendance),
        )
}

/// Plan catalog routes
fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/plans", post(plans::create_plan))
        .route("/plans", get(plans::list_plans))
        .route("/plans/:plan_id", get(plans::get_plan))
        .route("/plans/:plan_id", put(plans::update_plan))
        .route("/plans/:plan_id", delete(plans::deactivate_plan))
}

/// Subscription lifecycle routes
fn subscription_routes() -> Router<AppState> {
    Router::new()
        .route("/subscriptions", post(subscriptions::create_subscription))
        .route("/subscriptions", get(subscriptions::list_subscriptions))
        .route(
            "/subscriptions/:subscription_id/cancel",
            put(subscriptions::cancel_subscription),
        )
}

/// Attendance gate routes
fn attendance_routes() -> Router<AppState> {
    Router::new().route("/attendance/check-in", post(attendance::check_in))
}
