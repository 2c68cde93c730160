//! Member handlers
//!
//! Endpoints for member registration, lookup, search, update, and soft
//! delete.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use member_core::traits::MemberQuery;
use member_service::{
    ListResponse, MemberResponse, MemberService, RegisterMemberRequest, UpdateMemberRequest,
};
use serde::Deserialize;

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

use super::parse_id;

/// Query parameters for member search
#[derive(Debug, Deserialize)]
pub struct MemberSearchParams {
    /// Filter by status (active/inactive/suspended)
    pub status: Option<String>,
    /// Search by name or phone
    pub search: Option<String>,
}

/// Register a new member
///
/// POST /members
pub async fn register_member(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterMemberRequest>,
) -> ApiResult<Created<Json<MemberResponse>>> {
    let service = MemberService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// List members with optional filtering
///
/// GET /members
pub async fn list_members(
    State(state): State<AppState>,
    Query(params): Query<MemberSearchParams>,
) -> ApiResult<Json<ListResponse<MemberResponse>>> {
    let status = params
        .status
        .map(|s| {
            s.parse()
                .map_err(|_| ApiError::invalid_query("Invalid status value"))
        })
        .transpose()?;

    let query = MemberQuery {
        status,
        search: params.search,
    };

    let service = MemberService::new(state.service_context());
    let response = service.search_members(query).await?;
    Ok(Json(response))
}

/// Get member by ID
///
/// GET /members/:member_id
pub async fn get_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> ApiResult<Json<MemberResponse>> {
    let member_id = parse_id(&member_id, "member_id")?;

    let service = MemberService::new(state.service_context());
    let response = service.get_member(member_id).await?;
    Ok(Json(response))
}

/// Update member (partial)
///
/// PATCH /members/:member_id
pub async fn update_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateMemberRequest>,
) -> ApiResult<Json<MemberResponse>> {
    let member_id = parse_id(&member_id, "member_id")?;

    let service = MemberService::new(state.service_context());
    let response = service.update_member(member_id, request).await?;
    Ok(Json(response))
}

/// Soft delete member (status flips to inactive)
///
/// DELETE /members/:member_id
pub async fn deactivate_member(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> ApiResult<NoContent> {
    let member_id = parse_id(&member_id, "member_id")?;

    let service = MemberService::new(state.service_context());
    service.deactivate_member(member_id).await?;
    Ok(NoContent)
}
