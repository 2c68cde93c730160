//! Attendance gate handlers

use axum::{
    extract::{Path, State},
    Json,
};
use member_service::{
    AttendanceResponse, AttendanceService, CheckInRequest, ListResponse,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

use super::parse_id;

/// Record a check-in, gated by subscription coverage
///
/// POST /attendance/check-in
pub async fn check_in(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CheckInRequest>,
) -> ApiResult<Created<Json<AttendanceResponse>>> {
    let service = AttendanceService::new(state.service_context());
    let response = service.check_in(request.member_id).await?;
    Ok(Created(Json(response)))
}

/// Full attendance history for a member, newest first
///
/// GET /members/:member_id/attendance
pub async fn member_attendance(
    State(state): State<AppState>,
    Path(member_id): Path<String>,
) -> ApiResult<Json<ListResponse<AttendanceResponse>>> {
    let member_id = parse_id(&member_id, "member_id")?;

    let service = AttendanceService::new(state.service_context());
    let response = service.list_for_member(member_id).await?;
    Ok(Json(response))
}
