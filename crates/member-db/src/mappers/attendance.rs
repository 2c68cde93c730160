//! Attendance model -> entity mapper
//!
//! Attendance rows carry no status column; the conversion is infallible but
//! kept as `TryFrom` so every repository maps rows uniformly.

use member_core::entities::Attendance;
use member_core::error::DomainError;

use crate::models::AttendanceModel;

impl TryFrom<AttendanceModel> for Attendance {
    type Error = DomainError;

    fn try_from(model: AttendanceModel) -> Result<Self, Self::Error> {
        Ok(Attendance {
            id: model.id,
            member_id: model.member_id,
            check_in_time: model.check_in_time,
            check_out_time: model.check_out_time,
            note: model.note,
            created_at: model.created_at,
        })
    }
}
