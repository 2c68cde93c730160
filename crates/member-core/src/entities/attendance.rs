//! Attendance entity - one record per check-in event

use chrono::{DateTime, Utc};

/// Attendance record. Immutable after creation in this system's scope;
/// repeat check-ins on the same day produce separate records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendance {
    pub id: i64,
    pub member_id: i64,
    pub check_in_time: DateTime<Utc>,
    pub check_out_time: Option<DateTime<Utc>>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Attendance {
    /// Check if the visit is still open (no check-out recorded)
    #[inline]
    pub fn is_open(&self) -> bool {
        self.check_out_time.is_none()
    }
}
