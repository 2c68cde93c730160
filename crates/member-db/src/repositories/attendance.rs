//! PostgreSQL implementation of AttendanceRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use member_core::entities::Attendance;
use member_core::error::DomainError;
use member_core::traits::{AttendanceRepository, RepoResult};

use crate::models::AttendanceModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AttendanceRepository
#[derive(Clone)]
pub struct PgAttendanceRepository {
    pool: PgPool,
}

impl PgAttendanceRepository {
    /// Create a new PgAttendanceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceRepository for PgAttendanceRepository {
    #[instrument(skip(self))]
    async fn check_in(&self, member_id: i64, at: DateTime<Utc>) -> RepoResult<Attendance> {
        let on = at.date_naive();
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Coverage is re-derived from subscriptions here, in the same
        // transaction as the insert; the member's stored status flag is
        // deliberately not consulted
        let covered = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM subscriptions
                WHERE member_id = $1
                  AND status = 'active'
                  AND start_date <= $2
                  AND end_date >= $2
            )
            ",
        )
        .bind(member_id)
        .bind(on)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if !covered {
            return Err(DomainError::NoActiveSubscription(member_id));
        }

        let row = sqlx::query_as::<_, AttendanceModel>(
            r"
            INSERT INTO attendance (member_id, check_in_time)
            VALUES ($1, $2)
            RETURNING id, member_id, check_in_time, check_out_time, note, created_at
            ",
        )
        .bind(member_id)
        .bind(at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Attendance::try_from(row)
    }

    #[instrument(skip(self))]
    async fn find_by_member(&self, member_id: i64) -> RepoResult<Vec<Attendance>> {
        // Full-history audit view: no LIMIT, newest first
        let rows = sqlx::query_as::<_, AttendanceModel>(
            r"
            SELECT id, member_id, check_in_time, check_out_time, note, created_at
            FROM attendance
            WHERE member_id = $1
            ORDER BY check_in_time DESC
            ",
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(Attendance::try_from).collect()
    }
}
