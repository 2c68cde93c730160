//! PostgreSQL implementation of SubscriptionRepository
//!
//! The create and cancel operations each run as one transaction so a
//! concurrent cancel cannot race a check-in into an inconsistent observed
//! state.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use member_core::entities::{NewSubscription, Subscription};
use member_core::error::DomainError;
use member_core::traits::{RepoResult, SubscriptionQuery, SubscriptionRepository, MAX_LIST_WINDOW};
use member_core::value_objects::SubscriptionStatus;

use crate::filter::apply_subscription_filters;
use crate::models::SubscriptionModel;

use super::error::{map_db_error, subscription_not_found};

const SUBSCRIPTION_COLUMNS: &str =
    "id, member_id, plan_id, start_date, end_date, status, created_at, updated_at";

/// PostgreSQL implementation of SubscriptionRepository
#[derive(Clone)]
pub struct PgSubscriptionRepository {
    pool: PgPool,
}

impl PgSubscriptionRepository {
    /// Create a new PgSubscriptionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for PgSubscriptionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Subscription>> {
        let result = sqlx::query_as::<_, SubscriptionModel>(
            r"
            SELECT id, member_id, plan_id, start_date, end_date, status, created_at, updated_at
            FROM subscriptions
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Subscription::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_covering(
        &self,
        member_id: i64,
        on: NaiveDate,
    ) -> RepoResult<Option<Subscription>> {
        // Coverage predicate in SQL; overlapping purchases tie-break to the
        // most recently created row
        let result = sqlx::query_as::<_, SubscriptionModel>(
            r"
            SELECT id, member_id, plan_id, start_date, end_date, status, created_at, updated_at
            FROM subscriptions
            WHERE member_id = $1
              AND status = 'active'
              AND start_date <= $2
              AND end_date >= $2
            ORDER BY created_at DESC, id DESC
            LIMIT 1
            ",
        )
        .bind(member_id)
        .bind(on)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Subscription::try_from).transpose()
    }

    #[instrument(skip(self, subscription))]
    async fn create(&self, subscription: &NewSubscription) -> RepoResult<Subscription> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let row = sqlx::query_as::<_, SubscriptionModel>(
            r"
            INSERT INTO subscriptions (member_id, plan_id, start_date, end_date, status)
            VALUES ($1, $2, $3, $4, 'active')
            RETURNING id, member_id, plan_id, start_date, end_date, status, created_at, updated_at
            ",
        )
        .bind(subscription.member_id)
        .bind(subscription.plan_id)
        .bind(subscription.start_date)
        .bind(subscription.end_date)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // Acquiring any new subscription reactivates the member,
        // regardless of the subscription's date range
        sqlx::query(
            r"
            UPDATE members
            SET status = 'active', updated_at = NOW()
            WHERE id = $1 AND status <> 'active'
            ",
        )
        .bind(subscription.member_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Subscription::try_from(row)
    }

    #[instrument(skip(self))]
    async fn cancel(&self, id: i64) -> RepoResult<Subscription> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the row so concurrent cancels serialize on the status check
        let current = sqlx::query_as::<_, SubscriptionModel>(
            r"
            SELECT id, member_id, plan_id, start_date, end_date, status, created_at, updated_at
            FROM subscriptions
            WHERE id = $1
            FOR UPDATE
            ",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| subscription_not_found(id))?;

        if current.status == SubscriptionStatus::Cancelled.as_str() {
            return Err(DomainError::AlreadyCancelled(id));
        }

        let row = sqlx::query_as::<_, SubscriptionModel>(
            r"
            UPDATE subscriptions
            SET status = 'cancelled', updated_at = NOW()
            WHERE id = $1
            RETURNING id, member_id, plan_id, start_date, end_date, status, created_at, updated_at
            ",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Subscription::try_from(row)
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &SubscriptionQuery) -> RepoResult<Vec<Subscription>> {
        let limit = query.limit.clamp(1, MAX_LIST_WINDOW);
        let offset = query.offset.max(0);

        let mut qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("SELECT {SUBSCRIPTION_COLUMNS} FROM subscriptions"));
        apply_subscription_filters(&mut qb, query);
        qb.push(" ORDER BY created_at DESC OFFSET ");
        qb.push_bind(offset);
        qb.push(" LIMIT ");
        qb.push_bind(limit);

        let rows = qb
            .build_query_as::<SubscriptionModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(Subscription::try_from).collect()
    }
}
