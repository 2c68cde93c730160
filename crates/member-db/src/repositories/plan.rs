//! PostgreSQL implementation of PlanRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use member_core::entities::{NewPlan, Plan};
use member_core::error::DomainError;
use member_core::traits::{PlanQuery, PlanRepository, RepoResult};

use crate::filter::apply_plan_filters;
use crate::models::PlanModel;

use super::error::{map_db_error, map_unique_violation, plan_not_found};

const PLAN_COLUMNS: &str = "id, name, price, duration_days, activation, created_at, updated_at";

/// PostgreSQL implementation of PlanRepository
#[derive(Clone)]
pub struct PgPlanRepository {
    pool: PgPool,
}

impl PgPlanRepository {
    /// Create a new PgPlanRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanRepository for PgPlanRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Plan>> {
        let result = sqlx::query_as::<_, PlanModel>(
            r"
            SELECT id, name, price, duration_days, activation, created_at, updated_at
            FROM plans
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Plan::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, name: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM plans WHERE name = $1)
            ",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, plan))]
    async fn create(&self, plan: &NewPlan) -> RepoResult<Plan> {
        let row = sqlx::query_as::<_, PlanModel>(
            r"
            INSERT INTO plans (name, price, duration_days, activation)
            VALUES ($1, $2, $3, 'active')
            RETURNING id, name, price, duration_days, activation, created_at, updated_at
            ",
        )
        .bind(&plan.name)
        .bind(plan.price)
        .bind(plan.duration_days)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::PlanNameTaken))?;

        Plan::try_from(row)
    }

    #[instrument(skip(self, plan))]
    async fn update(&self, plan: &Plan) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE plans
            SET name = $2, price = $3, duration_days = $4, activation = $5, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(plan.id)
        .bind(&plan.name)
        .bind(plan.price)
        .bind(plan.duration_days)
        .bind(plan.activation.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::PlanNameTaken))?;

        if result.rows_affected() == 0 {
            return Err(plan_not_found(plan.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn deactivate(&self, id: i64) -> RepoResult<()> {
        // Existing subscriptions keep their dates and stored status
        let result = sqlx::query(
            r"
            UPDATE plans
            SET activation = 'inactive', updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(plan_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &PlanQuery) -> RepoResult<Vec<Plan>> {
        let mut qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("SELECT {PLAN_COLUMNS} FROM plans"));
        apply_plan_filters(&mut qb, query);
        qb.push(" ORDER BY id");

        let rows = qb
            .build_query_as::<PlanModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(Plan::try_from).collect()
    }
}
