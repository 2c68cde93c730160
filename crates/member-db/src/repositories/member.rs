//! PostgreSQL implementation of MemberRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use member_core::entities::{Member, NewMember};
use member_core::error::DomainError;
use member_core::traits::{MemberQuery, MemberRepository, RepoResult};

use crate::filter::apply_member_filters;
use crate::models::MemberModel;

use super::error::{map_db_error, map_unique_violation, member_not_found};

const MEMBER_COLUMNS: &str =
    "id, name, phone, join_date, status, total_check_ins, created_at, updated_at";

/// PostgreSQL implementation of MemberRepository
#[derive(Clone)]
pub struct PgMemberRepository {
    pool: PgPool,
}

impl PgMemberRepository {
    /// Create a new PgMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for PgMemberRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Member>> {
        let result = sqlx::query_as::<_, MemberModel>(
            r"
            SELECT id, name, phone, join_date, status, total_check_ins, created_at, updated_at
            FROM members
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Member::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn phone_exists(&self, phone: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM members WHERE phone = $1)
            ",
        )
        .bind(phone)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, member))]
    async fn create(&self, member: &NewMember) -> RepoResult<Member> {
        let row = sqlx::query_as::<_, MemberModel>(
            r"
            INSERT INTO members (name, phone, join_date, status, total_check_ins)
            VALUES ($1, $2, $3, $4, 0)
            RETURNING id, name, phone, join_date, status, total_check_ins, created_at, updated_at
            ",
        )
        .bind(&member.name)
        .bind(&member.phone)
        .bind(member.join_date)
        .bind(member.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::PhoneAlreadyRegistered))?;

        Member::try_from(row)
    }

    #[instrument(skip(self, member))]
    async fn update(&self, member: &Member) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE members
            SET name = $2, phone = $3, status = $4, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(member.id)
        .bind(&member.name)
        .bind(&member.phone)
        .bind(member.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::PhoneAlreadyRegistered))?;

        if result.rows_affected() == 0 {
            return Err(member_not_found(member.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn deactivate(&self, id: i64) -> RepoResult<()> {
        // Soft delete: the row, its subscriptions, and its attendance
        // history all survive
        let result = sqlx::query(
            r"
            UPDATE members
            SET status = 'inactive', updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(member_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &MemberQuery) -> RepoResult<Vec<Member>> {
        let mut qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("SELECT {MEMBER_COLUMNS} FROM members"));
        apply_member_filters(&mut qb, query);
        qb.push(" ORDER BY id");

        let rows = qb
            .build_query_as::<MemberModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        rows.into_iter().map(Member::try_from).collect()
    }
}
