//! Composable filter builders for search/list queries
//!
//! Each builder pushes its own WHERE clauses into a `sqlx::QueryBuilder`,
//! so the polymorphic filters (status + search pattern, activation + price
//! bounds) compose without ad hoc branching in the repositories and can be
//! unit-tested by inspecting the generated SQL without a database.

use member_core::traits::{MemberQuery, PlanQuery, SubscriptionQuery};
use sqlx::{Postgres, QueryBuilder};

/// Tracks whether the next clause needs `WHERE` or `AND`
struct Conjunction {
    started: bool,
}

impl Conjunction {
    fn new() -> Self {
        Self { started: false }
    }

    fn keyword(&mut self) -> &'static str {
        if self.started {
            " AND "
        } else {
            self.started = true;
            " WHERE "
        }
    }
}

/// Push member search filters: optional status, optional case-insensitive
/// substring match against name OR phone
pub fn apply_member_filters(qb: &mut QueryBuilder<'_, Postgres>, query: &MemberQuery) {
    let mut conj = Conjunction::new();

    if let Some(status) = query.status {
        qb.push(conj.keyword());
        qb.push("status = ");
        qb.push_bind(status.as_str());
    }

    if let Some(search) = &query.search {
        let pattern = format!("%{search}%");
        qb.push(conj.keyword());
        qb.push("(name ILIKE ");
        qb.push_bind(pattern.clone());
        qb.push(" OR phone ILIKE ");
        qb.push_bind(pattern);
        qb.push(")");
    }
}

/// Push plan listing filters: optional activation flag and price bounds
pub fn apply_plan_filters(qb: &mut QueryBuilder<'_, Postgres>, query: &PlanQuery) {
    let mut conj = Conjunction::new();

    if let Some(activation) = query.activation {
        qb.push(conj.keyword());
        qb.push("activation = ");
        qb.push_bind(activation.as_str());
    }

    if let Some(min_price) = query.min_price {
        qb.push(conj.keyword());
        qb.push("price >= ");
        qb.push_bind(min_price);
    }

    if let Some(max_price) = query.max_price {
        qb.push(conj.keyword());
        qb.push("price <= ");
        qb.push_bind(max_price);
    }
}

/// Push the subscription status filter (window bounds are pushed by the
/// repository after ordering)
pub fn apply_subscription_filters(qb: &mut QueryBuilder<'_, Postgres>, query: &SubscriptionQuery) {
    if let Some(status) = query.status {
        qb.push(" WHERE status = ");
        qb.push_bind(status.as_str());
    }
}
