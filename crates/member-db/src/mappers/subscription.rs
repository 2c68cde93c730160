//! Subscription model -> entity mapper

use member_core::entities::Subscription;
use member_core::error::DomainError;

use crate::models::SubscriptionModel;

use super::corrupt_status;

impl TryFrom<SubscriptionModel> for Subscription {
    type Error = DomainError;

    fn try_from(model: SubscriptionModel) -> Result<Self, Self::Error> {
        Ok(Subscription {
            id: model.id,
            member_id: model.member_id,
            plan_id: model.plan_id,
            start_date: model.start_date,
            end_date: model.end_date,
            status: model.status.parse().map_err(corrupt_status)?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
