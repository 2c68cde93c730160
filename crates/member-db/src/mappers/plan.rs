//! Plan model -> entity mapper

use member_core::entities::Plan;
use member_core::error::DomainError;

use crate::models::PlanModel;

use super::corrupt_status;

impl TryFrom<PlanModel> for Plan {
    type Error = DomainError;

    fn try_from(model: PlanModel) -> Result<Self, Self::Error> {
        Ok(Plan {
            id: model.id,
            name: model.name,
            price: model.price,
            duration_days: model.duration_days,
            activation: model.activation.parse().map_err(corrupt_status)?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
