//! Member model -> entity mapper

use member_core::entities::Member;
use member_core::error::DomainError;

use crate::models::MemberModel;

use super::corrupt_status;

impl TryFrom<MemberModel> for Member {
    type Error = DomainError;

    fn try_from(model: MemberModel) -> Result<Self, Self::Error> {
        Ok(Member {
            id: model.id,
            name: model.name,
            phone: model.phone,
            join_date: model.join_date,
            status: model.status.parse().map_err(corrupt_status)?,
            total_check_ins: model.total_check_ins,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
