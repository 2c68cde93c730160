//! Member service
//!
//! Handles member registration, lookup, search, updates, and soft delete.

use chrono::Utc;
use member_core::entities::NewMember;
use member_core::error::DomainError;
use member_core::traits::MemberQuery;
use tracing::{info, instrument};

use crate::dto::{ListResponse, MemberResponse, RegisterMemberRequest, UpdateMemberRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Member service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new member
    #[instrument(skip(self, request))]
    pub async fn register(&self, request: RegisterMemberRequest) -> ServiceResult<MemberResponse> {
        // Pre-check; the store's unique index is the last line of defense
        // against creation races
        if self.ctx.member_repo().phone_exists(&request.phone).await? {
            return Err(DomainError::PhoneAlreadyRegistered.into());
        }

        let new_member = NewMember {
            name: request.name,
            phone: request.phone,
            join_date: request.join_date.unwrap_or_else(|| Utc::now().date_naive()),
            status: request.status.unwrap_or_default(),
        };

        let member = self.ctx.member_repo().create(&new_member).await?;

        info!(member_id = member.id, "Member registered");

        Ok(MemberResponse::from(&member))
    }

    /// Get member by ID
    #[instrument(skip(self))]
    pub async fn get_member(&self, member_id: i64) -> ServiceResult<MemberResponse> {
        let member = self
            .ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Member", member_id.to_string()))?;

        Ok(MemberResponse::from(&member))
    }

    /// Search members by status and/or name-or-phone pattern.
    ///
    /// Returns the full materialized result; the member listing is
    /// intentionally unpaginated.
    #[instrument(skip(self))]
    pub async fn search_members(
        &self,
        query: MemberQuery,
    ) -> ServiceResult<ListResponse<MemberResponse>> {
        let members = self.ctx.member_repo().search(&query).await?;

        Ok(ListResponse::new(
            members.iter().map(MemberResponse::from).collect(),
        ))
    }

    /// Update a member (partial: name, phone, status)
    #[instrument(skip(self, request))]
    pub async fn update_member(
        &self,
        member_id: i64,
        request: UpdateMemberRequest,
    ) -> ServiceResult<MemberResponse> {
        let mut member = self
            .ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Member", member_id.to_string()))?;

        if let Some(phone) = request.phone {
            if phone != member.phone {
                if self.ctx.member_repo().phone_exists(&phone).await? {
                    return Err(DomainError::PhoneAlreadyRegistered.into());
                }
                member.set_phone(phone);
            }
        }

        if let Some(name) = request.name {
            member.set_name(name);
        }

        if let Some(status) = request.status {
            member.set_status(status);
        }

        self.ctx.member_repo().update(&member).await?;

        info!(member_id = member.id, "Member updated");

        Ok(MemberResponse::from(&member))
    }

    /// Soft delete a member: status flips to inactive, the record and its
    /// attendance history remain
    #[instrument(skip(self))]
    pub async fn deactivate_member(&self, member_id: i64) -> ServiceResult<()> {
        // find_by_id first so an absent member maps to 404, not a silent no-op
        let member = self
            .ctx
            .member_repo()
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Member", member_id.to_string()))?;

        self.ctx.member_repo().deactivate(member.id).await?;

        info!(member_id = member.id, "Member deactivated");

        Ok(())
    }
}
