//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use member_core::entities::{Attendance, Member, Plan, Subscription};

use super::responses::{AttendanceResponse, MemberResponse, PlanResponse, SubscriptionResponse};

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id,
            name: member.name.clone(),
            phone: member.phone.clone(),
            join_date: member.join_date,
            status: member.status,
            total_check_ins: member.total_check_ins,
            created_at: member.created_at,
            updated_at: member.updated_at,
        }
    }
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self::from(&member)
    }
}

impl From<&Plan> for PlanResponse {
    fn from(plan: &Plan) -> Self {
        Self {
            id: plan.id,
            name: plan.name.clone(),
            price: plan.price,
            duration_days: plan.duration_days,
            activation: plan.activation,
            created_at: plan.created_at,
            updated_at: plan.updated_at,
        }
    }
}

impl From<Plan> for PlanResponse {
    fn from(plan: Plan) -> Self {
        Self::from(&plan)
    }
}

impl From<&Subscription> for SubscriptionResponse {
    fn from(subscription: &Subscription) -> Self {
        Self {
            id: subscription.id,
            member_id: subscription.member_id,
            plan_id: subscription.plan_id,
            start_date: subscription.start_date,
            end_date: subscription.end_date,
            status: subscription.status,
            created_at: subscription.created_at,
            updated_at: subscription.updated_at,
        }
    }
}

impl From<Subscription> for SubscriptionResponse {
    fn from(subscription: Subscription) -> Self {
        Self::from(&subscription)
    }
}

impl From<&Attendance> for AttendanceResponse {
    fn from(attendance: &Attendance) -> Self {
        Self {
            id: attendance.id,
            member_id: attendance.member_id,
            check_in_time: attendance.check_in_time,
            check_out_time: attendance.check_out_time,
            note: attendance.note.clone(),
            created_at: attendance.created_at,
        }
    }
}

impl From<Attendance> for AttendanceResponse {
    fn from(attendance: Attendance) -> Self {
        Self::from(&attendance)
    }
}
