//! # member-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    AttendanceResponse, CheckInRequest, CreatePlanRequest, CreateSubscriptionRequest,
    HealthResponse, ListResponse, MemberResponse, PlanResponse, ReadinessResponse,
    RegisterMemberRequest, SubscriptionResponse, UpdateMemberRequest, UpdatePlanRequest,
};
pub use services::{
    AttendanceService, MemberService, PlanService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, SubscriptionService,
};
