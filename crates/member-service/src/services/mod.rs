//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod attendance;
pub mod context;
pub mod error;
pub mod member;
pub mod plan;
pub mod subscription;

// Re-export all services for convenience
pub use attendance::AttendanceService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use member::MemberService;
pub use plan::PlanService;
pub use subscription::SubscriptionService;

#[cfg(test)]
pub(crate) mod test_support;
