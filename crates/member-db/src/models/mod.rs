//! Database models - SQLx-compatible structs for PostgreSQL tables

mod attendance;
mod member;
mod plan;
mod subscription;

pub use attendance::AttendanceModel;
pub use member::MemberModel;
pub use plan::PlanModel;
pub use subscription::SubscriptionModel;
