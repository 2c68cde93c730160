//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! member-core. Each repository handles database operations for a specific
//! domain entity; the compound lifecycle operations run as one transaction
//! each.

mod attendance;
mod error;
mod member;
mod plan;
mod subscription;

pub use attendance::PgAttendanceRepository;
pub use member::PgMemberRepository;
pub use plan::PgPlanRepository;
pub use subscription::PgSubscriptionRepository;
