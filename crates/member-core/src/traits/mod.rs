//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AttendanceRepository, MemberQuery, MemberRepository, PlanQuery, PlanRepository, RepoResult,
    SubscriptionQuery, SubscriptionRepository, DEFAULT_LIST_WINDOW, MAX_LIST_WINDOW,
};
