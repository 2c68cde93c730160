//! Domain entities - core business objects

mod attendance;
mod member;
mod plan;
mod subscription;

pub use attendance::Attendance;
pub use member::{Member, NewMember};
pub use plan::{NewPlan, Plan};
pub use subscription::{NewSubscription, Subscription};
