//! Membership domain: plans, discount policy, and the Member record.

mod member;
mod plan;
mod status;

pub use member::{Member, MemberProfile};
pub use plan::MembershipPlan;
pub use status::MembershipStatus;
