//! Entity models

pub mod location;
pub mod member;
pub mod payment;
pub mod reorder;

pub use location::Location;
pub use member::{CheckIn, Member, MemberStatus, MembershipPlan};
pub use payment::{CardType, Payment, PaymentMethod, PaymentStatus};
pub use reorder::{ReorderRequest, ReorderStatus};
