//! Shared types for the GymDesk dashboard
//!
//! Common types used across the client and dashboard crates: entity models,
//! query/payload types and response envelopes.

pub mod models;
pub mod query;
pub mod request;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    CardType, CheckIn, Location, Member, MemberStatus, MembershipPlan, Payment, PaymentMethod,
    PaymentStatus, ReorderRequest, ReorderStatus,
};
pub use query::{MemberQuery, ReorderQuery};
pub use response::{ChartData, ErrorBody, MemberList, MemberStats, ReorderList, ReorderStats};
