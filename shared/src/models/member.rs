//! Member Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Membership plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MembershipPlan {
    #[default]
    Basic,
    Premium,
    Elite,
}

impl MembershipPlan {
    /// Monthly cost in whole currency units
    pub fn monthly_cost(&self) -> rust_decimal::Decimal {
        match self {
            Self::Basic => rust_decimal::Decimal::from(30),
            Self::Premium => rust_decimal::Decimal::from(50),
            Self::Elite => rust_decimal::Decimal::from(75),
        }
    }

    /// Canonical domain ordering (Basic < Premium < Elite).
    ///
    /// Ranks start at 1 so a missing/unknown value can take rank 0
    /// and sort first.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Basic => 1,
            Self::Premium => 2,
            Self::Elite => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Premium => "Premium",
            Self::Elite => "Elite",
        }
    }
}

/// Member account status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Active,
    Frozen,
    Cancelled,
    /// Legacy status, unreachable through the state machine. Rendered and
    /// ranked the same as `Cancelled`.
    Inactive,
}

impl MemberStatus {
    /// Canonical domain ordering (active < frozen < cancelled)
    pub fn rank(&self) -> u8 {
        match self {
            Self::Active => 1,
            Self::Frozen => 2,
            Self::Cancelled | Self::Inactive => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Frozen => "frozen",
            Self::Cancelled => "cancelled",
            Self::Inactive => "inactive",
        }
    }

    /// Whether the account is effectively cancelled (soft-deleted)
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled | Self::Inactive)
    }
}

/// Member entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    /// Human-facing identifier, format `M-<n>`. Immutable and unique.
    pub member_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub emergency_contact: Option<String>,
    pub location_id: i64,
    pub plan: MembershipPlan,
    pub status: MemberStatus,
    pub notes: Option<String>,
    /// Join date, immutable after creation
    pub created_at: DateTime<Utc>,
    /// Aggregate present only on the single-member payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_check_ins: Option<u64>,
}

impl Member {
    /// Numeric part of the `M-<n>` identifier, for numeric id sorting.
    pub fn member_number(&self) -> Option<u64> {
        self.member_id.strip_prefix("M-").and_then(|n| n.parse().ok())
    }

    /// Whole days since the join date
    pub fn days_active(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_days()
    }
}

/// Create member payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCreate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub emergency_contact: Option<String>,
    pub location_id: i64,
    pub plan: MembershipPlan,
    pub notes: Option<String>,
}

/// Update member payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MemberUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub emergency_contact: Option<String>,
    pub location_id: Option<i64>,
    pub plan: Option<MembershipPlan>,
    pub notes: Option<String>,
}

/// Check-in record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckIn {
    pub id: i64,
    pub member_id: i64,
    pub location_id: i64,
    pub checked_in_at: DateTime<Utc>,
}
