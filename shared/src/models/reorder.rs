//! Inventory reorder-request model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Reorder request status
///
/// Lifecycle: `pending → approved | rejected`, `approved → received`.
/// `rejected` and `received` are terminal; no transition skips a state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReorderStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Received,
}

impl ReorderStatus {
    /// Whether moving to `next` is a legal transition
    pub fn can_transition_to(&self, next: ReorderStatus) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Approved)
                | (Self::Pending, Self::Rejected)
                | (Self::Approved, Self::Received)
        )
    }

    /// Canonical domain ordering (pending < approved < rejected < received)
    pub fn rank(&self) -> u8 {
        match self {
            Self::Pending => 1,
            Self::Approved => 2,
            Self::Rejected => 3,
            Self::Received => 4,
        }
    }

    /// Terminal states expose view-only actions
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Received)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Received => "received",
        }
    }
}

/// Reorder request entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub id: i64,
    /// Human-facing identifier, unique
    pub request_number: String,
    pub product_name: String,
    pub sku: String,
    pub category: String,
    pub location_id: i64,
    pub quantity_requested: u32,
    pub unit_cost: Decimal,
    /// Server-computed: quantity_requested x unit_cost at creation time.
    /// Immutable once status leaves `pending`, as are quantity and unit cost.
    pub total_cost: Decimal,
    pub status: ReorderStatus,
    pub requested_by: String,
    pub requested_at: DateTime<Utc>,
    pub approved_by: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub rejection_reason: Option<String>,
    pub quantity_received: Option<u32>,
    pub notes: Option<String>,
}
