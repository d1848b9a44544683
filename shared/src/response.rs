//! API response envelopes and aggregate/report shapes

use serde::{Deserialize, Serialize};

/// Member list envelope (`GET /members`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberList {
    pub members: Vec<crate::models::Member>,
}

/// Reorder list envelope (`GET /inventory/reorders`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderList {
    pub reorders: Vec<crate::models::ReorderRequest>,
}

/// Error body returned by all endpoints on failure.
///
/// 429 responses additionally carry a retry-after hint in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}

/// Aggregate member counts (`GET /members/stats`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MemberStats {
    pub total: u64,
    pub active: u64,
    pub frozen: u64,
    pub cancelled: u64,
    pub new_this_month: u64,
}

/// Aggregate reorder KPIs (`GET /inventory/reorders/stats`)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReorderStats {
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
    pub received: u64,
    pub total_cost_pending: f64,
}

/// Chart payload shape consumed by the external charting renderer
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
}
