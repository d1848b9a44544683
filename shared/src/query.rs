//! List query types
//!
//! Equality filters plus an optional free-text search token, encoded as URL
//! query pairs for the list endpoints. An empty query marks a fetch as the
//! authoritative superset refresh.

use crate::models::{MemberStatus, MembershipPlan, ReorderStatus};
use serde::{Deserialize, Serialize};

/// Member list query
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MemberQuery {
    pub location_id: Option<i64>,
    pub plan: Option<MembershipPlan>,
    pub status: Option<MemberStatus>,
    pub search: Option<String>,
}

impl MemberQuery {
    /// No filters and no search token
    pub fn is_empty(&self) -> bool {
        self.location_id.is_none()
            && self.plan.is_none()
            && self.status.is_none()
            && self.search.as_deref().is_none_or(str::is_empty)
    }

    /// URL query pairs for the list endpoint
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(location_id) = self.location_id {
            pairs.push(("location", location_id.to_string()));
        }
        if let Some(plan) = self.plan {
            pairs.push(("plan", plan.as_str().to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }
}

/// Reorder-request list query
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ReorderQuery {
    pub status: Option<ReorderStatus>,
    pub location_id: Option<i64>,
}

impl ReorderQuery {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.location_id.is_none()
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        if let Some(location_id) = self.location_id {
            pairs.push(("location_id", location_id.to_string()));
        }
        pairs
    }
}
