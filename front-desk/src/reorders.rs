//! Reorder-request lifecycle controller
//!
//! State machine: `pending → approved | rejected`, `approved → received`.
//! Rejected and received requests are view-only. After every successful
//! transition the list under the active status tab, the KPI stats and the
//! chart data are re-fetched, strictly after the mutating call resolves;
//! each refresh is independent and a failed refresh only logs.

use crate::error::{DeskError, DeskResult};
use crate::gateway::ReorderGateway;
use crate::store::ViewStore;
use shared::models::{ReorderRequest, ReorderStatus};
use shared::query::ReorderQuery;
use shared::request::{ReceiveReorder, RejectReorder};
use shared::response::{ChartData, ReorderStats};

/// Applied when the rejection dialog is submitted with a blank reason
pub const DEFAULT_REJECTION_REASON: &str = "No reason provided";

/// Parse the receive dialog's quantity field. Must be a positive integer;
/// anything else blocks submission with an inline error and no network call.
pub fn parse_quantity_received(input: &str) -> DeskResult<u32> {
    let quantity: u32 = input
        .trim()
        .parse()
        .map_err(|_| DeskError::validation("Quantity received must be a whole number"))?;
    if quantity == 0 {
        return Err(DeskError::validation(
            "Quantity received must be greater than zero",
        ));
    }
    Ok(quantity)
}

/// Controller for the reorder-requests page
pub struct ReorderController<G: ReorderGateway> {
    gateway: G,
    store: ViewStore<ReorderRequest>,
    stats: ReorderStats,
    status_breakdown: ChartData,
    trends: ChartData,
}

impl<G: ReorderGateway> ReorderController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            store: ViewStore::new(),
            stats: ReorderStats::default(),
            status_breakdown: ChartData::default(),
            trends: ChartData::default(),
        }
    }

    pub fn store(&self) -> &ViewStore<ReorderRequest> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ViewStore<ReorderRequest> {
        &mut self.store
    }

    pub fn stats(&self) -> &ReorderStats {
        &self.stats
    }

    pub fn status_breakdown(&self) -> &ChartData {
        &self.status_breakdown
    }

    pub fn trends(&self) -> &ChartData {
        &self.trends
    }

    fn find(&self, id: i64) -> DeskResult<ReorderRequest> {
        self.store
            .superset()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| DeskError::validation(format!("Unknown reorder request id {id}")))
    }

    // ==================== fetching ====================

    /// Fetch the list under an explicit query; outcome lands in the store
    pub async fn fetch(&mut self, query: &ReorderQuery) {
        let ticket = self.store.begin_fetch(query.is_empty());
        let result = self.gateway.list(query).await;
        self.store.complete_fetch(ticket, result);
    }

    /// The query matching the currently active status tab and location
    fn active_query(&self) -> ReorderQuery {
        let filter = self.store.view().filter();
        ReorderQuery {
            status: filter.status,
            location_id: filter.location_id,
        }
    }

    /// Re-fetch list, KPI stats and chart data. Runs only after a mutating
    /// call has resolved; the three refreshes are independent.
    async fn refresh_reports(&mut self) {
        let query = self.active_query();
        self.fetch(&query).await;

        match self.gateway.stats().await {
            Ok(stats) => self.stats = stats,
            Err(err) => tracing::warn!(%err, "reorder stats refresh failed"),
        }
        match self.gateway.status_breakdown().await {
            Ok(chart) => self.status_breakdown = chart,
            Err(err) => tracing::warn!(%err, "status breakdown refresh failed"),
        }
        match self.gateway.trends().await {
            Ok(chart) => self.trends = chart,
            Err(err) => tracing::warn!(%err, "trend chart refresh failed"),
        }
    }

    async fn after_transition(&mut self, updated: ReorderRequest) {
        let id = updated.id;
        self.store.replace_entity(|r| r.id == id, updated);
        self.refresh_reports().await;
    }

    fn ensure_transition(&self, id: i64, next: ReorderStatus) -> DeskResult<ReorderRequest> {
        let request = self.find(id)?;
        if !request.status.can_transition_to(next) {
            return Err(DeskError::validation(format!(
                "A {} request cannot be {}",
                request.status.as_str(),
                next.as_str()
            )));
        }
        Ok(request)
    }

    // ==================== transitions ====================

    /// `pending → approved`. Approver identity and timestamp are
    /// server-assigned.
    pub async fn approve(&mut self, id: i64) -> DeskResult<ReorderRequest> {
        self.ensure_transition(id, ReorderStatus::Approved)?;
        let updated = self.gateway.approve(id).await?;
        self.after_transition(updated.clone()).await;
        Ok(updated)
    }

    /// `pending → rejected`. A blank reason falls back to
    /// [`DEFAULT_REJECTION_REASON`].
    pub async fn reject(&mut self, id: i64, reason: &str) -> DeskResult<ReorderRequest> {
        self.ensure_transition(id, ReorderStatus::Rejected)?;
        let reason = reason.trim();
        let payload = RejectReorder {
            rejection_reason: if reason.is_empty() {
                DEFAULT_REJECTION_REASON.to_string()
            } else {
                reason.to_string()
            },
        };
        let updated = self.gateway.reject(id, &payload).await?;
        self.after_transition(updated.clone()).await;
        Ok(updated)
    }

    /// `approved → received`. The quantity comes in as the raw form string;
    /// validation failures block before any network call. The backend
    /// updates inventory quantities as a side effect.
    pub async fn receive(&mut self, id: i64, quantity_input: &str) -> DeskResult<ReorderRequest> {
        self.ensure_transition(id, ReorderStatus::Received)?;
        let quantity_received = parse_quantity_received(quantity_input)?;
        let payload = ReceiveReorder { quantity_received };
        let updated = self.gateway.receive(id, &payload).await?;
        self.after_transition(updated.clone()).await;
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity_valid() {
        assert_eq!(parse_quantity_received("12").unwrap(), 12);
        assert_eq!(parse_quantity_received("  3 ").unwrap(), 3);
    }

    #[test]
    fn test_parse_quantity_zero_rejected() {
        assert!(matches!(
            parse_quantity_received("0"),
            Err(DeskError::Validation(_))
        ));
    }

    #[test]
    fn test_parse_quantity_non_numeric_rejected() {
        for input in ["", "abc", "1.5", "-4"] {
            assert!(
                matches!(parse_quantity_received(input), Err(DeskError::Validation(_))),
                "expected {input:?} to be rejected"
            );
        }
    }
}
