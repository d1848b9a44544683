//! Inventory reorder-request endpoints

use crate::{ClientResult, HttpClient};
use shared::models::ReorderRequest;
use shared::query::ReorderQuery;
use shared::request::{ReceiveReorder, RejectReorder};
use shared::response::{ChartData, ReorderList, ReorderStats};

/// Typed wrappers over the `/inventory/reorders` endpoints
#[derive(Debug, Clone, Copy)]
pub struct ReordersApi<'a> {
    http: &'a HttpClient,
}

impl<'a> ReordersApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// List reorder requests matching the query (`GET /inventory/reorders`)
    pub async fn list(&self, query: &ReorderQuery) -> ClientResult<ReorderList> {
        self.http
            .get_query("inventory/reorders", &query.query_pairs())
            .await
    }

    /// Single request (`GET /inventory/reorders/{id}`)
    pub async fn get(&self, id: i64) -> ClientResult<ReorderRequest> {
        self.http.get(&format!("inventory/reorders/{id}")).await
    }

    /// Approve a pending request (`PUT /inventory/reorders/{id}/approve`).
    ///
    /// Approver identity and timestamp are server-assigned.
    pub async fn approve(&self, id: i64) -> ClientResult<ReorderRequest> {
        self.http
            .put_empty(&format!("inventory/reorders/{id}/approve"))
            .await
    }

    /// Reject a pending request (`PUT /inventory/reorders/{id}/reject`)
    pub async fn reject(&self, id: i64, payload: &RejectReorder) -> ClientResult<ReorderRequest> {
        self.http
            .put(&format!("inventory/reorders/{id}/reject"), payload)
            .await
    }

    /// Mark an approved request received (`PUT /inventory/reorders/{id}/receive`).
    ///
    /// The backend updates inventory quantities as a side effect.
    pub async fn receive(
        &self,
        id: i64,
        payload: &ReceiveReorder,
    ) -> ClientResult<ReorderRequest> {
        self.http
            .put(&format!("inventory/reorders/{id}/receive"), payload)
            .await
    }

    /// Aggregate KPIs (`GET /inventory/reorders/stats`)
    pub async fn stats(&self) -> ClientResult<ReorderStats> {
        self.http.get("inventory/reorders/stats").await
    }

    /// Status breakdown chart data (`GET /inventory/reorders/chart/status-breakdown`)
    pub async fn status_breakdown(&self) -> ClientResult<ChartData> {
        self.http
            .get("inventory/reorders/chart/status-breakdown")
            .await
    }

    /// Trend chart data (`GET /inventory/reorders/chart/trends`)
    pub async fn trends(&self) -> ClientResult<ChartData> {
        self.http.get("inventory/reorders/chart/trends").await
    }
}
