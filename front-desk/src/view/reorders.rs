//! Reorder-request list view: filter set, search fields and comparators

use super::{compare_ci, contains_ci, FilterPredicate, Listable};
use shared::models::{ReorderRequest, ReorderStatus};
use std::cmp::Ordering;

/// Reorder list filters (the status tabs plus a location picker)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReorderFilter {
    pub status: Option<ReorderStatus>,
    pub location_id: Option<i64>,
}

impl FilterPredicate<ReorderRequest> for ReorderFilter {
    fn matches(&self, request: &ReorderRequest) -> bool {
        if let Some(status) = self.status {
            if request.status != status {
                return false;
            }
        }
        if let Some(location_id) = self.location_id {
            if request.location_id != location_id {
                return false;
            }
        }
        true
    }
}

/// Sortable reorder columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderColumn {
    RequestNumber,
    Product,
    Category,
    Quantity,
    TotalCost,
    Status,
    RequestedAt,
}

impl Listable for ReorderRequest {
    type Column = ReorderColumn;
    type Filter = ReorderFilter;

    fn matches_search(&self, query: &str) -> bool {
        contains_ci(&self.product_name, query)
            || contains_ci(&self.sku, query)
            || contains_ci(&self.request_number, query)
    }

    fn compare_by(&self, other: &Self, column: ReorderColumn) -> Ordering {
        match column {
            ReorderColumn::RequestNumber => compare_ci(&self.request_number, &other.request_number),
            ReorderColumn::Product => compare_ci(&self.product_name, &other.product_name),
            ReorderColumn::Category => compare_ci(&self.category, &other.category),
            ReorderColumn::Quantity => self.quantity_requested.cmp(&other.quantity_requested),
            ReorderColumn::TotalCost => self.total_cost.cmp(&other.total_cost),
            ReorderColumn::Status => self.status.rank().cmp(&other.status.rank()),
            ReorderColumn::RequestedAt => self.requested_at.cmp(&other.requested_at),
        }
    }
}
