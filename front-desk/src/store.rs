//! View store
//!
//! Single-writer observable state container for one collection page. Owns
//! the cached collection, the view criteria and the fetch status, and fires
//! one change hook after every state transition instead of scattering
//! render calls across handlers.

use crate::view::{ListView, Listable, SortSpec};
use gym_client::{ClientError, CollectionCache, FetchTicket};

/// Fetch status rendered by the page chrome.
///
/// `RateLimited` is deliberately not `Failed`: it renders as its own
/// "too many requests" state with the retry-after hint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    RateLimited {
        retry_after: Option<u64>,
    },
    Failed(String),
}

/// State container for one collection view
pub struct ViewStore<T: Listable> {
    cache: CollectionCache<T>,
    view: ListView<T>,
    state: FetchState,
    /// Render from the server-filtered result instead of the superset.
    /// Set when a filtered fetch lands, cleared as soon as the criteria
    /// change locally (the engine then recomputes from the superset).
    display_from_filtered: bool,
    on_change: Option<Box<dyn Fn() + Send + Sync>>,
}

impl<T: Listable> Default for ViewStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Listable> ViewStore<T> {
    pub fn new() -> Self {
        Self {
            cache: CollectionCache::new(),
            view: ListView::new(),
            state: FetchState::Idle,
            display_from_filtered: false,
            on_change: None,
        }
    }

    /// Register the re-render hook, fired after every state change
    pub fn set_on_change(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.on_change = Some(Box::new(hook));
    }

    fn notify(&self) {
        if let Some(hook) = &self.on_change {
            hook();
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == FetchState::Loading
    }

    pub fn view(&self) -> &ListView<T> {
        &self.view
    }

    /// The authoritative cached superset
    pub fn superset(&self) -> &[T] {
        self.cache.superset()
    }

    /// The render-ready list under the current criteria. While the latest
    /// installed fetch was server-filtered the engine layers the criteria
    /// over that payload, so server-filtered rows absent from the superset
    /// still render; otherwise it recomputes from the superset.
    pub fn displayed(&self) -> Vec<T> {
        let base = if self.display_from_filtered {
            self.cache.filtered()
        } else {
            self.cache.superset()
        };
        self.view.apply(base)
    }

    // ==================== criteria mutation ====================

    pub fn set_filter(&mut self, filter: T::Filter) {
        self.view.set_filter(filter);
        self.display_from_filtered = false;
        self.notify();
    }

    pub fn clear_filters(&mut self) {
        self.view.clear_filters();
        self.display_from_filtered = false;
        self.notify();
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.view.set_search(query);
        self.display_from_filtered = false;
        self.notify();
    }

    pub fn clear_search(&mut self) {
        self.view.clear_search();
        self.display_from_filtered = false;
        self.notify();
    }

    pub fn toggle_sort(&mut self, column: T::Column) {
        self.view.toggle_sort(column);
        self.notify();
    }

    pub fn sort(&self) -> Option<&SortSpec<T::Column>> {
        self.view.sort()
    }

    // ==================== fetch lifecycle ====================

    /// Register an outgoing fetch and flip to the loading state. `unfiltered`
    /// marks the query being sent as empty: only such responses replace the
    /// authoritative superset, regardless of what view criteria are active
    /// locally while the request is in flight.
    pub fn begin_fetch(&mut self, unfiltered: bool) -> FetchTicket {
        let ticket = self.cache.begin_fetch(unfiltered);
        self.state = FetchState::Loading;
        self.notify();
        ticket
    }

    /// Install a resolved fetch. Stale responses (a newer fetch was issued
    /// since) are dropped without touching any state, so the last-issued
    /// request always wins regardless of arrival order.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, result: Result<Vec<T>, ClientError>) {
        match result {
            Ok(items) => {
                let unfiltered = ticket.is_unfiltered();
                if self.cache.complete(ticket, items) {
                    self.display_from_filtered = !unfiltered;
                    self.state = FetchState::Idle;
                    self.notify();
                }
            }
            Err(err) => {
                if !self.cache.is_latest(ticket) {
                    return;
                }
                self.state = match err {
                    ClientError::RateLimited { retry_after } => {
                        FetchState::RateLimited { retry_after }
                    }
                    other => FetchState::Failed(other.to_string()),
                };
                self.notify();
            }
        }
    }

    /// Replace one cached entity with its server-returned representation
    pub fn replace_entity(&mut self, matches: impl Fn(&T) -> bool, updated: T) {
        self.cache.replace_where(matches, updated);
        self.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::view::members::MemberFilter;
    use chrono::{TimeZone, Utc};
    use shared::models::{Member, MemberStatus, MembershipPlan};

    fn member(id: i64, name: &str) -> Member {
        Member {
            id,
            member_id: format!("M-{id}"),
            name: name.to_string(),
            email: format!("{name}@example.com").to_lowercase(),
            phone: None,
            emergency_contact: None,
            location_id: 1,
            plan: MembershipPlan::Basic,
            status: MemberStatus::Active,
            notes: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            total_check_ins: None,
        }
    }

    #[test]
    fn test_change_hook_fires_on_mutation() {
        let mut store: ViewStore<Member> = ViewStore::new();
        let counter = Arc::new(AtomicUsize::new(0));
        let hooked = counter.clone();
        store.set_on_change(move || {
            hooked.fetch_add(1, Ordering::SeqCst);
        });

        store.set_search("ana");
        store.clear_search();
        store.set_filter(MemberFilter::default());
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_rate_limit_is_not_a_failure_state() {
        let mut store: ViewStore<Member> = ViewStore::new();
        let ticket = store.begin_fetch(true);
        store.complete_fetch(
            ticket,
            Err(ClientError::RateLimited {
                retry_after: Some(30),
            }),
        );
        assert_eq!(
            store.state(),
            &FetchState::RateLimited {
                retry_after: Some(30)
            }
        );
    }

    #[test]
    fn test_stale_error_does_not_clobber_newer_result() {
        let mut store: ViewStore<Member> = ViewStore::new();
        let slow = store.begin_fetch(true);
        let fast = store.begin_fetch(true);

        store.complete_fetch(fast, Ok(vec![member(1, "Ana")]));
        assert_eq!(store.state(), &FetchState::Idle);

        // The superseded request failing afterwards changes nothing
        store.complete_fetch(
            slow,
            Err(ClientError::Api {
                status: 500,
                message: "boom".to_string(),
            }),
        );
        assert_eq!(store.state(), &FetchState::Idle);
        assert_eq!(store.displayed().len(), 1);
    }

    #[test]
    fn test_empty_displayed_list_is_normal() {
        let mut store: ViewStore<Member> = ViewStore::new();
        let ticket = store.begin_fetch(true);
        store.complete_fetch(ticket, Ok(vec![member(1, "Ana")]));

        store.set_search("nobody");
        assert!(store.displayed().is_empty());
        assert_eq!(store.state(), &FetchState::Idle);
    }

    #[test]
    fn test_superset_refresh_lands_while_view_criteria_active() {
        let mut store: ViewStore<Member> = ViewStore::new();
        let seed = store.begin_fetch(true);
        store.complete_fetch(seed, Ok(vec![member(1, "Ana")]));

        // Local criteria must not demote an empty-query refresh to the
        // filtered slot
        store.set_filter(MemberFilter {
            plan: Some(MembershipPlan::Basic),
            ..Default::default()
        });
        let refresh = store.begin_fetch(true);
        store.complete_fetch(refresh, Ok(vec![member(1, "Ana"), member(2, "Ben")]));

        assert_eq!(store.superset().len(), 2);
        assert_eq!(store.displayed().len(), 2);
    }

    #[test]
    fn test_filtered_fetch_payload_is_displayed() {
        let mut store: ViewStore<Member> = ViewStore::new();
        let seed = store.begin_fetch(true);
        store.complete_fetch(seed, Ok(vec![member(1, "Ana")]));

        store.set_filter(MemberFilter {
            plan: Some(MembershipPlan::Basic),
            ..Default::default()
        });
        // Server-filtered result carries a row the superset has not seen yet
        let narrowed = store.begin_fetch(false);
        store.complete_fetch(narrowed, Ok(vec![member(1, "Ana"), member(3, "Cleo")]));

        let displayed = store.displayed();
        assert!(displayed.iter().any(|m| m.id == 3));
        // The superset stays authoritative and untouched
        assert_eq!(store.superset().len(), 1);
    }

    #[test]
    fn test_criteria_change_recomputes_from_superset() {
        let mut store: ViewStore<Member> = ViewStore::new();
        let seed = store.begin_fetch(true);
        store.complete_fetch(seed, Ok(vec![member(1, "Ana"), member(2, "Ben")]));

        let narrowed = store.begin_fetch(false);
        store.complete_fetch(narrowed, Ok(vec![member(1, "Ana")]));
        assert_eq!(store.displayed().len(), 1);

        // Editing the criteria drops back to client-side recomputation
        store.clear_filters();
        assert_eq!(store.displayed().len(), 2);
    }
}
