//! Cached remote collection with fetch sequencing
//!
//! Holds two copies of a server-owned collection: the authoritative
//! unfiltered superset (the local filter/search/sort engine recomputes
//! views against it without round-tripping) and the most recent filtered
//! result. Every fetch is stamped with a monotonically increasing sequence
//! number; a response is installed only if no newer fetch was issued in the
//! meantime, so a slow early response can never overwrite a later one.

/// Token handed out when a fetch is issued. Must be redeemed with
/// [`CollectionCache::complete`] when the response arrives.
#[derive(Debug, Clone, Copy)]
pub struct FetchTicket {
    seq: u64,
    /// Fetches with an empty filter set refresh the authoritative superset
    refreshes_superset: bool,
}

impl FetchTicket {
    /// Whether the fetch was issued with an empty filter set and will
    /// replace the superset when it lands
    pub fn is_unfiltered(&self) -> bool {
        self.refreshes_superset
    }
}

/// Cache for one remote collection
#[derive(Debug)]
pub struct CollectionCache<T> {
    superset: Vec<T>,
    filtered: Vec<T>,
    last_issued: u64,
}

impl<T: Clone> CollectionCache<T> {
    pub fn new() -> Self {
        Self {
            superset: Vec::new(),
            filtered: Vec::new(),
            last_issued: 0,
        }
    }

    /// Register a fetch. `unfiltered` marks the fetch as a superset refresh
    /// (its filter set was empty).
    pub fn begin_fetch(&mut self, unfiltered: bool) -> FetchTicket {
        self.last_issued += 1;
        FetchTicket {
            seq: self.last_issued,
            refreshes_superset: unfiltered,
        }
    }

    /// Install a completed fetch. Returns `false` when the ticket is stale
    /// (a newer fetch was issued) and the response was discarded.
    pub fn complete(&mut self, ticket: FetchTicket, items: Vec<T>) -> bool {
        if ticket.seq != self.last_issued {
            tracing::debug!(
                stale = ticket.seq,
                latest = self.last_issued,
                "discarding stale collection response"
            );
            return false;
        }
        if ticket.refreshes_superset {
            self.superset = items.clone();
        }
        self.filtered = items;
        true
    }

    /// Whether no newer fetch has been issued since this ticket
    pub fn is_latest(&self, ticket: FetchTicket) -> bool {
        ticket.seq == self.last_issued
    }

    /// The authoritative unfiltered superset
    pub fn superset(&self) -> &[T] {
        &self.superset
    }

    /// The most recent filtered result set
    pub fn filtered(&self) -> &[T] {
        &self.filtered
    }

    /// Replace one entity in both copies by identity
    pub fn replace_where(&mut self, matches: impl Fn(&T) -> bool, updated: T) {
        if let Some(slot) = self.superset.iter_mut().find(|item| matches(item)) {
            *slot = updated.clone();
        }
        if let Some(slot) = self.filtered.iter_mut().find(|item| matches(item)) {
            *slot = updated;
        }
    }
}

impl<T: Clone> Default for CollectionCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfiltered_fetch_refreshes_superset() {
        let mut cache = CollectionCache::new();
        let ticket = cache.begin_fetch(true);
        assert!(cache.complete(ticket, vec![1, 2, 3]));
        assert_eq!(cache.superset(), &[1, 2, 3]);
        assert_eq!(cache.filtered(), &[1, 2, 3]);
    }

    #[test]
    fn test_filtered_fetch_leaves_superset_alone() {
        let mut cache = CollectionCache::new();
        let seed = cache.begin_fetch(true);
        cache.complete(seed, vec![1, 2, 3]);

        let ticket = cache.begin_fetch(false);
        assert!(cache.complete(ticket, vec![2]));
        assert_eq!(cache.superset(), &[1, 2, 3]);
        assert_eq!(cache.filtered(), &[2]);
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut cache = CollectionCache::new();
        let slow = cache.begin_fetch(true);
        let fast = cache.begin_fetch(true);

        // Later fetch resolves first
        assert!(cache.complete(fast, vec![10]));
        // Earlier fetch resolves afterwards and is dropped
        assert!(!cache.complete(slow, vec![99]));
        assert_eq!(cache.superset(), &[10]);
        assert_eq!(cache.filtered(), &[10]);
    }

    #[test]
    fn test_replace_where_updates_both_copies() {
        let mut cache = CollectionCache::new();
        let seed = cache.begin_fetch(true);
        cache.complete(seed, vec![(1, "a"), (2, "b")]);
        let narrowed = cache.begin_fetch(false);
        cache.complete(narrowed, vec![(2, "b")]);

        cache.replace_where(|(id, _)| *id == 2, (2, "z"));
        assert_eq!(cache.superset()[1], (2, "z"));
        assert_eq!(cache.filtered()[0], (2, "z"));
    }
}
