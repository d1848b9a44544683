//! List-view engine
//!
//! One parameterized engine serves every collection page. It is a pure
//! transformation: given the cached superset and the current criteria
//! (equality filters, free-text search, sort spec) it produces the
//! render-ready list. It never talks to the server, so it can run on every
//! keystroke.

pub mod members;
pub mod reorders;

pub use members::{MemberColumn, MemberFilter};
pub use reorders::{ReorderColumn, ReorderFilter};

use std::cmp::Ordering;

/// Equality-filter set for one entity type. Criteria compose with AND;
/// an empty set matches everything.
pub trait FilterPredicate<T>: Default + Clone {
    fn matches(&self, item: &T) -> bool;
}

/// An entity the list-view engine can display
pub trait Listable: Clone {
    /// Sortable column identifier
    type Column: Copy + PartialEq;
    /// Filter criteria set
    type Filter: FilterPredicate<Self>;

    /// Case-insensitive substring match, OR across the entity's fixed
    /// search fields
    fn matches_search(&self, query: &str) -> bool;

    /// Column comparator table
    fn compare_by(&self, other: &Self, column: Self::Column) -> Ordering;
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<C> {
    pub column: C,
    pub direction: SortDirection,
}

/// View criteria for one collection.
///
/// `apply` layers search over filters and sorts the result; clearing the
/// search therefore falls back to the filter-only subset, never the full
/// superset, unless the filters are also empty.
#[derive(Debug, Clone)]
pub struct ListView<T: Listable> {
    filter: T::Filter,
    search: String,
    sort: Option<SortSpec<T::Column>>,
}

impl<T: Listable> Default for ListView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Listable> ListView<T> {
    pub fn new() -> Self {
        Self {
            filter: T::Filter::default(),
            search: String::new(),
            sort: None,
        }
    }

    pub fn filter(&self) -> &T::Filter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: T::Filter) {
        self.filter = filter;
    }

    pub fn clear_filters(&mut self) {
        self.filter = T::Filter::default();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn sort(&self) -> Option<&SortSpec<T::Column>> {
        self.sort.as_ref()
    }

    /// Toggle sorting on a column: a second click on the active column
    /// flips direction, a click on a new column resets to ascending.
    pub fn toggle_sort(&mut self, column: T::Column) {
        self.sort = Some(match &self.sort {
            Some(spec) if spec.column == column => SortSpec {
                column,
                direction: spec.direction.toggle(),
            },
            _ => SortSpec {
                column,
                direction: SortDirection::Ascending,
            },
        });
    }

    /// Produce the displayed list from the cached superset. Pure; an empty
    /// result is a normal outcome, rendered as the "no results" state.
    pub fn apply(&self, superset: &[T]) -> Vec<T> {
        let mut displayed: Vec<T> = superset
            .iter()
            .filter(|item| self.filter.matches(item))
            .filter(|item| self.search.is_empty() || item.matches_search(&self.search))
            .cloned()
            .collect();

        if let Some(spec) = &self.sort {
            // Stable sort keeps relative input order on ties
            displayed.sort_by(|a, b| {
                let ord = a.compare_by(b, spec.column);
                match spec.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }

        displayed
    }
}

/// Case-insensitive substring test
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive lexicographic compare for text columns
pub fn compare_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Compare display identifiers numerically. Unparseable identifiers take
/// value 0 and sort first.
pub fn compare_numeric_id(a: Option<u64>, b: Option<u64>) -> Ordering {
    a.unwrap_or(0).cmp(&b.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_direction_toggle() {
        assert_eq!(SortDirection::Ascending.toggle(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggle(), SortDirection::Ascending);
    }

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("Ana Martinez", "mart"));
        assert!(contains_ci("ana@example.com", "ANA"));
        assert!(!contains_ci("Ana", "bob"));
    }

    #[test]
    fn test_compare_numeric_id_unparseable_first() {
        assert_eq!(compare_numeric_id(None, Some(1)), Ordering::Less);
        assert_eq!(compare_numeric_id(Some(2), Some(10)), Ordering::Less);
    }
}
