//! Member list view: filter set, search fields and column comparators

use super::{compare_ci, compare_numeric_id, contains_ci, FilterPredicate, Listable};
use shared::models::{Member, MemberStatus, MembershipPlan};
use std::cmp::Ordering;

/// Member list filters. Equality predicates, AND-composed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberFilter {
    pub location_id: Option<i64>,
    pub plan: Option<MembershipPlan>,
    pub status: Option<MemberStatus>,
}

impl FilterPredicate<Member> for MemberFilter {
    fn matches(&self, member: &Member) -> bool {
        if let Some(location_id) = self.location_id {
            if member.location_id != location_id {
                return false;
            }
        }
        if let Some(plan) = self.plan {
            if member.plan != plan {
                return false;
            }
        }
        if let Some(status) = self.status {
            // Legacy inactive renders as cancelled, so it matches a
            // cancelled filter too
            let matched = if status == MemberStatus::Cancelled {
                member.status.is_cancelled()
            } else {
                member.status == status
            };
            if !matched {
                return false;
            }
        }
        true
    }
}

/// Sortable member columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberColumn {
    /// Numeric sort on the `M-<n>` identifier
    MemberId,
    Name,
    Email,
    Plan,
    Status,
    JoinDate,
}

impl Listable for Member {
    type Column = MemberColumn;
    type Filter = MemberFilter;

    fn matches_search(&self, query: &str) -> bool {
        contains_ci(&self.name, query)
            || contains_ci(&self.email, query)
            || contains_ci(&self.member_id, query)
            || self
                .phone
                .as_deref()
                .is_some_and(|phone| contains_ci(phone, query))
    }

    fn compare_by(&self, other: &Self, column: MemberColumn) -> Ordering {
        match column {
            MemberColumn::MemberId => {
                compare_numeric_id(self.member_number(), other.member_number())
            }
            MemberColumn::Name => compare_ci(&self.name, &other.name),
            MemberColumn::Email => compare_ci(&self.email, &other.email),
            MemberColumn::Plan => self.plan.rank().cmp(&other.plan.rank()),
            MemberColumn::Status => self.status.rank().cmp(&other.status.rank()),
            MemberColumn::JoinDate => self.created_at.cmp(&other.created_at),
        }
    }
}
