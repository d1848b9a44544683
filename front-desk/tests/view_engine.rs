// List-view engine behavior over a cached member collection

use chrono::{TimeZone, Utc};
use front_desk::view::members::{MemberColumn, MemberFilter};
use front_desk::{ListView, SortDirection};
use shared::models::{Member, MemberStatus, MembershipPlan};

fn member(id: i64, member_id: &str, name: &str, plan: MembershipPlan) -> Member {
    Member {
        id,
        member_id: member_id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: Some(format!("555-010{id}")),
        emergency_contact: None,
        location_id: if id % 2 == 0 { 2 } else { 1 },
        plan,
        status: MemberStatus::Active,
        notes: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, id as u32, 0, 0, 0).unwrap(),
        total_check_ins: None,
    }
}

fn superset() -> Vec<Member> {
    vec![
        member(3, "M-3", "Carla Reyes", MembershipPlan::Elite),
        member(10, "M-10", "Ana Martinez", MembershipPlan::Basic),
        member(2, "M-2", "Ben Ortiz", MembershipPlan::Premium),
    ]
}

fn names(members: &[Member]) -> Vec<&str> {
    members.iter().map(|m| m.name.as_str()).collect()
}

#[test]
fn numeric_id_sort_is_not_lexicographic() {
    let mut view: ListView<Member> = ListView::new();
    view.toggle_sort(MemberColumn::MemberId);

    let displayed = view.apply(&superset());
    let ids: Vec<&str> = displayed.iter().map(|m| m.member_id.as_str()).collect();
    assert_eq!(ids, vec!["M-2", "M-3", "M-10"]);
}

#[test]
fn plan_sort_uses_domain_ordering() {
    let mut view: ListView<Member> = ListView::new();
    view.toggle_sort(MemberColumn::Plan);

    let displayed = view.apply(&superset());
    let plans: Vec<MembershipPlan> = displayed.iter().map(|m| m.plan).collect();
    assert_eq!(
        plans,
        vec![
            MembershipPlan::Basic,
            MembershipPlan::Premium,
            MembershipPlan::Elite
        ]
    );
}

#[test]
fn toggling_same_column_reverses_order() {
    let mut view: ListView<Member> = ListView::new();
    let superset = superset();

    view.toggle_sort(MemberColumn::Name);
    let ascending = view.apply(&superset);
    assert_eq!(view.sort().unwrap().direction, SortDirection::Ascending);

    view.toggle_sort(MemberColumn::Name);
    let descending = view.apply(&superset);
    assert_eq!(view.sort().unwrap().direction, SortDirection::Descending);

    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(names(&descending), names(&reversed));
}

#[test]
fn switching_column_resets_to_ascending() {
    let mut view: ListView<Member> = ListView::new();
    view.toggle_sort(MemberColumn::Name);
    view.toggle_sort(MemberColumn::Name);
    assert_eq!(view.sort().unwrap().direction, SortDirection::Descending);

    view.toggle_sort(MemberColumn::Plan);
    let spec = view.sort().unwrap();
    assert_eq!(spec.column, MemberColumn::Plan);
    assert_eq!(spec.direction, SortDirection::Ascending);
}

#[test]
fn filtering_then_clearing_reproduces_displayed_set() {
    let mut view: ListView<Member> = ListView::new();
    let superset = superset();
    let before = view.apply(&superset);

    view.set_filter(MemberFilter {
        plan: Some(MembershipPlan::Elite),
        ..Default::default()
    });
    assert_eq!(view.apply(&superset).len(), 1);

    view.clear_filters();
    assert_eq!(names(&view.apply(&superset)), names(&before));
}

#[test]
fn empty_search_falls_back_to_filter_subset_not_superset() {
    let mut view: ListView<Member> = ListView::new();
    let superset = superset();

    view.set_filter(MemberFilter {
        location_id: Some(2),
        ..Default::default()
    });
    let filter_only = view.apply(&superset);
    assert_eq!(filter_only.len(), 2);

    view.set_search("ana");
    assert_eq!(names(&view.apply(&superset)), vec!["Ana Martinez"]);

    view.clear_search();
    assert_eq!(names(&view.apply(&superset)), names(&filter_only));
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let view = {
        let mut v: ListView<Member> = ListView::new();
        v.set_search("MART");
        v
    };
    assert_eq!(names(&view.apply(&superset())), vec!["Ana Martinez"]);

    let mut by_id: ListView<Member> = ListView::new();
    by_id.set_search("m-10");
    assert_eq!(names(&by_id.apply(&superset())), vec!["Ana Martinez"]);

    let mut by_phone: ListView<Member> = ListView::new();
    by_phone.set_search("555-0102");
    assert_eq!(names(&by_phone.apply(&superset())), vec!["Ben Ortiz"]);
}

#[test]
fn filters_compose_with_and() {
    let mut view: ListView<Member> = ListView::new();
    view.set_filter(MemberFilter {
        location_id: Some(1),
        plan: Some(MembershipPlan::Elite),
        status: Some(MemberStatus::Active),
    });
    assert_eq!(names(&view.apply(&superset())), vec!["Carla Reyes"]);
}

#[test]
fn ties_preserve_input_order() {
    let mut same_plan = superset();
    for m in &mut same_plan {
        m.plan = MembershipPlan::Basic;
    }

    let mut view: ListView<Member> = ListView::new();
    view.toggle_sort(MemberColumn::Plan);
    assert_eq!(
        names(&view.apply(&same_plan)),
        vec!["Carla Reyes", "Ana Martinez", "Ben Ortiz"]
    );
}

#[test]
fn inactive_members_match_a_cancelled_filter() {
    let mut superset = superset();
    superset[0].status = MemberStatus::Inactive;
    superset[1].status = MemberStatus::Cancelled;

    let mut view: ListView<Member> = ListView::new();
    view.set_filter(MemberFilter {
        status: Some(MemberStatus::Cancelled),
        ..Default::default()
    });
    assert_eq!(
        names(&view.apply(&superset)),
        vec!["Carla Reyes", "Ana Martinez"]
    );
}
