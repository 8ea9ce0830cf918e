use chrono::NaiveDate;
use rcheckin::calendar::{
    Action, Buckets, HistoryView, IsoDay, MonthGrid, ViewState, aggregate, month_grids, reduce,
    resolve_day,
};
use rcheckin::config::DEFAULT_YEARS;
use rcheckin::errors::AppError;
use rcheckin::models::{RoleFilter, VisitRecord};
use serde_json::json;

fn record(value: serde_json::Value) -> VisitRecord {
    VisitRecord::from_value(value)
}

fn day(y: i32, m: u32, d: u32) -> IsoDay {
    IsoDay::new(y, m, d)
}

fn june_2025() -> ViewState {
    ViewState::new(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(), RoleFilter::All)
}

fn june_records() -> Vec<VisitRecord> {
    vec![
        record(json!({"date": "2025-06-15", "type": "Visitor", "name": "Ana", "purpose": "Enrollment"})),
        record(json!({"date": "2025-06-15", "type": "Newcomer", "name": "Ben"})),
    ]
}

// ---------------------------------------------------------------------
// Day resolution
// ---------------------------------------------------------------------

#[test]
fn test_date_prefix_resolves_to_first_ten_chars() {
    let r = record(json!({"date": "2025-06-15T23:59:59+08:00"}));
    assert_eq!(resolve_day(&r), Some(day(2025, 6, 15)));
    assert_eq!(resolve_day(&r).unwrap().to_string(), "2025-06-15");
}

#[test]
fn test_locale_formatted_dates() {
    let cases = [
        ("12/12/2025", day(2025, 12, 12)),
        ("6/15/25", day(2025, 6, 15)),
        ("06/15/25", day(2025, 6, 15)),
        ("06-15-25", day(2025, 6, 15)),
        ("June 15, 2025", day(2025, 6, 15)),
        ("Sun Jun 15 2025 10:00:00 GMT+0800", day(2025, 6, 15)),
        ("12/12/2025, 10:30:00 AM", day(2025, 12, 12)),
        ("Sun, 15 Jun 2025 10:00:00 +0000", day(2025, 6, 15)),
    ];

    for (input, expected) in cases {
        let r = record(json!({ "date": input }));
        assert_eq!(resolve_day(&r), Some(expected), "input: {input}");
    }
}

#[test]
fn test_created_at_used_when_date_missing() {
    let r = record(json!({"name": "x", "createdAt": "2025-03-04T10:00:00Z"}));
    assert_eq!(resolve_day(&r), Some(day(2025, 3, 4)));
}

#[test]
fn test_date_wins_over_created_at() {
    let r = record(json!({"createdAt": "2025-03-04", "date": "2025-05-06"}));
    assert_eq!(resolve_day(&r), Some(day(2025, 5, 6)));
}

#[test]
fn test_scan_takes_first_date_like_field_in_order() {
    let r = record(json!({
        "name": "Dana",
        "purpose": "follow-up of 2025-01-02",
        "registeredAt": "2025-02-03T08:00:00Z"
    }));
    assert_eq!(resolve_day(&r), Some(day(2025, 1, 2)));
}

#[test]
fn test_scan_accepts_timestamp_objects_in_utc() {
    // 2025-06-15T00:00:00Z
    let r = record(json!({"name": "Eve", "timestamp": {"seconds": 1749945600, "nanoseconds": 0}}));
    assert_eq!(resolve_day(&r), Some(day(2025, 6, 15)));

    let r = record(json!({"ts": {"_seconds": 1749945599, "_nanoseconds": 5}}));
    assert_eq!(resolve_day(&r), Some(day(2025, 6, 14)));
}

#[test]
fn test_unparseable_date_falls_back_to_other_fields() {
    let r = record(json!({"date": "someday", "createdAt": "2025-08-09"}));
    assert_eq!(resolve_day(&r), Some(day(2025, 8, 9)));
}

#[test]
fn test_unresolved_record_joins_no_bucket() {
    let records = vec![
        record(json!({"name": "nobody", "type": "Visitor", "date": "not a date"})),
        record(json!(42)),
    ];
    assert_eq!(resolve_day(&records[0]), None);

    let buckets = aggregate(&records, RoleFilter::All, 2025, 6);
    assert_eq!(buckets.first.total(), 0);
    assert_eq!(buckets.second.total(), 0);
}

// ---------------------------------------------------------------------
// Filtering and bucketing
// ---------------------------------------------------------------------

#[test]
fn test_role_filter_is_case_insensitive() {
    assert!(RoleFilter::Visitor.matches("visitor"));
    assert!(RoleFilter::Visitor.matches("VISITOR"));
    assert!(!RoleFilter::Visitor.matches("Newcomer"));
    assert!(RoleFilter::All.matches(""));
    assert!(!RoleFilter::Newcomer.matches(""));
}

#[test]
fn test_filter_then_bucket_equals_bucket_then_filter() {
    let records = vec![
        record(json!({"date": "2025-06-01", "type": "Visitor"})),
        record(json!({"date": "2025-06-01", "type": "newcomer"})),
        record(json!({"date": "2025-06-30", "type": "Newcomer"})),
        record(json!({"createdAt": "2025-07-04", "type": "visitor"})),
        record(json!({"date": "2025-08-01", "type": "Visitor"})),
        record(json!({"type": "Visitor"})),
    ];

    for role in [RoleFilter::All, RoleFilter::Newcomer, RoleFilter::Visitor] {
        let filtered_first = aggregate(&records, role, 2025, 6);
        let bucketed_first = Buckets::build(&records, 2025, 6).filtered(role);

        assert_eq!(filtered_first.first, bucketed_first.first, "role {role}");
        assert_eq!(filtered_first.second, bucketed_first.second, "role {role}");

        for d in [day(2025, 6, 1), day(2025, 6, 30), day(2025, 7, 4)] {
            assert_eq!(filtered_first.entries(&d), bucketed_first.entries(&d));
        }
    }
}

#[test]
fn test_bucket_keeps_input_order_and_ignores_other_months() {
    let records = vec![
        record(json!({"date": "2025-06-10", "name": "first"})),
        record(json!({"date": "2025-05-31", "name": "may"})),
        record(json!({"date": "2025-06-10", "name": "second"})),
        record(json!({"date": "2025-07-31", "name": "july"})),
        record(json!({"date": "2025-08-01", "name": "august"})),
    ];

    let buckets = aggregate(&records, RoleFilter::All, 2025, 6);
    let names: Vec<String> = buckets
        .entries(&day(2025, 6, 10))
        .iter()
        .map(|r| r.display_name())
        .collect();

    assert_eq!(names, vec!["first", "second"]);
    assert_eq!(buckets.first.count(10), 2);
    assert_eq!(buckets.first.total(), 2);
    assert_eq!(buckets.second.count(31), 1);
    assert_eq!(buckets.second.total(), 1);
    assert!(buckets.entries(&day(2025, 5, 31)).is_empty());
}

#[test]
fn test_december_rolls_over_to_january() {
    let records = vec![
        record(json!({"date": "2025-12-24"})),
        record(json!({"date": "2026-01-05"})),
        record(json!({"date": "2025-01-05"})),
    ];

    let state = reduce(
        &june_2025(),
        Action::SetMonth(11),
        &DEFAULT_YEARS,
    )
    .unwrap();
    assert_eq!(state.next(), (2026, 1));

    let buckets = aggregate(&records, RoleFilter::All, state.year, state.month());
    assert_eq!((buckets.second.year, buckets.second.month), (2026, 1));
    assert_eq!(buckets.first.count(24), 1);
    assert_eq!(buckets.second.count(5), 1);
    assert_eq!(buckets.second.total(), 1);

    let grids = month_grids(&buckets, None);
    assert_eq!(grids[0].title(), "DECEMBER 2025");
    assert_eq!(grids[1].title(), "JANUARY 2026");
}

// ---------------------------------------------------------------------
// Reducer
// ---------------------------------------------------------------------

#[test]
fn test_select_same_day_twice_clears_selection() {
    let s0 = june_2025();
    let pick = Action::SelectDay {
        day: 15,
        next_month: false,
    };

    let s1 = reduce(&s0, pick, &DEFAULT_YEARS).unwrap();
    assert_eq!(s1.selected, Some(day(2025, 6, 15)));

    let s2 = reduce(&s1, pick, &DEFAULT_YEARS).unwrap();
    assert_eq!(s2.selected, None);
}

#[test]
fn test_select_other_day_replaces_selection() {
    let s1 = reduce(
        &june_2025(),
        Action::SelectDay {
            day: 15,
            next_month: false,
        },
        &DEFAULT_YEARS,
    )
    .unwrap();
    let s2 = reduce(
        &s1,
        Action::SelectDay {
            day: 3,
            next_month: true,
        },
        &DEFAULT_YEARS,
    )
    .unwrap();

    assert_eq!(s2.selected, Some(day(2025, 7, 3)));
}

#[test]
fn test_context_changes_clear_selection() {
    let selected = reduce(
        &june_2025(),
        Action::SelectDay {
            day: 15,
            next_month: false,
        },
        &DEFAULT_YEARS,
    )
    .unwrap();

    for action in [
        Action::SetMonth(5),
        Action::SetMonth(2),
        Action::SetYear(2025),
        Action::SetYear(2027),
        Action::SetRole(RoleFilter::All),
        Action::SetRole(RoleFilter::Visitor),
    ] {
        let next = reduce(&selected, action, &DEFAULT_YEARS).unwrap();
        assert_eq!(next.selected, None, "{action:?}");
    }
}

#[test]
fn test_invalid_actions_are_rejected() {
    let s = june_2025();

    assert!(matches!(
        reduce(&s, Action::SetMonth(12), &DEFAULT_YEARS),
        Err(AppError::InvalidMonth(13))
    ));
    assert!(matches!(
        reduce(&s, Action::SetMonth(u32::MAX), &DEFAULT_YEARS),
        Err(AppError::InvalidMonth(u32::MAX))
    ));
    assert!(matches!(
        reduce(&s, Action::SetYear(1999), &DEFAULT_YEARS),
        Err(AppError::InvalidYear(1999, _))
    ));
    assert!(matches!(
        reduce(
            &s,
            Action::SelectDay {
                day: 31,
                next_month: false
            },
            &DEFAULT_YEARS
        ),
        Err(AppError::InvalidDay(_))
    ));
    // the reducer never mutates its input
    assert_eq!(s, june_2025());
}

// ---------------------------------------------------------------------
// History view
// ---------------------------------------------------------------------

#[test]
fn test_june_example_counts_and_rows() {
    let mut view = HistoryView::new(june_records(), DEFAULT_YEARS.to_vec(), june_2025());

    let buckets = view.buckets();
    assert_eq!(buckets.first.count(15), 2);
    let grids = month_grids(&buckets, None);
    let cell = &grids[0].cells[14];
    assert_eq!((cell.day, cell.count), (15, 2));

    view.dispatch(Action::SelectDay {
        day: 15,
        next_month: false,
    })
    .unwrap();
    assert_eq!(view.selected_entries().len(), 2);

    // role change clears the selection, re-select to see visitors only
    view.dispatch(Action::SetRole(RoleFilter::Visitor)).unwrap();
    assert!(view.selected_entries().is_empty());
    view.dispatch(Action::SelectDay {
        day: 15,
        next_month: false,
    })
    .unwrap();

    let entries = view.selected_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].display_name(), "Ana");
    assert_eq!(
        rcheckin::calendar::entries::headers(view.state().role),
        vec!["Name", "Type", "Time In", "Time Out", "Purpose", "Room"]
    );
    assert_eq!(
        rcheckin::calendar::entries::entry_row(entries[0], RoleFilter::Visitor),
        vec!["Ana", "Visitor", "—", "—", "Enrollment", "—"]
    );
}

#[test]
fn test_purpose_column_only_for_visitor_filter() {
    use rcheckin::calendar::entries::headers;
    assert!(!headers(RoleFilter::All).contains(&"Purpose"));
    assert!(!headers(RoleFilter::Newcomer).contains(&"Purpose"));
    assert!(headers(RoleFilter::Visitor).contains(&"Purpose"));
}

#[test]
fn test_time_fields_fall_back_in_order() {
    let r = record(json!({"time": "08:00", "timeIn": "", "timeOutFormatted": "5:00 PM", "timeOut": "17:00"}));
    assert_eq!(r.time_in(), "08:00");
    assert_eq!(r.time_out(), "5:00 PM");
    assert_eq!(r.display_name(), "—");
}

#[test]
fn test_replace_records_resets_state() {
    let defaults = june_2025();
    let mut view = HistoryView::new(june_records(), DEFAULT_YEARS.to_vec(), defaults.clone());

    view.dispatch(Action::SetRole(RoleFilter::Newcomer)).unwrap();
    view.dispatch(Action::SelectDay {
        day: 15,
        next_month: false,
    })
    .unwrap();
    assert_ne!(view.state(), &defaults);

    view.replace_records(Vec::new());
    assert_eq!(view.state(), &defaults);
    assert!(view.records().is_empty());
}

#[test]
fn test_select_date_checks_displayed_months() {
    let mut view = HistoryView::new(june_records(), DEFAULT_YEARS.to_vec(), june_2025());

    view.select_date(NaiveDate::from_ymd_opt(2025, 7, 20).unwrap())
        .unwrap();
    assert_eq!(view.state().selected, Some(day(2025, 7, 20)));

    let err = view
        .select_date(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap())
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidDay(_)));
}

// ---------------------------------------------------------------------
// Grid rendering
// ---------------------------------------------------------------------

#[test]
fn test_grid_layout_and_highlight() {
    let records = june_records();
    let buckets = aggregate(&records, RoleFilter::All, 2025, 6);
    let selected = day(2025, 6, 15);

    // 2025-06-01 is a Sunday, 2025-07-01 a Tuesday
    let june = MonthGrid::build(&buckets.first, Some(&selected));
    let july = MonthGrid::build(&buckets.second, Some(&selected));
    assert_eq!(june.leading_blanks, 0);
    assert_eq!(july.leading_blanks, 2);
    assert_eq!(june.cells.len(), 30);
    assert_eq!(july.cells.len(), 31);

    let text = june.render();
    assert!(text.starts_with("JUNE 2025\nSunday"));
    assert!(text.contains("[15](2)"));
    assert!(!july.render().contains('['));
}

#[test]
fn test_leap_year_february() {
    let records: Vec<VisitRecord> = Vec::new();
    let buckets = aggregate(&records, RoleFilter::All, 2028, 2);
    assert_eq!(MonthGrid::build(&buckets.first, None).cells.len(), 29);
}
