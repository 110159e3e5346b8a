//! Integration tests for date filter option matching
//!
//! Tests that a stored date filter maps onto the option the dropdown shows as
//! selected, and that a virtual preset is synthesized when nothing fits.

mod common;

use common::load_catalog;
use dashfilter::{
    date_filter_from_option, match_date_filter_option, parser, DateFilter, DateFilterGranularity,
    DateFilterOptionKind,
};

#[test]
fn test_all_time_from_missing_and_unbounded_filter() {
    let catalog = load_catalog("date_options.yaml");

    let from_none = match_date_filter_option(None, &catalog, None);
    let unbounded = parser::parse_date_filter_str("{ type: relative, granularity: GDC.time.date }").unwrap();
    let from_unbounded = match_date_filter_option(Some(&unbounded), &catalog, None);

    assert_eq!(from_none.option.local_identifier, "ALL_TIME");
    assert!(from_none.option.visible);
    assert_eq!(from_none, from_unbounded);
}

#[test]
fn test_exact_relative_match() {
    let catalog = load_catalog("date_options.yaml");
    let filter = parser::parse_date_filter_str(
        r#"{ from: "-29", to: "0", granularity: GDC.time.date, type: relative }"#,
    )
    .unwrap();

    let result = match_date_filter_option(Some(&filter), &catalog, None);

    assert_eq!(result.option.local_identifier, "last30days");
    assert!(!result.exclude_current_period);
}

#[test]
fn test_exclude_current_period_reinterpretation() {
    let catalog = load_catalog("date_options.yaml");
    let filter = parser::parse_date_filter_str(
        r#"{ from: "-30", to: "-1", granularity: GDC.time.date, type: relative }"#,
    )
    .unwrap();

    let result = match_date_filter_option(Some(&filter), &catalog, None);

    assert_eq!(result.option.local_identifier, "last30days");
    assert!(result.exclude_current_period);
}

#[test]
fn test_exact_match_beats_reinterpretation() {
    // LAST_MONTH is stored as {-1, -1}; it must not become THIS_MONTH with the flag
    let catalog = load_catalog("date_options.yaml");
    let filter = DateFilter::relative(-1, -1, DateFilterGranularity::Month);

    let result = match_date_filter_option(Some(&filter), &catalog, None);

    assert_eq!(result.option.local_identifier, "LAST_MONTH");
    assert!(!result.exclude_current_period);
}

#[test]
fn test_preset_without_exclude_wins_on_tie() {
    let catalog = load_catalog("date_options_exclude_variants.yaml");

    let including = DateFilter::relative(-29, 0, DateFilterGranularity::Date);
    let result = match_date_filter_option(Some(&including), &catalog, None);
    assert_eq!(result.option.local_identifier, "last30days");
    assert!(!result.exclude_current_period);

    // a preset defined with to = -1 matches exactly and is not reinterpreted
    let excluding = DateFilter::relative(-30, -1, DateFilterGranularity::Date);
    let result = match_date_filter_option(Some(&excluding), &catalog, None);
    assert_eq!(result.option.local_identifier, "last30days_excluding_today");
    assert!(!result.exclude_current_period);
}

#[test]
fn test_reinterpretation_only_considers_relative_presets() {
    let catalog = load_catalog("date_options_exclude_variants.yaml");
    // {-60, -1} shifts to {-59, 0}; nothing matches, and no form is configured
    let filter = DateFilter::relative(-60, -1, DateFilterGranularity::Date);

    let result = match_date_filter_option(Some(&filter), &catalog, None);

    assert!(result.option.is_virtual());
    assert!(!result.exclude_current_period);
}

#[test]
fn test_absolute_exact_match() {
    let catalog = load_catalog("date_options.yaml");
    let filter = DateFilter::absolute("2018-01-01", "2018-12-31");

    let result = match_date_filter_option(Some(&filter), &catalog, None);

    assert_eq!(result.option.local_identifier, "YEAR_2018");
}

#[test]
fn test_bounded_preset_match() {
    let catalog = load_catalog("date_options.yaml");
    let filter = parser::parse_date_filter_str(
        "{ type: relative, granularity: GDC.time.year, from: 0, to: 0, boundedFilter: { granularity: GDC.time.date, to: 0 } }",
    )
    .unwrap();

    let result = match_date_filter_option(Some(&filter), &catalog, None);
    assert_eq!(result.option.local_identifier, "THIS_YEAR_TO_DATE");

    // same range without the bound is not that preset
    let unbounded = DateFilter::relative(0, 0, DateFilterGranularity::Year);
    let result = match_date_filter_option(Some(&unbounded), &catalog, None);
    assert_eq!(result.option.local_identifier, "RELATIVE_FORM");
}

#[test]
fn test_unmatched_values_fill_visible_form() {
    let catalog = load_catalog("date_options.yaml");

    let absolute = DateFilter::absolute("2021-03-01", "2021-03-15");
    let result = match_date_filter_option(Some(&absolute), &catalog, None);
    assert_eq!(result.option.local_identifier, "ABSOLUTE_FORM");
    assert_eq!(
        result.option.kind,
        DateFilterOptionKind::AbsoluteForm {
            from: Some("2021-03-01".into()),
            to: Some("2021-03-15".into()),
        }
    );

    let relative = DateFilter::relative(-3, -2, DateFilterGranularity::Quarter);
    let result = match_date_filter_option(Some(&relative), &catalog, None);
    assert_eq!(result.option.local_identifier, "RELATIVE_FORM");
    assert_eq!(result.option.granularity(), Some(DateFilterGranularity::Quarter));
}

#[test]
fn test_preferred_form_is_sticky() {
    let catalog = load_catalog("date_options.yaml");
    let filter = DateFilter::relative(-6, 0, DateFilterGranularity::Date);

    let without_preference = match_date_filter_option(Some(&filter), &catalog, None);
    assert_eq!(without_preference.option.local_identifier, "LAST_7_DAYS");

    let with_preference = match_date_filter_option(Some(&filter), &catalog, Some("RELATIVE_FORM"));
    assert_eq!(with_preference.option.local_identifier, "RELATIVE_FORM");
    assert!(!with_preference.exclude_current_period);
    match with_preference.option.kind {
        DateFilterOptionKind::RelativeForm { from, to, granularity, .. } => {
            assert_eq!((from, to, granularity), (Some(-6), Some(0), Some(DateFilterGranularity::Date)));
        }
        other => panic!("Expected relative form, got: {:?}", other),
    }
}

#[test]
fn test_preferred_form_ignored_for_all_time() {
    let catalog = load_catalog("date_options.yaml");
    let result = match_date_filter_option(Some(&DateFilter::all_time()), &catalog, Some("RELATIVE_FORM"));
    assert_eq!(result.option.local_identifier, "ALL_TIME");
}

#[test]
fn test_preferred_unknown_id_falls_through() {
    let catalog = load_catalog("date_options.yaml");
    let filter = DateFilter::relative(-6, 0, DateFilterGranularity::Date);
    let result = match_date_filter_option(Some(&filter), &catalog, Some("NO_SUCH_OPTION"));
    assert_eq!(result.option.local_identifier, "LAST_7_DAYS");
}

#[test]
fn test_virtual_fallback_always_renderable() {
    let catalog = load_catalog("date_options_restricted.yaml");

    let absolute = DateFilter::absolute("2020-02-02", "2020-02-20");
    let result = match_date_filter_option(Some(&absolute), &catalog, Some("ABSOLUTE_FORM"));
    assert!(result.option.is_virtual());
    assert!(!result.option.visible);
    assert_eq!(
        result.option.kind,
        DateFilterOptionKind::AbsolutePreset {
            from: "2020-02-02".into(),
            to: "2020-02-20".into(),
        }
    );

    let relative = DateFilter::relative(-13, 0, DateFilterGranularity::Week);
    let result = match_date_filter_option(Some(&relative), &catalog, None);
    assert!(result.option.is_virtual());
    assert!(!result.option.visible);
    assert_eq!(
        result.option.kind,
        DateFilterOptionKind::RelativePreset {
            from: -13,
            to: 0,
            granularity: DateFilterGranularity::Week,
            bounded_filter: None,
        }
    );

    let all_time = match_date_filter_option(None, &catalog, None);
    assert!(all_time.option.is_virtual());
    assert!(all_time.option.is_all_time());
}

#[test]
fn test_selected_option_converts_back_to_stored_filter() {
    let catalog = load_catalog("date_options.yaml");
    let stored = DateFilter::relative(-30, -1, DateFilterGranularity::Date);

    let selected = match_date_filter_option(Some(&stored), &catalog, None);
    let restored = date_filter_from_option(&selected.option, selected.exclude_current_period, None).unwrap();

    assert_eq!(restored, stored);
}

#[test]
fn test_extreme_stored_offsets_still_render() {
    let filter = parser::parse_date_filter_str(
        "{ type: relative, granularity: GDC.time.date, from: 9223372036854775807, to: -1 }",
    )
    .unwrap();

    let result = match_date_filter_option(Some(&filter), &Default::default(), None);

    assert!(result.option.is_virtual());
    assert!(!result.exclude_current_period);
    assert_eq!(date_filter_from_option(&result.option, false, None).unwrap(), filter);
}
