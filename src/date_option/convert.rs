//! Selected option → persisted date filter

use super::option::{DateFilterOption, DateFilterOptionKind};
use crate::filter_model::{DateFilter, DateFilterGranularity, DateFilterValue, ObjRef, RelativeRange};

/// Whether "exclude current period" can be applied to the option
///
/// Only relative presets and forms whose range ends in the current period
/// (`to == 0`) qualify.
pub fn can_exclude_current_period(option: &DateFilterOption) -> bool {
    match &option.kind {
        DateFilterOptionKind::RelativePreset { to, .. } => *to == 0,
        DateFilterOptionKind::RelativeForm { to: Some(to), .. } => *to == 0,
        _ => false,
    }
}

/// Convert a selected option into the date filter to persist
///
/// Returns `None` for forms that are not filled in and when shifting an
/// offset would overflow. With
/// `exclude_current_period` set on an option that supports it, both offsets
/// shift one period back, so a stored `{from: -30, to: -1}` matches the
/// `{from: -29, to: 0}` preset with the flag again.
pub fn date_filter_from_option(
    option: &DateFilterOption,
    exclude_current_period: bool,
    data_set: Option<ObjRef>,
) -> Option<DateFilter> {
    let shift = if exclude_current_period && can_exclude_current_period(option) { 1 } else { 0 };

    let value = match &option.kind {
        DateFilterOptionKind::AllTime => DateFilterValue::AllTime {
            granularity: DateFilterGranularity::Date,
        },
        DateFilterOptionKind::AbsolutePreset { from, to } => DateFilterValue::Absolute {
            from: from.clone(),
            to: to.clone(),
        },
        DateFilterOptionKind::AbsoluteForm { from: Some(from), to: Some(to) } => DateFilterValue::Absolute {
            from: from.clone(),
            to: to.clone(),
        },
        DateFilterOptionKind::AbsoluteForm { .. } => return None,
        DateFilterOptionKind::RelativePreset { from, to, granularity, bounded_filter } => {
            DateFilterValue::Relative(RelativeRange {
                from: from.checked_sub(shift)?,
                to: to.checked_sub(shift)?,
                granularity: *granularity,
                bounded_filter: *bounded_filter,
            })
        }
        DateFilterOptionKind::RelativeForm {
            from: Some(from),
            to: Some(to),
            granularity: Some(granularity),
            ..
        } => DateFilterValue::Relative(RelativeRange {
            from: from.checked_sub(shift)?,
            to: to.checked_sub(shift)?,
            granularity: *granularity,
            bounded_filter: None,
        }),
        DateFilterOptionKind::RelativeForm { .. } => return None,
    };

    Some(DateFilter {
        value,
        data_set,
        local_identifier: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_with_exclude_shifts_back() {
        let preset = DateFilterOption::relative_preset("LAST_30_DAYS", -29, 0, DateFilterGranularity::Date);
        let filter = date_filter_from_option(&preset, true, None).unwrap();
        assert_eq!(filter, DateFilter::relative(-30, -1, DateFilterGranularity::Date));

        let filter = date_filter_from_option(&preset, false, None).unwrap();
        assert_eq!(filter, DateFilter::relative(-29, 0, DateFilterGranularity::Date));
    }

    #[test]
    fn test_exclude_ignored_when_not_applicable() {
        let last_month = DateFilterOption::relative_preset("LAST_MONTH", -1, -1, DateFilterGranularity::Month);
        assert!(!can_exclude_current_period(&last_month));
        let filter = date_filter_from_option(&last_month, true, None).unwrap();
        assert_eq!(filter, DateFilter::relative(-1, -1, DateFilterGranularity::Month));

        let absolute = DateFilterOption::absolute_preset("Y2018", "2018-01-01", "2018-12-31");
        assert!(!can_exclude_current_period(&absolute));
    }

    #[test]
    fn test_unfilled_form_has_no_filter() {
        let form = DateFilterOption::relative_form("RELATIVE_FORM", vec![DateFilterGranularity::Date]);
        assert!(date_filter_from_option(&form, false, None).is_none());
        assert!(date_filter_from_option(&DateFilterOption::absolute_form("ABS"), false, None).is_none());
    }

    #[test]
    fn test_shift_overflow_has_no_filter() {
        let preset = DateFilterOption::relative_preset("EARLIEST", i64::MIN, 0, DateFilterGranularity::Date);
        assert!(date_filter_from_option(&preset, true, None).is_none());
        // without the shift the extreme offset is carried as-is
        let filter = date_filter_from_option(&preset, false, None).unwrap();
        assert_eq!(filter, DateFilter::relative(i64::MIN, 0, DateFilterGranularity::Date));
    }

    #[test]
    fn test_all_time_keeps_data_set() {
        let all_time = DateFilterOption::all_time("ALL_TIME");
        let filter = date_filter_from_option(&all_time, true, Some(ObjRef::id("dt.closed"))).unwrap();
        assert!(filter.is_all_time());
        assert_eq!(filter.data_set, Some(ObjRef::id("dt.closed")));
    }
}
