//! Exact comparison of a date filter value against an option

use crate::date_option::{DateFilterOption, DateFilterOptionKind};
use crate::filter_model::{DateFilterValue, RelativeRange};

/// Whether `option` represents exactly `value`
///
/// Absolute values compare `from`/`to` literally. Relative values compare
/// offsets, granularity and the bounded filter (same granularity, same side,
/// same bound). Forms only match once they carry values.
pub fn option_matches_value(option: &DateFilterOption, value: &DateFilterValue) -> bool {
    match (value, &option.kind) {
        (DateFilterValue::AllTime { .. }, DateFilterOptionKind::AllTime) => true,
        (DateFilterValue::Absolute { from, to }, DateFilterOptionKind::AbsolutePreset { from: f, to: t }) => {
            from == f && to == t
        }
        (
            DateFilterValue::Absolute { from, to },
            DateFilterOptionKind::AbsoluteForm { from: Some(f), to: Some(t) },
        ) => from == f && to == t,
        (
            DateFilterValue::Relative(range),
            DateFilterOptionKind::RelativePreset { from, to, granularity, bounded_filter },
        ) => {
            range.from == *from
                && range.to == *to
                && range.granularity == *granularity
                && range.bounded_filter == *bounded_filter
        }
        (
            DateFilterValue::Relative(range),
            DateFilterOptionKind::RelativeForm {
                from: Some(from),
                to: Some(to),
                granularity: Some(granularity),
                ..
            },
        ) => {
            range.from == *from
                && range.to == *to
                && range.granularity == *granularity
                && range.bounded_filter.is_none()
        }
        _ => false,
    }
}

/// Whether `option` is a relative preset for exactly `range`
pub fn relative_preset_matches(option: &DateFilterOption, range: &RelativeRange) -> bool {
    matches!(option.kind, DateFilterOptionKind::RelativePreset { .. })
        && option_matches_value(option, &DateFilterValue::Relative(range.clone()))
}
