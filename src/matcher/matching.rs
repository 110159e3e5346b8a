//! Date filter → date filter option matching
//!
//! Finds the option the date filter dropdown shows as selected for a stored
//! date filter. Steps run in priority order:
//! 1. sticky form: a preferred form stays selected even if a preset matches
//! 2. all time
//! 3. exact match, first in catalog order
//! 4. "exclude current period" reinterpretation of `to == -1` ranges
//! 5. form filled with the stored values
//! 6. invisible virtual preset carrying the stored values
//!
//! Matching always produces an option; there is no "no selection" outcome.

use serde::Serialize;
use super::compare::{option_matches_value, relative_preset_matches};
use crate::date_option::{DateFilterOption, DateFilterOptionKind, DateFilterOptionsCatalog};
use crate::filter_model::{DateFilter, DateFilterValue, RelativeRange};

/// Option to show as selected, with the "exclude current period" toggle state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFilterOptionMatch {
    pub option: DateFilterOption,
    pub exclude_current_period: bool,
}

impl DateFilterOptionMatch {
    fn new(option: DateFilterOption, exclude_current_period: bool) -> Self {
        DateFilterOptionMatch {
            option,
            exclude_current_period,
        }
    }
}

/// Match a stored date filter to the option that should appear selected
///
/// # Arguments
/// * `date_filter` - Stored filter; `None` means all time
/// * `catalog` - Options configured for the workspace
/// * `preferred_option_id` - Local identifier of the option the user last picked
pub fn match_date_filter_option(
    date_filter: Option<&DateFilter>,
    catalog: &DateFilterOptionsCatalog,
    preferred_option_id: Option<&str>,
) -> DateFilterOptionMatch {
    let value = match date_filter {
        Some(filter) if !filter.is_all_time() => &filter.value,
        _ => return match_all_time(catalog),
    };

    if let Some(result) = match_preferred_form(value, catalog, preferred_option_id) {
        return result;
    }

    if let Some(option) = catalog
        .flatten()
        .into_iter()
        .find(|o| option_matches_value(o, value))
    {
        tracing::debug!(option = %option.local_identifier, "date filter matched option exactly");
        return DateFilterOptionMatch::new(option.clone(), false);
    }

    if let Some(option) = match_excluding_current_period(value, catalog) {
        tracing::debug!(
            option = %option.local_identifier,
            "date filter matched preset with current period excluded"
        );
        return DateFilterOptionMatch::new(option.clone(), true);
    }

    if let Some(option) = catalog
        .visible_form_for(value.filter_type())
        .and_then(|form| fill_form(form, value))
    {
        tracing::debug!(form = %option.local_identifier, "date filter shown in form");
        return DateFilterOptionMatch::new(option, false);
    }

    tracing::debug!("no configured option represents the date filter, using virtual preset");
    DateFilterOptionMatch::new(virtual_preset(value), false)
}

fn match_all_time(catalog: &DateFilterOptionsCatalog) -> DateFilterOptionMatch {
    let option = match catalog.visible_all_time() {
        Some(all_time) => all_time.clone(),
        None => {
            tracing::debug!("all-time option not available, using virtual preset");
            DateFilterOption::virtual_preset(DateFilterOptionKind::AllTime)
        }
    };
    DateFilterOptionMatch::new(option, false)
}

// A form the user picked stays selected, even when its values equal a preset.
fn match_preferred_form(
    value: &DateFilterValue,
    catalog: &DateFilterOptionsCatalog,
    preferred_option_id: Option<&str>,
) -> Option<DateFilterOptionMatch> {
    let preferred = catalog.find_by_id(preferred_option_id?)?;
    if !preferred.is_form() {
        return None;
    }
    let form = catalog.visible_form_for(value.filter_type())?;
    let option = fill_form(form, value)?;
    tracing::debug!(form = %option.local_identifier, "preferred form kept selected");
    Some(DateFilterOptionMatch::new(option, false))
}

fn match_excluding_current_period<'a>(
    value: &DateFilterValue,
    catalog: &'a DateFilterOptionsCatalog,
) -> Option<&'a DateFilterOption> {
    let DateFilterValue::Relative(range) = value else {
        return None;
    };
    if range.to != -1 {
        return None;
    }
    let including_current = RelativeRange {
        from: range.from.checked_add(1)?,
        to: 0,
        ..range.clone()
    };
    catalog
        .relative_preset
        .iter()
        .find(|o| relative_preset_matches(o, &including_current))
}

/// Copy of `form` carrying the literal values of `value`
///
/// `None` when the form kind does not fit the value type. Forms cannot
/// express a bounded filter, so it is not carried over.
fn fill_form(form: &DateFilterOption, value: &DateFilterValue) -> Option<DateFilterOption> {
    let kind = match (&form.kind, value) {
        (DateFilterOptionKind::AbsoluteForm { .. }, DateFilterValue::Absolute { from, to }) => {
            DateFilterOptionKind::AbsoluteForm {
                from: Some(from.clone()),
                to: Some(to.clone()),
            }
        }
        (
            DateFilterOptionKind::RelativeForm { available_granularities, .. },
            DateFilterValue::Relative(range),
        ) => DateFilterOptionKind::RelativeForm {
            from: Some(range.from),
            to: Some(range.to),
            granularity: Some(range.granularity),
            available_granularities: available_granularities.clone(),
        },
        _ => return None,
    };
    Some(DateFilterOption {
        kind,
        ..form.clone()
    })
}

fn virtual_preset(value: &DateFilterValue) -> DateFilterOption {
    let kind = match value {
        DateFilterValue::AllTime { .. } => DateFilterOptionKind::AllTime,
        DateFilterValue::Absolute { from, to } => DateFilterOptionKind::AbsolutePreset {
            from: from.clone(),
            to: to.clone(),
        },
        DateFilterValue::Relative(range) => DateFilterOptionKind::RelativePreset {
            from: range.from,
            to: range.to,
            granularity: range.granularity,
            bounded_filter: range.bounded_filter,
        },
    };
    DateFilterOption::virtual_preset(kind)
}
