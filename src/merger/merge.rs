//! Filter context merging
//!
//! Merges incoming filters (shared link, export, saved filter view) into the
//! dashboard's filters. The original list drives the output: merging only
//! updates existing filters, it never adds, drops or reorders them.
//!
//! Pairing an original filter with an incoming one:
//! - common date filter (no data set): by local identifier, among common date filters
//! - everything else: by object reference (display form or date data set)

use super::config::{FilterConfigMode, MergeConfig};
use super::degrade::{limit_to_first_element, strip_dangling_parent_links};
use super::validation::{FilterValidationError, MergeResult, ValidationResult};
use crate::filter_model::{refs_equal, AttributeFilter, DateFilter, FilterContextItem, ObjRef};

/// Merge `incoming` into `original` using structural reference equality
///
/// See [`merge_filter_context_with`].
pub fn merge_filter_context(
    original: &[FilterContextItem],
    incoming: &[FilterContextItem],
    config: &MergeConfig,
) -> MergeResult {
    merge_filter_context_with(original, incoming, config, refs_equal)
}

/// Merge `incoming` into `original`, comparing references with `refs_eq`
///
/// `refs_eq` must be an equivalence relation.
///
/// # Returns
/// A [`MergeResult`] whose `merged_filters` has one entry per original filter,
/// and whose `validation_results` list incoming filters that could not be
/// applied as-is: missing filters first, then per-filter problems in
/// original order.
pub fn merge_filter_context_with<F>(
    original: &[FilterContextItem],
    incoming: &[FilterContextItem],
    config: &MergeConfig,
    refs_eq: F,
) -> MergeResult
where
    F: Fn(&ObjRef, &ObjRef) -> bool,
{
    let mut validation_results = find_missing_filters(original, incoming, &refs_eq);
    let missing_attribute_ids: Vec<String> = validation_results
        .iter()
        .filter_map(|r| match &r.filter {
            FilterContextItem::AttributeFilter(f) => f.local_identifier.clone(),
            _ => None,
        })
        .collect();

    if !validation_results.is_empty() {
        tracing::debug!(
            count = validation_results.len(),
            "incoming filters not present on the dashboard"
        );
    }

    let mut merged_filters = Vec::with_capacity(original.len());
    for item in original {
        let candidate = find_candidate(item, incoming, &refs_eq);
        let (merged, errors) = match item {
            FilterContextItem::AttributeFilter(filter) => {
                merge_attribute_filter(filter, candidate, config, &missing_attribute_ids)
            }
            FilterContextItem::DateFilter(filter) => merge_date_filter(filter, candidate, config, &refs_eq),
            FilterContextItem::Unknown(_) => (item.clone(), Vec::new()),
        };
        tracing::trace!(kind = item.kind(), errors = errors.len(), "filter resolved");
        merged_filters.push(merged);
        validation_results.extend(errors);
    }

    MergeResult {
        merged_filters,
        validation_results,
    }
}

/// Incoming filters whose object reference matches no original filter
///
/// Filters without an object reference (common date filter) are never missing.
fn find_missing_filters<F>(
    original: &[FilterContextItem],
    incoming: &[FilterContextItem],
    refs_eq: &F,
) -> Vec<ValidationResult>
where
    F: Fn(&ObjRef, &ObjRef) -> bool,
{
    let original_refs: Vec<&ObjRef> = original.iter().filter_map(|f| f.object_ref()).collect();

    incoming
        .iter()
        .filter(|filter| match filter.object_ref() {
            Some(r) => !original_refs.iter().any(|o| refs_eq(r, *o)),
            None => false,
        })
        .map(|filter| ValidationResult::new(filter.clone(), FilterValidationError::CannotApplyMissingFilter))
        .collect()
}

fn find_candidate<'a, F>(
    original: &FilterContextItem,
    incoming: &'a [FilterContextItem],
    refs_eq: &F,
) -> Option<&'a FilterContextItem>
where
    F: Fn(&ObjRef, &ObjRef) -> bool,
{
    if let FilterContextItem::DateFilter(date) = original {
        if date.is_common() {
            return incoming.iter().find(|f| match f {
                FilterContextItem::DateFilter(other) => {
                    other.is_common() && other.local_identifier == date.local_identifier
                }
                _ => false,
            });
        }
    }

    let original_ref = original.object_ref()?;
    incoming
        .iter()
        .find(|f| f.object_ref().is_some_and(|r| refs_eq(r, original_ref)))
}

fn merge_attribute_filter(
    original: &AttributeFilter,
    candidate: Option<&FilterContextItem>,
    config: &MergeConfig,
    missing_attribute_ids: &[String],
) -> (FilterContextItem, Vec<ValidationResult>) {
    let Some(FilterContextItem::AttributeFilter(candidate)) = candidate else {
        return (original.clone().into(), Vec::new());
    };

    let mode = original
        .local_identifier
        .as_deref()
        .and_then(|id| config.attribute_filter_mode(id));
    let errors = validate_attribute_filter(original, candidate, mode, missing_attribute_ids);

    let merged = if errors.is_empty() {
        candidate.clone()
    } else if errors.contains(&FilterValidationError::CannotApplyMultiToSingle) {
        tracing::debug!(
            local_identifier = ?original.local_identifier,
            "limiting incoming selection to its first element"
        );
        limit_to_first_element(candidate)
    } else if errors.contains(&FilterValidationError::ParentFilterIsMissing) {
        // applies to hidden and readonly filters as well
        tracing::debug!(
            local_identifier = ?original.local_identifier,
            ?mode,
            "removing links to missing parent filters"
        );
        strip_dangling_parent_links(candidate, missing_attribute_ids)
    } else {
        tracing::debug!(
            local_identifier = ?original.local_identifier,
            ?mode,
            "incoming attribute filter discarded"
        );
        original.clone()
    };

    let results = errors
        .into_iter()
        .map(|e| ValidationResult::new(candidate.clone().into(), e))
        .collect();
    (merged.into(), results)
}

fn validate_attribute_filter(
    original: &AttributeFilter,
    candidate: &AttributeFilter,
    mode: Option<FilterConfigMode>,
    missing_attribute_ids: &[String],
) -> Vec<FilterValidationError> {
    let mut errors = Vec::new();

    match mode {
        Some(FilterConfigMode::Hidden) => errors.push(FilterValidationError::CannotApplyHidden),
        Some(FilterConfigMode::Readonly) => errors.push(FilterValidationError::CannotApplyReadonly),
        Some(FilterConfigMode::Active) | None => {
            if original.is_single_select() && candidate.selected_count() > 1 {
                errors.push(FilterValidationError::CannotApplyMultiToSingle);
            }
        }
    }

    let has_missing_parent = candidate
        .filter_elements_by
        .iter()
        .any(|link| missing_attribute_ids.contains(&link.filter_local_identifier));
    if has_missing_parent {
        errors.push(FilterValidationError::ParentFilterIsMissing);
    }

    errors
}

fn merge_date_filter<F>(
    original: &DateFilter,
    candidate: Option<&FilterContextItem>,
    config: &MergeConfig,
    refs_eq: &F,
) -> (FilterContextItem, Vec<ValidationResult>)
where
    F: Fn(&ObjRef, &ObjRef) -> bool,
{
    let Some(FilterContextItem::DateFilter(candidate)) = candidate else {
        return (original.clone().into(), Vec::new());
    };

    let mode = match &original.data_set {
        None => config.common_date_filter_mode(),
        Some(data_set) => config.date_filter_mode_with(data_set, refs_eq),
    };

    let error = match mode {
        Some(FilterConfigMode::Hidden) => Some(FilterValidationError::CannotApplyHidden),
        Some(FilterConfigMode::Readonly) => Some(FilterValidationError::CannotApplyReadonly),
        Some(FilterConfigMode::Active) | None => None,
    };

    match error {
        None => (candidate.clone().into(), Vec::new()),
        Some(error) => {
            tracing::debug!(
                data_set = ?original.data_set,
                ?mode,
                "incoming date filter discarded"
            );
            (
                original.clone().into(),
                vec![ValidationResult::new(candidate.clone().into(), error)],
            )
        }
    }
}
