//! Attribute filter degradation
//!
//! Pure helpers turning an incoming attribute filter into one the dashboard
//! can accept. Every field not named here is carried over unchanged.

use crate::filter_model::{AttributeFilter, SelectionMode};

/// Single-selection copy keeping only the first selected element
pub fn limit_to_first_element(filter: &AttributeFilter) -> AttributeFilter {
    AttributeFilter {
        selection_mode: SelectionMode::Single,
        attribute_elements: filter.attribute_elements.first_only(),
        ..filter.clone()
    }
}

/// Copy without parent links pointing at any of `missing_local_ids`
pub fn strip_dangling_parent_links<S: AsRef<str>>(
    filter: &AttributeFilter,
    missing_local_ids: &[S],
) -> AttributeFilter {
    let filter_elements_by = filter
        .filter_elements_by
        .iter()
        .filter(|link| {
            !missing_local_ids
                .iter()
                .any(|id| id.as_ref() == link.filter_local_identifier)
        })
        .cloned()
        .collect();
    AttributeFilter {
        filter_elements_by,
        ..filter.clone()
    }
}
