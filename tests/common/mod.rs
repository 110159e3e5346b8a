//! Shared test utilities for integration tests

#![allow(dead_code)]

use dashfilter::{
    parser, AttributeFilter, DateFilterOptionsCatalog, FilterContextItem, MergeConfig, ObjRef,
    SelectionMode,
};

/// Load a date filter option catalog from the tests/test_data directory
pub fn load_catalog(name: &str) -> DateFilterOptionsCatalog {
    let path = format!("tests/test_data/{}", name);
    parser::parse_catalog_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// Load a filter list from the tests/test_data directory
pub fn load_filters(name: &str) -> Vec<FilterContextItem> {
    let path = format!("tests/test_data/{}", name);
    parser::parse_filters_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// Load merge configuration from the tests/test_data directory
pub fn load_config(name: &str) -> MergeConfig {
    let path = format!("tests/test_data/{}", name);
    parser::parse_merge_config_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// Positive attribute filter on `display_form` with the given element values
pub fn attribute_filter(
    display_form: &str,
    local_identifier: &str,
    mode: SelectionMode,
    values: &[&str],
) -> AttributeFilter {
    AttributeFilter::new(ObjRef::id(display_form), values.iter().copied())
        .with_local_identifier(local_identifier)
        .with_selection_mode(mode)
}

/// Selected element values of an attribute filter item (by-value representation)
pub fn selected_values(item: &FilterContextItem) -> Vec<String> {
    let filter = item
        .as_attribute_filter()
        .unwrap_or_else(|| panic!("Expected attribute filter, got {}", item.kind()));
    match &filter.attribute_elements {
        dashfilter::AttributeElements::Values(v) | dashfilter::AttributeElements::Uris(v) => {
            v.iter().map(|e| e.clone().unwrap_or_default()).collect()
        }
    }
}
