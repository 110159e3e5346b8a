//! Merge validation outcomes

use serde::Serialize;
use crate::filter_model::FilterContextItem;

/// Why an incoming filter could not be applied as-is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, thiserror::Error)]
#[serde(rename_all = "kebab-case")]
pub enum FilterValidationError {
    #[error("the filter is hidden and cannot be changed")]
    CannotApplyHidden,
    #[error("the filter is read-only and cannot be changed")]
    CannotApplyReadonly,
    #[error("a multi-value selection cannot be applied to a single-value filter")]
    CannotApplyMultiToSingle,
    #[error("the filter does not exist on the dashboard")]
    CannotApplyMissingFilter,
    #[error("the parent filter does not exist on the dashboard")]
    ParentFilterIsMissing,
}

impl FilterValidationError {
    /// Stable kebab-case code, as serialized
    pub fn code(&self) -> &'static str {
        match self {
            FilterValidationError::CannotApplyHidden => "cannot-apply-hidden",
            FilterValidationError::CannotApplyReadonly => "cannot-apply-readonly",
            FilterValidationError::CannotApplyMultiToSingle => "cannot-apply-multi-to-single",
            FilterValidationError::CannotApplyMissingFilter => "cannot-apply-missing-filter",
            FilterValidationError::ParentFilterIsMissing => "parent-filter-is-missing",
        }
    }
}

/// An incoming filter paired with the reason it was not applied as-is
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub filter: FilterContextItem,
    pub error: FilterValidationError,
}

impl ValidationResult {
    pub fn new(filter: FilterContextItem, error: FilterValidationError) -> Self {
        ValidationResult { filter, error }
    }
}

/// Outcome of merging incoming filters into the dashboard filters
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeResult {
    /// One entry per original filter, in the original order
    pub merged_filters: Vec<FilterContextItem>,
    /// Missing-filter results first, then per-filter results in original order
    pub validation_results: Vec<ValidationResult>,
}

impl MergeResult {
    /// True when every incoming filter was applied unchanged
    pub fn is_clean(&self) -> bool {
        self.validation_results.is_empty()
    }

    /// Incoming filters reported with `error`
    pub fn errors_for(&self, error: FilterValidationError) -> Vec<&FilterContextItem> {
        self.validation_results
            .iter()
            .filter(|r| r.error == error)
            .map(|r| &r.filter)
            .collect()
    }
}
