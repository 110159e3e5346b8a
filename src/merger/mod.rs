//! Filter context merger
//!
//! Merges an incoming filter list into the dashboard's filter list under the
//! configured filter modes, reporting what could not be applied and why.

mod config;
mod degrade;
mod merge;
mod validation;

pub use config::{AttributeFilterConfig, DateFilterConfig, DateFilterConfigItem, FilterConfigMode, MergeConfig};
pub use degrade::{limit_to_first_element, strip_dangling_parent_links};
pub use merge::{merge_filter_context, merge_filter_context_with};
pub use validation::{FilterValidationError, MergeResult, ValidationResult};
