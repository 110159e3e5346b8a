//! Date filter option types (nouns)
//!
//! Options are what the date filter dropdown offers: all time, presets and
//! forms. The catalog groups the options configured for a workspace.

mod catalog;
mod convert;
mod option;

pub use catalog::{DateFilterOptionsCatalog, RelativePresetGroups};
pub use convert::{can_exclude_current_period, date_filter_from_option};
pub use option::{DateFilterOption, DateFilterOptionKind, VIRTUAL_PRESET_ID};
