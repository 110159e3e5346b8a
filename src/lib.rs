//! dashfilter - Reconcile dashboard filter contexts
//!
//! This library provides:
//! - Filter context types (attribute filters, date filters, object references)
//! - Date filter option catalog types
//! - Parsing of filters, catalogs and merge configuration from YAML
//! - Date filter option matching (stored date filter → selected option)
//! - Filter context merging with validation
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `filter_model/` - FilterContextItem, AttributeFilter, DateFilter, ObjRef
//! - `date_option/` - DateFilterOption, DateFilterOptionsCatalog
//!
//! **Verb modules** (transformations):
//! - `parser/` - YAML → filters, catalog, MergeConfig
//! - `matcher/` - DateFilter + Catalog → selected DateFilterOption
//! - `merger/` - original filters + incoming filters + MergeConfig → merged filters
//!
//! Every operation is a pure function over immutable inputs.
//!
//! # Example
//!
//! ```ignore
//! use dashfilter::{parser, merge_filter_context, match_date_filter_option};
//!
//! let original = parser::parse_filters_file("dashboard.yaml")?;
//! let incoming = parser::parse_filters_file("shared_link.yaml")?;
//! let config = parser::parse_merge_config_file("config.yaml")?;
//! let result = merge_filter_context(&original, &incoming, &config);
//!
//! let catalog = parser::parse_catalog_file("date_options.yaml")?;
//! let date_filter = result.merged_filters.iter().find_map(|f| f.as_date_filter());
//! let selected = match_date_filter_option(date_filter, &catalog, None);
//! ```

pub mod filter_model;
pub mod date_option;
pub mod parser;
pub mod matcher;
pub mod merger;
pub mod error;

// Re-export commonly used types
pub use filter_model::{
    refs_equal, selected_elements_count, AttributeElements, AttributeFilter, Bound, BoundedFilter,
    DateFilter, DateFilterGranularity, DateFilterType, DateFilterValue, FilterContextItem, ObjRef,
    ParentFilterLink, RelativeRange, SelectionMode,
};
pub use date_option::{
    can_exclude_current_period, date_filter_from_option, DateFilterOption, DateFilterOptionKind,
    DateFilterOptionsCatalog,
};
pub use matcher::{match_date_filter_option, DateFilterOptionMatch};
pub use merger::{
    limit_to_first_element, merge_filter_context, merge_filter_context_with,
    strip_dangling_parent_links, FilterConfigMode, FilterValidationError, MergeConfig, MergeResult,
    ValidationResult,
};
pub use error::ParseError;
