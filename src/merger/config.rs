//! Merge configuration: per-filter edit modes

use serde::{Deserialize, Serialize};
use crate::filter_model::{refs_equal, ObjRef};

/// How a filter may be used on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterConfigMode {
    #[default]
    Active,
    Readonly,
    Hidden,
}

/// Configuration of a date filter (common or per data set)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFilterConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<FilterConfigMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_name: Option<String>,
}

/// Configuration of the date filter on one date data set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFilterConfigItem {
    pub date_data_set: ObjRef,
    pub config: DateFilterConfig,
}

/// Configuration of one attribute filter, keyed by its local identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeFilterConfig {
    pub local_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<FilterConfigMode>,
}

/// Dashboard filter configuration consulted while merging
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeConfig {
    /// Common date filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_filter_config: Option<DateFilterConfig>,
    /// Date filters on specific data sets
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub date_filter_configs: Vec<DateFilterConfigItem>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_filter_configs: Vec<AttributeFilterConfig>,
}

impl MergeConfig {
    /// Mode of the attribute filter with the given local identifier
    ///
    /// If several entries share the identifier, the last one wins.
    pub fn attribute_filter_mode(&self, local_identifier: &str) -> Option<FilterConfigMode> {
        self.attribute_filter_configs
            .iter()
            .rev()
            .find(|c| c.local_identifier == local_identifier)
            .and_then(|c| c.mode)
    }

    /// Mode of the common date filter
    pub fn common_date_filter_mode(&self) -> Option<FilterConfigMode> {
        self.date_filter_config.as_ref().and_then(|c| c.mode)
    }

    /// Mode of the date filter on `data_set`, using `eq` to compare references
    ///
    /// If several entries share the data set, the last one wins.
    pub fn date_filter_mode_with<F>(&self, data_set: &ObjRef, eq: F) -> Option<FilterConfigMode>
    where
        F: Fn(&ObjRef, &ObjRef) -> bool,
    {
        self.date_filter_configs
            .iter()
            .rev()
            .find(|c| eq(&c.date_data_set, data_set))
            .and_then(|c| c.config.mode)
    }

    pub fn date_filter_mode(&self, data_set: &ObjRef) -> Option<FilterConfigMode> {
        self.date_filter_mode_with(data_set, refs_equal)
    }
}
