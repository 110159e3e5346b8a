//! Date filter options (UI-selectable representations of a date filter value)

use serde::{Deserialize, Serialize};
use crate::filter_model::{deserialize_offset, BoundedFilter, DateFilterGranularity, DateFilterType};

/// Local identifier given to synthesized options
///
/// Only used on the wire; synthesized options are recognized by
/// [`DateFilterOption::is_virtual`], never by comparing this string.
pub const VIRTUAL_PRESET_ID: &str = "GDC__VIRTUAL_PRESET";

/// What an option represents and the values it carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DateFilterOptionKind {
    AllTime,
    AbsolutePreset {
        from: String,
        to: String,
    },
    RelativePreset {
        #[serde(deserialize_with = "deserialize_required_offset")]
        from: i64,
        #[serde(deserialize_with = "deserialize_required_offset")]
        to: i64,
        granularity: DateFilterGranularity,
        #[serde(rename = "boundedFilter", default, skip_serializing_if = "Option::is_none")]
        bounded_filter: Option<BoundedFilter>,
    },
    AbsoluteForm {
        #[serde(default)]
        from: Option<String>,
        #[serde(default)]
        to: Option<String>,
    },
    RelativeForm {
        #[serde(default, deserialize_with = "deserialize_offset")]
        from: Option<i64>,
        #[serde(default, deserialize_with = "deserialize_offset")]
        to: Option<i64>,
        #[serde(default)]
        granularity: Option<DateFilterGranularity>,
        #[serde(rename = "availableGranularities", default)]
        available_granularities: Vec<DateFilterGranularity>,
    },
}

/// A date filter option as configured in the workspace catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFilterOption {
    pub local_identifier: String,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Set on options synthesized by the matcher, never on catalog options
    ///
    /// Written out but never read back.
    #[serde(skip_deserializing, skip_serializing_if = "std::ops::Not::not")]
    pub is_virtual: bool,
    #[serde(flatten)]
    pub kind: DateFilterOptionKind,
}

fn default_visible() -> bool {
    true
}

fn deserialize_required_offset<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserialize_offset(deserializer)?.ok_or_else(|| serde::de::Error::custom("offset must not be null"))
}

impl DateFilterOption {
    pub fn new(local_identifier: impl Into<String>, kind: DateFilterOptionKind) -> Self {
        DateFilterOption {
            local_identifier: local_identifier.into(),
            name: String::new(),
            visible: true,
            is_virtual: false,
            kind,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Invisible synthesized option carrying `kind`
    pub fn virtual_preset(kind: DateFilterOptionKind) -> Self {
        DateFilterOption {
            local_identifier: VIRTUAL_PRESET_ID.to_string(),
            name: String::new(),
            visible: false,
            is_virtual: true,
            kind,
        }
    }

    pub fn all_time(local_identifier: impl Into<String>) -> Self {
        Self::new(local_identifier, DateFilterOptionKind::AllTime)
    }

    pub fn absolute_preset(
        local_identifier: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self::new(
            local_identifier,
            DateFilterOptionKind::AbsolutePreset {
                from: from.into(),
                to: to.into(),
            },
        )
    }

    pub fn relative_preset(
        local_identifier: impl Into<String>,
        from: i64,
        to: i64,
        granularity: DateFilterGranularity,
    ) -> Self {
        Self::new(
            local_identifier,
            DateFilterOptionKind::RelativePreset {
                from,
                to,
                granularity,
                bounded_filter: None,
            },
        )
    }

    pub fn absolute_form(local_identifier: impl Into<String>) -> Self {
        Self::new(
            local_identifier,
            DateFilterOptionKind::AbsoluteForm { from: None, to: None },
        )
    }

    pub fn relative_form(
        local_identifier: impl Into<String>,
        available_granularities: Vec<DateFilterGranularity>,
    ) -> Self {
        Self::new(
            local_identifier,
            DateFilterOptionKind::RelativeForm {
                from: None,
                to: None,
                granularity: None,
                available_granularities,
            },
        )
    }

    pub fn is_virtual(&self) -> bool {
        self.is_virtual
    }

    pub fn is_form(&self) -> bool {
        matches!(
            self.kind,
            DateFilterOptionKind::AbsoluteForm { .. } | DateFilterOptionKind::RelativeForm { .. }
        )
    }

    pub fn is_all_time(&self) -> bool {
        matches!(self.kind, DateFilterOptionKind::AllTime)
    }

    /// Date filter type the option produces; `None` for all time
    pub fn filter_type(&self) -> Option<DateFilterType> {
        match self.kind {
            DateFilterOptionKind::AllTime => None,
            DateFilterOptionKind::AbsolutePreset { .. } | DateFilterOptionKind::AbsoluteForm { .. } => {
                Some(DateFilterType::Absolute)
            }
            DateFilterOptionKind::RelativePreset { .. } | DateFilterOptionKind::RelativeForm { .. } => {
                Some(DateFilterType::Relative)
            }
        }
    }

    /// Granularity of relative options; absolute options are day-based
    pub fn granularity(&self) -> Option<DateFilterGranularity> {
        match &self.kind {
            DateFilterOptionKind::AllTime => None,
            DateFilterOptionKind::AbsolutePreset { .. } | DateFilterOptionKind::AbsoluteForm { .. } => {
                Some(DateFilterGranularity::Date)
            }
            DateFilterOptionKind::RelativePreset { granularity, .. } => Some(*granularity),
            DateFilterOptionKind::RelativeForm { granularity, .. } => *granularity,
        }
    }

    /// Short tag naming the option kind, as used in the wire `type` field
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            DateFilterOptionKind::AllTime => "allTime",
            DateFilterOptionKind::AbsolutePreset { .. } => "absolutePreset",
            DateFilterOptionKind::RelativePreset { .. } => "relativePreset",
            DateFilterOptionKind::AbsoluteForm { .. } => "absoluteForm",
            DateFilterOptionKind::RelativeForm { .. } => "relativeForm",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_relative_preset() {
        let yaml = r#"
localIdentifier: LAST_7_DAYS
type: relativePreset
from: -6
to: 0
granularity: GDC.time.date
name: Last 7 days
visible: true
"#;
        let option: DateFilterOption = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(option.local_identifier, "LAST_7_DAYS");
        assert!(!option.is_virtual());
        assert_eq!(
            option.kind,
            DateFilterOptionKind::RelativePreset {
                from: -6,
                to: 0,
                granularity: DateFilterGranularity::Date,
                bounded_filter: None,
            }
        );
        assert_eq!(option.granularity(), Some(DateFilterGranularity::Date));
    }

    #[test]
    fn test_deserialize_relative_form_without_values() {
        let yaml = r#"
localIdentifier: RELATIVE_FORM
type: relativeForm
availableGranularities: [GDC.time.date, GDC.time.month]
"#;
        let option: DateFilterOption = serde_yaml::from_str(yaml).unwrap();
        assert!(option.is_form());
        assert!(option.visible);
        assert_eq!(option.granularity(), None);
        assert_eq!(option.filter_type(), Some(DateFilterType::Relative));
    }

    #[test]
    fn test_virtual_flag_serialization() {
        let option = DateFilterOption::virtual_preset(DateFilterOptionKind::AllTime);
        let json = serde_json::to_value(&option).unwrap();
        assert_eq!(json["localIdentifier"], VIRTUAL_PRESET_ID);
        assert_eq!(json["isVirtual"], true);
        assert_eq!(json["visible"], false);
        assert_eq!(json["type"], "allTime");

        let catalog_option = DateFilterOption::all_time("ALL_TIME");
        let json = serde_json::to_value(&catalog_option).unwrap();
        assert!(json.get("isVirtual").is_none());
    }

    #[test]
    fn test_virtual_identifier_does_not_make_option_virtual() {
        let yaml = r#"
localIdentifier: GDC__VIRTUAL_PRESET
type: allTime
"#;
        let option: DateFilterOption = serde_yaml::from_str(yaml).unwrap();
        assert!(!option.is_virtual());
    }

    #[test]
    fn test_virtual_flag_is_not_read_from_input() {
        let yaml = r#"
localIdentifier: LAST_7_DAYS
type: relativePreset
from: -6
to: 0
granularity: GDC.time.date
isVirtual: true
"#;
        let option: DateFilterOption = serde_yaml::from_str(yaml).unwrap();
        assert!(!option.is_virtual());
        assert!(option.visible);
    }
}
