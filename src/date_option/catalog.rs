//! Catalog of configured date filter options, grouped by kind

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use super::option::{DateFilterOption, DateFilterOptionKind};
use crate::error::ParseError;
use crate::filter_model::{DateFilterGranularity, DateFilterType};

/// Relative presets grouped by granularity, in document order
///
/// Deserialized from a map (`GDC.time.date: [...]`). Group order is kept
/// because it decides which preset wins when several match.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RelativePresetGroups(pub Vec<(DateFilterGranularity, Vec<DateFilterOption>)>);

impl RelativePresetGroups {
    pub fn get(&self, granularity: DateFilterGranularity) -> Option<&[DateFilterOption]> {
        self.0
            .iter()
            .find(|(g, _)| *g == granularity)
            .map(|(_, presets)| presets.as_slice())
    }

    /// All presets, group by group
    pub fn iter(&self) -> impl Iterator<Item = &DateFilterOption> {
        self.0.iter().flat_map(|(_, presets)| presets.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|(_, presets)| presets.is_empty())
    }
}

impl<'de> Deserialize<'de> for RelativePresetGroups {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GroupsVisitor;

        impl<'de> Visitor<'de> for GroupsVisitor {
            type Value = RelativePresetGroups;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of granularity to relative presets")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut groups = Vec::new();
                while let Some((granularity, presets)) =
                    map.next_entry::<DateFilterGranularity, Vec<DateFilterOption>>()?
                {
                    groups.push((granularity, presets));
                }
                Ok(RelativePresetGroups(groups))
            }
        }

        deserializer.deserialize_map(GroupsVisitor)
    }
}

impl Serialize for RelativePresetGroups {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (granularity, presets) in &self.0 {
            map.serialize_entry(granularity, presets)?;
        }
        map.end()
    }
}

/// Date filter options available in a workspace
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFilterOptionsCatalog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_time: Option<DateFilterOption>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub absolute_preset: Vec<DateFilterOption>,
    #[serde(default, skip_serializing_if = "RelativePresetGroups::is_empty")]
    pub relative_preset: RelativePresetGroups,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absolute_form: Option<DateFilterOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_form: Option<DateFilterOption>,
}

impl DateFilterOptionsCatalog {
    /// All options in matching order
    ///
    /// all time, absolute presets, relative presets (group by group),
    /// absolute form, relative form.
    pub fn flatten(&self) -> Vec<&DateFilterOption> {
        self.all_time
            .iter()
            .chain(self.absolute_preset.iter())
            .chain(self.relative_preset.iter())
            .chain(self.absolute_form.iter())
            .chain(self.relative_form.iter())
            .collect()
    }

    /// Find an option by its local identifier
    pub fn find_by_id(&self, local_identifier: &str) -> Option<&DateFilterOption> {
        self.flatten()
            .into_iter()
            .find(|o| o.local_identifier == local_identifier)
    }

    /// The form producing filters of `filter_type`, if configured and visible
    pub fn visible_form_for(&self, filter_type: DateFilterType) -> Option<&DateFilterOption> {
        let form = match filter_type {
            DateFilterType::Absolute => self.absolute_form.as_ref(),
            DateFilterType::Relative => self.relative_form.as_ref(),
        };
        form.filter(|f| f.visible)
    }

    /// The all-time option, if configured and visible
    pub fn visible_all_time(&self) -> Option<&DateFilterOption> {
        self.all_time.as_ref().filter(|o| o.visible)
    }

    /// Check that every slot holds options of its own kind and that
    /// relative presets sit in the group of their granularity
    pub fn validate(&self) -> Result<(), ParseError> {
        fn expect_kind(option: &DateFilterOption, slot: &str, ok: bool) -> Result<(), ParseError> {
            if ok {
                Ok(())
            } else {
                Err(ParseError::InvalidCatalog {
                    message: format!(
                        "option '{}' of type '{}' cannot be placed in '{}'",
                        option.local_identifier,
                        option.kind_name(),
                        slot
                    ),
                })
            }
        }

        if let Some(o) = &self.all_time {
            expect_kind(o, "allTime", matches!(o.kind, DateFilterOptionKind::AllTime))?;
        }
        for o in &self.absolute_preset {
            expect_kind(o, "absolutePreset", matches!(o.kind, DateFilterOptionKind::AbsolutePreset { .. }))?;
        }
        for (group, presets) in &self.relative_preset.0 {
            for o in presets {
                let ok = matches!(
                    &o.kind,
                    DateFilterOptionKind::RelativePreset { granularity, .. } if granularity == group
                );
                expect_kind(o, &format!("relativePreset.{}", group), ok)?;
            }
        }
        if let Some(o) = &self.absolute_form {
            expect_kind(o, "absoluteForm", matches!(o.kind, DateFilterOptionKind::AbsoluteForm { .. }))?;
        }
        if let Some(o) = &self.relative_form {
            expect_kind(o, "relativeForm", matches!(o.kind, DateFilterOptionKind::RelativeForm { .. }))?;
        }
        Ok(())
    }
}
