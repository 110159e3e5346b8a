//! Dashboard date filter
//!
//! The wire shape is flat (`type`, `from`, `to`, `granularity`, ...). It is
//! converted into [`DateFilterValue`] on deserialization so every consumer
//! matches on exactly three cases: all time, absolute range, relative range.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use super::obj_ref::ObjRef;

/// Date granularities supported by date filters and options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateFilterGranularity {
    #[serde(rename = "GDC.time.minute")]
    Minute,
    #[serde(rename = "GDC.time.hour")]
    Hour,
    #[default]
    #[serde(rename = "GDC.time.date")]
    Date,
    #[serde(rename = "GDC.time.week_us")]
    Week,
    #[serde(rename = "GDC.time.month")]
    Month,
    #[serde(rename = "GDC.time.quarter")]
    Quarter,
    #[serde(rename = "GDC.time.year")]
    Year,
}

impl fmt::Display for DateFilterGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DateFilterGranularity::Minute => "GDC.time.minute",
            DateFilterGranularity::Hour => "GDC.time.hour",
            DateFilterGranularity::Date => "GDC.time.date",
            DateFilterGranularity::Week => "GDC.time.week_us",
            DateFilterGranularity::Month => "GDC.time.month",
            DateFilterGranularity::Quarter => "GDC.time.quarter",
            DateFilterGranularity::Year => "GDC.time.year",
        };
        f.write_str(s)
    }
}

/// Absolute or relative; the `type` tag of a date filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFilterType {
    Absolute,
    Relative,
}

// ============================================================================
// Bounded filter
// ============================================================================

/// Which side of a relative range a bounded filter narrows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Lower(i64),
    Upper(i64),
}

/// Additional granularity-based bound narrowing a relative range
///
/// Wire shape is `{ granularity, from }` (lower) or `{ granularity, to }` (upper).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoundedFilterRepr", into = "BoundedFilterRepr")]
pub struct BoundedFilter {
    pub granularity: DateFilterGranularity,
    pub bound: Bound,
}

#[derive(Serialize, Deserialize)]
struct BoundedFilterRepr {
    granularity: DateFilterGranularity,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_offset")]
    from: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_offset")]
    to: Option<i64>,
}

impl TryFrom<BoundedFilterRepr> for BoundedFilter {
    type Error = String;

    fn try_from(repr: BoundedFilterRepr) -> Result<Self, Self::Error> {
        let bound = match (repr.from, repr.to) {
            (Some(from), None) => Bound::Lower(from),
            (None, Some(to)) => Bound::Upper(to),
            _ => return Err("bounded filter needs exactly one of 'from' or 'to'".to_string()),
        };
        Ok(BoundedFilter {
            granularity: repr.granularity,
            bound,
        })
    }
}

impl From<BoundedFilter> for BoundedFilterRepr {
    fn from(b: BoundedFilter) -> Self {
        let (from, to) = match b.bound {
            Bound::Lower(v) => (Some(v), None),
            Bound::Upper(v) => (None, Some(v)),
        };
        BoundedFilterRepr {
            granularity: b.granularity,
            from,
            to,
        }
    }
}

// ============================================================================
// Date filter
// ============================================================================

/// Relative date range: offsets in `granularity` units from the current period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeRange {
    pub from: i64,
    pub to: i64,
    pub granularity: DateFilterGranularity,
    pub bounded_filter: Option<BoundedFilter>,
}

/// The value of a date filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFilterValue {
    /// Relative filter without bounds
    AllTime { granularity: DateFilterGranularity },
    /// Calendar dates, compared literally
    Absolute { from: String, to: String },
    Relative(RelativeRange),
}

impl DateFilterValue {
    pub fn filter_type(&self) -> DateFilterType {
        match self {
            DateFilterValue::Absolute { .. } => DateFilterType::Absolute,
            DateFilterValue::AllTime { .. } | DateFilterValue::Relative(_) => DateFilterType::Relative,
        }
    }
}

/// Date filter as stored in a dashboard filter context
///
/// A filter without `data_set` is the dashboard's common date filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DateFilterRepr", into = "DateFilterRepr")]
pub struct DateFilter {
    pub value: DateFilterValue,
    pub data_set: Option<ObjRef>,
    pub local_identifier: Option<String>,
}

impl DateFilter {
    pub fn all_time() -> Self {
        DateFilter {
            value: DateFilterValue::AllTime {
                granularity: DateFilterGranularity::Date,
            },
            data_set: None,
            local_identifier: None,
        }
    }

    pub fn absolute(from: impl Into<String>, to: impl Into<String>) -> Self {
        DateFilter {
            value: DateFilterValue::Absolute {
                from: from.into(),
                to: to.into(),
            },
            data_set: None,
            local_identifier: None,
        }
    }

    pub fn relative(from: i64, to: i64, granularity: DateFilterGranularity) -> Self {
        DateFilter {
            value: DateFilterValue::Relative(RelativeRange {
                from,
                to,
                granularity,
                bounded_filter: None,
            }),
            data_set: None,
            local_identifier: None,
        }
    }

    pub fn with_data_set(mut self, data_set: ObjRef) -> Self {
        self.data_set = Some(data_set);
        self
    }

    pub fn with_local_identifier(mut self, local_identifier: impl Into<String>) -> Self {
        self.local_identifier = Some(local_identifier.into());
        self
    }

    /// Adds a bounded filter; has no effect unless the filter is a relative range
    pub fn with_bounded_filter(mut self, bounded: BoundedFilter) -> Self {
        if let DateFilterValue::Relative(range) = &mut self.value {
            range.bounded_filter = Some(bounded);
        }
        self
    }

    /// Common date filter = no date data set
    pub fn is_common(&self) -> bool {
        self.data_set.is_none()
    }

    pub fn is_all_time(&self) -> bool {
        matches!(self.value, DateFilterValue::AllTime { .. })
    }

    pub fn filter_type(&self) -> DateFilterType {
        self.value.filter_type()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DateFilterRepr {
    #[serde(rename = "type")]
    filter_type: DateFilterType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    granularity: Option<DateFilterGranularity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    from: Option<OffsetOrDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    to: Option<OffsetOrDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bounded_filter: Option<BoundedFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data_set: Option<ObjRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    local_identifier: Option<String>,
}

/// Raw `from`/`to` value: a number, a numeric string or a calendar date
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum OffsetOrDate {
    Number(i64),
    Text(String),
}

impl OffsetOrDate {
    fn into_offset(self) -> Result<i64, String> {
        match self {
            OffsetOrDate::Number(n) => Ok(n),
            OffsetOrDate::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| format!("invalid relative offset '{}'", s)),
        }
    }

    fn into_date(self) -> String {
        match self {
            OffsetOrDate::Number(n) => n.to_string(),
            OffsetOrDate::Text(s) => s,
        }
    }
}

impl TryFrom<DateFilterRepr> for DateFilter {
    type Error = String;

    fn try_from(repr: DateFilterRepr) -> Result<Self, Self::Error> {
        let value = match repr.filter_type {
            DateFilterType::Absolute => match (repr.from, repr.to) {
                (Some(from), Some(to)) => DateFilterValue::Absolute {
                    from: from.into_date(),
                    to: to.into_date(),
                },
                _ => return Err("absolute date filter needs both 'from' and 'to'".to_string()),
            },
            DateFilterType::Relative => {
                let granularity = repr.granularity.unwrap_or_default();
                match (repr.from, repr.to) {
                    (None, None) => DateFilterValue::AllTime { granularity },
                    (Some(from), Some(to)) => DateFilterValue::Relative(RelativeRange {
                        from: from.into_offset()?,
                        to: to.into_offset()?,
                        granularity,
                        bounded_filter: repr.bounded_filter,
                    }),
                    _ => {
                        return Err(
                            "relative date filter needs both 'from' and 'to' or neither".to_string(),
                        )
                    }
                }
            }
        };
        Ok(DateFilter {
            value,
            data_set: repr.data_set,
            local_identifier: repr.local_identifier,
        })
    }
}

impl From<DateFilter> for DateFilterRepr {
    fn from(filter: DateFilter) -> Self {
        let (filter_type, granularity, from, to, bounded_filter) = match filter.value {
            DateFilterValue::AllTime { granularity } => {
                (DateFilterType::Relative, Some(granularity), None, None, None)
            }
            DateFilterValue::Absolute { from, to } => (
                DateFilterType::Absolute,
                None,
                Some(OffsetOrDate::Text(from)),
                Some(OffsetOrDate::Text(to)),
                None,
            ),
            DateFilterValue::Relative(range) => (
                DateFilterType::Relative,
                Some(range.granularity),
                Some(OffsetOrDate::Number(range.from)),
                Some(OffsetOrDate::Number(range.to)),
                range.bounded_filter,
            ),
        };
        DateFilterRepr {
            filter_type,
            granularity,
            from,
            to,
            bounded_filter,
            data_set: filter.data_set,
            local_identifier: filter.local_identifier,
        }
    }
}

/// Accepts a relative offset given either as a number or as a numeric string
pub(crate) fn deserialize_offset<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<OffsetOrDate>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => raw.into_offset().map(Some).map_err(serde::de::Error::custom),
    }
}
