//! Filter context item: attribute filter or date filter

use serde::{Deserialize, Deserializer, Serialize};
use super::attribute::AttributeFilter;
use super::date::DateFilter;
use super::obj_ref::ObjRef;

/// One entry of a dashboard filter context
///
/// Discriminated by key: `{ attributeFilter: {...} }` or `{ dateFilter: {...} }`.
/// Any other shape is kept verbatim as `Unknown` and passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterContextItem {
    AttributeFilter(AttributeFilter),
    DateFilter(DateFilter),
    #[serde(untagged)]
    Unknown(serde_json::Value),
}

impl FilterContextItem {
    /// The object the filter is defined on
    ///
    /// Display form for attribute filters, date data set for date filters.
    /// `None` for the common date filter and for unknown shapes.
    pub fn object_ref(&self) -> Option<&ObjRef> {
        match self {
            FilterContextItem::AttributeFilter(f) => Some(&f.display_form),
            FilterContextItem::DateFilter(f) => f.data_set.as_ref(),
            FilterContextItem::Unknown(_) => None,
        }
    }

    pub fn local_identifier(&self) -> Option<&str> {
        match self {
            FilterContextItem::AttributeFilter(f) => f.local_identifier.as_deref(),
            FilterContextItem::DateFilter(f) => f.local_identifier.as_deref(),
            FilterContextItem::Unknown(_) => None,
        }
    }

    pub fn as_attribute_filter(&self) -> Option<&AttributeFilter> {
        match self {
            FilterContextItem::AttributeFilter(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_date_filter(&self) -> Option<&DateFilter> {
        match self {
            FilterContextItem::DateFilter(f) => Some(f),
            _ => None,
        }
    }

    /// Short tag naming the variant
    pub fn kind(&self) -> &'static str {
        match self {
            FilterContextItem::AttributeFilter(_) => "attributeFilter",
            FilterContextItem::DateFilter(_) => "dateFilter",
            FilterContextItem::Unknown(_) => "unknown",
        }
    }
}

impl From<AttributeFilter> for FilterContextItem {
    fn from(f: AttributeFilter) -> Self {
        FilterContextItem::AttributeFilter(f)
    }
}

impl From<DateFilter> for FilterContextItem {
    fn from(f: DateFilter) -> Self {
        FilterContextItem::DateFilter(f)
    }
}

// Malformed attribute or date filters are errors; only entries carrying
// neither key fall through to `Unknown`.
impl<'de> Deserialize<'de> for FilterContextItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut object = match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Object(object) => object,
            other => return Ok(FilterContextItem::Unknown(other)),
        };
        if let Some(inner) = object.remove("attributeFilter") {
            return serde_json::from_value(inner)
                .map(FilterContextItem::AttributeFilter)
                .map_err(|e| serde::de::Error::custom(format!("attributeFilter: {}", e)));
        }
        if let Some(inner) = object.remove("dateFilter") {
            return serde_json::from_value(inner)
                .map(FilterContextItem::DateFilter)
                .map_err(|e| serde::de::Error::custom(format!("dateFilter: {}", e)));
        }
        Ok(FilterContextItem::Unknown(serde_json::Value::Object(object)))
    }
}

/// Number of selected elements of an attribute filter
pub fn selected_elements_count(filter: &AttributeFilter) -> usize {
    filter.attribute_elements.len()
}
