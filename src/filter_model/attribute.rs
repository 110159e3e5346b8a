//! Dashboard attribute filter

use serde::{Deserialize, Serialize};
use super::obj_ref::ObjRef;

/// Selected attribute elements
///
/// Exactly one representation is populated: `{ values: [...] }` or
/// `{ uris: [...] }`. Element values may be null (the empty value).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeElements {
    Values(Vec<Option<String>>),
    Uris(Vec<Option<String>>),
}

impl AttributeElements {
    /// Number of selected elements, whichever representation is populated
    pub fn len(&self) -> usize {
        match self {
            AttributeElements::Values(v) | AttributeElements::Uris(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy keeping at most the first element, in the same representation
    pub fn first_only(&self) -> AttributeElements {
        match self {
            AttributeElements::Values(v) => {
                AttributeElements::Values(v.iter().take(1).cloned().collect())
            }
            AttributeElements::Uris(v) => AttributeElements::Uris(v.iter().take(1).cloned().collect()),
        }
    }
}

impl Default for AttributeElements {
    fn default() -> Self {
        AttributeElements::Values(Vec::new())
    }
}

/// Single or multi value selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    Single,
    #[default]
    Multi,
}

/// Attributes connecting a child filter to its parent filter
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParentFilterOver {
    #[serde(default)]
    pub attributes: Vec<ObjRef>,
}

/// Link from a child attribute filter to the parent filter that limits its elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParentFilterLink {
    #[serde(rename = "filterLocalIdentifier")]
    pub filter_local_identifier: String,
    #[serde(default)]
    pub over: ParentFilterOver,
}

/// Link from an attribute filter to a date filter that limits its elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateFilterLink {
    #[serde(rename = "filterLocalIdentifier", default, skip_serializing_if = "Option::is_none")]
    pub filter_local_identifier: Option<String>,
    #[serde(rename = "isCommonDate", default)]
    pub is_common_date: bool,
}

/// Attribute filter as stored in a dashboard filter context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeFilter {
    /// Display form the filter is defined on
    pub display_form: ObjRef,
    /// `true` = exclude the selected elements, `false` = include only them
    #[serde(default)]
    pub negative_selection: bool,
    pub attribute_elements: AttributeElements,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_identifier: Option<String>,
    #[serde(default)]
    pub selection_mode: SelectionMode,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_elements_by: Vec<ParentFilterLink>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filter_elements_by_date: Vec<DateFilterLink>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub validate_elements_by: Vec<ObjRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl AttributeFilter {
    /// Positive multi-select filter on a display form with the given element values
    pub fn new<I, S>(display_form: ObjRef, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AttributeFilter {
            display_form,
            negative_selection: false,
            attribute_elements: AttributeElements::Values(
                values.into_iter().map(|v| Some(v.into())).collect(),
            ),
            local_identifier: None,
            selection_mode: SelectionMode::Multi,
            filter_elements_by: Vec::new(),
            filter_elements_by_date: Vec::new(),
            validate_elements_by: Vec::new(),
            title: None,
        }
    }

    pub fn with_local_identifier(mut self, local_identifier: impl Into<String>) -> Self {
        self.local_identifier = Some(local_identifier.into());
        self
    }

    pub fn with_selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    pub fn with_parent(mut self, parent_local_identifier: impl Into<String>, over: Vec<ObjRef>) -> Self {
        self.filter_elements_by.push(ParentFilterLink {
            filter_local_identifier: parent_local_identifier.into(),
            over: ParentFilterOver { attributes: over },
        });
        self
    }

    /// Number of selected elements
    pub fn selected_count(&self) -> usize {
        self.attribute_elements.len()
    }

    pub fn is_single_select(&self) -> bool {
        self.selection_mode == SelectionMode::Single
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_filter() {
        let yaml = r#"
displayForm: { identifier: label.region }
attributeElements: { uris: ["/e/1", "/e/2"] }
"#;
        let filter: AttributeFilter = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(filter.display_form, ObjRef::id("label.region"));
        assert!(!filter.negative_selection);
        assert_eq!(filter.selection_mode, SelectionMode::Multi);
        assert_eq!(filter.selected_count(), 2);
        assert!(matches!(filter.attribute_elements, AttributeElements::Uris(_)));
        assert!(filter.filter_elements_by.is_empty());
    }

    #[test]
    fn test_null_element_value() {
        let yaml = r#"
displayForm: { identifier: label.region }
attributeElements: { values: [null, "West"] }
selectionMode: single
"#;
        let filter: AttributeFilter = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(filter.selected_count(), 2);
        assert!(filter.is_single_select());
    }

    #[test]
    fn test_first_only_keeps_representation() {
        let uris = AttributeElements::Uris(vec![Some("/a".into()), Some("/b".into())]);
        assert_eq!(uris.first_only(), AttributeElements::Uris(vec![Some("/a".into())]));

        let empty = AttributeElements::Values(vec![]);
        assert_eq!(empty.first_only(), AttributeElements::Values(vec![]));
    }
}
