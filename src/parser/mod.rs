//! Input parser (verb module)
//!
//! Transforms YAML documents into filter lists, option catalogs and merge
//! configuration. JSON documents are valid YAML and parse the same way.

use serde::de::DeserializeOwned;
use std::path::Path;
use crate::date_option::DateFilterOptionsCatalog;
use crate::error::ParseError;
use crate::filter_model::{DateFilter, FilterContextItem};
use crate::merger::MergeConfig;

fn read_file<P: AsRef<Path>>(path: P) -> Result<String, ParseError> {
    let path_str = path.as_ref().display().to_string();
    std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
        path: path_str,
        source: e,
    })
}

fn parse<T: DeserializeOwned>(yaml: &str) -> Result<T, ParseError> {
    serde_yaml::from_str(yaml).map_err(ParseError::from)
}

/// Parse a date filter option catalog from a YAML string
pub fn parse_catalog_str(yaml: &str) -> Result<DateFilterOptionsCatalog, ParseError> {
    let catalog: DateFilterOptionsCatalog = parse(yaml)?;
    catalog.validate()?;
    Ok(catalog)
}

/// Parse a date filter option catalog from a YAML file
pub fn parse_catalog_file<P: AsRef<Path>>(path: P) -> Result<DateFilterOptionsCatalog, ParseError> {
    parse_catalog_str(&read_file(path)?)
}

/// Parse a filter context (list of filters) from a YAML string
pub fn parse_filters_str(yaml: &str) -> Result<Vec<FilterContextItem>, ParseError> {
    parse(yaml)
}

/// Parse a filter context (list of filters) from a YAML file
pub fn parse_filters_file<P: AsRef<Path>>(path: P) -> Result<Vec<FilterContextItem>, ParseError> {
    parse_filters_str(&read_file(path)?)
}

/// Parse a single date filter (the inner `dateFilter` object) from a YAML string
pub fn parse_date_filter_str(yaml: &str) -> Result<DateFilter, ParseError> {
    parse(yaml)
}

/// Parse merge configuration from a YAML string
pub fn parse_merge_config_str(yaml: &str) -> Result<MergeConfig, ParseError> {
    parse(yaml)
}

/// Parse merge configuration from a YAML file
pub fn parse_merge_config_file<P: AsRef<Path>>(path: P) -> Result<MergeConfig, ParseError> {
    parse_merge_config_str(&read_file(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_invalid_yaml() {
        let result = parse_filters_str("not: [valid: yaml");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_json_filters() {
        let json = r#"[{"dateFilter": {"type": "absolute", "from": "2020-01-01", "to": "2020-12-31"}}]"#;
        let filters = parse_filters_str(json).unwrap();
        assert_eq!(filters, vec![FilterContextItem::from(DateFilter::absolute("2020-01-01", "2020-12-31"))]);
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_catalog_file("does/not/exist.yaml").unwrap_err();
        match err {
            ParseError::Io { path, .. } => assert_eq!(path, "does/not/exist.yaml"),
            other => panic!("Expected Io error, got: {:?}", other),
        }
    }

    #[test]
    fn test_parse_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "attributeFilterConfigs: [{{ localIdentifier: a, mode: hidden }}]").unwrap();
        let config = parse_merge_config_file(file.path()).unwrap();
        assert_eq!(config.attribute_filter_configs.len(), 1);
    }

    #[test]
    fn test_catalog_is_validated() {
        let yaml = "allTime: { localIdentifier: X, type: absoluteForm }";
        assert!(matches!(parse_catalog_str(yaml), Err(ParseError::InvalidCatalog { .. })));
    }
}
