//! Raw input records as they appear in a page document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of an input document: `{ "id", "name", "links", "isIndex" }`.
///
/// Every field is optional at the serde level so that incomplete records can be reported
/// and dropped instead of failing the parse of the entire document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Outgoing link targets by page id. A record without `links` has none.
    #[serde(default)]
    pub links: Vec<String>,
    /// Root marker used by [`crate::rooted::RootedView`].
    #[serde(
        default,
        rename = "isIndex",
        alias = "is_index",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub is_index: bool,
}

impl PageRecord {
    /// Build a complete record with no root marker.
    pub fn new<I, S>(id: impl Into<String>, name: impl Into<String>, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            links: links.into_iter().map(Into::into).collect(),
            is_index: false,
        }
    }

    /// Mark this record as the index (root) page.
    #[must_use]
    pub fn index(mut self) -> Self {
        self.is_index = true;
        self
    }
}

/// A record that was skipped during construction because a field was missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordDiagnostic {
    /// Position of the record in the input document.
    pub index: usize,
    pub id: Option<String>,
    pub missing: &'static str,
}

impl fmt::Display for RecordDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(
                f,
                "record {} ('{}') dropped: missing field '{}'",
                self.index, id, self.missing
            ),
            None => write!(
                f,
                "record {} dropped: missing field '{}'",
                self.index, self.missing
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_json() {
        let json = r#"{"id": "a", "name": "Home", "links": ["b", "c"], "isIndex": true}"#;
        let record: PageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_deref(), Some("a"));
        assert_eq!(record.name.as_deref(), Some("Home"));
        assert_eq!(record.links, vec!["b", "c"]);
        assert!(record.is_index);
    }

    #[test]
    fn test_record_missing_fields_default() {
        let record: PageRecord = serde_json::from_str(r#"{"name": "Orphan"}"#).unwrap();
        assert!(record.id.is_none());
        assert!(record.links.is_empty());
        assert!(!record.is_index);
    }

    #[test]
    fn test_snake_case_root_marker_alias() {
        let record: PageRecord =
            serde_json::from_str(r#"{"id": "a", "name": "A", "is_index": true}"#).unwrap();
        assert!(record.is_index);
    }

    #[test]
    fn test_serialize_omits_false_marker() {
        let json = serde_json::to_string(&PageRecord::new("a", "A", ["b"])).unwrap();
        assert_eq!(json, r#"{"id":"a","name":"A","links":["b"]}"#);
        let json = serde_json::to_string(&PageRecord::new("a", "A", Vec::<String>::new()).index())
            .unwrap();
        assert!(json.contains(r#""isIndex":true"#));
    }

    #[test]
    fn test_diagnostic_display() {
        let d = RecordDiagnostic {
            index: 3,
            id: Some("x".into()),
            missing: "name",
        };
        assert_eq!(d.to_string(), "record 3 ('x') dropped: missing field 'name'");
        let d = RecordDiagnostic {
            index: 0,
            id: None,
            missing: "id",
        };
        assert_eq!(d.to_string(), "record 0 dropped: missing field 'id'");
    }
}
