//! JSON handling for page documents (a top-level array of records).

use crate::graph::PageGraph;
use crate::record::PageRecord;
use crate::rooted::RootedView;
use anyhow::{Context, Result};

/// Parse a JSON document into records.
pub fn from_json(json: &str) -> Result<Vec<PageRecord>> {
    serde_json::from_str(json).context("failed to parse page document as JSON")
}

/// Serialize records to a pretty-printed JSON document.
pub fn to_json(records: &[PageRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("failed to serialize page document to JSON")
}

/// Parse a JSON document and build a plain page graph from it.
pub fn graph_from_json(json: &str) -> Result<PageGraph> {
    let records = from_json(json)?;
    PageGraph::deserialize(&records).context("invalid page graph")
}

/// Parse a JSON document and build a rooted view from its `isIndex` marker.
pub fn rooted_from_json(json: &str) -> Result<RootedView> {
    let records = from_json(json)?;
    RootedView::from_records(&records).context("invalid rooted page graph")
}
