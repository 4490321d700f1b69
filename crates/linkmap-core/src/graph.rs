//! Graph data model: pages keyed by id, each holding its ordered outgoing links.

use crate::error::GraphError;
use crate::record::{PageRecord, RecordDiagnostic};
use serde::Serialize;
use std::collections::BTreeMap;

/// A single page (graph node).
///
/// Links are stored as target page ids, in the order they were added. Incoming links are
/// never stored; "A links to B" says nothing about B linking to A.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub id: String,
    pub name: String,
    pub links: Vec<String>,
}

impl Page {
    fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            links: Vec::new(),
        }
    }
}

/// The page graph: page id -> [`Page`].
///
/// Append-only: pages and links can be added but never removed. Every key equals the id of
/// the page it maps to, and every link target names a page in the same graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageGraph {
    pages: BTreeMap<String, Page>,
}

/// Output of the shared two-pass build used by both the plain graph and the rooted view.
pub(crate) struct Assembled {
    pub graph: PageGraph,
    pub diagnostics: Vec<RecordDiagnostic>,
    /// Indices of the records that became pages.
    pub kept: Vec<usize>,
}

/// What to do with a record that has no `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MissingId {
    Fail,
    Skip,
}

impl PageGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a page with no links. Fails if the id is taken; the graph is unchanged then.
    pub fn add_page(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<(), GraphError> {
        let id = id.into();
        if self.pages.contains_key(&id) {
            return Err(GraphError::DuplicateId(id));
        }
        self.pages.insert(id.clone(), Page::new(id, name.into()));
        Ok(())
    }

    /// Append `target` to the link list of `source`.
    ///
    /// Both pages must exist. Re-adding an existing link keeps the original position.
    pub fn add_link(&mut self, source: &str, target: &str) -> Result<(), GraphError> {
        if !self.pages.contains_key(target) {
            return Err(missing_endpoint(source, target));
        }
        let page = self
            .pages
            .get_mut(source)
            .ok_or_else(|| missing_endpoint(source, target))?;
        if !page.links.iter().any(|l| l == target) {
            page.links.push(target.to_string());
        }
        Ok(())
    }

    /// Build a validated graph from raw records.
    ///
    /// Pass 1 creates every page, pass 2 adds every link, so records may link to pages that
    /// appear later in the input. Records without a `name` are dropped with a warning; a
    /// record without an `id` fails the build.
    pub fn deserialize(records: &[PageRecord]) -> Result<Self, GraphError> {
        Self::deserialize_with_diagnostics(records).map(|(graph, _)| graph)
    }

    /// Like [`PageGraph::deserialize`], also returning the records that were dropped.
    pub fn deserialize_with_diagnostics(
        records: &[PageRecord],
    ) -> Result<(Self, Vec<RecordDiagnostic>), GraphError> {
        let assembled = Self::assemble(records, MissingId::Fail)?;
        Ok((assembled.graph, assembled.diagnostics))
    }

    pub(crate) fn assemble(
        records: &[PageRecord],
        missing_id: MissingId,
    ) -> Result<Assembled, GraphError> {
        let mut graph = Self::new();
        let mut diagnostics = Vec::new();
        let mut kept = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let Some(id) = &record.id else {
                if missing_id == MissingId::Fail {
                    return Err(GraphError::MalformedRecord { index, field: "id" });
                }
                diagnostics.push(dropped(index, None, "id"));
                continue;
            };
            let Some(name) = &record.name else {
                diagnostics.push(dropped(index, Some(id), "name"));
                continue;
            };
            graph.add_page(id.as_str(), name.as_str())?;
            kept.push(index);
        }

        for &index in &kept {
            let record = &records[index];
            let Some(id) = &record.id else { continue };
            for target in &record.links {
                graph.add_link(id, target)?;
            }
        }

        tracing::debug!(
            pages = graph.len(),
            links = graph.link_count(),
            dropped = diagnostics.len(),
            "assembled page graph"
        );

        Ok(Assembled {
            graph,
            diagnostics,
            kept,
        })
    }

    /// Serialize back into records, one per page, in id order.
    pub fn to_records(&self) -> Vec<PageRecord> {
        self.pages
            .values()
            .map(|p| PageRecord::new(p.id.as_str(), p.name.as_str(), p.links.iter().cloned()))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Page> {
        self.pages.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.pages.contains_key(id)
    }

    /// Outgoing link targets of `id`, in insertion order.
    pub fn links_of(&self, id: &str) -> Option<&[String]> {
        self.pages.get(id).map(|p| p.links.as_slice())
    }

    /// All pages in id order.
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Total number of links across all pages.
    pub fn link_count(&self) -> usize {
        self.pages.values().map(|p| p.links.len()).sum()
    }
}

fn missing_endpoint(source: &str, target: &str) -> GraphError {
    GraphError::MissingEndpoint {
        from: source.to_string(),
        to: target.to_string(),
    }
}

fn dropped(index: usize, id: Option<&String>, missing: &'static str) -> RecordDiagnostic {
    let diagnostic = RecordDiagnostic {
        index,
        id: id.cloned(),
        missing,
    };
    tracing::warn!("{}", diagnostic);
    diagnostic
}
