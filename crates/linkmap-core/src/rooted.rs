//! Rooted view: a page graph with exactly one designated index page.

use crate::error::{GraphError, RootError};
use crate::graph::{MissingId, Page, PageGraph};
use crate::record::{PageRecord, RecordDiagnostic};

/// Read-only projection of a [`PageGraph`] plus its validated root page.
#[derive(Debug, Clone)]
pub struct RootedView {
    graph: PageGraph,
    root: Page,
    diagnostics: Vec<RecordDiagnostic>,
}

impl RootedView {
    /// Build from raw records, taking the root from the single record marked `isIndex`.
    ///
    /// Records without an `id` (or `name`) are skipped and reported through
    /// [`RootedView::diagnostics`]. Zero or several marked records fail with
    /// [`GraphError::MissingRoot`].
    pub fn from_records(records: &[PageRecord]) -> Result<Self, GraphError> {
        let assembled = PageGraph::assemble(records, MissingId::Skip)?;

        let mut marked: Vec<String> = assembled
            .kept
            .iter()
            .map(|&i| &records[i])
            .filter(|r| r.is_index)
            .filter_map(|r| r.id.clone())
            .collect();

        if marked.len() > 1 {
            return Err(RootError::Ambiguous(marked).into());
        }
        let root = marked.pop().ok_or(RootError::Unmarked)?;

        Self::new(assembled.graph, root, assembled.diagnostics)
    }

    /// Build from raw records with an explicit root, ignoring any `isIndex` markers.
    ///
    /// Records are admitted under the same policy as [`RootedView::from_records`].
    pub fn from_records_with_root(
        records: &[PageRecord],
        root: impl Into<String>,
    ) -> Result<Self, GraphError> {
        let assembled = PageGraph::assemble(records, MissingId::Skip)?;
        Self::new(assembled.graph, root.into(), assembled.diagnostics)
    }

    /// [`RootedView::from_records_with_root`] when `root` is given, else [`RootedView::from_records`].
    pub fn resolve(records: &[PageRecord], root: Option<&str>) -> Result<Self, GraphError> {
        match root {
            Some(root) => Self::from_records_with_root(records, root),
            None => Self::from_records(records),
        }
    }

    /// Wrap an existing graph, validating that `root` is one of its pages.
    pub fn from_graph(graph: PageGraph, root: impl Into<String>) -> Result<Self, GraphError> {
        Self::new(graph, root.into(), Vec::new())
    }

    fn new(
        graph: PageGraph,
        root: String,
        diagnostics: Vec<RecordDiagnostic>,
    ) -> Result<Self, GraphError> {
        let Some(page) = graph.get(&root).cloned() else {
            return Err(RootError::Absent(root).into());
        };
        Ok(Self {
            graph,
            root: page,
            diagnostics,
        })
    }

    /// The root page.
    pub fn root(&self) -> &Page {
        &self.root
    }

    pub fn root_id(&self) -> &str {
        &self.root.id
    }

    pub fn get(&self, id: &str) -> Option<&Page> {
        self.graph.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.graph.contains(id)
    }

    pub fn graph(&self) -> &PageGraph {
        &self.graph
    }

    /// Records skipped while building this view.
    pub fn diagnostics(&self) -> &[RecordDiagnostic] {
        &self.diagnostics
    }

    /// Serialize back into records, with the root marked.
    pub fn to_records(&self) -> Vec<PageRecord> {
        self.graph
            .to_records()
            .into_iter()
            .map(|r| {
                if r.id.as_deref() == Some(self.root_id()) {
                    r.index()
                } else {
                    r
                }
            })
            .collect()
    }
}
