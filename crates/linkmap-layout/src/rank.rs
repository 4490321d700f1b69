//! Layered ranking: breadth-first depth layers from a root page.

use linkmap_core::graph::PageGraph;
use linkmap_core::{GraphError, RootError};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Ordered depth layers. Layer 0 holds only the root; layer `i` holds the pages whose
/// shortest outgoing-link distance from the root is `i` hops.
///
/// Member order within a layer is first-discovery order, which makes the result
/// reproducible for identical input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Layers(Vec<Vec<String>>);

impl Layers {
    /// Number of layers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn layer(&self, index: usize) -> Option<&[String]> {
        self.0.get(index).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[String]> {
        self.0.iter().map(Vec::as_slice)
    }

    /// Layer index of `id`, or `None` if the page was not reached.
    pub fn layer_of(&self, id: &str) -> Option<usize> {
        self.0.iter().position(|layer| layer.iter().any(|m| m == id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.layer_of(id).is_some()
    }

    /// Total number of ranked pages across all layers.
    pub fn page_count(&self) -> usize {
        self.0.iter().map(Vec::len).sum()
    }

    /// Page id -> layer index, for every ranked page.
    pub fn depths(&self) -> HashMap<&str, usize> {
        self.0
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| layer.iter().map(move |id| (id.as_str(), i)))
            .collect()
    }

    pub fn into_inner(self) -> Vec<Vec<String>> {
        self.0
    }
}

/// Partition the pages reachable from `root` into breadth-first layers.
///
/// Only outgoing links are followed. Pages that cannot be reached are left out; cycles and
/// self-loops are harmless since every page is assigned once, at its first discovery.
/// Fails only if `root` is not a page of `graph`.
pub fn rank_layers(graph: &PageGraph, root: &str) -> Result<Layers, GraphError> {
    if !graph.contains(root) {
        return Err(RootError::Absent(root.to_string()).into());
    }

    let mut visited: HashSet<&str> = HashSet::new();
    visited.insert(root);
    let mut layers = vec![vec![root.to_string()]];

    loop {
        let mut next = Vec::new();
        if let Some(frontier) = layers.last() {
            for id in frontier {
                for target in graph.links_of(id).unwrap_or_default() {
                    if visited.insert(target.as_str()) {
                        next.push(target.clone());
                    }
                }
            }
        }
        if next.is_empty() {
            break;
        }
        layers.push(next);
    }

    tracing::debug!(
        root,
        layers = layers.len(),
        ranked = visited.len(),
        omitted = graph.len() - visited.len(),
        "ranked page graph"
    );

    Ok(Layers(layers))
}

/// Pages of `graph` that appear in no layer, in id order.
pub fn unreachable<'a>(graph: &'a PageGraph, layers: &Layers) -> Vec<&'a str> {
    let depths = layers.depths();
    graph.ids().filter(|id| !depths.contains_key(id)).collect()
}
