//! Ring layout: one horizontal ring per layer, stacked along z.

use crate::rank::{Layers, rank_layers};
use linkmap_core::GraphError;
use linkmap_core::config::LayoutConfig;
use linkmap_core::graph::PageGraph;
use serde::Serialize;
use std::collections::BTreeMap;
use std::f64::consts::TAU;

/// A point in layout space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance(&self, other: &Point3) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}

/// A drawable link between two positioned pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub source: String,
    pub target: String,
    pub from: Point3,
    pub to: Point3,
}

/// Positions for every ranked page plus the segments connecting them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub positions: BTreeMap<String, Point3>,
    pub segments: Vec<Segment>,
}

impl Layout {
    pub fn position(&self, id: &str) -> Option<Point3> {
        self.positions.get(id).copied()
    }

    /// `(source, target)` id pairs, in emission order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
        self.segments
            .iter()
            .map(|s| (s.source.as_str(), s.target.as_str()))
    }
}

/// Place every layer on a ring and connect positioned pages along their links.
///
/// Member `k` of layer `i` (with `n` members) lands at angle `2πk/n` on a circle of radius
/// `R` at height `i * H`. A segment is emitted for each link whose two ends both have a
/// position; links into unranked pages are skipped. Segments come out layer by layer, in
/// member order, then link order.
pub fn layout(graph: &PageGraph, layers: &Layers, config: &LayoutConfig) -> Layout {
    let LayoutConfig {
        radius,
        layer_spacing,
    } = *config;

    let mut positions = BTreeMap::new();
    for (i, layer) in layers.iter().enumerate() {
        let z = i as f64 * layer_spacing;
        let n = layer.len() as f64;
        for (k, id) in layer.iter().enumerate() {
            let theta = TAU * k as f64 / n;
            positions.insert(
                id.clone(),
                Point3::new(radius * theta.cos(), radius * theta.sin(), z),
            );
        }
    }

    let mut segments = Vec::new();
    for id in layers.iter().flatten() {
        let (Some(&from), Some(links)) = (positions.get(id), graph.links_of(id)) else {
            continue;
        };
        for target in links {
            if let Some(&to) = positions.get(target) {
                segments.push(Segment {
                    source: id.clone(),
                    target: target.clone(),
                    from,
                    to,
                });
            }
        }
    }

    tracing::debug!(
        positions = positions.len(),
        segments = segments.len(),
        "laid out page graph"
    );

    Layout {
        positions,
        segments,
    }
}

/// Rank from `root` and lay out the result in one call.
pub fn layout_from_root(
    graph: &PageGraph,
    root: &str,
    config: &LayoutConfig,
) -> Result<Layout, GraphError> {
    let layers = rank_layers(graph, root)?;
    Ok(layout(graph, &layers, config))
}
