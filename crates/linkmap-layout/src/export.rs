//! Export a ranked page graph as DOT (Graphviz) or a Mermaid flowchart.
//!
//! Only ranked pages and the links between them are written, one group per layer.

use crate::rank::Layers;
use linkmap_core::graph::PageGraph;
use std::fmt::Write;

/// Export format for graph visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Dot,
    Mermaid,
}

impl ExportFormat {
    /// Look up a format by its command-line name: `dot` / `graphviz` or `mermaid` / `md`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dot" | "graphviz" => Some(Self::Dot),
            "mermaid" | "md" => Some(Self::Mermaid),
            _ => None,
        }
    }
}

/// Export the layered graph as a DOT (Graphviz) string, one `rank=same` subgraph per layer.
pub fn export_dot(graph: &PageGraph, layers: &Layers) -> String {
    let mut out = String::new();
    writeln!(out, "digraph Linkmap {{").unwrap();
    writeln!(out, "  rankdir=TB;").unwrap();
    writeln!(out, "  node [shape=ellipse, fontsize=10];").unwrap();

    for (i, layer) in layers.iter().enumerate() {
        writeln!(out).unwrap();
        writeln!(out, "  subgraph layer_{} {{", i).unwrap();
        writeln!(out, "    rank=same;").unwrap();
        for id in layer {
            let name = graph.get(id).map_or(id.as_str(), |p| p.name.as_str());
            let shape = if i == 0 { ", shape=doublecircle" } else { "" };
            writeln!(
                out,
                "    \"{}\" [label=\"{}\"{}];",
                dot_escape(id),
                dot_escape(name),
                shape
            )
            .unwrap();
        }
        writeln!(out, "  }}").unwrap();
    }

    writeln!(out).unwrap();
    for (source, target) in ranked_links(graph, layers) {
        writeln!(
            out,
            "  \"{}\" -> \"{}\";",
            dot_escape(source),
            dot_escape(target)
        )
        .unwrap();
    }

    writeln!(out, "}}").unwrap();
    out
}

/// Export the layered graph as a Mermaid flowchart string, one subgraph per layer.
pub fn export_mermaid(graph: &PageGraph, layers: &Layers) -> String {
    let mut out = String::new();
    writeln!(out, "flowchart TB").unwrap();

    for (i, layer) in layers.iter().enumerate() {
        writeln!(out).unwrap();
        writeln!(out, "  subgraph layer_{}[\"Layer {}\"]", i, i).unwrap();
        for id in layer {
            let name = graph.get(id).map_or(id.as_str(), |p| p.name.as_str());
            writeln!(
                out,
                "    {}[\"{}\"]",
                mermaid_safe_id(id),
                name.replace('"', "#quot;")
            )
            .unwrap();
        }
        writeln!(out, "  end").unwrap();
    }

    writeln!(out).unwrap();
    for (source, target) in ranked_links(graph, layers) {
        writeln!(
            out,
            "  {} --> {}",
            mermaid_safe_id(source),
            mermaid_safe_id(target)
        )
        .unwrap();
    }

    out
}

/// Links whose two ends are both ranked, in layer / member / link order.
fn ranked_links<'a>(graph: &'a PageGraph, layers: &'a Layers) -> Vec<(&'a str, &'a str)> {
    let depths = layers.depths();
    let mut links = Vec::new();
    for id in layers.iter().flatten() {
        for target in graph.links_of(id).unwrap_or_default() {
            if depths.contains_key(target.as_str()) {
                links.push((id.as_str(), target.as_str()));
            }
        }
    }
    links
}

fn dot_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Make an ID safe for Mermaid: ASCII alphanumerics pass through, every other byte becomes
/// `_xx_` in hex, and the `p_` prefix keeps ids off keywords like `end`. Distinct ids stay distinct.
fn mermaid_safe_id(id: &str) -> String {
    let mut out = String::with_capacity(id.len() + 2);
    out.push_str("p_");
    for byte in id.bytes() {
        if byte.is_ascii_alphanumeric() {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("_{byte:02x}_"));
        }
    }
    out
}

/// Export the layered graph in the specified format.
pub fn export(graph: &PageGraph, layers: &Layers, format: ExportFormat) -> String {
    match format {
        ExportFormat::Dot => export_dot(graph, layers),
        ExportFormat::Mermaid => export_mermaid(graph, layers),
    }
}
