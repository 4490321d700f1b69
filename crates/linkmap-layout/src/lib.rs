//! Layout pipeline for Linkmap page graphs.
//!
//! Provides breadth-first layering from a root page ([`rank`]), the ring layout that turns
//! layers into 3D positions and link segments ([`layout`]), the render hand-off contract
//! ([`render`]), and DOT/Mermaid export of the layered graph ([`export`]).

pub mod export;
pub mod layout;
pub mod rank;
pub mod render;

pub use layout::{Layout, Point3, Segment};
pub use rank::{Layers, rank_layers};
