//! Core types for Linkmap: a directed graph of pages connected by named links.
//!
//! Provides the page graph model ([`graph::PageGraph`]), raw input records, the rooted view
//! used to pick a layering root, typed construction errors, JSON document handling, and
//! layout/render configuration.

pub mod config;
pub mod error;
pub mod graph;
pub mod record;
pub mod rooted;
pub mod schema;
pub mod storage;

pub use error::{GraphError, RootError};
pub use graph::{Page, PageGraph};
pub use record::{PageRecord, RecordDiagnostic};
pub use rooted::RootedView;
