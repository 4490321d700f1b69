//! Construction errors for page graphs and rooted views.

/// Errors raised while building a [`crate::graph::PageGraph`] or [`crate::rooted::RootedView`],
/// or while validating a root id before ranking.
///
/// Every variant aborts the whole build: no partially constructed graph is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("page with id '{0}' already exists")]
    DuplicateId(String),
    #[error("link {from} -> {to} references a page that does not exist")]
    MissingEndpoint { from: String, to: String },
    #[error("missing root: {0}")]
    MissingRoot(#[from] RootError),
    #[error("record {index} is missing required field '{field}'")]
    MalformedRecord { index: usize, field: &'static str },
}

/// Why a root could not be established.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RootError {
    #[error("no record is marked as the index page")]
    Unmarked,
    #[error("multiple records are marked as the index page: {}", .0.join(", "))]
    Ambiguous(Vec<String>),
    #[error("root page '{0}' is not in the graph")]
    Absent(String),
}
