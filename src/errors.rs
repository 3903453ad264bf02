use thiserror::Error;

/// Failure raised by an [`EdgeSource`](crate::source::EdgeSource) while
/// producing the outgoing edges of a node. Boxed so sources can surface
/// whatever error type they already have.
pub type EdgeSourceError = Box<dyn std::error::Error + Send + Sync>;

/// Failures surfaced by a single `find_path` invocation.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The frontier was exhausted without any node satisfying the goal test.
    /// A normal outcome on a disconnected graph, not a defect.
    #[error("No path to goal")]
    NoPathFound,

    /// The edge source failed while a node was being expanded. The failure
    /// message is passed through verbatim and the search is abandoned.
    #[error("{0}")]
    EdgeSource(EdgeSourceError),
}

impl From<EdgeSourceError> for SearchError {
    fn from(err: EdgeSourceError) -> Self {
        SearchError::EdgeSource(err)
    }
}
