use async_trait::async_trait;

use crate::errors::EdgeSourceError;
use crate::graph::Edge;

/// Supplies the outgoing edges of a node on demand.
///
/// This is the engine's only view of the graph: edges may live in memory,
/// behind a database, or on the far side of a network call. The contract:
/// - every returned edge's `from` field equals the queried node (the engine
///   relies on this without validating it)
/// - a failure aborts the search and propagates as the search's own failure
/// - the engine queries each node at most once per search, so sources with
///   side effects see no duplicate lookups
///
/// Retry policy for transient failures belongs to the source, not the engine.
#[async_trait]
pub trait EdgeSource<N, C>: Send + Sync {
    async fn edges_from(&self, node: &N) -> Result<Vec<Edge<N, C>>, EdgeSourceError>;
}

/// In-memory graphs can supply edges from a plain closure
#[async_trait]
impl<N, C, F> EdgeSource<N, C> for F
where
    N: Sync,
    F: Fn(&N) -> Result<Vec<Edge<N, C>>, EdgeSourceError> + Send + Sync,
{
    async fn edges_from(&self, node: &N) -> Result<Vec<Edge<N, C>>, EdgeSourceError> {
        (self)(node)
    }
}
