mod a_star;
mod reconstruct;

pub use a_star::Astar;

use crate::collections::FxIndexMap;

/// Parent index marking the start record, which has no predecessor
const NO_PARENT: usize = usize::MAX;

/// Per-node bookkeeping for one search invocation
/// Once `closed` is set the recorded cost is final and never improved
/// (requires non-negative edge costs, the standard A*/Dijkstra precondition)
#[derive(Debug, Clone, Copy)]
struct SearchRecord<C> {
    parent: usize, // index of the predecessor record, NO_PARENT for the start
    edge_cost: C,  // cost of the predecessor edge that achieved `cost`
    cost: C,       // best known cumulative cost from the start
    closed: bool,  // expanded, cost is final
}

/// Map of nodes to their search records, addressed by insertion index
/// so records can reference their predecessor without cloning node keys
type RecordMap<N, C> = FxIndexMap<N, SearchRecord<C>>;
