use super::{NO_PARENT, RecordMap};
use crate::errors::SearchError;
use crate::graph::{Edge, GraphPath};

/// Construct the path from the goal record back to the start record
/// Walks predecessor indices, emitting one edge per link, then reverses
/// the sequence into start-to-goal order
/// Total cost is the goal record's accumulated cost, not a re-summation,
/// so the returned cost and path agree by construction
pub(super) fn assemble_path<N, C>(
    records: &RecordMap<N, C>,
    goal_index: usize,
) -> Result<GraphPath<N, C>, SearchError>
where
    N: Clone,
    C: Copy,
{
    let (_, goal_record) = records
        .get_index(goal_index)
        .ok_or(SearchError::NoPathFound)?;
    let cost = goal_record.cost;

    let mut path = Vec::new();
    let mut current = goal_index;

    // Trace back from goal to start
    while current != NO_PARENT {
        let (node, record) = records.get_index(current).ok_or(SearchError::NoPathFound)?;
        if record.parent == NO_PARENT {
            break;
        }

        // The from-node is the predecessor record's key
        let (parent_node, _) = records
            .get_index(record.parent)
            .ok_or(SearchError::NoPathFound)?;
        path.push(Edge {
            from: parent_node.clone(),
            to: node.clone(),
            cost: record.edge_cost,
        });

        current = record.parent;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(GraphPath { cost, path })
}
