/// Directed weighted edge between two nodes
/// Costs must be non-negative; parallel edges and self-loops are valid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<N, C> {
    pub from: N,
    pub to: N,
    pub cost: C,
}

impl<N, C> Edge<N, C> {
    pub fn new(from: N, to: N, cost: C) -> Self {
        Edge { from, to, cost }
    }
}

/// Lowest-cost route from a start node to a goal node
/// `path` is empty and `cost` is zero exactly when the start already met the goal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphPath<N, C> {
    pub cost: C,
    pub path: Vec<Edge<N, C>>,
}
