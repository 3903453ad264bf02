use num_traits::Zero;

use crate::goal::Goal;

/// Estimated remaining cost from a node to the goal
/// Must be non-negative and admissible (never overestimate the true remaining cost)
/// When the goal is a predicate the heuristic receives the goal spec itself
/// and is responsible for interpreting it
pub type Heuristic<N, C> = Box<dyn Fn(&N, &Goal<N>) -> C + Send + Sync>;

/// Default heuristic: estimates zero remaining cost for every node,
/// degenerating the search to Dijkstra's algorithm
pub fn zero_heuristic<N, C: Zero>() -> Heuristic<N, C> {
    Box::new(|_, _| C::zero())
}
