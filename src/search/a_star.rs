use super::reconstruct::assemble_path;
use super::{NO_PARENT, RecordMap, SearchRecord};
use crate::errors::SearchError;
use crate::goal::Goal;
use crate::graph::GraphPath;
use crate::heuristic::{Heuristic, zero_heuristic};
use crate::source::EdgeSource;

use std::{cmp::Ordering, collections::BinaryHeap, fmt::Debug, hash::Hash};
use indexmap::map::Entry::{Occupied, Vacant};
use num_traits::Zero;
use tracing::{debug, trace};



/// Frontier entry for a node awaiting expansion
#[derive(Debug)]
struct FrontierEntry<C> {
    index: usize, // index of the node's record in the record map
    f_cost: C,    // estimated total cost = accumulated cost + h(n)
    seq: usize,   // insertion sequence, breaks priority ties first-in-first-out
}

impl<C: Ord> Ord for FrontierEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the BinaryHeap pops the lowest estimated cost first,
        // and among equal estimates the earliest insertion
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<C: Ord> PartialOrd for FrontierEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: Ord> PartialEq for FrontierEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.seq == other.seq
    }
}
impl<C: Ord> Eq for FrontierEntry<C> {}

/// A* search engine over an injected edge source
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// The engine holds no per-search state: each `find_path` call owns its own
/// frontier and records, so concurrent searches against one engine only share
/// the edge source and the heuristic. Dropping the returned future abandons
/// the search cleanly.
pub struct Astar<S, N, C> {
    edge_source: S,
    heuristic: Heuristic<N, C>,
}

impl<S, N, C> Astar<S, N, C>
where
    S: EdgeSource<N, C>,
    N: Eq + Hash + Clone + Debug + Send + Sync,
    C: Zero + Ord + Copy + Debug + Send,
{
    /// Configure an engine around an edge source, with the zero heuristic
    /// (uniform-cost search) until [`with_heuristic`](Self::with_heuristic)
    /// replaces it
    pub fn new(edge_source: S) -> Self {
        Astar {
            edge_source,
            heuristic: zero_heuristic(),
        }
    }

    /// Replace the default zero heuristic
    /// The heuristic must be admissible (never overestimate the true cost to
    /// reach the goal) for returned paths to stay optimal
    pub fn with_heuristic(mut self, heuristic: Heuristic<N, C>) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Evaluate the configured heuristic for a node against a goal spec
    pub fn h(&self, from: &N, to: &Goal<N>) -> C {
        (self.heuristic)(from, to)
    }

    /// From the start node, traverse the graph until a node meets the goal
    /// criteria, and return the lowest-cost path of edges to it.
    ///
    /// The goal is either a literal node (`NodeId` via `Into`) or a
    /// [`Goal::predicate`]. Fails with [`SearchError::NoPathFound`] when the
    /// frontier is exhausted, or with the edge source's own failure if one
    /// lookup fails; partial search state is discarded either way.
    pub async fn find_path(
        &self,
        start: N,
        goal: impl Into<Goal<N>>,
    ) -> Result<GraphPath<N, C>, SearchError> {
        let goal = goal.into();
        let is_goal = goal.matcher();

        // A start node that already meets the goal is a terminal state, not a
        // one-step search: no edge lookup, no frontier
        if is_goal(&start) {
            return Ok(GraphPath {
                cost: C::zero(),
                path: Vec::new(),
            });
        }

        // Open list, sorted by f_cost (accumulated cost + heuristic)
        let mut frontier: BinaryHeap<FrontierEntry<C>> = BinaryHeap::new();

        // One record per seen node: best known cost, predecessor link, and
        // whether the node has been expanded (closed, cost final)
        let mut records: RecordMap<N, C> = RecordMap::default();
        let mut seq: usize = 0;

        let start_index = records
            .insert_full(
                start.clone(),
                SearchRecord {
                    parent: NO_PARENT,
                    edge_cost: C::zero(),
                    cost: C::zero(),
                    closed: false,
                },
            )
            .0;
        frontier.push(FrontierEntry {
            index: start_index,
            f_cost: self.h(&start, &goal),
            seq,
        });

        while let Some(FrontierEntry { index, .. }) = frontier.pop() {
            let (node, record) = records.get_index_mut(index).unwrap();

            // Duplicate frontier entries stand in for decrease-key, so a node
            // can be popped again after expansion; closed records are final
            // and never re-expanded
            if record.closed {
                continue;
            }
            record.closed = true;

            let node = node.clone();
            let node_cost = record.cost;

            if is_goal(&node) {
                debug!(node = ?node, cost = ?node_cost, "goal reached");
                return assemble_path(&records, index);
            }

            trace!(node = ?node, cost = ?node_cost, "expanding node");

            // The only suspension point: frontier and record mutation is
            // purely synchronous on either side of it, and each node is
            // queried at most once per search
            let edges = self.edge_source.edges_from(&node).await?;

            for edge in edges {
                // Confirmed cost to reach the neighbor through this node
                let candidate = node_cost + edge.cost;

                let neighbor_index = match records.entry(edge.to.clone()) {
                    Vacant(e) => {
                        // First time seeing this neighbor
                        let neighbor_index = e.index();
                        e.insert(SearchRecord {
                            parent: index,
                            edge_cost: edge.cost,
                            cost: candidate,
                            closed: false,
                        });
                        neighbor_index
                    }
                    Occupied(mut e) => {
                        // A closed record never reopens, and only a strictly
                        // cheaper route displaces an open one. Self-loops land
                        // here too: with non-negative costs the candidate can
                        // never beat the node's own recorded cost
                        let known = e.get();
                        if known.closed || candidate >= known.cost {
                            continue;
                        }
                        e.insert(SearchRecord {
                            parent: index,
                            edge_cost: edge.cost,
                            cost: candidate,
                            closed: false,
                        });
                        e.index()
                    }
                };

                seq += 1;
                frontier.push(FrontierEntry {
                    index: neighbor_index,
                    f_cost: candidate + self.h(&edge.to, &goal),
                    seq,
                });
            }
        }

        debug!("frontier exhausted without reaching a goal");
        Err(SearchError::NoPathFound)
    }
}



#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::EdgeSourceError;
    use crate::graph::Edge;

    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use async_trait::async_trait;

    // Helper to build an edge source over an in-memory edge list
    fn edge_source(
        edges: Vec<(&'static str, &'static str, u32)>,
    ) -> impl Fn(&&'static str) -> Result<Vec<Edge<&'static str, u32>>, EdgeSourceError> {
        let edges: Vec<Edge<&'static str, u32>> = edges
            .into_iter()
            .map(|(from, to, cost)| Edge::new(from, to, cost))
            .collect();
        move |node: &&'static str| Ok(edges.iter().filter(|e| e.from == *node).cloned().collect())
    }

    // Fixture graph with an adversarial b -> b self-loop
    fn fixture_edges() -> Vec<(&'static str, &'static str, u32)> {
        vec![
            ("a", "b", 1),
            ("a", "c", 3),
            ("b", "b", 1), // This is an attempt to cause trouble. (Intentionally)
            ("b", "a", 1),
            ("b", "c", 1),
            ("b", "d", 3),
            ("c", "a", 3),
            ("c", "b", 1),
            ("c", "d", 1),
            ("c", "e", 1),
            ("d", "b", 3),
            ("d", "c", 1),
            ("d", "e", 1),
            ("e", "c", 1),
            ("e", "d", 1),
            ("f", "e", 1),
        ]
    }

    fn fixture_nodes() -> Vec<&'static str> {
        let mut seen = Vec::new();
        for (from, to, _) in fixture_edges() {
            if !seen.contains(&from) {
                seen.push(from);
            }
            if !seen.contains(&to) {
                seen.push(to);
            }
        }
        seen
    }

    #[test]
    fn default_heuristic_returns_zero_for_all_node_pairs() {
        let astar: Astar<_, &str, u32> = Astar::new(edge_source(fixture_edges()));

        for from in fixture_nodes() {
            for to in fixture_nodes() {
                assert_eq!(astar.h(&from, &Goal::Node(to)), 0);
            }
        }
    }

    #[tokio::test]
    async fn self_loop_never_improves_a_node_record() {
        // b's cheapest route stays a -> b even though b -> b keeps offering
        // itself as a relaxation candidate
        let astar = Astar::new(edge_source(fixture_edges()));

        let found = astar.find_path("a", "b").await.unwrap();
        assert_eq!(found.cost, 1);
        assert_eq!(found.path, vec![Edge::new("a", "b", 1)]);
    }

    #[tokio::test]
    async fn zero_cost_self_loop_terminates() {
        // A zero-cost loop ties the node's own recorded cost; the strictly-
        // less rule rejects it, so the search cannot spin
        let astar = Astar::new(edge_source(vec![
            ("a", "b", 1),
            ("b", "b", 0),
            ("b", "c", 1),
        ]));

        let found = astar.find_path("a", "c").await.unwrap();
        assert_eq!(found.cost, 2);
        assert_eq!(
            found.path,
            vec![Edge::new("a", "b", 1), Edge::new("b", "c", 1)]
        );
    }

    #[tokio::test]
    async fn parallel_edges_keep_the_cheaper_one() {
        let astar = Astar::new(edge_source(vec![("a", "b", 5), ("a", "b", 2)]));

        let found = astar.find_path("a", "b").await.unwrap();
        assert_eq!(found.cost, 2);
        assert_eq!(found.path, vec![Edge::new("a", "b", 2)]);
    }

    #[tokio::test]
    async fn reported_cost_agrees_with_the_edge_sequence() {
        let astar = Astar::new(edge_source(fixture_edges()));

        let found = astar.find_path("a", "e").await.unwrap();
        assert_eq!(found.cost, 3);
        assert_eq!(found.cost, found.path.iter().map(|e| e.cost).sum::<u32>());

        // Contiguous chain from start to goal
        assert_eq!(found.path.first().unwrap().from, "a");
        assert_eq!(found.path.last().unwrap().to, "e");
        for pair in found.path.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
    }

    #[tokio::test]
    async fn repeated_searches_return_identical_results() {
        let astar = Astar::new(edge_source(fixture_edges()));

        let first = astar.find_path("a", "d").await.unwrap();
        let second = astar.find_path("a", "d").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.cost, 3);
    }

    struct FailingSource;

    #[async_trait]
    impl EdgeSource<&'static str, u32> for FailingSource {
        async fn edges_from(
            &self,
            node: &&'static str,
        ) -> Result<Vec<Edge<&'static str, u32>>, EdgeSourceError> {
            if *node == "a" {
                Ok(vec![Edge::new("a", "b", 1)])
            } else {
                Err("backing store unavailable".into())
            }
        }
    }

    #[tokio::test]
    async fn edge_source_failure_aborts_the_search() {
        let astar = Astar::new(FailingSource);

        let err = astar.find_path("a", "c").await.unwrap_err();
        assert!(matches!(err, SearchError::EdgeSource(_)));
        assert_eq!(err.to_string(), "backing store unavailable");
    }

    struct CountingSource {
        edges: Vec<Edge<&'static str, u32>>,
        calls: Arc<Mutex<HashMap<&'static str, usize>>>,
    }

    #[async_trait]
    impl EdgeSource<&'static str, u32> for CountingSource {
        async fn edges_from(
            &self,
            node: &&'static str,
        ) -> Result<Vec<Edge<&'static str, u32>>, EdgeSourceError> {
            *self.calls.lock().unwrap().entry(*node).or_insert(0) += 1;
            Ok(self
                .edges
                .iter()
                .filter(|e| e.from == *node)
                .cloned()
                .collect())
        }
    }

    #[tokio::test]
    async fn each_node_is_queried_at_most_once_per_search() {
        let calls = Arc::new(Mutex::new(HashMap::new()));
        let source = CountingSource {
            edges: fixture_edges()
                .into_iter()
                .map(|(from, to, cost)| Edge::new(from, to, cost))
                .collect(),
            calls: Arc::clone(&calls),
        };
        let astar = Astar::new(source);

        // Unreachable goal, so the whole component of "a" gets expanded
        let err = astar.find_path("a", "f").await.unwrap_err();
        assert!(matches!(err, SearchError::NoPathFound));

        let calls = calls.lock().unwrap();
        for (node, count) in calls.iter() {
            assert_eq!(*count, 1, "node {node} queried more than once");
        }
        let mut queried: Vec<_> = calls.keys().copied().collect();
        queried.sort();
        assert_eq!(queried, vec!["a", "b", "c", "d", "e"]);
    }

    #[tokio::test]
    async fn admissible_heuristic_steers_the_search() {
        // Grid-like graph where nodes carry (x, y) coordinates and the
        // heuristic is the Manhattan distance to a literal goal node
        let coords = HashMap::from([
            ("a", (0i32, 0i32)),
            ("b", (1i32, 0i32)),
            ("c", (0i32, 1i32)),
            ("d", (2i32, 0i32)),
        ]);

        let heuristic: Heuristic<&'static str, u32> = Box::new(move |node, goal| {
            let (gx, gy) = match goal {
                Goal::Node(g) => coords[*g],
                Goal::Predicate(_) => return 0,
            };
            let (nx, ny) = coords[*node];
            ((nx - gx).abs() + (ny - gy).abs()) as u32
        });

        let astar = Astar::new(edge_source(vec![
            ("a", "b", 1),
            ("a", "c", 1),
            ("b", "d", 1),
            ("c", "d", 2),
        ]))
        .with_heuristic(heuristic);

        let found = astar.find_path("a", "d").await.unwrap();
        assert_eq!(found.cost, 2);
        assert_eq!(
            found.path,
            vec![Edge::new("a", "b", 1), Edge::new("b", "d", 1)]
        );
    }
}
