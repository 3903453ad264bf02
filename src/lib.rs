//! Async A* path planning over caller-supplied edge sources.
//!
//! The graph is never materialized inside the engine. Callers hand it an
//! [`EdgeSource`] — one async operation that yields the outgoing edges of a
//! node — and the engine runs the search: frontier ordering, cost relaxation,
//! goal detection, and path reconstruction.
//!
//! With the default [`zero_heuristic`] the search is uniform-cost (Dijkstra);
//! supplying an admissible heuristic turns it into full A*.
//!
//! ```
//! use waypath::{Astar, Edge, EdgeSourceError};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), waypath::SearchError> {
//! let edges = vec![
//!     Edge { from: "a", to: "b", cost: 1u32 },
//!     Edge { from: "b", to: "c", cost: 2u32 },
//! ];
//! let source = move |node: &&str| -> Result<Vec<Edge<&str, u32>>, EdgeSourceError> {
//!     Ok(edges.iter().filter(|e| e.from == *node).cloned().collect())
//! };
//!
//! let astar = Astar::new(source);
//! let found = astar.find_path("a", "c").await?;
//! assert_eq!(found.cost, 3);
//! # Ok(())
//! # }
//! ```

mod collections;
pub mod errors;
pub mod goal;
pub mod graph;
pub mod heuristic;
pub mod search;
pub mod source;

pub use errors::{EdgeSourceError, SearchError};
pub use goal::Goal;
pub use graph::{Edge, GraphPath};
pub use heuristic::{Heuristic, zero_heuristic};
pub use search::Astar;
pub use source::EdgeSource;
