//! Generalized search algorithms, especially useful for graph traversal.
//!
//! To use these search algorithms, implement the trait [Problem], which
//! describes a start state, a goal test and the transitions out of each
//! state. Every strategy returns the list of actions leading from the start
//! to a goal, or an empty list when no goal can be reached.
//!
//! - [depth_first_search] and [breadth_first_search] ignore step costs.
//! - [uniform_cost_search] returns a cheapest plan.
//! - [astar_search] returns a cheapest plan when given an admissible
//!   [Heuristic].

pub mod algorithm;
mod errors;
pub mod frontier;
mod traits;

#[cfg(test)]
pub(crate) mod helpers;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use traits::null_heuristic;
pub use traits::Cost;
pub use traits::Heuristic;
pub use traits::NullHeuristic;
pub use traits::Problem;
pub use traits::Successor;
pub use traits::SuccessorOf;

pub use algorithm::astar::{astar_search, AStarSearch};
pub use algorithm::basic::{breadth_first_search, BreadthFirstSearch};
pub use algorithm::basic::{depth_first_search, DepthFirstSearch};
pub use algorithm::dijkstra::{uniform_cost_search, DijkstraSearch};
pub use algorithm::{SearchOptions, SearchStats};

/// Builders for each strategy, for searches which need [SearchOptions].
pub mod build {
    pub use crate::algorithm::astar::build as astar;
    pub use crate::algorithm::basic::breadth::build as bfs;
    pub use crate::algorithm::basic::depth::build as dfs;
    pub use crate::algorithm::dijkstra::build as ucs;
}

pub use astar_search as astar;
pub use breadth_first_search as bfs;
pub use depth_first_search as dfs;
pub use uniform_cost_search as ucs;
