//! Dijkstra's Algorithm, a.k.a. uniform cost search

use super::astar::AStarSearch;
use crate::errors::Result;
use crate::traits::{NullHeuristic, Problem};

/// Search algorithm which implements Dijkstra's Algorithm for
/// graph searches.
///
/// This is A* with a heuristic which always guesses zero, so the frontier
/// is ordered by path cost alone.
pub type DijkstraSearch<'p, P> = AStarSearch<'p, P, NullHeuristic>;

/// Build a Dijkstra's Algorithm searcher.
pub fn build<P>(problem: &P) -> DijkstraSearch<'_, P>
where
    P: Problem,
{
    AStarSearch::new("ucs", problem, NullHeuristic)
}

/// Perform a search using Dijkstra's algorithm.
///
/// Dijkstra's algorithm behaves like a breadth first search, but always
/// searches the next cheapest path even when steps have varying costs.
/// The first goal popped from the frontier is a cheapest one, provided no
/// step cost is negative; negative costs are rejected with
/// [SearchError::NegativeStepCost](crate::SearchError::NegativeStepCost).
pub fn uniform_cost_search<P>(problem: &P) -> Result<Vec<P::Action>>
where
    P: Problem,
{
    build(problem).run()
}
