//! Heuristics for the maze problems.
//!
//! All of these are admissible: they never estimate more than the true
//! remaining cost when each step costs at least 1.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};

use itertools::iproduct;
use num::{NumCast, Zero};
use tracing::trace;

use searcher::Problem;

use crate::coord2d::Point;
use crate::problem::{SurvivorProblem, SurvivorState};

/// A problem whose states are squares, with one square to reach.
pub trait SingleGoal: Problem<State = Point> {
    fn goal(&self) -> Point;
}

/// Manhattan distance to the goal.
pub fn manhattan_heuristic<P>(state: &Point, problem: &P) -> P::Cost
where
    P: SingleGoal,
    P::Cost: NumCast,
{
    num::cast(state.manhattan_distance(problem.goal())).unwrap_or_else(P::Cost::zero)
}

/// Straight-line distance to the goal, rounded down.
pub fn euclidean_heuristic<P>(state: &Point, problem: &P) -> P::Cost
where
    P: SingleGoal,
    P::Cost: NumCast,
{
    num::cast(state.euclidean_distance(problem.goal()).floor()).unwrap_or_else(P::Cost::zero)
}

/// Weight of a minimum spanning tree joining `points`, with Manhattan
/// distance as the edge weight.
pub fn mst_cost<I>(points: I) -> usize
where
    I: IntoIterator<Item = Point>,
{
    let mut outside: Vec<Point> = points.into_iter().collect();
    let mut inside = match outside.pop() {
        Some(point) => vec![point],
        None => return 0,
    };

    let mut total = 0;
    while !outside.is_empty() {
        // Prim's algorithm: add the cheapest edge leaving the tree.
        let closest = iproduct!(inside.iter(), outside.iter().enumerate())
            .map(|(a, (i, b))| (a.manhattan_distance(*b), i))
            .min();

        match closest {
            Some((distance, i)) => {
                total += distance as usize;
                inside.push(outside.swap_remove(i));
            }
            None => break,
        }
    }
    total
}

/// Remembers spanning tree weights for sets of points.
///
/// A search revisits the same set of remaining survivors many times, so
/// the tree is only built once per set. The cache uses interior
/// mutability and is not `Sync`: one search at a time.
#[derive(Debug, Default)]
pub struct HeuristicCache {
    trees: RefCell<HashMap<BTreeSet<Point>, usize>>,
}

impl HeuristicCache {
    pub fn mst_cost(&self, points: &BTreeSet<Point>) -> usize {
        if let Some(cost) = self.trees.borrow().get(points) {
            return *cost;
        }

        let cost = mst_cost(points.iter().copied());
        trace!(points = points.len(), cost, "Spanning tree");
        self.trees.borrow_mut().insert(points.clone(), cost);
        cost
    }

    /// Number of sets remembered.
    pub fn len(&self) -> usize {
        self.trees.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.borrow().is_empty()
    }
}

/// Estimate for visiting every remaining survivor.
///
/// The walker has to reach some survivor first, which is at least as far
/// as the nearest one, and then has to join up all of the rest, which is at
/// least the weight of their spanning tree.
pub fn survivor_heuristic(state: &SurvivorState, problem: &SurvivorProblem) -> usize {
    let nearest = state
        .remaining
        .iter()
        .map(|s| state.position.manhattan_distance(*s) as usize)
        .min();

    match nearest {
        None => 0,
        Some(distance) if state.remaining.len() == 1 => distance,
        Some(distance) => distance + problem.cache().mst_cost(&state.remaining),
    }
}
