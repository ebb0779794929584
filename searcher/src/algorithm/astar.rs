//! A* search
//!
//! Best-first search ordered by `g + h`, where `g` is the cost of the path
//! so far and `h` is a [Heuristic] estimate of the cost still to come.

use std::collections::HashMap;
use std::default::Default;

use tracing::trace;

use super::{check_step_cost, Node, NodeOf, Progress, SearchOptions, SearchStats};
use crate::errors::Result;
use crate::frontier::PriorityQueue;
use crate::traits::{Heuristic, Problem};

/// Cost-ordered graph search with a pluggable heuristic.
///
/// Keeps a table of the cheapest known cost to reach each state. Successors
/// are only pushed when they improve on that table, and entries popped with
/// a cost above the table are stale and skipped, so the priority queue never
/// needs a decrease-key operation.
#[derive(Debug)]
pub struct AStarSearch<'p, P, H>
where
    P: Problem,
{
    problem: &'p P,
    heuristic: H,
    options: SearchOptions,
    name: &'static str,
}

impl<'p, P, H> AStarSearch<'p, P, H>
where
    P: Problem,
    H: Heuristic<P>,
{
    pub(crate) fn new(name: &'static str, problem: &'p P, heuristic: H) -> Self {
        Self {
            problem,
            heuristic,
            options: SearchOptions::default(),
            name,
        }
    }

    /// Replace the options for this search.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Set a step limit for this search algorithm.
    ///
    /// When this many states have been expanded,
    /// the search algorithm will return an error.
    pub fn set_limit(&mut self, limit: usize) {
        self.options.step_limit = Some(limit);
    }

    /// Run the search to completion.
    pub fn run(self) -> Result<Vec<P::Action>> {
        self.run_with_stats().map(|(actions, _)| actions)
    }

    /// Run the search, also reporting how much work it took.
    pub fn run_with_stats(self) -> Result<(Vec<P::Action>, SearchStats)> {
        let problem = self.problem;
        let mut progress = Progress::new(self.name, &self.options);
        let mut frontier: PriorityQueue<NodeOf<P>, P::Cost> = PriorityQueue::new();
        let mut best = HashMap::new();

        let start: NodeOf<P> = Node::root(problem.start_state());
        best.insert(start.state.clone(), start.cost);
        let priority = self.heuristic.estimate(&start.state, problem);
        frontier.push(start, priority);
        progress.pushed(frontier.len());

        while let Some(node) = frontier.pop() {
            if let Some(cost) = best.get(&node.state) {
                if node.cost > *cost {
                    trace!(strategy = self.name, state = ?node.state, "stale");
                    continue;
                }
            }

            if problem.is_goal_state(&node.state) {
                return Ok(progress.finish(node.actions));
            }

            progress.expand(frontier.len(), node.actions.len(), Some(node.cost))?;
            trace!(strategy = self.name, state = ?node.state, cost = ?node.cost, "expanding");

            for successor in problem.successors(&node.state) {
                check_step_cost(&node.state, successor.cost)?;

                let cost = node.cost + successor.cost;
                let improved = best
                    .get(&successor.state)
                    .map(|known| cost < *known)
                    .unwrap_or(true);
                if !improved {
                    continue;
                }

                best.insert(successor.state.clone(), cost);
                let priority = cost + self.heuristic.estimate(&successor.state, problem);
                frontier.push(
                    node.child(successor.state, successor.action, cost),
                    priority,
                );
                progress.pushed(frontier.len());
            }
        }

        Ok(progress.finish(Vec::new()))
    }
}

/// Build an A* searcher.
pub fn build<P, H>(problem: &P, heuristic: H) -> AStarSearch<'_, P, H>
where
    P: Problem,
    H: Heuristic<P>,
{
    AStarSearch::new("astar", problem, heuristic)
}

/// Perform an A* search.
///
/// With an admissible heuristic (one which never overestimates the remaining
/// cost) the returned plan is a cheapest one. An inadmissible heuristic is
/// not detected: the search still terminates and returns a valid plan, but
/// that plan may cost more than the optimum.
///
/// Negative step costs are rejected with
/// [SearchError::NegativeStepCost](crate::SearchError::NegativeStepCost).
pub fn astar_search<P, H>(problem: &P, heuristic: H) -> Result<Vec<P::Action>>
where
    P: Problem,
    H: Heuristic<P>,
{
    build(problem, heuristic).run()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::SearchError;
    use crate::helpers::{brute_force_cost, plan_cost, random_graph, GraphProblem};
    use crate::{null_heuristic, uniform_cost_search, NullHeuristic};

    #[test]
    fn linear() {
        let problem = GraphProblem::linear();
        assert_eq!(astar_search(&problem, null_heuristic).unwrap(), vec!["East"]);
        assert_eq!(astar_search(&problem, NullHeuristic).unwrap(), vec!["East"]);
    }

    #[test]
    fn start_is_goal() {
        let mut problem = GraphProblem::new(0);
        problem.edge(0, 1, 1);
        problem.goal(0);
        problem.goal(1);

        assert!(astar_search(&problem, null_heuristic).unwrap().is_empty());
    }

    #[test]
    fn unreachable_goal_terminates() {
        let mut problem = GraphProblem::new(0);
        problem.edge(0, 1, 2);
        problem.edge(1, 0, 2);
        problem.edge(1, 2, 0);
        problem.edge(2, 1, 0);
        problem.goal(3);

        assert!(astar_search(&problem, null_heuristic).unwrap().is_empty());
    }

    #[test]
    fn heuristic_guides_search() {
        // The route through 1 is dearer, and the heuristic knows it,
        // so 1 is never expanded.
        let mut problem = GraphProblem::new(0);
        problem.edge(0, 1, 1);
        problem.edge(0, 2, 1);
        problem.edge(1, 9, 3);
        problem.edge(2, 9, 1);
        problem.goal(9);

        let h = |state: &u32, _: &GraphProblem| if *state == 1 { 2 } else { 0 };
        let (plan, stats) = build(&problem, h).run_with_stats().unwrap();
        assert_eq!(plan, vec!["0-2", "2-9"]);
        assert_eq!(stats.expanded, 2);

        let (_, stats) = build(&problem, null_heuristic).run_with_stats().unwrap();
        assert_eq!(stats.expanded, 3);
    }

    #[test]
    fn inconsistent_heuristic_stays_optimal() {
        // h(2) is admissible but overshoots h(3) by more than the edge
        // between them, so 3 is expanded once through 1 and again
        // when the cheaper route through 2 turns up.
        let mut problem = GraphProblem::new(0);
        problem.edge(0, 1, 1);
        problem.edge(0, 2, 3);
        problem.edge(1, 3, 5);
        problem.edge(2, 3, 1);
        problem.edge(3, 4, 10);
        problem.goal(4);

        let h = |state: &u32, _: &GraphProblem| if *state == 2 { 10 } else { 0 };
        let (plan, stats) = build(&problem, h).run_with_stats().unwrap();
        assert_eq!(plan, vec!["0-2", "2-3", "3-4"]);
        assert_eq!(plan_cost(&problem, &plan), Some(14));
        assert_eq!(stats.expanded, 5);
    }

    #[test]
    fn negative_step_cost_is_rejected() {
        let mut problem = GraphProblem::new(0);
        problem.edge(0, 1, -1);
        problem.goal(1);

        match astar_search(&problem, null_heuristic) {
            Err(SearchError::NegativeStepCost { .. }) => {}
            other => panic!("Expected negative step cost error, got {:?}", other),
        }
    }

    #[test]
    fn matches_uniform_cost_search() {
        for seed in 0..40 {
            let problem = random_graph(seed, 12, 30);
            let ucs = uniform_cost_search(&problem).unwrap();
            let astar = astar_search(&problem, null_heuristic).unwrap();

            assert_eq!(
                plan_cost(&problem, &ucs),
                plan_cost(&problem, &astar),
                "seed {}",
                seed
            );
        }
    }

    #[test]
    fn optimal_with_admissible_heuristic() {
        for seed in 0..40 {
            let problem = random_graph(seed, 10, 25);

            // The exact remaining cost is the most informed admissible heuristic,
            // and half of it is admissible without being exact.
            let exact = |state: &u32, p: &GraphProblem| p.distance_to_goal(*state).unwrap_or(0);
            let half = |state: &u32, p: &GraphProblem| {
                p.distance_to_goal(*state).map(|d| d / 2).unwrap_or(0)
            };

            let expected = brute_force_cost(&problem);
            for plan in vec![
                astar_search(&problem, exact).unwrap(),
                astar_search(&problem, half).unwrap(),
            ] {
                match expected {
                    Some(cost) => assert_eq!(plan_cost(&problem, &plan), Some(cost), "seed {}", seed),
                    None => assert!(plan.is_empty(), "seed {}", seed),
                }
            }
        }
    }
}
