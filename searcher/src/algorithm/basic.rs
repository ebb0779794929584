pub use bfs::{breadth_first_search, BreadthFirstSearch};
pub use dfs::{depth_first_search, DepthFirstSearch};

mod bfs {
    use crate::algorithm::{NodeOf, Traversal};
    use crate::errors::Result;
    use crate::frontier::Queue;
    use crate::Problem;

    pub type BreadthFirstSearch<'p, P> = Traversal<'p, P, Queue<NodeOf<P>>>;

    pub fn build<P>(problem: &P) -> BreadthFirstSearch<'_, P>
    where
        P: Problem,
    {
        Traversal::new("bfs", problem)
    }

    /// Breadth-first search, where ties are broken by the order
    /// of the transitions returned by [Problem::successors].
    ///
    /// Returns the fewest-actions plan when every step costs the same,
    /// and an empty plan when no goal is reachable.
    pub fn breadth_first_search<P>(problem: &P) -> Result<Vec<P::Action>>
    where
        P: Problem,
    {
        build(problem).run()
    }
}

mod dfs {
    use crate::algorithm::{NodeOf, Traversal};
    use crate::errors::Result;
    use crate::frontier::Stack;
    use crate::Problem;

    pub type DepthFirstSearch<'p, P> = Traversal<'p, P, Stack<NodeOf<P>>>;

    pub fn build<P>(problem: &P) -> DepthFirstSearch<'_, P>
    where
        P: Problem,
    {
        Traversal::new("dfs", problem)
    }

    /// Depth-first search, where the order is determined
    /// by the transitions returned by [Problem::successors].
    ///
    /// Returns the first plan found, with no guarantee on its cost,
    /// or an empty plan when no goal is reachable.
    pub fn depth_first_search<P>(problem: &P) -> Result<Vec<P::Action>>
    where
        P: Problem,
    {
        build(problem).run()
    }
}

pub mod breadth {
    pub use super::bfs::build;
}

pub mod depth {
    pub use super::dfs::build;
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::SearchError;
    use crate::helpers::{plan_cost, GraphProblem};
    use crate::{Problem, SearchOptions};

    #[test]
    fn linear() {
        let problem = GraphProblem::linear();
        assert_eq!(depth_first_search(&problem).unwrap(), vec!["East"]);
        assert_eq!(breadth_first_search(&problem).unwrap(), vec!["East"]);
    }

    #[test]
    fn start_is_goal() {
        let mut problem = GraphProblem::new(0);
        problem.edge(0, 1, 1);
        problem.goal(0);

        assert!(depth_first_search(&problem).unwrap().is_empty());
        assert!(breadth_first_search(&problem).unwrap().is_empty());
    }

    #[test]
    fn unreachable_goal_terminates() {
        let mut problem = GraphProblem::new(0);
        problem.edge(0, 1, 1);
        problem.edge(1, 2, 1);
        problem.edge(2, 0, 1);
        problem.edge(1, 0, 1);
        problem.goal(7);

        assert!(depth_first_search(&problem).unwrap().is_empty());
        assert!(breadth_first_search(&problem).unwrap().is_empty());
    }

    fn diamond() -> GraphProblem {
        // 0 -> 1 -> 2 -> 3 (goal), and a shortcut 0 -> 3 pushed last.
        let mut problem = GraphProblem::new(0);
        problem.edge(0, 1, 1);
        problem.edge(1, 2, 1);
        problem.edge(2, 3, 1);
        problem.edge(0, 3, 5);
        problem.goal(3);
        problem
    }

    #[test]
    fn dfs_follows_most_recent_push() {
        let problem = diamond();
        let plan = depth_first_search(&problem).unwrap();
        assert_eq!(plan, vec!["0-3"]);
    }

    #[test]
    fn bfs_finds_fewest_actions() {
        let problem = diamond();
        let plan = breadth_first_search(&problem).unwrap();
        assert_eq!(plan, vec!["0-3"]);
        assert_eq!(plan_cost(&problem, &plan), Some(5));
    }

    #[test]
    fn dfs_goes_deep_first() {
        let mut problem = GraphProblem::new(0);
        problem.edge(0, 1, 1);
        problem.edge(0, 2, 1);
        problem.edge(2, 3, 1);
        problem.edge(1, 3, 1);
        problem.goal(3);

        // The stack pops 0-2 first, since it was pushed last.
        assert_eq!(depth_first_search(&problem).unwrap(), vec!["0-2", "2-3"]);
        assert_eq!(breadth_first_search(&problem).unwrap(), vec!["0-1", "1-3"]);
    }

    #[test]
    fn bfs_expands_each_state_once() {
        let mut problem = GraphProblem::new(0);
        problem.edge(0, 1, 1);
        problem.edge(0, 2, 1);
        problem.edge(1, 3, 1);
        problem.edge(2, 3, 1);
        problem.edge(3, 4, 1);
        problem.goal(4);

        let (plan, stats) = breadth::build(&problem).run_with_stats().unwrap();
        assert_eq!(plan, vec!["0-1", "1-3", "3-4"]);
        // 3 is enqueued twice but expanded once.
        assert_eq!(stats.expanded, 4);
        assert_eq!(stats.pushed, 6);
    }

    /// A chain of states joined by expensive steps in a narrow cost type.
    struct NarrowLine(usize);

    impl Problem for NarrowLine {
        type State = usize;
        type Action = usize;
        type Cost = u8;

        fn start_state(&self) -> usize {
            0
        }

        fn is_goal_state(&self, state: &usize) -> bool {
            *state == self.0
        }

        fn successors(&self, state: &usize) -> Vec<crate::SuccessorOf<Self>> {
            if *state < self.0 {
                vec![(state + 1, state + 1, 200).into()]
            } else {
                Vec::new()
            }
        }
    }

    #[test]
    fn step_costs_are_not_summed() {
        let problem = NarrowLine(3);
        let mut options = SearchOptions::default();
        options.verbose = Some(1);

        let plan = breadth::build(&problem)
            .with_options(options.clone())
            .run()
            .unwrap();
        assert_eq!(plan, vec![1, 2, 3]);

        let plan = depth::build(&problem).with_options(options).run().unwrap();
        assert_eq!(plan, vec![1, 2, 3]);
    }

    #[test]
    fn step_limit() {
        let mut problem = GraphProblem::new(0);
        for n in 0..10 {
            problem.edge(n, n + 1, 1);
        }
        problem.goal(10);

        let mut options = SearchOptions::default();
        options.step_limit = Some(3);

        match depth::build(&problem).with_options(options).run() {
            Err(SearchError::StepLimitExhausted(3)) => {}
            other => panic!("Expected step limit, got {:?}", other),
        }

        let mut search = breadth::build(&problem);
        search.set_limit(20);
        assert_eq!(search.run().unwrap().len(), 10);
    }
}
