//! Provides the building blocks for search algorithms

use std::collections::HashSet;
use std::default::Default;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::time;

use num::Zero;
use tracing::{debug, trace};

use crate::errors::{Result, SearchError};
use crate::frontier::SearchQueue;
use crate::traits::{Cost, Problem};

pub(crate) mod astar;
pub(crate) mod basic;
pub(crate) mod dijkstra;

/// Knobs shared by every search algorithm.
///
/// The defaults leave the search unbounded and quiet.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Give up with [SearchError::StepLimitExhausted] after this many expansions.
    pub step_limit: Option<usize>,

    /// Give up with [SearchError::TimeLimitExhausted] once this much time has passed.
    pub time_limit: Option<time::Duration>,

    /// Emit a progress event every this many expansions.
    pub verbose: Option<usize>,
}

/// Counters describing how much work a search did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States whose successors were generated.
    pub expanded: usize,

    /// Entries pushed onto the frontier, including the start.
    pub pushed: usize,

    /// Largest frontier observed.
    pub max_frontier: usize,
}

/// A frontier entry: a state and the plan which reached it.
#[derive(Debug, Clone)]
pub struct Node<S, A, C> {
    pub(crate) state: S,
    pub(crate) actions: Vec<A>,
    pub(crate) cost: C,
}

/// Frontier entry type for a given problem.
pub type NodeOf<P> =
    Node<<P as Problem>::State, <P as Problem>::Action, <P as Problem>::Cost>;

impl<S, A, C> Node<S, A, C>
where
    A: Clone,
    C: Cost,
{
    pub(crate) fn root(state: S) -> Self {
        Self {
            state,
            actions: Vec::new(),
            cost: C::zero(),
        }
    }

    pub(crate) fn child(&self, state: S, action: A, cost: C) -> Self {
        let mut actions = Vec::with_capacity(self.actions.len() + 1);
        actions.extend(self.actions.iter().cloned());
        actions.push(action);
        Self {
            state,
            actions,
            cost,
        }
    }
}

/// Tracks limits and counters while a search runs.
#[derive(Debug)]
pub(crate) struct Progress {
    name: &'static str,
    options: SearchOptions,
    started: time::Instant,
    stats: SearchStats,
}

impl Progress {
    pub(crate) fn new(name: &'static str, options: &SearchOptions) -> Self {
        Self {
            name,
            options: options.clone(),
            started: time::Instant::now(),
            stats: SearchStats::default(),
        }
    }

    pub(crate) fn pushed(&mut self, frontier: usize) {
        self.stats.pushed += 1;
        if frontier > self.stats.max_frontier {
            self.stats.max_frontier = frontier;
        }
    }

    /// Record an expansion, failing if a limit has been reached.
    ///
    /// `cost` is the path cost of the expanded node, for searches which
    /// track one.
    pub(crate) fn expand<C: Debug>(
        &mut self,
        frontier: usize,
        depth: usize,
        cost: Option<C>,
    ) -> Result<()> {
        if let Some(limit) = self.options.step_limit {
            if self.stats.expanded >= limit {
                return Err(SearchError::StepLimitExhausted(self.stats.expanded));
            }
        }

        if let Some(limit) = self.options.time_limit {
            let elapsed = self.started.elapsed();
            if elapsed > limit {
                return Err(SearchError::TimeLimitExhausted(elapsed));
            }
        }

        self.stats.expanded += 1;

        if let Some(every) = self.options.verbose {
            if every > 0 && self.stats.expanded % every == 0 {
                debug!(
                    strategy = self.name,
                    expanded = self.stats.expanded,
                    frontier,
                    depth,
                    cost = ?cost,
                    "searching"
                );
            }
        }
        Ok(())
    }

    pub(crate) fn finish<A>(self, actions: Vec<A>) -> (Vec<A>, SearchStats) {
        debug!(
            strategy = self.name,
            expanded = self.stats.expanded,
            pushed = self.stats.pushed,
            max_frontier = self.stats.max_frontier,
            length = actions.len(),
            elapsed = ?self.started.elapsed(),
            "search finished"
        );
        (actions, self.stats)
    }
}

/// Uninformed graph search, generic over the frontier discipline.
///
/// Each state is expanded at most once. A state is marked as visited when
/// it is popped, not when it is pushed, so the same state may sit in the
/// frontier more than once; the first copy popped wins.
#[derive(Debug)]
pub struct Traversal<'p, P, Q> {
    problem: &'p P,
    options: SearchOptions,
    name: &'static str,
    queue: PhantomData<Q>,
}

impl<'p, P, Q> Traversal<'p, P, Q>
where
    P: Problem,
    Q: SearchQueue<Item = NodeOf<P>> + Default,
{
    pub(crate) fn new(name: &'static str, problem: &'p P) -> Self {
        Self {
            problem,
            options: SearchOptions::default(),
            name,
            queue: PhantomData,
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
        let mut progress = Progress::new(self.name, &self.options);
        let mut visited = HashSet::new();
        let mut queue = Q::default();

        queue.push(Node::root(self.problem.start_state()));
        progress.pushed(queue.len());

        while let Some(node) = queue.pop() {
            if !visited.insert(node.state.clone()) {
                continue;
            }

            if self.problem.is_goal_state(&node.state) {
                return Ok(progress.finish(node.actions));
            }

            progress.expand::<P::Cost>(queue.len(), node.actions.len(), None)?;
            trace!(strategy = self.name, state = ?node.state, "expanding");

            for successor in self.problem.successors(&node.state) {
                if visited.contains(&successor.state) {
                    continue;
                }
                // Step costs are ignored here, so nothing is summed.
                queue.push(node.child(successor.state, successor.action, P::Cost::zero()));
                progress.pushed(queue.len());
            }
        }

        Ok(progress.finish(Vec::new()))
    }
}

/// Debug-format a value for error messages.
pub(crate) fn describe<T: Debug>(value: &T) -> String {
    format!("{:?}", value)
}

/// Is this step cost allowed by the cost-ordered searches?
pub(crate) fn check_step_cost<S: Debug, C: Cost>(state: &S, cost: C) -> Result<()> {
    if cost < C::zero() {
        return Err(SearchError::NegativeStepCost {
            state: describe(state),
            cost: describe(&cost),
        });
    }
    Ok(())
}
