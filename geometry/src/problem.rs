//! Search problems on a maze.
//!
//! Both problems count how many states they expand, so callers can compare
//! how hard different strategies and heuristics had to work.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;

use thiserror::Error;

use searcher::{Problem, Successor, SuccessorOf};

use crate::coord2d::{Direction, Point};
use crate::grid::Grid;
use crate::heuristic::{HeuristicCache, SingleGoal};

/// Error when a maze doesn't fit the problem built from it.
#[derive(Debug, Error)]
pub enum ProblemError {
    #[error("Expected exactly one goal in the maze, found {0}")]
    GoalCount(usize),

    #[error("Position {0} is a wall")]
    Blocked(Point),
}

/// Step cost for entering a square.
pub type CostFn = fn(Point) -> usize;

fn unit_cost(_: Point) -> usize {
    1
}

/// Walk from the start to a single goal square.
#[derive(Debug)]
pub struct PositionProblem<'g> {
    grid: &'g Grid,
    start: Point,
    goal: Point,
    cost: CostFn,
    expanded: Cell<usize>,
    expansion_order: RefCell<Vec<Point>>,
}

impl<'g> PositionProblem<'g> {
    pub fn new(grid: &'g Grid, start: Point, goal: Point) -> Result<Self, ProblemError> {
        for point in &[start, goal] {
            if grid.is_wall(*point) {
                return Err(ProblemError::Blocked(*point));
            }
        }

        Ok(Self {
            grid,
            start,
            goal,
            cost: unit_cost,
            expanded: Cell::new(0),
            expansion_order: RefCell::new(Vec::new()),
        })
    }

    /// Build the problem from a maze which marks exactly one goal.
    pub fn from_grid(grid: &'g Grid) -> Result<Self, ProblemError> {
        let mut goals = grid.goals().iter();
        match (goals.next(), goals.next()) {
            (Some(goal), None) => Self::new(grid, grid.start(), *goal),
            _ => Err(ProblemError::GoalCount(grid.goals().len())),
        }
    }

    /// Charge `cost(square)` for every step onto a square, instead of 1.
    pub fn with_cost(mut self, cost: CostFn) -> Self {
        self.cost = cost;
        self
    }

    /// Number of states expanded so far.
    pub fn expanded(&self) -> usize {
        self.expanded.get()
    }

    /// States in the order they were expanded.
    pub fn expansion_order(&self) -> Vec<Point> {
        self.expansion_order.borrow().clone()
    }

    /// Total cost of following a plan from the start, or `None` if the
    /// plan walks into a wall.
    pub fn cost_of_actions(&self, actions: &[Direction]) -> Option<usize> {
        let mut here = self.start;
        let mut total = 0;
        for direction in actions {
            here = here.step(*direction);
            if self.grid.is_wall(here) {
                return None;
            }
            total += (self.cost)(here);
        }
        Some(total)
    }
}

impl<'g> Problem for PositionProblem<'g> {
    type State = Point;
    type Action = Direction;
    type Cost = usize;

    fn start_state(&self) -> Point {
        self.start
    }

    fn is_goal_state(&self, state: &Point) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Point) -> Vec<SuccessorOf<Self>> {
        self.expanded.set(self.expanded.get() + 1);
        self.expansion_order.borrow_mut().push(*state);

        self.grid
            .neighbors(*state)
            .map(|(direction, next)| Successor::new(next, direction, (self.cost)(next)))
            .collect()
    }
}

impl<'g> SingleGoal for PositionProblem<'g> {
    fn goal(&self) -> Point {
        self.goal
    }
}

/// Where the walker is, and which survivors still need a visit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SurvivorState {
    pub position: Point,
    pub remaining: BTreeSet<Point>,
}

impl SurvivorState {
    pub fn new(position: Point, remaining: BTreeSet<Point>) -> Self {
        let mut state = Self {
            position,
            remaining,
        };
        state.remaining.remove(&position);
        state
    }

    /// The state after stepping onto `position`, rescuing anyone there.
    fn moved(&self, position: Point) -> Self {
        let mut remaining = self.remaining.clone();
        remaining.remove(&position);
        Self {
            position,
            remaining,
        }
    }
}

/// Visit every survivor in the maze, by the shortest route.
///
/// The problem owns a [HeuristicCache] for the heuristics that run against
/// it. The cache is not shared, so a problem instance belongs to one search
/// at a time.
#[derive(Debug)]
pub struct SurvivorProblem<'g> {
    grid: &'g Grid,
    start: SurvivorState,
    expanded: Cell<usize>,
    cache: HeuristicCache,
}

impl<'g> SurvivorProblem<'g> {
    pub fn new<I>(grid: &'g Grid, start: Point, survivors: I) -> Result<Self, ProblemError>
    where
        I: IntoIterator<Item = Point>,
    {
        let survivors: BTreeSet<Point> = survivors.into_iter().collect();
        if let Some(blocked) = std::iter::once(&start)
            .chain(survivors.iter())
            .find(|p| grid.is_wall(**p))
        {
            return Err(ProblemError::Blocked(*blocked));
        }

        Ok(Self {
            grid,
            start: SurvivorState::new(start, survivors),
            expanded: Cell::new(0),
            cache: HeuristicCache::default(),
        })
    }

    /// Build the problem from the start and goal squares marked in the maze.
    pub fn from_grid(grid: &'g Grid) -> Result<Self, ProblemError> {
        Self::new(grid, grid.start(), grid.goals().iter().copied())
    }

    pub fn grid(&self) -> &Grid {
        self.grid
    }

    /// Scratch space for heuristics, scoped to this problem.
    pub fn cache(&self) -> &HeuristicCache {
        &self.cache
    }

    /// Number of states expanded so far.
    pub fn expanded(&self) -> usize {
        self.expanded.get()
    }

    /// Total cost of following a plan from the start, or `None` if the plan
    /// walks into a wall or leaves someone behind.
    pub fn cost_of_actions(&self, actions: &[Direction]) -> Option<usize> {
        let mut state = self.start.clone();
        for direction in actions {
            let next = state.position.step(*direction);
            if self.grid.is_wall(next) {
                return None;
            }
            state = state.moved(next);
        }

        if state.remaining.is_empty() {
            Some(actions.len())
        } else {
            None
        }
    }
}

impl<'g> Problem for SurvivorProblem<'g> {
    type State = SurvivorState;
    type Action = Direction;
    type Cost = usize;

    fn start_state(&self) -> SurvivorState {
        self.start.clone()
    }

    fn is_goal_state(&self, state: &SurvivorState) -> bool {
        state.remaining.is_empty()
    }

    fn successors(&self, state: &SurvivorState) -> Vec<SuccessorOf<Self>> {
        self.expanded.set(self.expanded.get() + 1);

        self.grid
            .neighbors(state.position)
            .map(|(direction, next)| Successor::new(state.moved(next), direction, 1))
            .collect()
    }
}
