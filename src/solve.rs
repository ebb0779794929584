//! Run a configured search against a maze.

use std::fmt;
use std::io::Read;
use std::time;

use anyhow::Error;
use tracing::{info, warn};

use geometry::coord2d::Direction;
use geometry::grid::Grid;
use geometry::heuristic::{euclidean_heuristic, manhattan_heuristic, survivor_heuristic};
use geometry::problem::{PositionProblem, SurvivorProblem};
use searcher::{Heuristic, NullHeuristic, Problem, SearchOptions, SearchResult, SearchStats};

use crate::{Config, HeuristicKind, ProblemKind, SolverError};

/// The search strategies the driver knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    AStar,
}

impl Strategy {
    /// Search `problem`. Only [Strategy::AStar] consults the heuristic.
    pub fn run<P, H>(
        self,
        problem: &P,
        heuristic: H,
        options: SearchOptions,
    ) -> SearchResult<(Vec<P::Action>, SearchStats)>
    where
        P: Problem,
        H: Heuristic<P>,
    {
        match self {
            Strategy::DepthFirst => searcher::build::dfs(problem)
                .with_options(options)
                .run_with_stats(),
            Strategy::BreadthFirst => searcher::build::bfs(problem)
                .with_options(options)
                .run_with_stats(),
            Strategy::UniformCost => searcher::build::ucs(problem)
                .with_options(options)
                .run_with_stats(),
            Strategy::AStar => searcher::build::astar(problem, heuristic)
                .with_options(options)
                .run_with_stats(),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Strategy::DepthFirst => "depthFirstSearch",
            Strategy::BreadthFirst => "breadthFirstSearch",
            Strategy::UniformCost => "uniformCostSearch",
            Strategy::AStar => "aStarSearch",
        };
        write!(f, "{}", name)
    }
}

/// What a search found, and how long it took.
#[derive(Debug, Clone)]
pub struct Report {
    pub plan: Vec<Direction>,

    /// Cost of the plan, or `None` when no goal could be reached.
    pub cost: Option<usize>,
    pub stats: SearchStats,
    pub elapsed: time::Duration,
    pub trace: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.cost {
            Some(cost) => {
                let steps: Vec<String> = self.plan.iter().map(|d| d.to_string()).collect();
                writeln!(f, "Path: [{}]", steps.join(", "))?;
                writeln!(f, "  Cost: {}", cost)?;
            }
            None => writeln!(f, "No path found")?,
        }
        writeln!(f, "  Expanded: {}", self.stats.expanded)?;
        writeln!(f, "  Time: {:.3}s", self.elapsed.as_secs_f64())?;
        write!(f, "{}", self.trace)
    }
}

/// Read a maze and run the configured search on it.
pub fn solve(config: &Config, mut input: Box<dyn Read + 'static>) -> Result<Report, Error> {
    let grid: Grid = {
        let mut buf = String::new();
        input.read_to_string(&mut buf)?;
        buf.parse()?
    };

    if config.strategy != Strategy::AStar && config.heuristic != HeuristicKind::Null {
        warn!(strategy = %config.strategy, heuristic = %config.heuristic, "Heuristic is ignored");
    }

    let start = time::Instant::now();
    let (plan, cost, stats) = match config.problem {
        ProblemKind::Position => solve_position(&grid, config)?,
        ProblemKind::Survivor => solve_survivor(&grid, config)?,
    };
    let elapsed = start.elapsed();

    info!(expanded = stats.expanded, ?cost, "Search finished");
    Ok(Report {
        trace: grid.trace(&plan),
        plan,
        cost,
        stats,
        elapsed,
    })
}

type Solution = (Vec<Direction>, Option<usize>, SearchStats);

fn solve_position(grid: &Grid, config: &Config) -> Result<Solution, Error> {
    let problem = PositionProblem::from_grid(grid)?;
    let options = config.options.clone();

    let (plan, stats) = match config.heuristic {
        HeuristicKind::Null => config.strategy.run(&problem, NullHeuristic, options)?,
        HeuristicKind::Manhattan => {
            config
                .strategy
                .run(&problem, manhattan_heuristic::<PositionProblem>, options)?
        }
        HeuristicKind::Euclidean => {
            config
                .strategy
                .run(&problem, euclidean_heuristic::<PositionProblem>, options)?
        }
        HeuristicKind::Survivor => {
            return Err(SolverError::HeuristicMismatch(config.heuristic, config.problem).into())
        }
    };

    let cost = if solved(&problem, &plan) {
        problem.cost_of_actions(&plan)
    } else {
        None
    };
    Ok((plan, cost, stats))
}

fn solve_survivor(grid: &Grid, config: &Config) -> Result<Solution, Error> {
    let problem = SurvivorProblem::from_grid(grid)?;
    let options = config.options.clone();

    let (plan, stats) = match config.heuristic {
        HeuristicKind::Null => config.strategy.run(&problem, NullHeuristic, options)?,
        HeuristicKind::Survivor => config.strategy.run(&problem, survivor_heuristic, options)?,
        HeuristicKind::Manhattan | HeuristicKind::Euclidean => {
            return Err(SolverError::HeuristicMismatch(config.heuristic, config.problem).into())
        }
    };

    let cost = if solved(&problem, &plan) {
        problem.cost_of_actions(&plan)
    } else {
        None
    };
    Ok((plan, cost, stats))
}

/// An empty plan is a solution only when the start is already a goal.
fn solved<P: Problem>(problem: &P, plan: &[P::Action]) -> bool {
    !plan.is_empty() || problem.is_goal_state(&problem.start_state())
}
