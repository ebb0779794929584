#![deny(clippy::all)]

//! Command line driver: read a maze, pick a strategy and a heuristic, and
//! report the plan the search finds.

use clap::{value_t, App, Arg, ArgMatches};

use lazy_static::lazy_static;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use std::time;

use searcher::SearchOptions;

pub mod solve;

pub use solve::{solve, Report, Strategy};

type Error = anyhow::Error;

lazy_static! {
    static ref STRATEGIES: BTreeMap<&'static str, Strategy> = {
        let mut s = BTreeMap::new();
        s.insert("dfs", Strategy::DepthFirst);
        s.insert("depthFirstSearch", Strategy::DepthFirst);
        s.insert("bfs", Strategy::BreadthFirst);
        s.insert("breadthFirstSearch", Strategy::BreadthFirst);
        s.insert("ucs", Strategy::UniformCost);
        s.insert("uniformCostSearch", Strategy::UniformCost);
        s.insert("astar", Strategy::AStar);
        s.insert("aStarSearch", Strategy::AStar);
        s
    };
}

/// Look up a strategy by its short or long name.
pub fn strategy(name: &str) -> Result<Strategy, SolverError> {
    STRATEGIES
        .get(name)
        .copied()
        .ok_or_else(|| SolverError::UnknownStrategy(name.to_string(), known(STRATEGIES.keys())))
}

fn known<'a, I: Iterator<Item = &'a &'static str>>(names: I) -> String {
    names.copied().collect::<Vec<_>>().join(", ")
}

/// Which heuristic A* should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicKind {
    Null,
    Manhattan,
    Euclidean,
    Survivor,
}

const HEURISTICS: [&str; 4] = ["null", "manhattan", "euclidean", "survivor"];

impl FromStr for HeuristicKind {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" | "nullHeuristic" => Ok(HeuristicKind::Null),
            "manhattan" | "manhattanHeuristic" => Ok(HeuristicKind::Manhattan),
            "euclidean" | "euclideanHeuristic" => Ok(HeuristicKind::Euclidean),
            "survivor" | "survivorHeuristic" => Ok(HeuristicKind::Survivor),
            other => Err(SolverError::UnknownHeuristic(
                other.to_string(),
                known(HEURISTICS.iter()),
            )),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            HeuristicKind::Null => "null",
            HeuristicKind::Manhattan => "manhattan",
            HeuristicKind::Euclidean => "euclidean",
            HeuristicKind::Survivor => "survivor",
        };
        write!(f, "{}", name)
    }
}

/// Which problem to pose on the maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemKind {
    /// Walk to the single goal square.
    Position,

    /// Visit every goal square.
    Survivor,
}

const PROBLEMS: [&str; 2] = ["position", "survivor"];

impl FromStr for ProblemKind {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "position" => Ok(ProblemKind::Position),
            "survivor" => Ok(ProblemKind::Survivor),
            other => Err(SolverError::UnknownProblem(
                other.to_string(),
                known(PROBLEMS.iter()),
            )),
        }
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProblemKind::Position => write!(f, "position"),
            ProblemKind::Survivor => write!(f, "survivor"),
        }
    }
}

/// Everything the command line decides about a search.
#[derive(Debug, Clone)]
pub struct Config {
    pub strategy: Strategy,
    pub heuristic: HeuristicKind,
    pub problem: ProblemKind,
    pub options: SearchOptions,
}

impl Config {
    pub fn new(strategy: Strategy, problem: ProblemKind) -> Self {
        Self {
            strategy,
            heuristic: HeuristicKind::Null,
            problem,
            options: SearchOptions::default(),
        }
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        let strategy = strategy(matches.value_of("strategy").unwrap_or_default())?;
        let problem: ProblemKind = matches.value_of("problem").unwrap_or("position").parse()?;
        let heuristic: HeuristicKind = matches.value_of("heuristic").unwrap_or("null").parse()?;

        let mut options = SearchOptions::default();
        if matches.is_present("limit") {
            options.step_limit = Some(value_t!(matches, "limit", usize)?);
        }
        if matches.is_present("time-limit") {
            let seconds = value_t!(matches, "time-limit", f64)?;
            let limit = time::Duration::try_from_secs_f64(seconds)
                .map_err(|_| SolverError::InvalidTimeLimit(seconds))?;
            options.time_limit = Some(limit);
        }
        if matches.occurrences_of("verbose") > 0 {
            options.verbose = Some(1000);
        }

        Ok(Self {
            strategy,
            heuristic,
            problem,
            options,
        })
    }
}

fn app() -> App<'static, 'static> {
    App::new("Survivor search")
        .version("1.0")
        .author("Alex Rudy <opensource@alexrudy.net>")
        .about("Find paths through mazes with classic search strategies")
        .arg(
            Arg::with_name("strategy")
                .value_name("STRATEGY")
                .help("dfs, bfs, ucs or astar")
                .required(true)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("input")
                .value_name("INPUT")
                .help("Maze file, or - for stdin")
                .required(false)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("heuristic")
                .long("heuristic")
                .value_name("NAME")
                .help("Heuristic for astar: null, manhattan, euclidean or survivor")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("problem")
                .long("problem")
                .short("p")
                .value_name("PROBLEM")
                .help("position or survivor")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("limit")
                .long("limit")
                .value_name("N")
                .help("Give up after expanding N states")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("time-limit")
                .long("time-limit")
                .value_name("SECONDS")
                .help("Give up after this much time")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log search progress, repeat for more"),
        )
}

pub fn solver() -> Result<(), Error> {
    let matches = app().get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let config = Config::from_matches(&matches)?;
    println!("{} on the {} problem", config.strategy, config.problem);

    let reader = get_input_reader(config.problem, matches.value_of("input"))?;
    let report = solve(&config, reader)?;
    println!("{}", report);

    Ok(())
}

fn init_logging(verbosity: u64) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

type IOResult<T> = std::io::Result<T>;
type BoxedRead = Box<dyn ::std::io::Read + 'static>;

pub fn get_input_reader(problem: ProblemKind, filename: Option<&str>) -> Result<BoxedRead, Error> {
    let reader: Box<dyn ::std::io::Read + 'static> = match filename {
        Some("-") => Box::new(::std::io::stdin()),
        Some(path) => {
            let f: File =
                File::open(path).map_err(|e| SolverError::InputNotFound(PathBuf::from(path), e))?;
            Box::new(f)
        }
        None => get_default_input(problem)
            .map_err(|e| SolverError::DefaultInputNotFound(default_input_path(problem), e))?,
    };
    Ok(reader)
}

fn default_input_path(problem: ProblemKind) -> PathBuf {
    let mut p = PathBuf::from("layouts");
    p.push(format!("{}.txt", problem));
    p
}

pub fn get_default_input(problem: ProblemKind) -> IOResult<BoxedRead> {
    let f = File::open(default_input_path(problem))?;

    Ok(Box::new(f))
}

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Unknown search strategy {0:?} (known: {1})")]
    UnknownStrategy(String, String),

    #[error("Unknown heuristic {0:?} (known: {1})")]
    UnknownHeuristic(String, String),

    #[error("Unknown problem {0:?} (known: {1})")]
    UnknownProblem(String, String),

    #[error("The {0} heuristic does not apply to the {1} problem")]
    HeuristicMismatch(HeuristicKind, ProblemKind),

    #[error("Input not found: {}", .0.display())]
    DefaultInputNotFound(PathBuf, #[source] io::Error),

    #[error("Input not found: {}", .0.display())]
    InputNotFound(PathBuf, #[source] io::Error),

    #[error("Time limit must be a non-negative number of seconds, not {0}")]
    InvalidTimeLimit(f64),
}
