//! Mazes on a 2D coordinate grid.
//!
//! Mazes are written as text, one row per line:
//!
//! ```text
//! %%%%%%%
//! %S..G.%
//! %.%%%.%
//! %....G%
//! %%%%%%%
//! ```
//!
//! `%` or `#` is a wall, `.` or a space is open floor, `S` is the start and
//! `G` marks a goal (a survivor). Blank lines are skipped, and indentation
//! shared by every row is removed; any other space is floor. Every row must
//! be as wide as the first.

use std::collections::{BTreeSet, HashSet};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::coord2d::{Direction, Point};
use crate::Position;

/// A single square of a maze.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Tile {
    Wall,
    Open,
    Start,
    Goal,
}

impl TryFrom<char> for Tile {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '%' | '#' => Ok(Tile::Wall),
            '.' | ' ' => Ok(Tile::Open),
            'S' => Ok(Tile::Start),
            'G' => Ok(Tile::Goal),
            c => Err(c),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Wall => write!(f, "%"),
            Tile::Open => write!(f, "."),
            Tile::Start => write!(f, "S"),
            Tile::Goal => write!(f, "G"),
        }
    }
}

/// Error when parsing a maze from text.
#[derive(Debug, Error)]
pub enum ParseGridError {
    #[error("Unexpected maze character {0:?} at {1}")]
    UnexpectedCharacter(char, Point),

    #[error("Maze has no start (S)")]
    NoStart,

    #[error("Maze has more than one start: {0} and {1}")]
    MultipleStarts(Point, Point),

    #[error("Maze row {row} is {found} squares wide, expected {expected}")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("Maze is empty")]
    Empty,
}

/// A rectangular maze of walls and open floor.
///
/// Anything outside the rectangle counts as a wall.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: Position,
    height: Position,
    walls: HashSet<Point>,
    start: Point,
    goals: BTreeSet<Point>,
}

impl Grid {
    pub fn width(&self) -> Position {
        self.width
    }

    pub fn height(&self) -> Position {
        self.height
    }

    pub fn start(&self) -> Point {
        self.start
    }

    /// Goal squares, in reading order.
    pub fn goals(&self) -> &BTreeSet<Point> {
        &self.goals
    }

    pub fn contains(&self, location: Point) -> bool {
        location.x >= 0 && location.y >= 0 && location.x < self.width && location.y < self.height
    }

    pub fn is_wall(&self, location: Point) -> bool {
        !self.contains(location) || self.walls.contains(&location)
    }

    /// Can a walker step on this location?
    pub fn is_traversable(&self, location: Point) -> bool {
        !self.is_wall(location)
    }

    /// Open neighbours of a location, in [Direction::all] order.
    pub fn neighbors(&self, location: Point) -> impl Iterator<Item = (Direction, Point)> + '_ {
        Direction::all()
            .map(move |d| (d, location.step(d)))
            .filter(move |(_, p)| self.is_traversable(*p))
    }

    pub fn get(&self, location: Point) -> Tile {
        if self.is_wall(location) {
            Tile::Wall
        } else if location == self.start {
            Tile::Start
        } else if self.goals.contains(&location) {
            Tile::Goal
        } else {
            Tile::Open
        }
    }

    /// Render the maze with a plan drawn on it.
    ///
    /// Squares the plan passes through are marked `o`. Steps into walls are
    /// drawn anyway, so a bad plan is easy to spot.
    pub fn trace(&self, plan: &[Direction]) -> String {
        let mut visited = HashSet::new();
        let mut here = self.start;
        for direction in plan {
            here = here.step(*direction);
            visited.insert(here);
        }

        let mut out = String::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let point = Point::new(x, y);
                match self.get(point) {
                    Tile::Open if visited.contains(&point) => out.push('o'),
                    tile => out.push_str(&tile.to_string()),
                }
            }
            out.push('\n');
        }
        out
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut walls = HashSet::new();
        let mut goals = BTreeSet::new();
        let mut start: Option<Point> = None;
        let mut width = 0;
        let mut height = 0;

        let lines: Vec<&str> = s
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.trim().is_empty())
            .collect();
        let indent = lines
            .iter()
            .map(|l| l.chars().take_while(|c| c.is_whitespace()).count())
            .min()
            .unwrap_or(0);

        for (y, line) in lines.iter().enumerate() {
            let row: Vec<char> = line.chars().skip(indent).collect();
            if y > 0 && row.len() as Position != width {
                return Err(ParseGridError::Ragged {
                    row: y,
                    found: row.len(),
                    expected: width as usize,
                });
            }

            for (x, c) in row.into_iter().enumerate() {
                let point: Point = (x, y).into();
                match Tile::try_from(c) {
                    Ok(Tile::Wall) => {
                        walls.insert(point);
                    }
                    Ok(Tile::Open) => {}
                    Ok(Tile::Goal) => {
                        goals.insert(point);
                    }
                    Ok(Tile::Start) => {
                        if let Some(existing) = start {
                            return Err(ParseGridError::MultipleStarts(existing, point));
                        }
                        start = Some(point);
                    }
                    Err(c) => return Err(ParseGridError::UnexpectedCharacter(c, point)),
                }
                width = width.max(x as Position + 1);
            }
            height = y as Position + 1;
        }

        if width == 0 || height == 0 {
            return Err(ParseGridError::Empty);
        }

        Ok(Grid {
            width,
            height,
            walls,
            start: start.ok_or(ParseGridError::NoStart)?,
            goals,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                write!(f, "{}", self.get(Point::new(x, y)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
