#![deny(clippy::all)]

pub mod coord2d;
pub mod grid;
pub mod heuristic;
pub mod problem;

/// Data type used for coordinates
pub type Position = i32;
