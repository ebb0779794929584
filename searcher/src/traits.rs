use std::fmt::Debug;
use std::hash::Hash;

use num::{Num, Zero};

/// Numeric type used for step costs, path costs and heuristic estimates.
///
/// Anything numeric works: unsigned integers for grids, signed integers
/// or floats for weighted graphs.
pub trait Cost: Num + Copy + PartialOrd + Debug {}

impl<T> Cost for T where T: Num + Copy + PartialOrd + Debug {}

/// A transition produced by expanding a state.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A, C> {
    pub state: S,
    pub action: A,
    pub cost: C,
}

impl<S, A, C> Successor<S, A, C> {
    pub fn new(state: S, action: A, cost: C) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

impl<S, A, C> From<(S, A, C)> for Successor<S, A, C> {
    fn from(transition: (S, A, C)) -> Self {
        Successor::new(transition.0, transition.1, transition.2)
    }
}

/// Successor type for a given problem.
pub type SuccessorOf<P> =
    Successor<<P as Problem>::State, <P as Problem>::Action, <P as Problem>::Cost>;

/// Describes a state space that the search strategies can explore.
///
/// States are treated as opaque keys: the strategies only hash them,
/// compare them, and hand them back to the problem.
pub trait Problem {
    type State: Debug + Clone + Eq + Hash;
    type Action: Debug + Clone;
    type Cost: Cost;

    /// The state the search begins from.
    fn start_state(&self) -> Self::State;

    /// Whether this state ends the search.
    fn is_goal_state(&self, state: &Self::State) -> bool;

    /// Every transition out of `state`. Step costs must not be negative.
    fn successors(&self, state: &Self::State) -> Vec<SuccessorOf<Self>>;
}

/// An estimate of the remaining cost from a state to the nearest goal.
///
/// Any `Fn(&State, &Problem) -> Cost` is a heuristic, so plain functions
/// and closures can be handed straight to [astar](crate::astar).
pub trait Heuristic<P>
where
    P: Problem + ?Sized,
{
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost;
}

impl<P, F> Heuristic<P> for F
where
    P: Problem + ?Sized,
    F: Fn(&P::State, &P) -> P::Cost,
{
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost {
        self(state, problem)
    }
}

/// Heuristic which always estimates zero.
///
/// A* with this heuristic orders its frontier exactly like uniform
/// cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHeuristic;

impl<P> Heuristic<P> for NullHeuristic
where
    P: Problem + ?Sized,
{
    fn estimate(&self, _state: &P::State, _problem: &P) -> P::Cost {
        P::Cost::zero()
    }
}

/// Function form of [NullHeuristic].
pub fn null_heuristic<P>(_state: &P::State, _problem: &P) -> P::Cost
where
    P: Problem + ?Sized,
{
    P::Cost::zero()
}
