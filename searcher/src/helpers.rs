//! Small problems shared by the tests in this crate.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::traits::{Problem, Successor, SuccessorOf};

/// A directed graph with labelled, weighted edges.
///
/// Successors come back in the order the edges were added.
#[derive(Debug, Default, Clone)]
pub(crate) struct GraphProblem {
    start: u32,
    goals: HashSet<u32>,
    edges: HashMap<u32, Vec<(u32, String, i64)>>,
}

impl GraphProblem {
    pub(crate) fn new(start: u32) -> Self {
        Self {
            start,
            ..Self::default()
        }
    }

    /// start -East-> goal, at cost 1.
    pub(crate) fn linear() -> Self {
        let mut problem = Self::new(0);
        problem.labeled_edge(0, 1, 1, "East");
        problem.goal(1);
        problem
    }

    /// Add an edge labelled `"{from}-{to}"`.
    pub(crate) fn edge(&mut self, from: u32, to: u32, cost: i64) {
        self.labeled_edge(from, to, cost, &format!("{}-{}", from, to));
    }

    pub(crate) fn labeled_edge(&mut self, from: u32, to: u32, cost: i64, label: &str) {
        self.edges
            .entry(from)
            .or_insert_with(Vec::new)
            .push((to, label.to_string(), cost));
    }

    pub(crate) fn goal(&mut self, node: u32) {
        self.goals.insert(node);
    }

    fn nodes(&self) -> BTreeSet<u32> {
        let mut nodes: BTreeSet<u32> = self.goals.iter().copied().collect();
        nodes.insert(self.start);
        for (from, edges) in self.edges.iter() {
            nodes.insert(*from);
            nodes.extend(edges.iter().map(|e| e.0));
        }
        nodes
    }

    fn all_edges(&self) -> impl Iterator<Item = (u32, u32, i64)> + '_ {
        self.edges
            .iter()
            .flat_map(|(from, edges)| edges.iter().map(move |e| (*from, e.0, e.2)))
    }

    /// Exact cost from `node` to the nearest goal, by Bellman-Ford
    /// relaxation over the reversed edges.
    pub(crate) fn distance_to_goal(&self, node: u32) -> Option<i64> {
        let mut distance: HashMap<u32, i64> = self.goals.iter().map(|g| (*g, 0)).collect();
        for _ in 0..self.nodes().len() {
            for (from, to, cost) in self.all_edges() {
                if let Some(d) = distance.get(&to).copied() {
                    let candidate = d + cost;
                    let entry = distance.entry(from).or_insert(candidate);
                    if candidate < *entry {
                        *entry = candidate;
                    }
                }
            }
        }
        distance.get(&node).copied()
    }
}

impl Problem for GraphProblem {
    type State = u32;
    type Action = String;
    type Cost = i64;

    fn start_state(&self) -> u32 {
        self.start
    }

    fn is_goal_state(&self, state: &u32) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &u32) -> Vec<SuccessorOf<Self>> {
        self.edges
            .get(state)
            .map(|edges| {
                edges
                    .iter()
                    .map(|(to, label, cost)| Successor::new(*to, label.clone(), *cost))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Cheapest cost from the start to any goal, computed without
/// touching the search code.
pub(crate) fn brute_force_cost(problem: &GraphProblem) -> Option<i64> {
    problem.distance_to_goal(problem.start)
}

/// Replay a plan, returning its cost if it is valid and ends on a goal.
pub(crate) fn plan_cost(problem: &GraphProblem, plan: &[String]) -> Option<i64> {
    let mut state = problem.start_state();
    let mut total = 0;
    for action in plan {
        let step = problem
            .successors(&state)
            .into_iter()
            .find(|s| &s.action == action)?;
        total += step.cost;
        state = step.state;
    }

    if problem.is_goal_state(&state) {
        Some(total)
    } else {
        None
    }
}

/// Deterministic pseudo-random graph with non-negative costs.
pub(crate) fn random_graph(seed: u64, nodes: u32, edges: usize) -> GraphProblem {
    let mut rng = Lcg(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1);
    let mut problem = GraphProblem::new(0);

    for n in 0..edges {
        let from = rng.below(u64::from(nodes)) as u32;
        let to = rng.below(u64::from(nodes)) as u32;
        let cost = rng.below(10) as i64;
        problem.labeled_edge(from, to, cost, &format!("{}-{}#{}", from, to, n));
    }

    problem.goal(1 + rng.below(u64::from(nodes - 1)) as u32);
    if rng.below(2) == 0 {
        problem.goal(rng.below(u64::from(nodes)) as u32);
    }
    problem
}

struct Lcg(u64);

impl Lcg {
    fn below(&mut self, n: u64) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 33) % n
    }
}

/// A chain of states joined by fractional step costs.
#[derive(Debug)]
pub(crate) struct WeightedLine {
    costs: Vec<f64>,
}

impl WeightedLine {
    pub(crate) fn new(costs: Vec<f64>) -> Self {
        Self { costs }
    }
}

impl Problem for WeightedLine {
    type State = usize;
    type Action = usize;
    type Cost = f64;

    fn start_state(&self) -> usize {
        0
    }

    fn is_goal_state(&self, state: &usize) -> bool {
        *state == self.costs.len()
    }

    fn successors(&self, state: &usize) -> Vec<SuccessorOf<Self>> {
        self.costs
            .get(*state)
            .map(|cost| vec![(state + 1, state + 1, *cost).into()])
            .unwrap_or_default()
    }
}
