//! Route representation.

use crate::problem::{Problem, DEPOT_INDEX};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A visiting order over the nodes of a [`Problem`].
///
/// While a route is being built or optimized, `nodes[0]` is the depot. The
/// path is open: its length runs from the depot to the last stop with no
/// return leg.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// The sequence of node indices, depot first
    pub nodes: Vec<usize>,
    /// The total length of the path
    pub distance: f64,
}

impl Route {
    /// Create a route holding only the depot.
    pub fn new() -> Self {
        Route {
            nodes: vec![DEPOT_INDEX],
            distance: 0.0,
        }
    }

    /// Create a route from an explicit node sequence and compute its length.
    pub fn from_nodes(nodes: Vec<usize>, problem: &Problem) -> Self {
        let mut route = Route {
            nodes,
            distance: 0.0,
        };
        route.calculate_distance(problem);
        route
    }

    /// Recalculate the total length of the path.
    pub fn calculate_distance(&mut self, problem: &Problem) {
        self.distance = path_length(&self.nodes, problem);
    }

    /// Number of nodes, depot included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the route holds no nodes at all, not even the depot.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The stops in visiting order, without the leading depot.
    pub fn stops(&self) -> &[usize] {
        match self.nodes.first() {
            Some(&DEPOT_INDEX) => &self.nodes[1..],
            _ => &self.nodes,
        }
    }

    /// Check that the stops are exactly `1..=stop_count`, each once.
    pub fn is_permutation_of(&self, stop_count: usize) -> bool {
        let stops = self.stops();
        if stops.len() != stop_count {
            return false;
        }
        let mut seen = vec![false; stop_count + 1];
        for &node in stops {
            if node == DEPOT_INDEX || node > stop_count || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        true
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::new()
    }
}

/// Length of the open path through `nodes` in order.
pub fn path_length(nodes: &[usize], problem: &Problem) -> f64 {
    nodes
        .iter()
        .tuple_windows()
        .map(|(&from, &to)| problem.get_distance(from, to))
        .sum()
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Route {:?} (Distance: {:.2})", self.nodes, self.distance)
    }
}
