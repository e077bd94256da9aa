//! Nearest-neighbor route construction.
//!
//! Starting from the depot, the route is extended one stop at a time with the
//! closest stop not yet visited. O(n²) distance lookups for n stops.

use crate::point::Point;
use crate::problem::{Problem, DEPOT_INDEX};
use crate::solution::Route;

/// Builds an initial visiting order greedily.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteBuilder;

impl RouteBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        RouteBuilder
    }

    /// Build a route over every stop of `problem`, starting at the depot.
    ///
    /// Candidates are scanned in their original order and only a strictly
    /// closer candidate replaces the current best, so equidistant stops are
    /// taken in input order.
    pub fn build(&self, problem: &Problem) -> Route {
        let stop_count = problem.get_stop_count();
        let mut unvisited: Vec<usize> = (1..=stop_count).collect();
        let mut nodes = Vec::with_capacity(stop_count + 1);
        nodes.push(DEPOT_INDEX);

        let mut current = DEPOT_INDEX;
        while !unvisited.is_empty() {
            let mut best_pos = 0;
            let mut best_dist = problem.get_distance(current, unvisited[0]);

            for (pos, &candidate) in unvisited.iter().enumerate().skip(1) {
                let dist = problem.get_distance(current, candidate);
                if dist < best_dist {
                    best_pos = pos;
                    best_dist = dist;
                }
            }

            // `remove` keeps the remaining candidates in input order
            let next = unvisited.remove(best_pos);
            nodes.push(next);
            current = next;
        }

        Route::from_nodes(nodes, problem)
    }

    /// Order `points` by nearest-neighbor construction from `start`.
    ///
    /// The returned sequence is a permutation of `points`; `start` itself is
    /// not included.
    pub fn build_points(&self, start: Point, points: &[Point]) -> Vec<Point> {
        let problem = Problem::new(start, points);
        self.build(&problem)
            .stops()
            .iter()
            .map(|&node| problem.points[node])
            .collect()
    }
}
