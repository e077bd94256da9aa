//! Local search refinement of a constructed route.

pub mod two_opt;

use crate::config::Config;
use crate::point::Point;
use crate::problem::Problem;
use crate::solution::Route;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Progress of the search loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchState {
    /// A pass is running and has not accepted a swap yet
    Scanning,
    /// At least one swap was accepted during the current pass
    ImprovedThisPass,
    /// A full pass found no improving swap; the route is a 2-opt local optimum
    Converged,
}

/// Summary of one optimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Number of full passes executed
    pub passes: usize,
    /// Number of accepted segment reversals
    pub swaps: usize,
    /// State the search stopped in
    pub state: SearchState,
    /// Route length before optimization
    pub initial_distance: f64,
    /// Route length after optimization
    pub final_distance: f64,
}

impl SearchOutcome {
    /// Whether the search reached a local optimum rather than the pass ceiling.
    pub fn converged(&self) -> bool {
        self.state == SearchState::Converged
    }
}

/// Improves routes with first-improvement 2-opt.
///
/// Node 0 of a route is the fixed start and never moves.
#[derive(Debug, Clone, Default)]
pub struct RouteOptimizer {
    pub config: Config,
}

impl RouteOptimizer {
    /// Create a new optimizer.
    pub fn new(config: Config) -> Self {
        RouteOptimizer { config }
    }

    /// Run 2-opt on `route` until a full pass accepts no swap or the pass
    /// ceiling is hit. The route is reordered in place and its distance
    /// updated; the result is never longer than the input.
    ///
    /// # Panics
    ///
    /// Panics if `route` is empty. A route always starts with its fixed start
    /// node.
    pub fn optimize(&self, route: &mut Route, problem: &Problem) -> SearchOutcome {
        assert!(
            !route.is_empty(),
            "2-opt requires a route that holds at least its start node"
        );

        route.calculate_distance(problem);
        let initial_distance = route.distance;

        // Start plus at most two stops leaves no pair of non-adjacent edges
        if route.len() <= 3 {
            return SearchOutcome {
                passes: 0,
                swaps: 0,
                state: SearchState::Converged,
                initial_distance,
                final_distance: initial_distance,
            };
        }

        let ceiling = self.config.pass_ceiling(route.len());
        let mut state = SearchState::Scanning;
        let mut passes = 0;
        let mut swaps = 0;

        while passes < ceiling {
            let accepted = self.two_opt_pass(route, problem, &mut state);
            passes += 1;
            swaps += accepted;

            debug!(
                "2-opt pass {}: {} swaps accepted ({} total)",
                passes, accepted, swaps
            );

            state = match state {
                SearchState::ImprovedThisPass => SearchState::Scanning,
                _ => SearchState::Converged,
            };
            if state == SearchState::Converged {
                break;
            }
        }

        if state != SearchState::Converged {
            warn!(
                "2-opt stopped at the pass ceiling ({}) before converging on a route of {} nodes",
                ceiling,
                route.len()
            );
        }

        route.calculate_distance(problem);

        SearchOutcome {
            passes,
            swaps,
            state,
            initial_distance,
            final_distance: route.distance,
        }
    }

    /// Run 2-opt over bare points. `route[0]` is the fixed start.
    pub fn optimize_points(&self, route: &[Point]) -> Vec<Point> {
        let Some((&start, stops)) = route.split_first() else {
            return Vec::new();
        };

        let problem = Problem::new(start, stops);
        let mut working = Route::from_nodes((0..route.len()).collect(), &problem);
        self.optimize(&mut working, &problem);

        working
            .nodes
            .iter()
            .map(|&node| problem.points[node])
            .collect()
    }
}
