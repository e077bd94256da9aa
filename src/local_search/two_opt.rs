//! 2-Opt neighborhood over an open path.
//!
//! Removing edges `(i, i+1)` and `(j, j+1)` and reconnecting as `(i, j)` and
//! `(i+1, j+1)` is the same as reversing the segment `i+1..=j`.

use crate::problem::Problem;
use crate::solution::Route;
use log::trace;

use super::{RouteOptimizer, SearchState};

impl RouteOptimizer {
    /// Run one full pass over every valid `(i, j)` pair, applying each
    /// improving move as soon as it is found and continuing the scan from the
    /// same position. Returns the number of accepted moves.
    pub fn two_opt_pass(
        &self,
        route: &mut Route,
        problem: &Problem,
        state: &mut SearchState,
    ) -> usize {
        let n = route.len();
        let mut accepted = 0;

        // i + 2 <= j and j + 1 < n
        for i in 0..n.saturating_sub(3) {
            for j in (i + 2)..(n - 1) {
                let (before, after) = evaluate_two_opt(&route.nodes, problem, i, j);

                // Strict comparison so exact ties cannot cycle
                if after < before {
                    apply_two_opt(route, i, j);
                    accepted += 1;
                    *state = SearchState::ImprovedThisPass;

                    trace!(
                        "2-opt reversed positions {}..={} (gain {:.6})",
                        i + 1,
                        j,
                        before - after
                    );
                }
            }
        }

        accepted
    }
}

/// Cost of the two edges a move at `(i, j)` removes and of the two it adds,
/// as `(before, after)`.
pub fn evaluate_two_opt(nodes: &[usize], problem: &Problem, i: usize, j: usize) -> (f64, f64) {
    let before = problem.get_distance(nodes[i], nodes[i + 1])
        + problem.get_distance(nodes[j], nodes[j + 1]);
    let after =
        problem.get_distance(nodes[i], nodes[j]) + problem.get_distance(nodes[i + 1], nodes[j + 1]);

    (before, after)
}

/// Reverse the segment from `i + 1` to `j` inclusive.
pub fn apply_two_opt(route: &mut Route, i: usize, j: usize) {
    route.nodes[i + 1..=j].reverse();
}
