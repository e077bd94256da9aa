//! # client-routing
//!
//! Computes a visiting order over geo-located clients, starting from a depot
//! at the origin, that approximately minimizes total travel distance.
//!
//! A nearest-neighbor construction produces the initial order, which 2-opt
//! local search then refines until no single segment reversal shortens it.

pub mod client;
pub mod config;
pub mod construction;
pub mod local_search;
pub mod point;
pub mod problem;
pub mod solution;
pub mod utils;

use crate::client::{locate_records, ClientPoint, ClientRecord};
use crate::config::Config;
use crate::construction::RouteBuilder;
use crate::local_search::RouteOptimizer;
use crate::point::{Point, DEPOT};
use crate::problem::Problem;

use log::info;
use serde::{Deserialize, Serialize};

/// A computed visiting order together with how it was reached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePlan<Id> {
    /// Clients in visiting order, depot excluded
    pub stops: Vec<ClientPoint<Id>>,
    /// Path length after nearest-neighbor construction
    pub constructed_distance: f64,
    /// Path length after 2-opt
    pub optimized_distance: f64,
    /// Number of 2-opt passes executed
    pub passes: usize,
    /// Number of accepted 2-opt moves
    pub swaps: usize,
    /// Whether 2-opt reached a local optimum before the pass ceiling
    pub converged: bool,
}

/// Orchestrates construction and optimization over client points.
///
/// Holds only configuration, so one assembler can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct RouteAssembler {
    pub builder: RouteBuilder,
    pub optimizer: RouteOptimizer,
}

impl RouteAssembler {
    /// Create a new assembler for the given configuration.
    pub fn new(config: Config) -> Self {
        RouteAssembler {
            builder: RouteBuilder::new(),
            optimizer: RouteOptimizer::new(config),
        }
    }

    /// Order `clients` into a route from the depot. The depot is not part of
    /// the output.
    pub fn compute_visit_order<Id: Clone>(
        &self,
        clients: &[ClientPoint<Id>],
    ) -> Vec<ClientPoint<Id>> {
        self.plan(clients).stops
    }

    /// Like [`compute_visit_order`](Self::compute_visit_order), but also
    /// reports route lengths and search statistics.
    pub fn plan<Id: Clone>(&self, clients: &[ClientPoint<Id>]) -> RoutePlan<Id> {
        let points: Vec<Point> = clients.iter().map(|client| client.point).collect();
        let problem = Problem::new(DEPOT, &points);

        if clients.len() < 2 {
            let nodes: Vec<usize> = (0..=clients.len()).collect();
            let distance = solution::path_length(&nodes, &problem);
            return RoutePlan {
                stops: clients.to_vec(),
                constructed_distance: distance,
                optimized_distance: distance,
                passes: 0,
                swaps: 0,
                converged: true,
            };
        }

        let mut route = self.builder.build(&problem);
        debug_assert!(route.is_permutation_of(problem.get_stop_count()));
        let constructed_distance = route.distance;

        let outcome = self.optimizer.optimize(&mut route, &problem);

        // Node k of the problem is clients[k - 1]
        let stops: Vec<ClientPoint<Id>> = route
            .stops()
            .iter()
            .filter_map(|&node| node.checked_sub(1).and_then(|idx| clients.get(idx)))
            .cloned()
            .collect();

        info!(
            "Route over {} clients: {:.2} after construction, {:.2} after 2-opt ({} passes, {} swaps)",
            stops.len(),
            constructed_distance,
            outcome.final_distance,
            outcome.passes,
            outcome.swaps
        );

        RoutePlan {
            stops,
            constructed_distance,
            optimized_distance: outcome.final_distance,
            passes: outcome.passes,
            swaps: outcome.swaps,
            converged: outcome.converged(),
        }
    }

    /// Route every record that has coordinates and return those records in
    /// visiting order. Records without coordinates are left out.
    pub fn route_records(&self, records: &[ClientRecord]) -> Vec<ClientRecord> {
        let located = locate_records(records);
        if located.len() < records.len() {
            info!(
                "Skipping {} clients without coordinates",
                records.len() - located.len()
            );
        }

        self.compute_visit_order(&located)
            .into_iter()
            .filter_map(|stop| records.get(stop.id).cloned())
            .collect()
    }
}
