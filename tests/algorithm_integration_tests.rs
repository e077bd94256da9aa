//! Integration tests for assembling client visit orders.

use client_routing::client::{ClientPoint, ClientRecord};
use client_routing::config::Config;
use client_routing::point::Point;
use client_routing::utils::random_clients;
use client_routing::RouteAssembler;

fn clients(coords: &[(&'static str, f64, f64)]) -> Vec<ClientPoint<&'static str>> {
    coords
        .iter()
        .map(|&(id, x, y)| ClientPoint::new(id, Point::new(x, y)))
        .collect()
}

fn ids<Id: Copy>(stops: &[ClientPoint<Id>]) -> Vec<Id> {
    stops.iter().map(|stop| stop.id).collect()
}

#[test]
fn test_empty_input() {
    let assembler = RouteAssembler::default();
    let input: Vec<ClientPoint<u32>> = Vec::new();

    let plan = assembler.plan(&input);

    assert!(plan.stops.is_empty());
    assert_eq!(plan.constructed_distance, 0.0);
    assert_eq!(plan.optimized_distance, 0.0);
    assert!(plan.converged);
}

#[test]
fn test_single_client_unchanged() {
    let assembler = RouteAssembler::default();
    let input = clients(&[("only", 3.0, 4.0)]);

    let plan = assembler.plan(&input);

    assert_eq!(plan.stops, input);
    assert!((plan.optimized_distance - 5.0).abs() < 1e-10);
    assert_eq!(plan.passes, 0);
}

#[test]
fn test_two_equidistant_clients_keep_input_order() {
    let assembler = RouteAssembler::default();

    let input = clients(&[("north", 0.0, 10.0), ("east", 10.0, 0.0)]);
    let plan = assembler.plan(&input);
    assert_eq!(ids(&plan.stops), vec!["north", "east"]);
    // Nothing for 2-opt to do on two stops
    assert_eq!(plan.swaps, 0);
    assert_eq!(plan.constructed_distance, plan.optimized_distance);

    let input = clients(&[("east", 10.0, 0.0), ("north", 0.0, 10.0)]);
    assert_eq!(
        ids(&assembler.compute_visit_order(&input)),
        vec!["east", "north"]
    );
}

#[test]
fn test_square_visited_before_outlier() {
    let assembler = RouteAssembler::default();
    let input = clients(&[
        ("a", 0.0, 1.0),
        ("b", 1.0, 1.0),
        ("c", 1.0, 0.0),
        ("far", 5.0, 5.0),
    ]);

    let plan = assembler.plan(&input);

    assert_eq!(plan.stops.last().map(|stop| stop.id), Some("far"));
    assert_eq!(ids(&plan.stops), vec!["a", "c", "b", "far"]);
    assert!(plan.optimized_distance <= plan.constructed_distance);
    assert!(plan.converged);
}

#[test]
fn test_ladder_needs_no_improvement() {
    let assembler = RouteAssembler::default();
    let input = clients(&[
        ("p", 1.0, 0.0),
        ("q", 3.0, 0.0),
        ("r", 1.0, 1.0),
        ("s", 3.0, 1.0),
    ]);

    let plan = assembler.plan(&input);

    assert_eq!(ids(&plan.stops), vec!["p", "r", "s", "q"]);
    assert!((plan.constructed_distance - 5.0).abs() < 1e-10);
    assert!((plan.optimized_distance - 5.0).abs() < 1e-10);
}

#[test]
fn test_zig_zag_is_straightened() {
    let assembler = RouteAssembler::default();
    // Nearest-neighbor visits these in input order, crossing its own path
    let input = clients(&[
        ("a", 2.0, 0.0),
        ("b", 4.0, 4.0),
        ("c", 6.0, 3.0),
        ("d", 0.0, 4.0),
    ]);

    let plan = assembler.plan(&input);

    assert_eq!(ids(&plan.stops), vec!["a", "c", "b", "d"]);
    assert!(plan.optimized_distance < plan.constructed_distance);
    assert_eq!(plan.swaps, 1);
}

#[test]
fn test_duplicate_locations_are_all_visited() {
    let assembler = RouteAssembler::default();
    let input = clients(&[
        ("x1", 2.0, 2.0),
        ("y", 5.0, 1.0),
        ("x2", 2.0, 2.0),
        ("z", 1.0, 4.0),
    ]);

    let order = ids(&assembler.compute_visit_order(&input));

    assert_eq!(order.len(), 4);
    for id in ["x1", "x2", "y", "z"] {
        assert_eq!(order.iter().filter(|&&o| o == id).count(), 1);
    }
}

#[test]
fn test_input_is_not_modified() {
    let assembler = RouteAssembler::default();
    let input = random_clients(30, 100.0, 7);
    let snapshot = input.clone();

    let _ = assembler.compute_visit_order(&input);

    assert_eq!(input, snapshot);
}

#[test]
fn test_route_records_skips_unlocated_clients() {
    let assembler = RouteAssembler::default();
    let records = vec![
        ClientRecord::new("1", "Far", Some(Point::new(9.0, 9.0))),
        ClientRecord::new("2", "Nowhere", None),
        ClientRecord::new("3", "Near", Some(Point::new(1.0, 1.0))),
        ClientRecord::new("4", "Middle", Some(Point::new(4.0, 5.0))),
    ];

    let ordered = assembler.route_records(&records);

    let names: Vec<&str> = ordered.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Near", "Middle", "Far"]);
}

#[test]
fn test_route_records_without_any_coordinates() {
    let assembler = RouteAssembler::default();
    let records = vec![
        ClientRecord::new("1", "A", None),
        ClientRecord::new("2", "B", None),
    ];

    assert!(assembler.route_records(&records).is_empty());
}

#[test]
fn test_tight_pass_ceiling_still_returns_every_client() {
    let assembler = RouteAssembler::new(Config::new().with_max_passes(1));
    let input = random_clients(60, 1000.0, 3);

    let plan = assembler.plan(&input);

    assert_eq!(plan.stops.len(), 60);
    assert_eq!(plan.passes, 1);
    assert!(plan.optimized_distance <= plan.constructed_distance + 1e-9);
}

#[test]
fn test_concurrent_plans_match_sequential() {
    let assembler = RouteAssembler::default();
    let inputs: Vec<_> = (0..4).map(|seed| random_clients(40, 500.0, seed)).collect();
    let sequential: Vec<_> = inputs
        .iter()
        .map(|input| assembler.compute_visit_order(input))
        .collect();

    let concurrent: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|input| {
                let assembler = &assembler;
                scope.spawn(move || assembler.compute_visit_order(input))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("planner thread panicked"))
            .collect()
    });

    assert_eq!(concurrent, sequential);
}
