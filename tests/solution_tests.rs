//! Unit tests for points, problems and routes.

use client_routing::point::{Point, DEPOT};
use client_routing::problem::{Problem, DEPOT_INDEX};
use client_routing::solution::{path_length, Route};

fn create_test_problem() -> Problem {
    let stops = [
        Point::new(3.0, 4.0),
        Point::new(3.0, 0.0),
        Point::new(-1.0, -1.0),
    ];
    Problem::new(DEPOT, &stops)
}

#[test]
fn test_point_distance() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);

    assert_eq!(a.distance(&b), 5.0);
    assert_eq!(b.distance(&a), 5.0);
    assert_eq!(b.distance(&b), 0.0);
    assert!(Point::new(-2.5, 7.0).distance(&Point::new(-2.5, 7.000001)) > 0.0);
}

#[test]
fn test_depot_is_origin() {
    assert_eq!(DEPOT, Point::new(0.0, 0.0));
    assert_eq!(Point::from((1.5, -2.0)), Point::new(1.5, -2.0));
    assert_eq!(Point::new(1.5, -2.0).to_string(), "(1.5, -2)");
}

#[test]
fn test_problem_layout() {
    let problem = create_test_problem();

    assert_eq!(problem.get_stop_count(), 3);
    assert_eq!(*problem.get_depot(), DEPOT);
    assert_eq!(problem.points[DEPOT_INDEX], DEPOT);
    assert_eq!(problem.points[1], Point::new(3.0, 4.0));
}

#[test]
fn test_distance_matrix_is_symmetric() {
    let problem = create_test_problem();
    let n = problem.points.len();

    for i in 0..n {
        assert_eq!(problem.get_distance(i, i), 0.0);
        for j in 0..n {
            assert_eq!(problem.get_distance(i, j), problem.get_distance(j, i));
        }
    }
    assert!((problem.get_distance(0, 1) - 5.0).abs() < 1e-10);
    assert!((problem.get_distance(1, 2) - 4.0).abs() < 1e-10);
}

#[test]
fn test_route_distance_is_open_path() {
    let problem = create_test_problem();
    let route = Route::from_nodes(vec![0, 1, 2], &problem);

    // 0 -> (3,4) -> (3,0), no return leg
    assert!((route.distance - 9.0).abs() < 1e-10);
    assert_eq!(route.distance, path_length(&route.nodes, &problem));
}

#[test]
fn test_route_recalculates_after_edit() {
    let problem = create_test_problem();
    let mut route = Route::from_nodes(vec![0, 1, 2], &problem);

    route.nodes.swap(1, 2);
    route.calculate_distance(&problem);

    // 0 -> (3,0) -> (3,4)
    assert!((route.distance - 7.0).abs() < 1e-10);
}

#[test]
fn test_new_route_holds_depot() {
    let route = Route::new();

    assert_eq!(route.nodes, vec![DEPOT_INDEX]);
    assert_eq!(route.len(), 1);
    assert!(!route.is_empty());
    assert!(route.stops().is_empty());
    assert_eq!(route, Route::default());
}

#[test]
fn test_route_stops_excludes_depot() {
    let problem = create_test_problem();
    let route = Route::from_nodes(vec![0, 3, 1, 2], &problem);

    assert_eq!(route.stops(), &[3, 1, 2]);
}

#[test]
fn test_is_permutation_of() {
    let problem = create_test_problem();

    assert!(Route::from_nodes(vec![0, 2, 3, 1], &problem).is_permutation_of(3));
    // Missing stop
    assert!(!Route::from_nodes(vec![0, 2, 3], &problem).is_permutation_of(3));
    // Repeated stop
    assert!(!Route::from_nodes(vec![0, 2, 2, 1], &problem).is_permutation_of(3));
    // Depot in the middle
    assert!(!Route::from_nodes(vec![0, 2, 0, 1], &problem).is_permutation_of(3));
    assert!(Route::new().is_permutation_of(0));
}

#[test]
fn test_path_length_of_short_sequences() {
    let problem = create_test_problem();

    assert_eq!(path_length(&[], &problem), 0.0);
    assert_eq!(path_length(&[2], &problem), 0.0);
}
