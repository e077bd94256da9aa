//! Routing instance: a depot plus the stops to visit.

use crate::point::Point;

/// Index of the depot in every [`Problem`].
pub const DEPOT_INDEX: usize = 0;

/// A single routing instance.
///
/// `points[0]` is the depot and `points[k]` for `k >= 1` is the k-th stop, in
/// the order the caller supplied them. Distances are computed once up front.
#[derive(Debug, Clone)]
pub struct Problem {
    pub points: Vec<Point>,
    pub distance_matrix: Vec<Vec<f64>>,
}

impl Problem {
    /// Create a new problem from a start point and the stops to visit.
    pub fn new(depot: Point, stops: &[Point]) -> Self {
        let mut points = Vec::with_capacity(stops.len() + 1);
        points.push(depot);
        points.extend_from_slice(stops);

        let distance_matrix = Self::compute_distance_matrix(&points);

        Problem {
            points,
            distance_matrix,
        }
    }

    /// Distance between two node indices.
    pub fn get_distance(&self, from: usize, to: usize) -> f64 {
        self.distance_matrix[from][to]
    }

    /// Number of stops (excluding the depot).
    pub fn get_stop_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Get the depot point.
    pub fn get_depot(&self) -> &Point {
        &self.points[DEPOT_INDEX]
    }

    fn compute_distance_matrix(points: &[Point]) -> Vec<Vec<f64>> {
        let n = points.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance(&points[j]);
                matrix[i][j] = d;
                matrix[j][i] = d;
            }
        }

        matrix
    }
}
