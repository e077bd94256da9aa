//! Utility functions for reporting and generating route instances.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::client::{ClientPoint, ClientRecord};
use crate::point::{Point, DEPOT};
use crate::RoutePlan;

/// Format a duration as hours, minutes, and seconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}h {:02}m {:02}s", hours, minutes, seconds)
}

/// Write a numbered visiting order to `writer`, one client per line.
pub fn write_route<W: Write>(records: &[ClientRecord], writer: &mut W) -> io::Result<()> {
    for (i, record) in records.iter().enumerate() {
        write!(writer, "{}. {}", i + 1, record.name)?;
        if let Some(point) = record.coordinates {
            write!(writer, " {}", point)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Save a numbered visiting order to a file.
pub fn save_route<P: AsRef<Path>>(records: &[ClientRecord], path: P) -> io::Result<()> {
    let mut file = File::create(path)?;
    write_route(records, &mut file)
}

/// Statistics about one route computation.
pub struct RouteStatistics {
    pub clients: usize,
    pub runtime: Duration,
    pub constructed_distance: f64,
    pub optimized_distance: f64,
    pub passes: usize,
    pub swaps: usize,
    pub converged: bool,
}

impl RouteStatistics {
    /// Collect statistics from a finished plan.
    pub fn from_plan<Id>(plan: &RoutePlan<Id>, runtime: Duration) -> Self {
        RouteStatistics {
            clients: plan.stops.len(),
            runtime,
            constructed_distance: plan.constructed_distance,
            optimized_distance: plan.optimized_distance,
            passes: plan.passes,
            swaps: plan.swaps,
            converged: plan.converged,
        }
    }

    /// Relative saving of 2-opt over the constructed route, in percent.
    pub fn improvement_percent(&self) -> f64 {
        if self.constructed_distance > 0.0 {
            100.0 * (self.constructed_distance - self.optimized_distance)
                / self.constructed_distance
        } else {
            0.0
        }
    }

    /// Format the statistics as a string.
    pub fn format(&self) -> String {
        format!(
            "Route Statistics:
- Clients: {}
- Runtime: {}
- Constructed Distance: {:.2}
- Optimized Distance: {:.2}
- Improvement: {:.2}%
- 2-opt Passes: {}
- 2-opt Swaps: {}
- Converged: {}",
            self.clients,
            format_duration(self.runtime),
            self.constructed_distance,
            self.optimized_distance,
            self.improvement_percent(),
            self.passes,
            self.swaps,
            self.converged
        )
    }
}

/// Generate `count` points uniformly in `[0, extent) x [0, extent)` from a
/// fixed seed. `extent` must be positive.
pub fn random_points(count: usize, extent: f64, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point::new(rng.gen_range(0.0..extent), rng.gen_range(0.0..extent)))
        .collect()
}

/// Generate `count` client points numbered from zero, from a fixed seed.
pub fn random_clients(count: usize, extent: f64, seed: u64) -> Vec<ClientPoint<usize>> {
    random_points(count, extent, seed)
        .into_iter()
        .enumerate()
        .map(|(id, point)| ClientPoint::new(id, point))
        .collect()
}

/// Render the depot and stops on a character grid. Stops are labelled by the
/// last digit of their position in the route.
pub fn render_route(stops: &[Point], width: usize, height: usize) -> String {
    let mut min_x = DEPOT.x;
    let mut min_y = DEPOT.y;
    let mut max_x = DEPOT.x;
    let mut max_y = DEPOT.y;

    for point in stops {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    let span_x = if max_x > min_x { max_x - min_x } else { 1.0 };
    let span_y = if max_y > min_y { max_y - min_y } else { 1.0 };
    let width = width.max(1);
    let height = height.max(1);

    let cell = |point: &Point| {
        let x = ((point.x - min_x) / span_x * (width as f64 - 1.0)) as usize;
        let y = ((point.y - min_y) / span_y * (height as f64 - 1.0)) as usize;
        // Row 0 is printed first, so flip y to keep north at the top
        (x.min(width - 1), height - 1 - y.min(height - 1))
    };

    let mut grid = vec![vec![' '; width]; height];

    for (i, point) in stops.iter().enumerate() {
        let (x, y) = cell(point);
        grid[y][x] = char::from_digit(((i + 1) % 10) as u32, 10).unwrap_or('*');
    }

    let (x, y) = cell(&DEPOT);
    grid[y][x] = 'D';

    let mut out = String::with_capacity((width + 1) * height);
    for row in &grid {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}
