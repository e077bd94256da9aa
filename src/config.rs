//! Configuration parameters for route building.

use serde::{Deserialize, Serialize};

/// Configuration settings for route optimization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Hard cap on the number of full 2-opt passes. When unset the cap is
    /// derived from the route size.
    pub max_passes: Option<usize>,
    /// Multiplier applied to `n²` to derive the pass cap for a route of n nodes
    pub pass_ceiling_factor: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_passes: None,
            pass_ceiling_factor: 4,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set an explicit pass cap.
    pub fn with_max_passes(mut self, passes: usize) -> Self {
        self.max_passes = Some(passes);
        self
    }

    /// Set the multiplier used for the derived pass cap.
    pub fn with_pass_ceiling_factor(mut self, factor: usize) -> Self {
        self.pass_ceiling_factor = factor;
        self
    }

    /// The pass cap for a route of `route_len` nodes. Never below one.
    pub fn pass_ceiling(&self, route_len: usize) -> usize {
        match self.max_passes {
            Some(passes) => passes.max(1),
            None => self
                .pass_ceiling_factor
                .saturating_mul(route_len)
                .saturating_mul(route_len)
                .max(1),
        }
    }
}
