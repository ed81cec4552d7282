use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{LinalgError, Result};
use crate::math::DEFAULT_SINGULAR_EPSILON;

/// Central tolerance and iteration settings for the solvers in the crate.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    /// Singularity, orthogonality and linear-dependence tolerance.
    pub epsilon: f64,

    pub normalization: Normalization,

    pub pagerank: PageRankConfig,
}

/// Whether Gram-Schmidt rescales its output to unit length.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    #[default]
    Orthonormal,
    Orthogonal,
}

impl FromStr for Normalization {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "orthonormal" => Ok(Normalization::Orthonormal),
            "orthogonal" => Ok(Normalization::Orthogonal),
            _ => Err(format!(
                "Unknown normalization: {}. Expected `orthonormal` or `orthogonal`",
                s
            )),
        }
    }
}

/// Power-iteration settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PageRankConfig {
    /// Stop once the L1 change between iterations drops below this.
    pub tolerance: f64,
    pub max_iterations: usize,
    /// `1.0` iterates the undamped (lazy) chain; lower values teleport
    /// uniformly with probability `1 - damping`.
    pub damping: f64,
    /// Allowed deviation of each link-matrix row sum from one.
    pub stochastic_tolerance: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 1000,
            damping: 1.0,
            stochastic_tolerance: 1e-9,
        }
    }
}

impl PageRankConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance > 0.0) {
            return Err(LinalgError::InvalidConfig(format!(
                "pagerank tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if !(self.stochastic_tolerance >= 0.0) {
            return Err(LinalgError::InvalidConfig(format!(
                "stochastic tolerance must be non-negative, got {}",
                self.stochastic_tolerance
            )));
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(LinalgError::InvalidConfig(format!(
                "damping must lie in (0, 1], got {}",
                self.damping
            )));
        }
        if self.max_iterations == 0 {
            return Err(LinalgError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl SolverConfig {
    pub fn new(epsilon: f64, normalization: Normalization, pagerank: PageRankConfig) -> Self {
        Self {
            epsilon,
            normalization,
            pagerank,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.epsilon > 0.0) {
            return Err(LinalgError::InvalidConfig(format!(
                "epsilon must be positive, got {}",
                self.epsilon
            )));
        }
        self.pagerank.validate()
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_SINGULAR_EPSILON,
            normalization: Normalization::default(),
            pagerank: PageRankConfig::default(),
        }
    }
}
