use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

use densemat::config::SolverConfig;
use densemat::math::{Matrix, Vector};

/// Input for the single-matrix subcommands (`det`, `inverse`, `adjoint`,
/// `transpose`, `eigen`, `pagerank`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixInput {
    pub matrix: Matrix,
}

/// Input for `gram-schmidt`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorsInput {
    pub vectors: Vec<Vector>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EinsumInput {
    pub subscripts: String,
    pub a: Matrix,
    pub b: Matrix,
}

pub fn read_json<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read input: {}", path.as_ref().display()))?;
    let value: T = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse input: {}", path.as_ref().display()))?;
    Ok(value)
}

/// Load and validate a solver configuration file.
pub fn load_solver_config<P: AsRef<Path>>(path: P) -> Result<SolverConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: SolverConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config: {}", path.as_ref().display()))?;
    Ok(config)
}
