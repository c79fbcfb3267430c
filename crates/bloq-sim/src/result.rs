//! Serializable simulation results returned to the API collaborator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use bloq_ir::GateOp;

use crate::observable::BlochVector;

/// Measurement counts keyed by outcome bitstring.
///
/// Counts always sum exactly to the number of requested shots. Keys use the
/// same bitstring convention as the probability maps (qubit 0 rightmost).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts(BTreeMap<String, u64>);

impl Counts {
    /// Create an empty counts map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `n` observations of an outcome.
    pub fn add(&mut self, outcome: impl Into<String>, n: u64) {
        *self.0.entry(outcome.into()).or_insert(0) += n;
    }

    /// Count for an outcome, zero if never observed.
    pub fn get(&self, outcome: &str) -> u64 {
        self.0.get(outcome).copied().unwrap_or(0)
    }

    /// Total number of observations.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no outcome was observed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate outcomes in ascending bitstring order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &u64)> {
        self.0.iter()
    }
}

/// Everything the frontend needs to render one circuit state.
///
/// Serializes to the wire shape the frontend consumes: the exact
/// statevector as `[re, im]` pairs, the pruned probability map, per-qubit
/// Bloch coordinates, and sampled measurement counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutput {
    /// Amplitudes as `[real, imag]` pairs, length 2^n.
    pub statevector: Vec<[f64; 2]>,
    /// Outcome probabilities, near-zero entries pruned; values sum to 1.
    pub probabilities: BTreeMap<String, f64>,
    /// Bloch coordinates for each qubit, in qubit order.
    pub bloch_coords: Vec<BlochVector>,
    /// Sampled measurement counts; values sum exactly to the shot count.
    pub measurement_counts: Counts,
}

/// Step-through simulation output for animation playback.
///
/// `steps` has one entry for the empty prefix and one per gate, so its
/// length is `gates.len() + 1`. The gate sequence is echoed back for display
/// alignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepOutput {
    /// One output per circuit prefix, in application order.
    pub steps: Vec<SimulationOutput>,
    /// The gate sequence the steps correspond to.
    pub gates: Vec<GateOp>,
}
