//! Observables derived from a statevector: the outcome probability
//! distribution and per-qubit Bloch vectors.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::statevector::{Statevector, bitstring};

/// Entries below this are dropped by [`Distribution::to_map_pruned`].
///
/// This is a presentation policy, not engine behavior: the engine always
/// computes the full 2^n distribution, and callers choose whether to prune
/// near-zero entries for display or serialization.
pub const PRUNE_EPSILON: f64 = 1e-10;

/// The full outcome probability distribution of a state.
///
/// Holds all 2^n probabilities densely, indexed like the statevector
/// (qubit 0 = least significant bit). Probabilities sum to 1 within the
/// engine's normalization tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    probs: Vec<f64>,
    num_qubits: usize,
}

impl Distribution {
    /// Compute the distribution of a state: probability of outcome k is
    /// |amp\[k\]|².
    pub fn from_state(state: &Statevector) -> Self {
        Self {
            probs: state.amplitudes().iter().map(Complex64::norm_sqr).collect(),
            num_qubits: state.num_qubits(),
        }
    }

    /// The dense probabilities, in ascending outcome order.
    #[inline]
    pub fn probs(&self) -> &[f64] {
        &self.probs
    }

    /// Number of qubits the distribution covers.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Sum of all probabilities.
    pub fn sum(&self) -> f64 {
        self.probs.iter().sum()
    }

    /// Full 2^n-entry map from outcome bitstring to probability.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        self.probs
            .iter()
            .enumerate()
            .map(|(k, &p)| (bitstring(k, self.num_qubits), p))
            .collect()
    }

    /// Map from outcome bitstring to probability, dropping entries below
    /// `epsilon` (see [`PRUNE_EPSILON`]).
    pub fn to_map_pruned(&self, epsilon: f64) -> BTreeMap<String, f64> {
        self.probs
            .iter()
            .enumerate()
            .filter(|&(_, &p)| p > epsilon)
            .map(|(k, &p)| (bitstring(k, self.num_qubits), p))
            .collect()
    }
}

/// Reduced single-qubit Bloch coordinates, each in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlochVector {
    /// The qubit these coordinates describe.
    pub qubit: u32,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

/// Compute the Bloch vector of one qubit by partial trace.
///
/// The reduced density matrix ρ is accumulated over every pair of basis
/// indices that agree on all qubits except `qubit`:
/// ρ\[a\]\[b\] += amp\[i_a\] · conj(amp\[i_b\]) where i_a has bit `qubit` = a.
/// The coordinates are then
///
/// - x = 2 · Re(ρ01)
/// - y = 2 · Im(ρ10)
/// - z = Re(ρ00 − ρ11)
///
/// The y coordinate reads ρ10 rather than the more common ρ01. That is the
/// established observable contract of the downstream visualizations and is
/// kept as-is; for a Hermitian ρ the value is identical, only the index
/// convention differs. Each coordinate is clamped to [-1, 1] to absorb
/// floating-point error.
pub fn bloch_vector(state: &Statevector, qubit: u32) -> BlochVector {
    let mask = 1usize << qubit;
    let amps = state.amplitudes();

    // Diagonal entries are real by construction; only ρ01 needs a complex
    // accumulator, and ρ10 is its conjugate.
    let mut rho00 = 0.0_f64;
    let mut rho11 = 0.0_f64;
    let mut rho01 = Complex64::new(0.0, 0.0);
    for i0 in 0..amps.len() {
        if i0 & mask != 0 {
            continue;
        }
        let i1 = i0 | mask;
        rho00 += amps[i0].norm_sqr();
        rho11 += amps[i1].norm_sqr();
        rho01 += amps[i0] * amps[i1].conj();
    }
    let rho10 = rho01.conj();

    BlochVector {
        qubit,
        x: (2.0 * rho01.re).clamp(-1.0, 1.0),
        y: (2.0 * rho10.im).clamp(-1.0, 1.0),
        z: (rho00 - rho11).clamp(-1.0, 1.0),
    }
}

/// Bloch vectors for every qubit of the state, in qubit order.
pub fn bloch_vectors(state: &Statevector) -> Vec<BlochVector> {
    (0..state.num_qubits() as u32)
        .map(|q| bloch_vector(state, q))
        .collect()
}
