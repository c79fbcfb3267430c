//! Error types for the simulation crate.

use bloq_ir::IrError;
use thiserror::Error;

/// Errors raised by the simulation engine.
///
/// `CircuitTooLarge` is a caller-input failure, checked before any state is
/// allocated. The remaining variants report numeric invariant violations:
/// they indicate an engine defect, are never corrected silently, and are not
/// user-recoverable.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Circuit width exceeds the configured memory bound.
    #[error("circuit has {num_qubits} qubits but the simulator supports at most {max_qubits}")]
    CircuitTooLarge {
        /// Width of the rejected circuit.
        num_qubits: u32,
        /// Configured maximum width.
        max_qubits: u32,
    },

    /// Statevector norm drifted beyond tolerance.
    #[error("statevector norm² drifted to {norm_sqr} (tolerance {tolerance}); engine defect")]
    NormalizationDrift {
        /// The measured squared norm.
        norm_sqr: f64,
        /// The tolerance it violated.
        tolerance: f64,
    },

    /// An amplitude became NaN or infinite.
    #[error("non-finite amplitude at basis index {index}; engine defect")]
    NonFiniteAmplitude {
        /// Basis index of the bad amplitude.
        index: usize,
    },

    /// Validation failure from the IR layer.
    #[error(transparent)]
    Ir(#[from] IrError),
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
