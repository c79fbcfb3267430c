//! Error types for the IR crate.

use thiserror::Error;

/// Errors raised while building or validating circuits.
///
/// All variants are caller-input failures: they name the offending gate or
/// index and are reported back unchanged, never silently corrected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IrError {
    /// Gate name does not map to a known gate kind.
    #[error("unknown gate: '{name}'")]
    UnknownGate {
        /// The gate string as received from the caller.
        name: String,
    },

    /// Gate received the wrong number of target qubits.
    #[error("gate '{gate}' requires {expected} qubits, got {got}")]
    ArityMismatch {
        /// Canonical name of the gate.
        gate: &'static str,
        /// Number of qubits the gate requires.
        expected: usize,
        /// Number of qubits actually provided.
        got: usize,
    },

    /// Target index lies outside the circuit width.
    #[error("gate '{gate}' targets qubit {qubit} but the circuit has {num_qubits} qubits")]
    QubitOutOfRange {
        /// Canonical name of the gate.
        gate: &'static str,
        /// The offending qubit index.
        qubit: u32,
        /// Width of the circuit.
        num_qubits: u32,
    },

    /// Same qubit used more than once within one operation.
    #[error("duplicate qubit {qubit} in gate '{gate}'")]
    DuplicateQubit {
        /// Canonical name of the gate.
        gate: &'static str,
        /// The duplicated qubit index.
        qubit: u32,
    },

    /// Circuits must have at least one qubit.
    #[error("circuit must have at least one qubit")]
    ZeroWidthCircuit,
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
