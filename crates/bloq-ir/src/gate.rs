//! Quantum gate kinds and their unitaries.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};
use std::fmt;

/// The closed set of gates the engine supports.
///
/// Single-qubit kinds carry a fixed 2×2 unitary. The controlled kinds (CX,
/// CCX) are defined structurally — controls gate an X on the last target —
/// and are never expanded into dense 4×4 or 8×8 matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// Controlled-X (CNOT) gate.
    CX,
    /// Toffoli (CCX) gate.
    CCX,
}

impl GateKind {
    /// Canonical lowercase name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::H => "h",
            GateKind::X => "x",
            GateKind::Y => "y",
            GateKind::Z => "z",
            GateKind::S => "s",
            GateKind::Sdg => "sdg",
            GateKind::T => "t",
            GateKind::Tdg => "tdg",
            GateKind::CX => "cx",
            GateKind::CCX => "ccx",
        }
    }

    /// Look up a gate kind by name, case-insensitively.
    ///
    /// Accepts the aliases `cnot` (→ CX) and `toffoli` (→ CCX) used by the
    /// circuit-builder wire format.
    pub fn from_name(name: &str) -> Option<GateKind> {
        match name.to_ascii_lowercase().as_str() {
            "h" => Some(GateKind::H),
            "x" => Some(GateKind::X),
            "y" => Some(GateKind::Y),
            "z" => Some(GateKind::Z),
            "s" => Some(GateKind::S),
            "sdg" => Some(GateKind::Sdg),
            "t" => Some(GateKind::T),
            "tdg" => Some(GateKind::Tdg),
            "cx" | "cnot" => Some(GateKind::CX),
            "ccx" | "toffoli" => Some(GateKind::CCX),
            _ => None,
        }
    }

    /// Total number of qubits this gate operates on.
    #[inline]
    pub fn arity(&self) -> usize {
        match self {
            GateKind::H
            | GateKind::X
            | GateKind::Y
            | GateKind::Z
            | GateKind::S
            | GateKind::Sdg
            | GateKind::T
            | GateKind::Tdg => 1,
            GateKind::CX => 2,
            GateKind::CCX => 3,
        }
    }

    /// Number of leading control qubits (0 for single-qubit kinds).
    #[inline]
    pub fn num_controls(&self) -> usize {
        self.arity() - 1
    }

    /// The 2×2 unitary applied to the acted-upon qubit.
    ///
    /// For the controlled kinds this is the X matrix conditioned on the
    /// control qubits; the conditioning itself is handled by the engine.
    pub fn target_matrix(&self) -> [[Complex64; 2]; 2] {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::new(0.0, 1.0);
        match self {
            GateKind::H => {
                let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
                [[s, s], [s, -s]]
            }
            GateKind::X | GateKind::CX | GateKind::CCX => [[zero, one], [one, zero]],
            GateKind::Y => [[zero, -i], [i, zero]],
            GateKind::Z => [[one, zero], [zero, -one]],
            GateKind::S => [[one, zero], [zero, i]],
            GateKind::Sdg => [[one, zero], [zero, -i]],
            GateKind::T => [[one, zero], [zero, Complex64::from_polar(1.0, FRAC_PI_4)]],
            GateKind::Tdg => [[one, zero], [zero, Complex64::from_polar(1.0, -FRAC_PI_4)]],
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
