//! Statevector simulation engine.
//!
//! The state of an n-qubit circuit is a dense vector of 2^n complex
//! amplitudes, indexed so that bit *i* of the basis index is qubit *i*
//! (qubit 0 = least significant bit). That convention is used everywhere an
//! index maps to a qubit.
//!
//! Cost model: every gate touches the full vector, so time is O(2^n) per
//! gate and O(|ops| · 2^n) per run, with O(2^n) complex numbers of memory.
//! This is the scalability ceiling of the engine; callers bound `num_qubits`
//! before invoking it.

use num_complex::Complex64;

use bloq_ir::{Circuit, GateOp};

use crate::error::{SimError, SimResult};

/// Tolerance for the normalization invariant: after any valid gate sequence
/// the squared amplitudes sum to 1 within this bound.
pub const NORM_TOLERANCE: f64 = 1e-9;

/// A statevector representing a quantum state.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Run a full circuit from |0...0⟩, applying every op in order.
    ///
    /// Application order is exactly the circuit's op order — no reordering,
    /// fusion, or algebraic simplification — so the numeric result is
    /// reproducible bit-for-bit for a given circuit.
    pub fn run(circuit: &Circuit) -> Self {
        let mut state = Self::new(circuit.num_qubits() as usize);
        for op in circuit.ops() {
            state.apply(op);
        }
        state
    }

    /// Get the number of qubits.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Dimension of the state (2^n).
    #[inline]
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// Read-only view of the amplitudes.
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Apply a gate operation in place.
    ///
    /// The op must have been validated against this state's width; `Circuit`
    /// guarantees that for any op it yields.
    pub fn apply(&mut self, op: &GateOp) {
        let target = op.acted_qubit() as usize;
        let mut control_mask = 0usize;
        for &c in op.control_qubits() {
            control_mask |= 1 << c;
        }
        self.apply_controlled(&op.kind.target_matrix(), control_mask, target);
    }

    /// Apply a 2×2 unitary to `target`, conditioned on every bit of
    /// `control_mask` being set.
    ///
    /// Pairs the 2^n basis indices that differ only in bit `target`; each
    /// pair (i, j = i | 1<<target) with all control bits set is replaced by
    /// the matrix-vector product. Pairs with any control bit clear are left
    /// untouched, which is exactly the structural definition of the
    /// controlled gates.
    fn apply_controlled(&mut self, matrix: &[[Complex64; 2]; 2], control_mask: usize, target: usize) {
        let t_mask = 1usize << target;
        for i in 0..self.amplitudes.len() {
            if i & t_mask == 0 && i & control_mask == control_mask {
                let j = i | t_mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = matrix[0][0] * a + matrix[0][1] * b;
                self.amplitudes[j] = matrix[1][0] * a + matrix[1][1] * b;
            }
        }
    }

    /// Sum of squared amplitude magnitudes.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Check the numeric invariants: finite amplitudes and unit norm.
    ///
    /// A violation means the engine itself is broken, so the error is
    /// surfaced rather than corrected.
    pub fn validate(&self) -> SimResult<()> {
        for (index, amp) in self.amplitudes.iter().enumerate() {
            if !amp.re.is_finite() || !amp.im.is_finite() {
                return Err(SimError::NonFiniteAmplitude { index });
            }
        }
        let norm_sqr = self.norm_sqr();
        if (norm_sqr - 1.0).abs() > NORM_TOLERANCE {
            return Err(SimError::NormalizationDrift {
                norm_sqr,
                tolerance: NORM_TOLERANCE,
            });
        }
        Ok(())
    }

    /// Render a basis index as an outcome bitstring.
    ///
    /// Qubit n-1 is the leftmost character and qubit 0 the rightmost, so the
    /// string reads as the binary value of the index ("11" is basis index 3).
    pub fn bitstring(&self, outcome: usize) -> String {
        bitstring(outcome, self.num_qubits)
    }
}

/// Fixed-width outcome bitstring for a basis index.
pub(crate) fn bitstring(outcome: usize, num_qubits: usize) -> String {
    format!("{outcome:0num_qubits$b}")
}
