//! Gate operations combining a gate kind with its target qubits.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::gate::GateKind;

/// A single gate application within a circuit.
///
/// Target order is semantically meaningful: for controlled kinds the leading
/// entries are the control qubits and the last entry is the acted-upon qubit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateOp {
    /// The gate being applied.
    pub kind: GateKind,
    /// The qubits it operates on, controls first.
    pub targets: Vec<u32>,
}

impl GateOp {
    /// Create a gate operation.
    pub fn new(kind: GateKind, targets: impl IntoIterator<Item = u32>) -> Self {
        Self {
            kind,
            targets: targets.into_iter().collect(),
        }
    }

    /// Create a single-qubit gate operation.
    pub fn single(kind: GateKind, qubit: u32) -> Self {
        Self::new(kind, [qubit])
    }

    /// The acted-upon qubit (the last target).
    ///
    /// Only meaningful once the op has passed validation, which guarantees
    /// `targets` is non-empty.
    #[inline]
    pub fn acted_qubit(&self) -> u32 {
        self.targets[self.targets.len() - 1]
    }

    /// The control qubits (all targets but the last).
    #[inline]
    pub fn control_qubits(&self) -> &[u32] {
        &self.targets[..self.targets.len() - 1]
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        for (i, q) in self.targets.iter().enumerate() {
            write!(f, "{}q{q}", if i == 0 { " " } else { ", " })?;
        }
        Ok(())
    }
}
