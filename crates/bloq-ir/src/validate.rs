//! Validation of raw circuit-builder input.
//!
//! The API collaborator sends circuits as an ordered list of
//! `{"gate": "...", "targets": [...]}` objects plus a qubit count. This
//! module checks every operation against the gate table, the gate's arity,
//! and the circuit width, and produces a [`Circuit`] whose invariants the
//! engine can rely on. Validation is pure and happens before any state is
//! allocated, so an invalid circuit never exposes partial simulation state.

use serde::{Deserialize, Serialize};

use crate::circuit::Circuit;
use crate::error::{IrError, IrResult};
use crate::gate::GateKind;
use crate::op::GateOp;

/// A gate operation as received on the wire, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawGate {
    /// Gate name, matched case-insensitively against the gate table.
    pub gate: String,
    /// Target qubit indices, controls first.
    pub targets: Vec<u32>,
}

impl RawGate {
    /// Create a raw gate record.
    pub fn new(gate: impl Into<String>, targets: impl IntoIterator<Item = u32>) -> Self {
        Self {
            gate: gate.into(),
            targets: targets.into_iter().collect(),
        }
    }
}

/// Validate a raw gate sequence against a qubit count.
///
/// Checks, per operation: the gate name maps to a known [`GateKind`]; the
/// target count equals the kind's arity; every target index lies in
/// `[0, num_qubits)`; and no qubit is used twice within one operation.
/// Operation order is preserved unchanged in the output.
pub fn validate(raw: &[RawGate], num_qubits: u32) -> IrResult<Circuit> {
    let mut circuit = Circuit::new(num_qubits)?;
    for r in raw {
        let kind = GateKind::from_name(&r.gate).ok_or_else(|| IrError::UnknownGate {
            name: r.gate.clone(),
        })?;
        circuit.push(GateOp::new(kind, r.targets.iter().copied()))?;
    }
    Ok(circuit)
}

/// Check a single operation against the circuit width.
///
/// Shared between [`validate`] and the [`Circuit`] builder methods so a
/// `Circuit` value always satisfies the same invariants regardless of how it
/// was constructed.
pub(crate) fn check_op(op: &GateOp, num_qubits: u32) -> IrResult<()> {
    let expected = op.kind.arity();
    if op.targets.len() != expected {
        return Err(IrError::ArityMismatch {
            gate: op.kind.name(),
            expected,
            got: op.targets.len(),
        });
    }
    for (i, &q) in op.targets.iter().enumerate() {
        if q >= num_qubits {
            return Err(IrError::QubitOutOfRange {
                gate: op.kind.name(),
                qubit: q,
                num_qubits,
            });
        }
        if op.targets[..i].contains(&q) {
            return Err(IrError::DuplicateQubit {
                gate: op.kind.name(),
                qubit: q,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_preserves_order() {
        let raw = vec![
            RawGate::new("h", [0]),
            RawGate::new("CNOT", [0, 1]),
            RawGate::new("tdg", [1]),
        ];
        let circuit = validate(&raw, 2).unwrap();
        let kinds: Vec<_> = circuit.ops().iter().map(|op| op.kind).collect();
        assert_eq!(kinds, vec![GateKind::H, GateKind::CX, GateKind::Tdg]);
    }

    #[test]
    fn test_unknown_gate() {
        let raw = vec![RawGate::new("hadamard", [0])];
        let err = validate(&raw, 1).unwrap_err();
        assert_eq!(
            err,
            IrError::UnknownGate {
                name: "hadamard".to_string()
            }
        );
    }

    #[test]
    fn test_arity_mismatch() {
        let raw = vec![RawGate::new("cx", [0])];
        let err = validate(&raw, 2).unwrap_err();
        assert_eq!(
            err,
            IrError::ArityMismatch {
                gate: "cx",
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn test_qubit_out_of_range() {
        let raw = vec![RawGate::new("x", [2])];
        let err = validate(&raw, 2).unwrap_err();
        assert_eq!(
            err,
            IrError::QubitOutOfRange {
                gate: "x",
                qubit: 2,
                num_qubits: 2
            }
        );
    }

    #[test]
    fn test_duplicate_qubit() {
        let raw = vec![RawGate::new("cx", [1, 1])];
        let err = validate(&raw, 2).unwrap_err();
        assert_eq!(
            err,
            IrError::DuplicateQubit {
                gate: "cx",
                qubit: 1
            }
        );
    }

    #[test]
    fn test_zero_width_circuit() {
        let err = validate(&[], 0).unwrap_err();
        assert_eq!(err, IrError::ZeroWidthCircuit);
    }

    #[test]
    fn test_empty_op_list_is_valid() {
        let circuit = validate(&[], 3).unwrap();
        assert!(circuit.is_empty());
        assert_eq!(circuit.num_qubits(), 3);
    }

    #[test]
    fn test_wire_format_deserializes() {
        let json = r#"[{"gate": "h", "targets": [0]}, {"gate": "cx", "targets": [0, 1]}]"#;
        let raw: Vec<RawGate> = serde_json::from_str(json).unwrap();
        let circuit = validate(&raw, 2).unwrap();
        assert_eq!(circuit.len(), 2);
    }
}
