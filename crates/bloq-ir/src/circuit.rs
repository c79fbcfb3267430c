//! High-level circuit builder API.

use std::fmt;

use crate::error::{IrError, IrResult};
use crate::gate::GateKind;
use crate::op::GateOp;
use crate::validate::check_op;

/// A validated quantum circuit: a qubit count plus an ordered gate sequence.
///
/// Every `Circuit` value upholds the same invariants whether it came from
/// [`validate`](crate::validate::validate) or from the builder methods here:
/// each target index lies in `[0, num_qubits)`, target counts match gate
/// arity, and no qubit appears twice within one operation. The op sequence is
/// the application order and is never reordered or simplified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circuit {
    /// Width of the circuit. Positive.
    num_qubits: u32,
    /// Gates in application order.
    ops: Vec<GateOp>,
}

impl Circuit {
    /// Create an empty circuit with the given width.
    pub fn new(num_qubits: u32) -> IrResult<Self> {
        if num_qubits == 0 {
            return Err(IrError::ZeroWidthCircuit);
        }
        Ok(Self {
            num_qubits,
            ops: vec![],
        })
    }

    /// Append an operation, checking it against the circuit width.
    pub fn push(&mut self, op: GateOp) -> IrResult<()> {
        check_op(&op, self.num_qubits)?;
        self.ops.push(op);
        Ok(())
    }

    /// Width of the circuit.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// The ordered gate sequence.
    #[inline]
    pub fn ops(&self) -> &[GateOp] {
        &self.ops
    }

    /// Number of operations in the circuit.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the circuit contains no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: u32) -> IrResult<&mut Self> {
        self.push(GateOp::single(GateKind::H, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: u32) -> IrResult<&mut Self> {
        self.push(GateOp::single(GateKind::X, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: u32) -> IrResult<&mut Self> {
        self.push(GateOp::single(GateKind::Y, qubit))?;
        Ok(self)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: u32) -> IrResult<&mut Self> {
        self.push(GateOp::single(GateKind::Z, qubit))?;
        Ok(self)
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: u32) -> IrResult<&mut Self> {
        self.push(GateOp::single(GateKind::S, qubit))?;
        Ok(self)
    }

    /// Apply S-dagger gate.
    pub fn sdg(&mut self, qubit: u32) -> IrResult<&mut Self> {
        self.push(GateOp::single(GateKind::Sdg, qubit))?;
        Ok(self)
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: u32) -> IrResult<&mut Self> {
        self.push(GateOp::single(GateKind::T, qubit))?;
        Ok(self)
    }

    /// Apply T-dagger gate.
    pub fn tdg(&mut self, qubit: u32) -> IrResult<&mut Self> {
        self.push(GateOp::single(GateKind::Tdg, qubit))?;
        Ok(self)
    }

    // =========================================================================
    // Multi-qubit gates
    // =========================================================================

    /// Apply CNOT gate.
    pub fn cx(&mut self, control: u32, target: u32) -> IrResult<&mut Self> {
        self.push(GateOp::new(GateKind::CX, [control, target]))?;
        Ok(self)
    }

    /// Apply Toffoli gate.
    pub fn ccx(&mut self, control1: u32, control2: u32, target: u32) -> IrResult<&mut Self> {
        self.push(GateOp::new(GateKind::CCX, [control1, control2, target]))?;
        Ok(self)
    }

    // =========================================================================
    // Named circuits
    // =========================================================================

    /// Create a Bell state circuit: H(0), CX(0, 1) on two qubits.
    pub fn bell() -> IrResult<Self> {
        let mut circuit = Self::new(2)?;
        circuit.h(0)?.cx(0, 1)?;
        Ok(circuit)
    }

    /// Create a GHZ state circuit: H(0) followed by CX(0, i) for each
    /// remaining qubit.
    pub fn ghz(num_qubits: u32) -> IrResult<Self> {
        let mut circuit = Self::new(num_qubits)?;
        circuit.h(0)?;
        for i in 1..num_qubits {
            circuit.cx(0, i)?;
        }
        Ok(circuit)
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circuit[{} qubits]", self.num_qubits)?;
        for op in &self.ops {
            write!(f, " {op};")?;
        }
        Ok(())
    }
}
