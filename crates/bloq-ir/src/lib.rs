//! Bloq Circuit Representation
//!
//! This crate provides the data structures for representing quantum circuits
//! in Bloq: the closed [`GateKind`] gate set, [`GateOp`] applications, the
//! validated [`Circuit`] container, and [`validate`] for turning raw
//! circuit-builder input into a `Circuit`.
//!
//! # Overview
//!
//! Circuits arrive from the circuit-builder collaborator as an ordered list
//! of `{gate, targets}` records plus a qubit count. [`validate`] checks every
//! record against the gate table, the gate's arity, and the circuit width,
//! and yields a [`Circuit`] whose invariants the simulation engine relies on.
//! Gate order is the application order; it is never reordered or simplified.
//!
//! # Example: validating builder input
//!
//! ```rust
//! use bloq_ir::{validate, RawGate};
//!
//! let raw = vec![
//!     RawGate::new("h", [0]),
//!     RawGate::new("cnot", [0, 1]), // alias for cx
//! ];
//! let circuit = validate(&raw, 2).unwrap();
//! assert_eq!(circuit.len(), 2);
//! ```
//!
//! # Example: building a Bell state directly
//!
//! ```rust
//! use bloq_ir::Circuit;
//!
//! let mut circuit = Circuit::new(2).unwrap();
//! circuit.h(0).unwrap();
//! circuit.cx(0, 1).unwrap();
//! assert_eq!(circuit, Circuit::bell().unwrap());
//! ```
//!
//! # Supported gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `h` | 1 | Hadamard gate |
//! | `x`, `y`, `z` | 1 | Pauli gates |
//! | `s`, `sdg` | 1 | S and S-dagger gates |
//! | `t`, `tdg` | 1 | T and T-dagger gates |
//! | `cx` (`cnot`) | 2 | Controlled-NOT |
//! | `ccx` (`toffoli`) | 3 | Toffoli |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod op;
pub mod validate;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::GateKind;
pub use op::GateOp;
pub use validate::{RawGate, validate};
