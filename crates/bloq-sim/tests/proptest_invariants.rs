//! Property-based tests for simulation invariants.
//!
//! Tests that arbitrary circuits preserve normalization, that probability
//! distributions sum to one, and that sampled counts always add up to the
//! requested shot count.

use bloq_ir::{Circuit, GateKind, GateOp};
use bloq_sim::{Distribution, Simulator, Statevector, sample};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

const TOL: f64 = 1e-9;

/// Generate a random gate operation for a circuit with the given width.
fn arb_gate_op(num_qubits: u32) -> impl Strategy<Value = GateOp> {
    let single = prop_oneof![
        Just(GateKind::H),
        Just(GateKind::X),
        Just(GateKind::Y),
        Just(GateKind::Z),
        Just(GateKind::S),
        Just(GateKind::Sdg),
        Just(GateKind::T),
        Just(GateKind::Tdg),
    ];
    let one_qubit = (single, 0..num_qubits).prop_map(|(kind, q)| GateOp::single(kind, q));

    if num_qubits < 2 {
        one_qubit.boxed()
    } else if num_qubits < 3 {
        prop_oneof![
            one_qubit,
            (0..num_qubits, 0..num_qubits)
                .prop_filter("control and target must differ", |(c, t)| c != t)
                .prop_map(|(c, t)| GateOp::new(GateKind::CX, [c, t])),
        ]
        .boxed()
    } else {
        prop_oneof![
            one_qubit,
            (0..num_qubits, 0..num_qubits)
                .prop_filter("control and target must differ", |(c, t)| c != t)
                .prop_map(|(c, t)| GateOp::new(GateKind::CX, [c, t])),
            (0..num_qubits, 0..num_qubits, 0..num_qubits)
                .prop_filter("all three qubits must differ", |(a, b, t)| {
                    a != b && a != t && b != t
                })
                .prop_map(|(a, b, t)| GateOp::new(GateKind::CCX, [a, b, t])),
        ]
        .boxed()
    }
}

/// Generate a random circuit: 1-5 qubits, up to 12 gates.
fn arb_circuit() -> impl Strategy<Value = Circuit> {
    (1_u32..=5).prop_flat_map(|num_qubits| {
        prop::collection::vec(arb_gate_op(num_qubits), 0..=12).prop_map(move |ops| {
            let mut circuit = Circuit::new(num_qubits).unwrap();
            for op in ops {
                circuit.push(op).unwrap();
            }
            circuit
        })
    })
}

proptest! {
    /// Every gate is unitary, so any circuit leaves the state normalized.
    #[test]
    fn test_circuits_preserve_norm(circuit in arb_circuit()) {
        let state = Statevector::run(&circuit);
        prop_assert!((state.norm_sqr() - 1.0).abs() < TOL,
            "norm drifted: {}", state.norm_sqr());
        prop_assert!(state.validate().is_ok());
    }

    /// The probability distribution of any reachable state sums to one,
    /// before and after pruning.
    #[test]
    fn test_probabilities_sum_to_one(circuit in arb_circuit()) {
        let state = Statevector::run(&circuit);
        let dist = Distribution::from_state(&state);

        prop_assert!((dist.sum() - 1.0).abs() < TOL);
        let pruned: f64 = dist.to_map_pruned(bloq_sim::PRUNE_EPSILON).values().sum();
        prop_assert!((pruned - 1.0).abs() < TOL);
    }

    /// Sampled counts sum exactly to the requested shot count, whatever the
    /// circuit and however awkward the shot number.
    #[test]
    fn test_counts_sum_exactly_to_shots(
        circuit in arb_circuit(),
        shots in 0_u32..=2048,
        seed in any::<u64>(),
    ) {
        let state = Statevector::run(&circuit);
        let dist = Distribution::from_state(&state);
        let mut rng = StdRng::seed_from_u64(seed);

        let counts = sample(&dist, shots, &mut rng);
        prop_assert_eq!(counts.total(), u64::from(shots));
    }

    /// X is self-inverse: applying it twice to any reachable state is the
    /// identity.
    #[test]
    fn test_double_x_is_identity(circuit in arb_circuit(), qubit_seed in any::<u32>()) {
        let qubit = qubit_seed % circuit.num_qubits();
        let mut state = Statevector::run(&circuit);
        let before = state.amplitudes().to_vec();

        state.apply(&GateOp::single(GateKind::X, qubit));
        state.apply(&GateOp::single(GateKind::X, qubit));

        for (a, b) in state.amplitudes().iter().zip(&before) {
            prop_assert!((a - b).norm() < TOL);
        }
    }

    /// Bloch coordinates stay inside the unit ball's bounding box.
    #[test]
    fn test_bloch_coordinates_in_range(circuit in arb_circuit()) {
        let state = Statevector::run(&circuit);
        for b in bloq_sim::bloch_vectors(&state) {
            prop_assert!((-1.0..=1.0).contains(&b.x));
            prop_assert!((-1.0..=1.0).contains(&b.y));
            prop_assert!((-1.0..=1.0).contains(&b.z));
        }
    }

    /// The last step of a step-through run matches the full run exactly.
    #[test]
    fn test_final_step_matches_full_run(circuit in arb_circuit(), seed in any::<u64>()) {
        let sim = Simulator::new().with_seed(seed);

        let steps = sim.run_steps(&circuit, 32).unwrap();
        let full = sim.run(&circuit, 32).unwrap();

        prop_assert_eq!(steps.steps.len(), circuit.len() + 1);
        let last = steps.steps.last().unwrap();
        prop_assert_eq!(&last.statevector, &full.statevector);
        prop_assert_eq!(&last.probabilities, &full.probabilities);
        prop_assert_eq!(&last.bloch_coords, &full.bloch_coords);
    }
}
