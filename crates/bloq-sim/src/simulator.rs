//! Simulation orchestration: full runs and step-through playback.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

use bloq_ir::{Circuit, RawGate, validate};

use crate::error::{SimError, SimResult};
use crate::observable::{Distribution, PRUNE_EPSILON, bloch_vectors};
use crate::result::{SimulationOutput, StepOutput};
use crate::sample::sample;
use crate::statevector::Statevector;

/// Default qubit ceiling. 2^24 amplitudes is 256 MiB of complex numbers;
/// beyond that memory, not the algorithm, is what gives out.
pub const DEFAULT_MAX_QUBITS: u32 = 24;

/// Statevector simulator.
///
/// Stateless across calls: each run allocates one statevector, owns it
/// exclusively, and drops it when done, so concurrent runs share nothing and
/// need no locking. The width bound is enforced before allocation.
#[derive(Debug, Clone)]
pub struct Simulator {
    /// Maximum circuit width accepted.
    max_qubits: u32,
    /// Optional RNG seed for reproducible measurement sampling.
    seed: Option<u64>,
}

impl Simulator {
    /// Create a simulator with the default qubit ceiling.
    pub fn new() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
            seed: None,
        }
    }

    /// Create a simulator with a custom qubit ceiling.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            max_qubits,
            seed: None,
        }
    }

    /// Use a fixed RNG seed so measurement sampling is reproducible.
    ///
    /// Without a seed every call draws from entropy; reproducibility across
    /// calls is opt-in configuration, not the default.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run a full simulation: statevector, probabilities, Bloch
    /// coordinates, and sampled measurement counts.
    #[instrument(skip(self, circuit))]
    pub fn run(&self, circuit: &Circuit, shots: u32) -> SimResult<SimulationOutput> {
        self.check_width(circuit)?;
        debug!(
            num_qubits = circuit.num_qubits(),
            ops = circuit.len(),
            shots,
            "starting simulation"
        );

        let state = Statevector::run(circuit);
        let mut rng = self.rng();
        let output = snapshot(&state, shots, &mut rng)?;

        debug!("simulation completed");
        Ok(output)
    }

    /// Validate raw circuit-builder input and run it.
    ///
    /// Validation fully precedes simulation: an invalid gate sequence fails
    /// here before any state is allocated.
    pub fn run_raw(&self, raw: &[RawGate], num_qubits: u32, shots: u32) -> SimResult<SimulationOutput> {
        let circuit = validate(raw, num_qubits)?;
        self.run(&circuit, shots)
    }

    /// Run the circuit gate by gate for step-through animation.
    ///
    /// Returns one output for the empty prefix and one after each gate
    /// (`steps.len() == circuit.len() + 1`). A single statevector is
    /// advanced incrementally — apply gate i, extract, continue — so the
    /// whole pass costs O(N · 2^n) instead of re-running every prefix from
    /// scratch. The final step is identical to the full-circuit result.
    #[instrument(skip(self, circuit))]
    pub fn run_steps(&self, circuit: &Circuit, shots: u32) -> SimResult<StepOutput> {
        self.check_width(circuit)?;
        debug!(
            num_qubits = circuit.num_qubits(),
            ops = circuit.len(),
            shots,
            "starting step simulation"
        );

        let mut rng = self.rng();
        let mut state = Statevector::new(circuit.num_qubits() as usize);
        let mut steps = Vec::with_capacity(circuit.len() + 1);

        steps.push(snapshot(&state, shots, &mut rng)?);
        for op in circuit.ops() {
            state.apply(op);
            steps.push(snapshot(&state, shots, &mut rng)?);
        }

        Ok(StepOutput {
            steps,
            gates: circuit.ops().to_vec(),
        })
    }

    fn check_width(&self, circuit: &Circuit) -> SimResult<()> {
        if circuit.num_qubits() > self.max_qubits {
            return Err(SimError::CircuitTooLarge {
                num_qubits: circuit.num_qubits(),
                max_qubits: self.max_qubits,
            });
        }
        Ok(())
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the full output for the current state.
///
/// The state becomes read-only once extraction begins; numeric invariants
/// are checked first so a defective state is reported, never serialized.
fn snapshot(state: &Statevector, shots: u32, rng: &mut StdRng) -> SimResult<SimulationOutput> {
    state.validate()?;
    let dist = Distribution::from_state(state);
    let measurement_counts = sample(&dist, shots, rng);

    Ok(SimulationOutput {
        statevector: state.amplitudes().iter().map(|a| [a.re, a.im]).collect(),
        probabilities: dist.to_map_pruned(PRUNE_EPSILON),
        bloch_coords: bloch_vectors(state),
        measurement_counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_run_bell() {
        let output = Simulator::new()
            .with_seed(11)
            .run(&Circuit::bell().unwrap(), 1000)
            .unwrap();

        assert_eq!(output.statevector.len(), 4);
        assert!((output.probabilities["00"] - 0.5).abs() < TOL);
        assert!((output.probabilities["11"] - 0.5).abs() < TOL);
        assert_eq!(output.measurement_counts.total(), 1000);
        assert_eq!(output.bloch_coords.len(), 2);
    }

    #[test]
    fn test_run_empty_circuit() {
        let circuit = Circuit::new(2).unwrap();
        let output = Simulator::new().with_seed(0).run(&circuit, 16).unwrap();

        assert_eq!(output.statevector[0], [1.0, 0.0]);
        assert!((output.probabilities["00"] - 1.0).abs() < TOL);
        assert_eq!(output.measurement_counts.get("00"), 16);
    }

    #[test]
    fn test_run_raw_validates_first() {
        let raw = vec![RawGate::new("nope", [0])];
        let err = Simulator::new().run_raw(&raw, 1, 10).unwrap_err();
        assert!(matches!(err, SimError::Ir(_)));
    }

    #[test]
    fn test_too_many_qubits_rejected() {
        let circuit = Circuit::new(10).unwrap();
        let err = Simulator::with_max_qubits(5).run(&circuit, 10).unwrap_err();
        assert!(matches!(
            err,
            SimError::CircuitTooLarge {
                num_qubits: 10,
                max_qubits: 5
            }
        ));
    }

    #[test]
    fn test_steps_length_and_final_state() {
        let circuit = Circuit::ghz(3).unwrap();
        let sim = Simulator::new().with_seed(5);
        let steps = sim.run_steps(&circuit, 128).unwrap();

        assert_eq!(steps.steps.len(), circuit.len() + 1);
        assert_eq!(steps.gates.len(), circuit.len());

        // The final step matches the full-circuit result (modulo sampling,
        // which uses a different RNG position, so compare the exact parts).
        let full = sim.run(&circuit, 128).unwrap();
        let last = steps.steps.last().unwrap();
        assert_eq!(last.statevector, full.statevector);
        assert_eq!(last.probabilities, full.probabilities);
        assert_eq!(last.bloch_coords, full.bloch_coords);
    }

    #[test]
    fn test_steps_start_at_all_zero() {
        let circuit = Circuit::bell().unwrap();
        let steps = Simulator::new().with_seed(3).run_steps(&circuit, 64).unwrap();

        let first = &steps.steps[0];
        assert!((first.probabilities["00"] - 1.0).abs() < TOL);
        assert_eq!(first.measurement_counts.get("00"), 64);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let circuit = Circuit::bell().unwrap();
        let a = Simulator::new().with_seed(21).run(&circuit, 512).unwrap();
        let b = Simulator::new().with_seed(21).run(&circuit, 512).unwrap();
        assert_eq!(a, b);
    }
}
