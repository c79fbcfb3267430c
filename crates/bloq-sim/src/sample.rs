//! Measurement sampling from a probability distribution.

use rand::Rng;

use crate::observable::Distribution;
use crate::result::Counts;
use crate::statevector::bitstring;

/// Draw `shots` independent measurement outcomes from a distribution.
///
/// Each shot draws one uniform value in [0, 1) and selects the first outcome
/// whose cumulative probability exceeds it, scanning outcomes in ascending
/// integer order (the fixed tie-break order). The last outcome absorbs any
/// floating-point residue, so the returned counts sum exactly to `shots`.
///
/// Reproducibility is the caller's choice: pass a seeded RNG for
/// deterministic samples, or a thread RNG for fresh ones.
pub fn sample<R: Rng + ?Sized>(dist: &Distribution, shots: u32, rng: &mut R) -> Counts {
    let probs = dist.probs();
    let mut counts = Counts::new();
    for _ in 0..shots {
        let r: f64 = rng.r#gen();

        let mut outcome = probs.len() - 1;
        let mut cumulative = 0.0;
        for (k, p) in probs.iter().enumerate() {
            cumulative += p;
            if r < cumulative {
                outcome = k;
                break;
            }
        }
        counts.add(bitstring(outcome, dist.num_qubits()), 1);
    }
    counts
}
