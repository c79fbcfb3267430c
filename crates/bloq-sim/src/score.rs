//! Similarity scoring between probability distributions.
//!
//! Used by the challenge-grading collaborator to compare a submitted
//! circuit's distribution against a target distribution.

use std::collections::BTreeMap;

/// Bhattacharyya coefficient of two probability maps: Σ √(p(k)·q(k)) over
/// the union of outcome keys, clamped to 1.0 to absorb floating overshoot.
///
/// Returns 1.0 for identical distributions and 0.0 for distributions with
/// disjoint support. Keys missing from either map contribute nothing, so
/// iterating one map covers the union.
pub fn bhattacharyya(p: &BTreeMap<String, f64>, q: &BTreeMap<String, f64>) -> f64 {
    let sum: f64 = p
        .iter()
        .map(|(k, &pv)| (pv * q.get(k).copied().unwrap_or(0.0)).sqrt())
        .sum();
    sum.min(1.0)
}
