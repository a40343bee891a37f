/// Health Pollution Index (HPI) aggregation.
///
/// The HPI of a sample is the arithmetic mean of its quality indices
/// across every substance in the limit table. The limit table, not the
/// sample, decides which substances participate: extra dataset columns
/// (pH, TDS, hardness) are simply ignored.
///
/// # Missing data
/// Aggregation fails closed. Averaging over fewer substances than the
/// table names would silently change what the index means, so a sample
/// missing any required measurement yields `IncompleteSample` instead of
/// a biased mean. The error names the first missing substance in sorted
/// order, deterministically.

use crate::index::quality::compute_quality_index;
use crate::limits::LimitTable;
use crate::model::{EngineError, SampleRecord};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Computes the per-substance quality index breakdown for one sample,
/// covering exactly the substances in the limit table.
///
/// A substance whose concentration is absent, or present but non-finite,
/// fails the whole sample with `IncompleteSample`.
pub fn compute_quality_breakdown(
    sample: &SampleRecord,
    limits: &LimitTable,
) -> Result<BTreeMap<String, f64>, EngineError> {
    let mut breakdown = BTreeMap::new();
    for (substance, limit) in limits.iter() {
        let concentration = match sample.concentrations.get(substance) {
            Some(&c) if c.is_finite() => c,
            _ => {
                return Err(EngineError::IncompleteSample {
                    sample: sample.sample_id.clone(),
                    substance: substance.to_string(),
                });
            }
        };
        let qi = compute_quality_index(substance, concentration, limit)?;
        breakdown.insert(substance.to_string(), qi);
    }
    Ok(breakdown)
}

/// Computes the HPI for one sample: the mean of its quality indices over
/// every substance in the limit table.
///
/// Deterministic and order-independent; monotonically non-decreasing in
/// any single concentration with the others held fixed. With non-negative
/// concentrations the result is >= 0, and 0 only when every concentration
/// is exactly 0.
pub fn compute_hpi(sample: &SampleRecord, limits: &LimitTable) -> Result<f64, EngineError> {
    let breakdown = compute_quality_breakdown(sample, limits)?;
    Ok(hpi_from_breakdown(&breakdown))
}

/// Collapses a quality-index breakdown into the HPI mean.
///
/// The breakdown must be non-empty; breakdowns produced against a table
/// from `LimitTable::new` always are.
pub fn hpi_from_breakdown(breakdown: &BTreeMap<String, f64>) -> f64 {
    let sum: f64 = breakdown.values().sum();
    sum / breakdown.len() as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
