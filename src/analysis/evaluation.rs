/// Dataset evaluation: raw samples in, indexed and classified results out.
///
/// One pass over the input, no mutation of it, no I/O. Evaluating the
/// same dataset against the same limit table twice yields bit-identical
/// output, element for element.
///
/// # Error policy
/// Results are partitioned. Well-formed samples succeed; a sample that
/// cannot be evaluated lands in `failures` with the error that stopped
/// it, and its siblings are unaffected. One bad row in a field campaign's
/// spreadsheet must not discard the rest, and must not vanish silently
/// either; consumers can always tell "Low risk" apart from "could not
/// be evaluated".

use crate::index::hpi::{compute_quality_breakdown, hpi_from_breakdown};
use crate::index::quality::exceeds_limit;
use crate::index::risk::{classify_risk, RiskTier};
use crate::limits::LimitTable;
use crate::model::{EngineError, SampleEvaluation, SampleFailure, SampleRecord};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Outcome of evaluating a whole dataset: successes and failures, each in
/// input order, plus aggregate counts.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetEvaluation {
    pub evaluations: Vec<SampleEvaluation>,
    pub failures: Vec<SampleFailure>,
    pub summary: EvaluationSummary,
}

/// Aggregate counts over one evaluation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub total: usize,
    pub evaluated: usize,
    pub failed: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Evaluates every sample in the dataset against the limit table.
///
/// The limit table has already been validated at construction, so the
/// configuration cannot fail mid-batch; only per-sample data problems
/// can. Both partitions preserve input order, and every result carries
/// its original row index so consumers can reassemble the sequence.
pub fn evaluate_dataset(samples: &[SampleRecord], limits: &LimitTable) -> DatasetEvaluation {
    let mut evaluations = Vec::new();
    let mut failures = Vec::new();

    for (row, sample) in samples.iter().enumerate() {
        match evaluate_sample(row, sample, limits) {
            Ok(evaluation) => evaluations.push(evaluation),
            Err(error) => failures.push(SampleFailure {
                sample_id: sample.sample_id.clone(),
                row,
                error,
            }),
        }
    }

    let summary = summarize(samples.len(), &evaluations, &failures);
    DatasetEvaluation {
        evaluations,
        failures,
        summary,
    }
}

/// Evaluates one sample: quality breakdown, index, tier, exceedances.
fn evaluate_sample(
    row: usize,
    sample: &SampleRecord,
    limits: &LimitTable,
) -> Result<SampleEvaluation, EngineError> {
    let quality_indices = compute_quality_breakdown(sample, limits)?;
    let hpi = hpi_from_breakdown(&quality_indices);
    let tier = classify_risk(hpi)?;

    // Breakdown success means every monitored concentration is present and
    // finite, so the lookups below cannot miss.
    let mut exceedances = Vec::new();
    for (substance, limit) in limits.iter() {
        if let Some(&concentration) = sample.concentrations.get(substance) {
            if exceeds_limit(concentration, limit) {
                exceedances.push(substance.to_string());
            }
        }
    }

    Ok(SampleEvaluation {
        sample_id: sample.sample_id.clone(),
        row,
        hpi,
        tier,
        quality_indices,
        exceedances,
    })
}

fn summarize(
    total: usize,
    evaluations: &[SampleEvaluation],
    failures: &[SampleFailure],
) -> EvaluationSummary {
    let mut summary = EvaluationSummary {
        total,
        evaluated: evaluations.len(),
        failed: failures.len(),
        low: 0,
        medium: 0,
        high: 0,
    };
    for evaluation in evaluations {
        match evaluation.tier {
            RiskTier::Low => summary.low += 1,
            RiskTier::Medium => summary.medium += 1,
            RiskTier::High => summary.high += 1,
        }
    }
    summary
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
