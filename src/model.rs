/// Core data types for the heavy-metal pollution index engine.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic and no I/O, only types and their serde derives.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Substance identifiers
// ---------------------------------------------------------------------------

/// Canonical substance id for arsenic (As), measured in mg/L.
pub const SUBSTANCE_ARSENIC: &str = "arsenic";

/// Canonical substance id for cadmium (Cd), measured in mg/L.
pub const SUBSTANCE_CADMIUM: &str = "cadmium";

/// Canonical substance id for chromium (Cr), measured in mg/L.
pub const SUBSTANCE_CHROMIUM: &str = "chromium";

/// Canonical substance id for lead (Pb), measured in mg/L.
pub const SUBSTANCE_LEAD: &str = "lead";

// ---------------------------------------------------------------------------
// Sample types
// ---------------------------------------------------------------------------

/// One row of the input dataset: a labelled river-water sample with one
/// measured concentration per monitored substance.
///
/// The label is typically unique ("Pra River at Twifo Praso") but the engine
/// does not require it to be; the row index recorded on results
/// disambiguates duplicates.
///
/// A substance missing from `concentrations` is an absent measurement.
/// A present but non-finite value (NaN propagated from a blank spreadsheet
/// cell upstream) is treated identically to an absent one; a missing
/// measurement is never conflated with a zero concentration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRecord {
    pub sample_id: String,
    /// Substance id → measured concentration, in the same unit as the
    /// corresponding regulatory limit (mg/L for the WHO registry).
    pub concentrations: BTreeMap<String, f64>,
}

impl SampleRecord {
    pub fn new(sample_id: impl Into<String>, concentrations: BTreeMap<String, f64>) -> Self {
        Self {
            sample_id: sample_id.into(),
            concentrations,
        }
    }
}

// ---------------------------------------------------------------------------
// Evaluation result types
// ---------------------------------------------------------------------------

/// Successful evaluation of a single sample.
///
/// `row` is the sample's position in the input dataset, so consumers can
/// reassemble the original order after successes and failures have been
/// partitioned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleEvaluation {
    pub sample_id: String,
    pub row: usize,
    /// Health Pollution Index: mean of the per-substance quality indices.
    pub hpi: f64,
    pub tier: crate::index::risk::RiskTier,
    /// Per-substance quality index (Qi) breakdown, for auditability.
    pub quality_indices: BTreeMap<String, f64>,
    /// Substance ids whose concentration strictly exceeds the regulatory
    /// limit, in deterministic (sorted) order.
    pub exceedances: Vec<String>,
}

/// A sample that could not be evaluated, with the error that stopped it.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleFailure {
    pub sample_id: String,
    pub row: usize,
    pub error: EngineError,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when validating limits or evaluating samples.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A regulatory limit that is zero, negative, or non-finite. Fatal to
    /// any computation using that substance; caught at limit-table
    /// construction, before any sample is processed.
    InvalidLimit { substance: String, limit: f64 },
    /// A limit table with no substances at all. A mean over zero quality
    /// indices is undefined, so this is rejected up front.
    EmptyLimitTable,
    /// A sample missing a required substance concentration (absent key or
    /// non-finite value). Reported per sample; sibling samples still
    /// evaluate.
    IncompleteSample { sample: String, substance: String },
    /// A negative or non-finite index reached risk classification. With
    /// non-negative concentrations and positive limits this is unreachable;
    /// treat it as a defect signal, not bad user input.
    InvalidIndex(f64),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidLimit { substance, limit } => {
                write!(f, "Invalid limit for {}: {} (must be > 0)", substance, limit)
            }
            EngineError::EmptyLimitTable => write!(f, "Limit table contains no substances"),
            EngineError::IncompleteSample { sample, substance } => {
                write!(f, "Sample '{}' is missing a {} measurement", sample, substance)
            }
            EngineError::InvalidIndex(hpi) => {
                write!(f, "Index {} is outside the valid range (>= 0)", hpi)
            }
        }
    }
}

impl std::error::Error for EngineError {}
