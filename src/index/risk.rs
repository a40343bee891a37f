//! Risk tier classification.
//!
//! Maps a pollution index onto the three-tier public-health scale used by
//! downstream reporting. The tier boundaries are fixed domain policy with
//! public-health consequence, shared by every consumer of the engine;
//! they are constants here, not configuration.

use crate::model::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Tiers
// ---------------------------------------------------------------------------

/// Pollution risk tiers, in ascending order of severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskTier::Low => write!(f, "Low"),
            RiskTier::Medium => write!(f, "Medium"),
            RiskTier::High => write!(f, "High"),
        }
    }
}

/// Highest index still classified Low.
pub const LOW_CEILING: f64 = 50.0;

/// Highest index still classified Medium. Above this is High.
pub const MEDIUM_CEILING: f64 = 100.0;

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classifies a pollution index into a risk tier.
///
/// Boundaries are inclusive on the lower tier:
///   hpi <= 50          →  Low
///   50 < hpi <= 100    →  Medium
///   hpi > 100          →  High
/// An index of exactly 50 is Low and exactly 100 is Medium.
///
/// A negative or non-finite index fails with `InvalidIndex`. Valid inputs
/// cannot produce one, so seeing this error means a defect upstream, not
/// a bad sample.
pub fn classify_risk(hpi: f64) -> Result<RiskTier, EngineError> {
    if !hpi.is_finite() || hpi < 0.0 {
        return Err(EngineError::InvalidIndex(hpi));
    }
    let tier = if hpi <= LOW_CEILING {
        RiskTier::Low
    } else if hpi <= MEDIUM_CEILING {
        RiskTier::Medium
    } else {
        RiskTier::High
    };
    Ok(tier)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
