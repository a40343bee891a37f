/// Regulatory limit tables and their TOML configuration format.
///
/// A `LimitTable` is the immutable mapping from substance id to maximum
/// permissible concentration that every index computation runs against.
/// Validation happens once, at construction: a table that exists is a
/// table whose limits are all positive and finite. Per-sample evaluation
/// never re-checks limits.
///
/// Monitoring deployments override the WHO defaults with a TOML file:
///
/// ```toml
/// [limits]
/// arsenic = 0.01
/// cadmium = 0.003
/// ```

use crate::model::EngineError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::error::Error;

// ---------------------------------------------------------------------------
// Limit table
// ---------------------------------------------------------------------------

/// Immutable, validated mapping from substance id to a positive permissible
/// concentration. The set of keys defines which dataset columns the engine
/// consumes.
///
/// Backed by a `BTreeMap`, so iteration order (and therefore which missing
/// substance an `IncompleteSample` error names first) is deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct LimitTable {
    limits: BTreeMap<String, f64>,
}

impl LimitTable {
    /// Validates and wraps a limit mapping.
    ///
    /// Fails with `InvalidLimit` on the first zero, negative, or non-finite
    /// threshold, and with `EmptyLimitTable` when there is nothing to
    /// monitor. Checked here, once, so evaluation can start on a large
    /// dataset knowing the configuration is sound.
    pub fn new(limits: BTreeMap<String, f64>) -> Result<Self, EngineError> {
        if limits.is_empty() {
            return Err(EngineError::EmptyLimitTable);
        }
        for (substance, &limit) in &limits {
            if !limit.is_finite() || limit <= 0.0 {
                return Err(EngineError::InvalidLimit {
                    substance: substance.clone(),
                    limit,
                });
            }
        }
        Ok(Self { limits })
    }

    /// Returns the permissible concentration for a substance, or `None` if
    /// the substance is not monitored by this table.
    pub fn limit_for(&self, substance: &str) -> Option<f64> {
        self.limits.get(substance).copied()
    }

    /// Iterates `(substance id, limit)` pairs in sorted id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.limits.iter().map(|(id, &limit)| (id.as_str(), limit))
    }

    /// Substance ids monitored by this table, in sorted order.
    pub fn substance_ids(&self) -> Vec<&str> {
        self.limits.keys().map(String::as_str).collect()
    }

    /// Number of monitored substances. Always at least one.
    pub fn len(&self) -> usize {
        self.limits.len()
    }
}

// ---------------------------------------------------------------------------
// TOML configuration
// ---------------------------------------------------------------------------

/// On-disk shape of a limits configuration file.
#[derive(Debug, Deserialize)]
struct LimitsFile {
    limits: BTreeMap<String, f64>,
}

/// Parses a limits configuration from TOML text and validates it.
pub fn parse_limits(toml_text: &str) -> Result<LimitTable, Box<dyn Error>> {
    let file: LimitsFile = toml::from_str(toml_text)?;
    let table = LimitTable::new(file.limits)?;
    Ok(table)
}

/// Loads and validates a limits configuration file, e.g. `./limits.toml`.
pub fn load_limits(path: &str) -> Result<LimitTable, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read limits file {}: {}", path, e))?;
    parse_limits(&text)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
