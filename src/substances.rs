///substance registry, the WHO guideline values live here
/// a map of substance ids to metadata (name, symbol, unit, WHO guideline limit).
/// The registry is the single source of truth for default limits; other modules build limit tables from here rather than hardcoding values.
/// Monitored-substance registry for river-water heavy-metal monitoring.
///
/// Defines the canonical list of heavy metals evaluated by this engine,
/// along with their metadata and WHO drinking-water guideline limits.
/// The engine itself accepts any limit table; this registry only supplies
/// the defaults.

use crate::limits::LimitTable;
use crate::model::EngineError;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Substance ids (re-exported here for use in dataset column mapping)
// ---------------------------------------------------------------------------

pub use crate::model::{
    SUBSTANCE_ARSENIC, SUBSTANCE_CADMIUM, SUBSTANCE_CHROMIUM, SUBSTANCE_LEAD,
};

// ---------------------------------------------------------------------------
// Substance metadata
// ---------------------------------------------------------------------------

/// Metadata for a single monitored substance.
pub struct Substance {
    /// Lowercase ASCII identifier, used as the dataset column key.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Chemical symbol.
    pub symbol: &'static str,
    /// Measurement unit shared by concentrations and the guideline limit.
    pub unit: &'static str,
    /// WHO drinking-water guideline limit, in `unit`.
    pub who_limit: f64,
    /// Human-readable description of the substance's health relevance.
    pub description: &'static str,
}

/// All heavy metals monitored for river pollution risk, in the column
/// order field-campaign spreadsheets report them.
///
/// Sources:
///   - Guideline values: WHO Guidelines for Drinking-water Quality, 4th ed.
///   - Monitoring focus: metals mobilized by alluvial gold mining (galamsey)
///     in West African river basins.
pub static SUBSTANCE_REGISTRY: &[Substance] = &[
    Substance {
        id: SUBSTANCE_ARSENIC,
        name: "Arsenic",
        symbol: "As",
        unit: "mg/L",
        who_limit: 0.01,
        description: "Released by ore processing and mine tailings. Chronic \
                      exposure causes skin lesions and is carcinogenic.",
    },
    Substance {
        id: SUBSTANCE_CADMIUM,
        name: "Cadmium",
        symbol: "Cd",
        unit: "mg/L",
        who_limit: 0.003,
        description: "Accumulates in the kidneys; the strictest guideline of \
                      the monitored metals. Mobilized from sulfide ores.",
    },
    Substance {
        id: SUBSTANCE_CHROMIUM,
        name: "Chromium",
        symbol: "Cr",
        unit: "mg/L",
        who_limit: 0.05,
        description: "Total chromium guideline; the hexavalent form is the \
                      toxic concern. Often the widest-ranging metal in \
                      mining-impacted samples.",
    },
    Substance {
        id: SUBSTANCE_LEAD,
        name: "Lead",
        symbol: "Pb",
        unit: "mg/L",
        who_limit: 0.01,
        description: "Neurotoxic at low doses, with no safe exposure level \
                      in children. Persistently high in sediment near \
                      dredging sites.",
    },
];

/// Returns the ids of all monitored substances as a `Vec<&str>`, suitable
/// for mapping dataset columns onto registry entries.
pub fn all_substance_ids() -> Vec<&'static str> {
    SUBSTANCE_REGISTRY.iter().map(|s| s.id).collect()
}

/// Looks up a substance by id. Returns `None` if not found.
pub fn find_substance(id: &str) -> Option<&'static Substance> {
    SUBSTANCE_REGISTRY.iter().find(|s| s.id == id)
}

/// Builds the default limit table from the WHO guideline values in the
/// registry. The table passes the same validation as any user-supplied one.
pub fn who_limit_table() -> Result<LimitTable, EngineError> {
    let mut limits = BTreeMap::new();
    for substance in SUBSTANCE_REGISTRY {
        limits.insert(substance.id.to_string(), substance.who_limit);
    }
    LimitTable::new(limits)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
