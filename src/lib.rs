//! Heavy-metal pollution index engine for river water quality monitoring.
//!
//! Takes a tabular dataset of river samples (one measured concentration per
//! monitored heavy metal) plus a regulatory limit table, and produces a
//! per-sample Health Pollution Index (HPI), a Low/Medium/High risk tier,
//! a per-substance quality-index breakdown, and an aggregate summary.
//!
//! Dataset acquisition (spreadsheets, databases) and presentation (charts,
//! dashboards) are external collaborators. Nothing in this crate performs
//! I/O except the limit-table configuration loader and the optional logger.

pub mod analysis;
pub mod index;
pub mod limits;
pub mod logging;
pub mod model;
pub mod report;
pub mod substances;

pub use analysis::evaluation::{evaluate_dataset, DatasetEvaluation, EvaluationSummary};
pub use index::hpi::compute_hpi;
pub use index::quality::compute_quality_index;
pub use index::risk::{classify_risk, RiskTier};
pub use limits::LimitTable;
pub use model::{EngineError, SampleEvaluation, SampleFailure, SampleRecord};
