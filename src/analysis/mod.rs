/// Batch analysis for the pollution index engine.
///
/// This module turns whole datasets into per-sample results. Descriptive
/// statistics, clustering, and visualization are handled by external
/// consumers that read the evaluation output.
///
/// Submodules:
/// - `evaluation`: single-pass dataset evaluation with partitioned results.

pub mod evaluation;
