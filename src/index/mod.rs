/// Index computations for the pollution engine.
///
/// Everything in this tree is a pure function over immutable inputs:
/// no I/O, no shared state, no clocks. Determinism here is what makes
/// repeated evaluation of the same dataset bit-identical.
///
/// Submodules:
/// - `quality`: per-substance quality index (Qi) and limit exceedance.
/// - `hpi`: per-sample aggregation of Qi into the pollution index.
/// - `risk`: classification of an index value into a risk tier.

pub mod hpi;
pub mod quality;
pub mod risk;
