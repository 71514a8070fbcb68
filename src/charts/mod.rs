//! Declarative chart configuration builders.
//!
//! Each builder turns a display view (or a backend-supplied series) plus
//! view parameters into an ECharts option tree as a `serde_json::Value`.
//! Specs are always rebuilt from scratch — the renderer is expected to
//! replace the previous option wholesale (notMerge), never merge into it —
//! and building from empty input yields a valid empty spec, never an error.
//!
//! ECharts formatter callbacks cannot travel as JSON, so anything a
//! callback would compute (per-bar colors, tooltip percentages) is
//! precomputed here and carried inside the data items.

pub mod bar;
pub mod cloud;
pub mod line;
pub mod pie;

pub type ChartSpec = serde_json::Value;

/// Percentage of `value` against `total`, rounded to `decimals` places.
/// A zero total yields 0.0 rather than NaN.
pub(crate) fn pct(value: u64, total: u64, decimals: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let scale = 10f64.powi(decimals as i32);
    (value as f64 / total as f64 * 100.0 * scale).round() / scale
}
