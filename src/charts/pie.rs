//! Radial distribution (donut) spec for regional counts.

use serde_json::json;

use crate::charts::{pct, ChartSpec};
use crate::transform::DisplayView;

/// Positional sector palette, cycled when entries exceed its length.
pub const PALETTE: [&str; 20] = [
    "#5470c6", "#91cc75", "#fac858", "#ee6666", "#73c0de",
    "#3ba272", "#fc8452", "#9a60b4", "#ea7ccc", "#d4a677",
    "#5fb3d4", "#b6a2de", "#ffb248", "#7fbe9e", "#ea9999",
    "#c4b5fd", "#a78bfa", "#8b5cf6", "#7c3aed", "#6d28d9",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Donut option. Sector ordering follows the dataset order; the label
/// percentage is precomputed per sector from the page-level total, 1 decimal.
pub fn build(view: &DisplayView, page_total: u64) -> ChartSpec {
    let sectors: Vec<serde_json::Value> = view
        .entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            json!({
                "name": e.name,
                "value": e.value,
                "percent": pct(e.value, page_total, 1),
                "itemStyle": { "color": palette_color(i) },
            })
        })
        .collect();

    json!({
        "title": {
            "text": "Publish region distribution",
            "left": "center",
            "textStyle": { "fontSize": 24, "fontWeight": "bold", "color": "#333" },
        },
        "tooltip": { "trigger": "item", "formatter": "{b}: {c} ({d}%)" },
        "legend": {
            "type": "scroll",
            "orient": "vertical",
            "right": 10,
            "top": 20,
            "bottom": 20,
            "data": view.names(),
            "textStyle": { "fontSize": 12 },
        },
        "series": [{
            "name": "regions",
            "type": "pie",
            "radius": ["40%", "70%"],
            "center": ["40%", "50%"],
            "avoidLabelOverlap": false,
            "itemStyle": { "borderRadius": 8, "borderColor": "#fff", "borderWidth": 2 },
            "label": { "show": false, "position": "center" },
            "labelLine": { "show": false },
            "emphasis": {
                "label": { "show": true, "fontSize": 20, "fontWeight": "bold" },
                "itemStyle": { "shadowBlur": 10, "shadowColor": "rgba(0, 0, 0, 0.5)" },
            },
            "data": sectors,
        }],
    })
}
