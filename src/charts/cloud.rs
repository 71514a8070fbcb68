//! Word cloud spec for comment keywords.
//!
//! Unlike the other builders, the glyph colors are sampled at build time
//! from an injected RNG, so two builds over the same words differ in color
//! while agreeing on every structural field.

use rand::Rng;
use serde_json::json;

use crate::charts::{pct, ChartSpec};
use crate::transform::DisplayView;

/// Mask shapes the layout engine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloudShape {
    Circle,
    Cardioid,
    Diamond,
    TriangleForward,
    Pentagon,
    Star,
}

impl CloudShape {
    pub const ALL: [CloudShape; 6] = [
        CloudShape::Circle,
        CloudShape::Cardioid,
        CloudShape::Diamond,
        CloudShape::TriangleForward,
        CloudShape::Pentagon,
        CloudShape::Star,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CloudShape::Circle => "circle",
            CloudShape::Cardioid => "cardioid",
            CloudShape::Diamond => "diamond",
            CloudShape::TriangleForward => "triangle-forward",
            CloudShape::Pentagon => "pentagon",
            CloudShape::Star => "star",
        }
    }

    pub fn parse(s: &str) -> Option<CloudShape> {
        CloudShape::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

/// Glyph color pool, sampled uniformly per word.
pub const GLYPH_PALETTE: [&str; 25] = [
    "#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#feca57",
    "#ff9ff3", "#54a0ff", "#5f27cd", "#00d2d3", "#ff9f43",
    "#10ac84", "#ee5a6f", "#60a3bc", "#778ca3", "#4b6584",
    "#f8b500", "#eb4d4b", "#6c5ce7", "#a29bfe", "#fd79a8",
    "#e17055", "#00b894", "#0984e3", "#b2bec3", "#ddd",
];

pub const SIZE_RANGE: [u32; 2] = [14, 80];

/// Weight stays a JSON value because the middle tier is a CSS string.
fn font_weight(value: u64) -> serde_json::Value {
    if value > 100 {
        json!("bold")
    } else if value > 50 {
        json!("600")
    } else {
        json!("normal")
    }
}

/// Word cloud option. `page_total` is the full keyword occurrence total,
/// used for the precomputed tooltip percentage (2 decimals).
pub fn build<R: Rng>(view: &DisplayView, shape: CloudShape, page_total: u64, rng: &mut R) -> ChartSpec {
    let words: Vec<serde_json::Value> = view
        .entries
        .iter()
        .map(|e| {
            let color = GLYPH_PALETTE[rng.gen_range(0..GLYPH_PALETTE.len())];
            json!({
                "name": e.name,
                "value": e.value,
                "percent": pct(e.value, page_total, 2),
                "textStyle": {
                    "color": color,
                    "fontWeight": font_weight(e.value),
                },
            })
        })
        .collect();

    json!({
        "title": {
            "text": "Comment keyword cloud",
            "left": "center",
            "textStyle": { "fontSize": 20, "fontWeight": "bold", "color": "#333" },
        },
        "tooltip": { "trigger": "item", "formatter": "{b}: {c}" },
        "series": [{
            "type": "wordCloud",
            "shape": shape.as_str(),
            "keepAspect": false,
            "left": "center",
            "top": "center",
            "width": "90%",
            "height": "85%",
            "sizeRange": SIZE_RANGE,
            "rotationRange": [-45, 45],
            "rotationStep": 15,
            "gridSize": 8,
            "drawOutOfBound": false,
            "layoutAnimation": true,
            "emphasis": {
                "textStyle": { "shadowBlur": 10, "shadowColor": "rgba(0, 0, 0, 0.3)" },
            },
            "data": words,
        }],
    })
}
