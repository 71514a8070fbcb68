//! Ranked horizontal bar spec for topic counts.

use serde_json::json;

use crate::charts::{pct, ChartSpec};
use crate::transform::DisplayView;

/// Rank gradient, hottest to coldest.
pub const RANK_GRADIENT: [&str; 6] = [
    "#ff4d4f", // red - top rank
    "#fa8c16", // orange
    "#faad14", // yellow
    "#52c41a", // green
    "#1890ff", // blue
    "#722ed1", // purple - bottom rank
];

/// Gradient color for the bar at `index` (0 = highest value) among `len`
/// displayed bars. The bucket is `floor(index / len * 6)`, so the color
/// depends on relative rank within the current display, not on the raw
/// value: the same value can recolor when the display count changes.
pub fn rank_color(index: usize, len: usize) -> &'static str {
    if len == 0 {
        return RANK_GRADIENT[0];
    }
    let bucket = index * RANK_GRADIENT.len() / len;
    RANK_GRADIENT[bucket.min(RANK_GRADIENT.len() - 1)]
}

/// Horizontal bar option. Categories and values are reversed so the largest
/// value renders at the top; the tooltip percentage is precomputed per bar
/// from the page-level total, 2 decimals.
pub fn build(view: &DisplayView, page_total: u64) -> ChartSpec {
    let len = view.len();
    let mut names: Vec<&str> = view.names();
    let mut bars: Vec<serde_json::Value> = view
        .entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            json!({
                "name": e.name,
                "value": e.value,
                "percent": pct(e.value, page_total, 2),
                "itemStyle": {
                    "color": rank_color(i, len),
                    "borderRadius": [0, 4, 4, 0],
                },
            })
        })
        .collect();
    names.reverse();
    bars.reverse();

    json!({
        "title": {
            "text": format!("Topic distribution (top {})", len),
            "left": "center",
            "textStyle": { "fontSize": 18, "fontWeight": "bold", "color": "#333" },
        },
        "tooltip": {
            "trigger": "axis",
            "axisPointer": { "type": "shadow" },
        },
        "grid": { "left": "15%", "right": "8%", "top": "10%", "bottom": "8%", "containLabel": true },
        "xAxis": {
            "type": "value",
            "name": "count",
            "splitLine": { "lineStyle": { "type": "dashed", "color": "#eee" } },
        },
        "yAxis": {
            "type": "category",
            "data": names,
            "axisLabel": { "fontSize": 11, "width": 100, "overflow": "truncate" },
            "axisTick": { "show": false },
        },
        "series": [{
            "type": "bar",
            "data": bars,
            "label": { "show": true, "position": "right", "fontSize": 11, "formatter": "{c}" },
            "emphasis": { "itemStyle": { "shadowBlur": 10, "shadowColor": "rgba(0,0,0,0.3)" } },
        }],
        "animationEasing": "elasticOut",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::NamedValue;
    use crate::transform::derive_display;

    fn view_of(n: usize) -> DisplayView {
        let data: Vec<NamedValue> = (0..n)
            .map(|i| NamedValue::new(format!("theme-{}", i), (n - i) as u64 * 10))
            .collect();
        derive_display(&data, "", n)
    }

    #[test]
    fn test_rank_color_buckets() {
        // 12 bars: two per bucket.
        assert_eq!(rank_color(0, 12), RANK_GRADIENT[0]);
        assert_eq!(rank_color(1, 12), RANK_GRADIENT[0]);
        assert_eq!(rank_color(2, 12), RANK_GRADIENT[1]);
        assert_eq!(rank_color(11, 12), RANK_GRADIENT[5]);
    }

    #[test]
    fn test_rank_color_depends_on_display_size() {
        // Same index, different display lengths, different color.
        assert_eq!(rank_color(3, 24), RANK_GRADIENT[0]);
        assert_eq!(rank_color(3, 6), RANK_GRADIENT[3]);
    }

    #[test]
    fn test_rank_color_clamps_last_bucket() {
        assert_eq!(rank_color(5, 5), RANK_GRADIENT[5]);
        assert_eq!(rank_color(0, 0), RANK_GRADIENT[0]);
    }

    #[test]
    fn test_bar_spec_reverses_for_render() {
        let spec = build(&view_of(3), 100);
        let cats = spec["yAxis"]["data"].as_array().unwrap();
        // Largest value last, so it renders at the top of the axis.
        assert_eq!(cats.first().unwrap(), "theme-2");
        assert_eq!(cats.last().unwrap(), "theme-0");
        let bars = spec["series"][0]["data"].as_array().unwrap();
        assert_eq!(bars.last().unwrap()["value"], 30);
    }

    #[test]
    fn test_bar_spec_percent_uses_page_total() {
        let view = derive_display(&[NamedValue::new("a", 25)], "", 1);
        let spec = build(&view, 200);
        assert_eq!(spec["series"][0]["data"][0]["percent"], 12.5);
    }

    #[test]
    fn test_bar_spec_empty_view() {
        let spec = build(&DisplayView::default(), 0);
        assert_eq!(spec["series"][0]["data"].as_array().unwrap().len(), 0);
        assert!(spec["yAxis"]["data"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_bar_spec_rebuild_identical() {
        let view = view_of(5);
        assert_eq!(build(&view, 150), build(&view, 150));
    }
}
