//! Time-series line specs: hourly, daily, and weekday variants.
//!
//! Every variant overlays max/min mark points and an average mark line
//! computed from the currently selected series only; switching variants
//! recomputes the markers from scratch. The backend's precomputed
//! `peak_hour`/`peak_weekday` never feed the markers.

use serde_json::json;

use crate::charts::ChartSpec;
use crate::payload::SeriesBlock;
use crate::transform::series_stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeVariant {
    Hourly,
    Daily,
    Weekday,
}

impl TimeVariant {
    pub const ALL: [TimeVariant; 3] = [TimeVariant::Hourly, TimeVariant::Daily, TimeVariant::Weekday];

    pub fn as_str(self) -> &'static str {
        match self {
            TimeVariant::Hourly => "hourly",
            TimeVariant::Daily => "daily",
            TimeVariant::Weekday => "weekday",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TimeVariant::Hourly => "Hourly publish distribution",
            TimeVariant::Daily => "Daily publish trend",
            TimeVariant::Weekday => "Weekday publish pattern",
        }
    }

    fn series_name(self) -> &'static str {
        match self {
            TimeVariant::Hourly => "hourly publishes",
            TimeVariant::Daily => "daily publishes",
            TimeVariant::Weekday => "weekday publishes",
        }
    }

    fn line_color(self) -> &'static str {
        match self {
            TimeVariant::Hourly => "#1890ff",
            TimeVariant::Daily => "#52c41a",
            TimeVariant::Weekday => "#722ed1",
        }
    }

    fn area_stops(self) -> (&'static str, &'static str) {
        match self {
            TimeVariant::Hourly => ("rgba(24, 144, 255, 0.3)", "rgba(24, 144, 255, 0.05)"),
            TimeVariant::Daily => ("rgba(82, 196, 26, 0.3)", "rgba(82, 196, 26, 0.05)"),
            TimeVariant::Weekday => ("rgba(114, 46, 209, 0.3)", "rgba(114, 46, 209, 0.05)"),
        }
    }

    fn symbol_size(self) -> u32 {
        match self {
            TimeVariant::Hourly => 6,
            TimeVariant::Daily => 4,
            TimeVariant::Weekday => 8,
        }
    }

    fn label_rotate(self) -> u32 {
        // Daily categories are full dates and overlap without rotation.
        match self {
            TimeVariant::Daily => 45,
            _ => 0,
        }
    }
}

pub fn build(block: &SeriesBlock, variant: TimeVariant) -> ChartSpec {
    let stats = series_stats(&block.series);
    let (stop_from, stop_to) = variant.area_stops();

    let markers_empty = block.series.is_empty();
    let mark_point = if markers_empty {
        json!({ "data": [] })
    } else {
        json!({
            "data": [
                { "name": "peak", "coord": [stats.max_index, stats.max_value], "value": stats.max_value },
                { "name": "trough", "coord": [stats.min_index, stats.min_value], "value": stats.min_value },
            ],
            "itemStyle": { "color": "#ff4d4f" },
        })
    };
    let mark_line = if markers_empty {
        json!({ "data": [] })
    } else {
        json!({
            "data": [{ "name": "average", "yAxis": stats.mean }],
            "lineStyle": { "color": "#faad14" },
        })
    };

    json!({
        "title": {
            "text": variant.title(),
            "left": "center",
            "textStyle": { "fontSize": 18, "fontWeight": "bold", "color": "#333" },
        },
        "tooltip": {
            "trigger": "axis",
            "axisPointer": { "type": "cross", "label": { "backgroundColor": "#6a7985" } },
        },
        "legend": { "data": [variant.series_name()], "top": 10 },
        "grid": { "left": "3%", "right": "4%", "bottom": "8%", "top": "15%", "containLabel": true },
        "dataZoom": [
            { "type": "inside", "start": 0, "end": 100 },
            { "start": 0, "end": 100, "height": 30, "bottom": 20 },
        ],
        "xAxis": {
            "type": "category",
            "boundaryGap": false,
            "data": block.categories,
            "axisLabel": { "fontSize": 12, "rotate": variant.label_rotate(), "color": "#666" },
        },
        "yAxis": {
            "type": "value",
            "name": "count",
            "splitLine": { "lineStyle": { "type": "dashed", "color": "#eee" } },
        },
        "series": [{
            "name": variant.series_name(),
            "type": "line",
            "smooth": true,
            "symbol": "circle",
            "symbolSize": variant.symbol_size(),
            "lineStyle": { "width": 3, "color": variant.line_color() },
            "areaStyle": {
                "color": {
                    "type": "linear",
                    "x": 0, "y": 0, "x2": 0, "y2": 1,
                    "colorStops": [
                        { "offset": 0, "color": stop_from },
                        { "offset": 1, "color": stop_to },
                    ],
                },
            },
            "data": block.series,
            "markPoint": mark_point,
            "markLine": mark_line,
        }],
    })
}
