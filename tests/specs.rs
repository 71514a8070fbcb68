//! Spec-shape tests: structural assertions over the built ECharts option
//! trees, including determinism and empty-input behavior.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

use dashviz::charts::cloud::{self, CloudShape};
use dashviz::charts::line::{self, TimeVariant};
use dashviz::charts::{bar, pie};
use dashviz::payload::{NamedValue, SeriesBlock};
use dashviz::transform::{derive_display, DisplayView};

fn theme_fixture() -> DisplayView {
    let data = vec![
        NamedValue::new("影视剪辑", 892),
        NamedValue::new("游戏实况", 671),
        NamedValue::new("美食探店", 455),
        NamedValue::new("音乐现场", 300),
        NamedValue::new("日常生活", 120),
        NamedValue::new("科技数码", 44),
    ];
    derive_display(&data, "", 99)
}

// ---------------------------------------------------------------------------
// Bar: reversal, gradient, precomputed share
// ---------------------------------------------------------------------------

#[test]
fn bar_renders_largest_at_top() {
    let spec = bar::build(&theme_fixture(), 2482);
    let cats = spec["yAxis"]["data"].as_array().unwrap();
    assert_eq!(cats.last().unwrap(), "影视剪辑");
    assert_eq!(cats.first().unwrap(), "科技数码");
    let bars = spec["series"][0]["data"].as_array().unwrap();
    assert_eq!(bars.last().unwrap()["value"], 892);
}

#[test]
fn bar_gradient_tracks_rank_not_value() {
    let spec = bar::build(&theme_fixture(), 2482);
    let bars = spec["series"][0]["data"].as_array().unwrap();
    // After reversal the last item is rank 0: red. The first is the lowest
    // rank: purple.
    assert_eq!(bars.last().unwrap()["itemStyle"]["color"], "#ff4d4f");
    assert_eq!(bars.first().unwrap()["itemStyle"]["color"], "#722ed1");
}

#[test]
fn bar_title_reflects_display_size() {
    let spec = bar::build(&theme_fixture(), 2482);
    assert_eq!(spec["title"]["text"], "Topic distribution (top 6)");
}

#[test]
fn bar_share_is_two_decimals_of_page_total() {
    let spec = bar::build(&theme_fixture(), 2482);
    let bars = spec["series"][0]["data"].as_array().unwrap();
    // 892 / 2482 = 35.9387... → 35.94
    assert_eq!(bars.last().unwrap()["percent"], 35.94);
}

// ---------------------------------------------------------------------------
// Pie: positional palette, donut geometry
// ---------------------------------------------------------------------------

#[test]
fn pie_is_a_donut_with_scroll_legend() {
    let spec = pie::build(&theme_fixture(), 2482);
    assert_eq!(spec["series"][0]["radius"], json!(["40%", "70%"]));
    assert_eq!(spec["legend"]["type"], "scroll");
}

#[test]
fn pie_colors_are_positional() {
    let view = theme_fixture();
    let a = pie::build(&view, 2482);
    let b = pie::build(&view, 2482);
    // No randomness anywhere in the pie builder.
    assert_eq!(a, b);
    assert_eq!(
        a["series"][0]["data"][0]["itemStyle"]["color"],
        pie::PALETTE[0]
    );
}

// ---------------------------------------------------------------------------
// Line: markers derived from the series
// ---------------------------------------------------------------------------

#[test]
fn line_markers_match_series_extremes() {
    let block = SeriesBlock {
        categories: (0..24).map(|h| format!("{:02}:00", h)).collect(),
        series: (0..24).map(|h| if h == 14 { 90 } else { 10 + h }).collect(),
    };
    let spec = line::build(&block, TimeVariant::Hourly);
    let points = spec["series"][0]["markPoint"]["data"].as_array().unwrap();
    assert_eq!(points[0]["coord"], json!([14, 90]));
    assert_eq!(points[1]["coord"], json!([0, 10]));
}

#[test]
fn line_variants_share_structure_differ_in_style() {
    let block = SeriesBlock {
        categories: vec!["Mon".into(), "Tue".into(), "Wed".into()],
        series: vec![5, 8, 2],
    };
    for variant in TimeVariant::ALL {
        let spec = line::build(&block, variant);
        assert_eq!(spec["series"][0]["type"], "line");
        assert_eq!(spec["xAxis"]["data"], json!(["Mon", "Tue", "Wed"]));
        assert!(spec["series"][0]["markLine"]["data"][0]["yAxis"].is_number());
    }
    let hourly = line::build(&block, TimeVariant::Hourly);
    let weekday = line::build(&block, TimeVariant::Weekday);
    assert_ne!(
        hourly["series"][0]["lineStyle"]["color"],
        weekday["series"][0]["lineStyle"]["color"]
    );
}

// ---------------------------------------------------------------------------
// Word cloud: seeded determinism, color is the only free variable
// ---------------------------------------------------------------------------

#[test]
fn cloud_same_seed_reproduces_exactly() {
    let view = theme_fixture();
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);
    assert_eq!(
        cloud::build(&view, CloudShape::Pentagon, 2482, &mut a),
        cloud::build(&view, CloudShape::Pentagon, 2482, &mut b)
    );
}

#[test]
fn cloud_differs_only_in_colors_across_seeds() {
    let view = theme_fixture();
    let mut a = StdRng::seed_from_u64(1);
    let mut b = StdRng::seed_from_u64(2);
    let mut sa = cloud::build(&view, CloudShape::Circle, 2482, &mut a);
    let mut sb = cloud::build(&view, CloudShape::Circle, 2482, &mut b);
    for spec in [&mut sa, &mut sb] {
        for word in spec["series"][0]["data"].as_array_mut().unwrap() {
            word["textStyle"]["color"] = json!(null);
        }
    }
    assert_eq!(sa, sb);
}

#[test]
fn cloud_shape_and_size_range_fixed() {
    let view = theme_fixture();
    let mut rng = StdRng::seed_from_u64(0);
    let spec = cloud::build(&view, CloudShape::Cardioid, 2482, &mut rng);
    assert_eq!(spec["series"][0]["shape"], "cardioid");
    assert_eq!(spec["series"][0]["sizeRange"], json!([14, 80]));
    assert_eq!(spec["series"][0]["rotationStep"], 15);
}

// ---------------------------------------------------------------------------
// Empty inputs build valid empty specs
// ---------------------------------------------------------------------------

#[test]
fn all_builders_accept_empty_input() {
    let empty = DisplayView::default();
    let mut rng = StdRng::seed_from_u64(0);

    let specs = vec![
        bar::build(&empty, 0),
        pie::build(&empty, 0),
        cloud::build(&empty, CloudShape::Circle, 0, &mut rng),
        line::build(&SeriesBlock::default(), TimeVariant::Daily),
    ];
    for spec in specs {
        assert!(spec.is_object());
        assert!(spec["series"][0]["data"].as_array().unwrap().is_empty());
    }
}
