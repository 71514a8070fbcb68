//! Wire model for the stats backend.
//!
//! Every field the backend may omit carries `#[serde(default)]` so a sparse
//! or partially malformed payload decodes to zero/empty defaults instead of
//! failing the whole response.

use serde::{Deserialize, Serialize};

/// One aggregation bucket: a label and its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    #[serde(default)]
    pub value: u64,
}

impl NamedValue {
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        Self { name: name.into(), value }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub max: u64,
    #[serde(default)]
    pub min: u64,
}

/// Fixed calendar buckets plus the count per bucket, as supplied by the
/// backend (24 hours, N days, or 7 weekdays).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesBlock {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub series: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBuckets {
    #[serde(default)]
    pub hourly: SeriesBlock,
    #[serde(default)]
    pub daily: SeriesBlock,
    #[serde(default)]
    pub weekday: SeriesBlock,
}

/// Success/error envelope shared by every data endpoint.
pub trait Envelope {
    fn success(&self) -> bool;
    fn error_message(&self) -> &str;
}

/// `/api/publish-location-data`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LocationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Vec<NamedValue>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub error: String,
}

/// `/api/recommend-reason-wordcloud`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WordCloudResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Vec<NamedValue>,
    #[serde(default)]
    pub total_reasons: u64,
    #[serde(default)]
    pub total_words: u64,
    #[serde(default)]
    pub error: String,
}

/// `/api/video-publish-times`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PublishTimesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: TimeBuckets,
    #[serde(default)]
    pub total_videos: u64,
    #[serde(default)]
    pub peak_hour: u32,
    #[serde(default)]
    pub peak_weekday: String,
    #[serde(default)]
    pub date_range: DateRange,
    #[serde(default)]
    pub error: String,
}

/// `/api/theme-name-data`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ThemeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Vec<NamedValue>,
    #[serde(default)]
    pub total_themes: u64,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub top_theme: String,
    #[serde(default)]
    pub theme_range: ValueRange,
    #[serde(default)]
    pub error: String,
}

/// `/api/health` — no success envelope, just a status string.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Health {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

impl Envelope for LocationResponse {
    fn success(&self) -> bool {
        self.success
    }
    fn error_message(&self) -> &str {
        &self.error
    }
}

impl Envelope for WordCloudResponse {
    fn success(&self) -> bool {
        self.success
    }
    fn error_message(&self) -> &str {
        &self.error
    }
}

impl Envelope for PublishTimesResponse {
    fn success(&self) -> bool {
        self.success
    }
    fn error_message(&self) -> &str {
        &self.error
    }
}

impl Envelope for ThemeResponse {
    fn success(&self) -> bool {
        self.success
    }
    fn error_message(&self) -> &str {
        &self.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_decode() {
        let raw = r#"{"success":true,"data":[{"name":"广东","value":780}],"total":7053}"#;
        let resp: LocationResponse = serde_json::from_str(raw).unwrap();
        assert!(resp.success);
        assert_eq!(resp.data, vec![NamedValue::new("广东", 780)]);
        assert_eq!(resp.total, 7053);
        assert!(resp.error.is_empty());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        // A bare success envelope must decode with zero/empty defaults.
        let resp: ThemeResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(resp.data.is_empty());
        assert_eq!(resp.total_count, 0);
        assert_eq!(resp.theme_range, ValueRange::default());
        assert!(resp.top_theme.is_empty());
    }

    #[test]
    fn test_failure_envelope() {
        let raw = r#"{"success":false,"error":"no such table","data":[]}"#;
        let resp: LocationResponse = serde_json::from_str(raw).unwrap();
        assert!(!resp.success());
        assert_eq!(resp.error_message(), "no such table");
    }

    #[test]
    fn test_publish_times_decode() {
        let raw = r#"{
            "success": true,
            "data": {
                "hourly": {"categories": ["00:00","01:00"], "series": [45, 32]},
                "daily": {"categories": [], "series": []},
                "weekday": {"categories": ["Mon"], "series": [9]}
            },
            "total_videos": 7053,
            "peak_hour": 14,
            "peak_weekday": "Saturday",
            "date_range": {"start": "2025-07-01", "end": "2025-07-30"}
        }"#;
        let resp: PublishTimesResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.data.hourly.series, vec![45, 32]);
        assert_eq!(resp.peak_hour, 14);
        assert_eq!(resp.date_range.start, "2025-07-01");
        assert!(resp.data.daily.categories.is_empty());
    }

    #[test]
    fn test_named_value_missing_value_defaults_to_zero() {
        let v: NamedValue = serde_json::from_str(r#"{"name":"杭州"}"#).unwrap();
        assert_eq!(v.value, 0);
    }
}
