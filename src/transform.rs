//! Pure dataset shaping: search-filtered display views and derived summary
//! scalars. Nothing here fetches or caches; every function is a plain
//! recomputation from its inputs, so callers can rerun it on any parameter
//! change without worrying about ordering.

use serde::Serialize;

use crate::payload::NamedValue;

/// The filtered, truncated slice of a dataset currently shown to the user.
/// Recomputed wholesale whenever the dataset, search term, or display count
/// changes; never patched incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayView {
    pub entries: Vec<NamedValue>,
}

impl DisplayView {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn values(&self) -> Vec<u64> {
        self.entries.iter().map(|e| e.value).collect()
    }

    /// 1-based position of a name within the view.
    pub fn rank(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name).map(|i| i + 1)
    }
}

/// Filter by case-insensitive substring, then truncate to `display_count`,
/// preserving the source order. The backend pre-sorts descending by value;
/// this function never re-sorts.
///
/// An oversized `display_count` clamps to the dataset length and an empty
/// dataset yields an empty view; neither is an error.
pub fn derive_display(data: &[NamedValue], search: &str, display_count: usize) -> DisplayView {
    let needle = search.trim().to_lowercase();
    let entries = data
        .iter()
        .filter(|e| needle.is_empty() || e.name.to_lowercase().contains(&needle))
        .take(display_count)
        .cloned()
        .collect();
    DisplayView { entries }
}

/// Summary scalars over the FULL dataset, never the filtered view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    /// Sum of all values.
    pub total: u64,
    /// Name of the largest bucket; empty for an empty dataset.
    pub top: String,
    /// First value, under the descending-order assumption.
    pub max: u64,
    /// Last value, under the descending-order assumption.
    pub min: u64,
}

pub fn dataset_stats(data: &[NamedValue]) -> DatasetStats {
    // argmax keeps the earliest entry on ties, which coincides with the
    // backend's descending ordering
    let top = data
        .iter()
        .reduce(|best, e| if e.value > best.value { e } else { best })
        .map(|e| e.name.clone())
        .unwrap_or_default();
    DatasetStats {
        total: data.iter().map(|e| e.value).sum(),
        top,
        max: data.first().map(|e| e.value).unwrap_or(0),
        min: data.last().map(|e| e.value).unwrap_or(0),
    }
}

/// Marker inputs for a time series: extremes and mean of the currently
/// selected series only. Backend-precomputed peaks (`peak_hour`,
/// `peak_weekday`) are display copy; markers never read them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeriesStats {
    pub max_index: usize,
    pub max_value: u64,
    pub min_index: usize,
    pub min_value: u64,
    pub mean: f64,
}

pub fn series_stats(series: &[u64]) -> SeriesStats {
    if series.is_empty() {
        return SeriesStats::default();
    }
    let mut stats = SeriesStats {
        max_value: series[0],
        min_value: series[0],
        ..SeriesStats::default()
    };
    for (i, &v) in series.iter().enumerate() {
        if v > stats.max_value {
            stats.max_index = i;
            stats.max_value = v;
        }
        if v < stats.min_value {
            stats.min_index = i;
            stats.min_value = v;
        }
    }
    stats.mean = series.iter().sum::<u64>() as f64 / series.len() as f64;
    stats
}
