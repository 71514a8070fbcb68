use crate::charts::cloud::CloudShape;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base: String,
    pub http_timeout_secs: u64,
    /// 0 means one-shot export; otherwise re-fetch every N seconds.
    pub refresh_secs: u64,
    pub out_dir: String,
    pub display_count: usize,
    pub max_words: usize,
    pub cloud_shape: CloudShape,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base: std::env::var("API_BASE").unwrap_or_else(|_| "http://localhost:8000".to_string()),
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(10),
            refresh_secs: std::env::var("REFRESH_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(0),
            out_dir: std::env::var("OUT_DIR").unwrap_or_else(|_| "out/specs".to_string()),
            display_count: std::env::var("DISPLAY_COUNT").ok().and_then(|v| v.parse().ok()).unwrap_or(20),
            max_words: std::env::var("MAX_WORDS").ok().and_then(|v| v.parse().ok()).unwrap_or(60),
            cloud_shape: std::env::var("CLOUD_SHAPE")
                .ok()
                .and_then(|v| CloudShape::parse(&v))
                .unwrap_or(CloudShape::Circle),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        // Only fields without env overrides in the test environment are
        // asserted against their defaults.
        let cfg = Config::from_env();
        assert!(cfg.http_timeout_secs > 0);
        assert!(cfg.display_count > 0);
        assert!(cfg.max_words > 0);
    }
}
