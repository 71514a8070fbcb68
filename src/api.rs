//! HTTP client for the stats backend.
//!
//! Two failure classes are kept distinct: `Transport` for anything that
//! prevented a decoded body (connection refused, timeout, non-2xx status,
//! bad JSON) and `Api` for a well-formed `success: false` envelope. Callers
//! surface both as a failed page but may log them differently.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::logging::{log, obj, v_str, Domain, Level};
use crate::payload::{Envelope, Health, LocationResponse, PublishTimesResponse, ThemeResponse, WordCloudResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request never produced a decodable body.
    Transport(String),
    /// The backend answered but reported failure in the envelope.
    Api(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport error: {}", msg),
            ApiError::Api(msg) => write!(f, "backend error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

/// Read seam over the five backend endpoints. Pages depend on this trait so
/// tests can run against a canned backend.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn publish_locations(&self) -> Result<LocationResponse, ApiError>;
    async fn word_cloud(&self) -> Result<WordCloudResponse, ApiError>;
    async fn publish_times(&self) -> Result<PublishTimesResponse, ApiError>;
    async fn theme_names(&self) -> Result<ThemeResponse, ApiError>;
    async fn health(&self) -> Result<Health, ApiError>;
}

pub struct ApiClient {
    client: Client,
    base: String,
}

impl ApiClient {
    pub fn new(base: &str, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base, path);
        log(Level::Debug, Domain::Api, "request", obj(&[("url", v_str(&url))]));
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            log(
                Level::Warn,
                Domain::Api,
                "http_status",
                obj(&[("url", v_str(&url)), ("status", v_str(status.as_str()))]),
            );
            return Err(ApiError::Transport(format!("{} returned {}", path, status)));
        }
        let body = resp.json::<T>().await?;
        log(Level::Debug, Domain::Api, "response", obj(&[("url", v_str(&url))]));
        Ok(body)
    }

    /// Decode then check the success envelope.
    async fn accept<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Envelope,
    {
        let body: T = self.get_json(path).await?;
        if !body.success() {
            let msg = if body.error_message().is_empty() {
                "unspecified backend failure".to_string()
            } else {
                body.error_message().to_string()
            };
            log(Level::Warn, Domain::Api, "envelope_failure", obj(&[("path", v_str(path)), ("error", v_str(&msg))]));
            return Err(ApiError::Api(msg));
        }
        Ok(body)
    }
}

#[async_trait]
impl Backend for ApiClient {
    async fn publish_locations(&self) -> Result<LocationResponse, ApiError> {
        self.accept("/api/publish-location-data").await
    }

    async fn word_cloud(&self) -> Result<WordCloudResponse, ApiError> {
        self.accept("/api/recommend-reason-wordcloud").await
    }

    async fn publish_times(&self) -> Result<PublishTimesResponse, ApiError> {
        self.accept("/api/video-publish-times").await
    }

    async fn theme_names(&self) -> Result<ThemeResponse, ApiError> {
        self.accept("/api/theme-name-data").await
    }

    async fn health(&self) -> Result<Health, ApiError> {
        self.get_json("/api/health").await
    }
}
