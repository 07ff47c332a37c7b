//! Blocking HTTP client for the local scraper backend.
//!
//! One call per operation, no retries, no auth. All methods return
//! [`ApiError`]; callers decide what is user-visible.

mod types;

pub use types::{
    CashBalance, DatasetKind, ErrorBody, FileContent, MarketListing, ReportListing, Row,
    ScrapeJob, ScrapeOutcome, find_market_file,
};

use std::fmt;
use std::time::Duration;

use tracing::debug;

/// Default backend origin (the FastAPI server started alongside the UI).
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Timeout for the liveness probe. Shorter than the 5s poll interval so
/// probes never pile up.
const HEALTH_TIMEOUT: Duration = Duration::from_secs(4);

/// Timeout for list/content fetches.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for the best-effort shutdown request on exit.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

/// Errors from backend calls.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Transport-level failure (connection refused, timeout, ...).
    Network(String),
    /// Backend answered with a non-2xx status and (usually) a `detail`.
    Backend { status: u16, detail: String },
    /// Response body did not match the expected shape.
    Parse(String),
}

impl ApiError {
    /// Best-effort human message: the backend `detail` when present,
    /// otherwise the transport/parse error text.
    pub fn detail(&self) -> &str {
        match self {
            ApiError::Network(msg) | ApiError::Parse(msg) => msg,
            ApiError::Backend { detail, .. } => detail,
        }
    }

    /// True for an HTTP 400 whose `detail` contains the given needle.
    /// The backend reports validation failures as human-readable text,
    /// so control flow sniffs substrings. Known fragility, see DESIGN.md.
    pub fn is_validation(&self, needle: &str) -> bool {
        matches!(self, ApiError::Backend { status: 400, detail } if detail.contains(needle))
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Backend { status, detail } => write!(f, "backend error {status}: {detail}"),
            ApiError::Parse(msg) => write!(f, "invalid response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Client for the scraper backend.
pub struct BackendClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl BackendClient {
    /// Creates a client for the default local origin.
    pub fn new() -> Self {
        Self::with_url(DEFAULT_BACKEND_URL)
    }

    /// Creates a client for a custom origin.
    pub fn with_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            // No global timeout: scrape jobs can legitimately run long.
            // Per-request timeouts are set where a bound makes sense.
            client: reqwest::blocking::Client::builder()
                .timeout(None)
                .build()
                .unwrap_or_else(|_| reqwest::blocking::Client::new()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Liveness probe: `GET /`, any 2xx counts as healthy.
    pub fn health_check(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .get(self.url("/"))
            .timeout(HEALTH_TIMEOUT)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(ApiError::Backend {
                status: response.status().as_u16(),
                detail: response.status().to_string(),
            })
        }
    }

    /// Triggers a scrape job and waits for it to finish.
    pub fn trigger_scrape(&self, job: ScrapeJob) -> Result<ScrapeOutcome, ApiError> {
        debug!("POST {}", job.endpoint());
        let response = self
            .client
            .post(self.url(job.endpoint()))
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::check_status(response)?;
        response
            .json::<ScrapeOutcome>()
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Lists the files of one dataset kind, in backend order.
    pub fn list_files(&self, kind: DatasetKind) -> Result<Vec<String>, ApiError> {
        debug!("GET {}", kind.endpoint());
        let response = self
            .client
            .get(self.url(kind.endpoint()))
            .timeout(FETCH_TIMEOUT)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::check_status(response)?;
        match kind {
            DatasetKind::Reports => response
                .json::<ReportListing>()
                .map(|l| l.reports)
                .map_err(|e| ApiError::Parse(e.to_string())),
            DatasetKind::Market => response
                .json::<MarketListing>()
                .map(|l| l.files)
                .map_err(|e| ApiError::Parse(e.to_string())),
        }
    }

    /// Fetches parsed content for one file path.
    pub fn file_content(&self, path: &str) -> Result<FileContent, ApiError> {
        debug!("GET /data/content path={path}");
        let response = self
            .client
            .get(self.url("/data/content"))
            .query(&[("path", path)])
            .timeout(FETCH_TIMEOUT)
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = Self::check_status(response)?;
        response
            .json::<FileContent>()
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Best-effort backend termination request. Errors are ignored: the
    /// backend may already be gone, and the UI is exiting either way.
    pub fn shutdown(&self) {
        let _ = self
            .client
            .post(self.url("/shutdown"))
            .timeout(SHUTDOWN_TIMEOUT)
            .send();
    }

    /// Maps a non-2xx response to [`ApiError::Backend`], extracting the
    /// `detail` field when the body carries one.
    fn check_status(
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.detail)
            .unwrap_or_else(|_| {
                if body.trim().is_empty() {
                    status.to_string()
                } else {
                    body
                }
            });
        Err(ApiError::Backend {
            status: status.as_u16(),
            detail,
        })
    }
}

impl Default for BackendClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_url_strips_trailing_slashes() {
        let client = BackendClient::with_url("http://127.0.0.1:8000/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
        assert_eq!(client.url("/data/market"), "http://127.0.0.1:8000/data/market");
    }

    #[test]
    fn validation_matches_only_http_400_with_needle() {
        let err = ApiError::Backend {
            status: 400,
            detail: "API Keys missing for provider X".to_string(),
        };
        assert!(err.is_validation("API Keys missing"));
        assert!(!err.is_validation("is empty"));

        let err = ApiError::Backend {
            status: 500,
            detail: "API Keys missing".to_string(),
        };
        assert!(!err.is_validation("API Keys missing"));

        assert!(!ApiError::Network("connection refused".into()).is_validation("API Keys missing"));
    }

    #[test]
    fn detail_prefers_backend_message() {
        let err = ApiError::Backend {
            status: 400,
            detail: "Tickers file not found".to_string(),
        };
        assert_eq!(err.detail(), "Tickers file not found");
        assert_eq!(
            ApiError::Network("timeout".to_string()).detail(),
            "timeout"
        );
    }
}
