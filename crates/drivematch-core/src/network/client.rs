//! reqwest-backed instructor source.
//!
//! Wraps a reqwest client configured with:
//! - A total request timeout
//! - The DriveMatch user agent
//! - An optional session whose bearer token is attached to each request

use crate::config::{ApiConfig, NetworkConfig};
use crate::error::{DriveMatchError, Result};
use crate::models::InstructorRecord;
use crate::search::{InstructorSource, SearchQuery};
use crate::session::SessionHandle;
use async_trait::async_trait;
use reqwest::{header, Client, Response};
use tracing::debug;

/// Path of the "get all" endpoint.
pub const INSTRUCTORS_PATH: &str = "/public/instructor";

/// Path of the filtered search endpoint.
pub const INSTRUCTOR_SEARCH_PATH: &str = "/public/instructor/search";

/// Instructor source talking to the marketplace REST API.
pub struct HttpInstructorSource {
    client: Client,
    config: ApiConfig,
    session: Option<SessionHandle>,
}

impl std::fmt::Debug for HttpInstructorSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpInstructorSource")
            .field("base_url", &self.config.base_url)
            .field("has_session", &self.session.is_some())
            .finish()
    }
}

impl HttpInstructorSource {
    /// Create a source for the API described by `config`.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(NetworkConfig::USER_AGENT)
            .build()
            .map_err(|e| DriveMatchError::Network {
                message: format!("Failed to create HTTP client: {}", e),
                cause: None,
            })?;

        Ok(Self {
            client,
            config,
            session: None,
        })
    }

    /// Create a source for the API named by `VITE_API_URL`.
    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env()?)
    }

    /// Attach a session; its bearer token is sent with every request.
    pub fn with_session(mut self, session: SessionHandle) -> Self {
        self.session = Some(session);
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Full URL for a search request.
    pub fn search_url(&self, query: &SearchQuery) -> String {
        let base = self.config.endpoint(INSTRUCTOR_SEARCH_PATH);
        let query_string = query.to_query_string();
        if query_string.is_empty() {
            base
        } else {
            format!("{}?{}", base, query_string)
        }
    }

    async fn get_records(&self, url: &str) -> Result<Vec<InstructorRecord>> {
        debug!("GET {}", url);

        let mut request = self.client.get(url).header(header::ACCEPT, "application/json");
        if let Some(ref session) = self.session {
            if let Some(bearer) = session.read().await.bearer() {
                request = request.header(header::AUTHORIZATION, bearer);
            }
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let response = check_response_status(response, url)?;

        let records: Vec<InstructorRecord> = response.json().await.map_err(|e| {
            if e.is_timeout() {
                DriveMatchError::Timeout(self.config.timeout)
            } else {
                DriveMatchError::Json {
                    message: format!("Failed to parse instructor list from {}: {}", url, e),
                    source: None,
                }
            }
        })?;

        debug!("GET {} returned {} instructors", url, records.len());
        Ok(records)
    }

    /// Timeouts report the timeout this source was configured with.
    fn transport_error(&self, err: reqwest::Error) -> DriveMatchError {
        if err.is_timeout() {
            DriveMatchError::Timeout(self.config.timeout)
        } else {
            err.into()
        }
    }
}

#[async_trait]
impl InstructorSource for HttpInstructorSource {
    async fn fetch_all(&self) -> Result<Vec<InstructorRecord>> {
        let url = self.config.endpoint(INSTRUCTORS_PATH);
        self.get_records(&url).await
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<InstructorRecord>> {
        let url = self.search_url(query);
        self.get_records(&url).await
    }
}

/// Treat every non-2xx status the same way.
fn check_response_status(response: Response, url: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(DriveMatchError::Http {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}
