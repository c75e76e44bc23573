//! Typed Rust client for the Cloud Foundry v2 API.
//!
//! Covers the subset needed by CLI extensions: application lookup by name
//! and raw authenticated requests against arbitrary read paths.

mod types;

pub use reqwest::{Method, StatusCode};
pub use types::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cf api request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("cf api {endpoint} returned {status}: {body}")]
    Api {
        endpoint: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("App {0} not found")]
    AppNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Client for the Cloud Foundry REST API.
#[derive(Clone)]
pub struct CfClient {
    api_url: String,
    token: String,
    space_guid: Option<String>,
    http: reqwest::Client,
}

impl CfClient {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            space_guid: None,
            http: reqwest::Client::new(),
        }
    }

    /// Scope application lookups to a single space.
    pub fn with_space(mut self, space_guid: impl Into<String>) -> Self {
        self.space_guid = Some(space_guid.into());
        self
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_url)
    }

    fn auth(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Listing path for an application name, honouring the space scope.
    pub fn app_search_path(&self) -> String {
        match &self.space_guid {
            Some(space) => format!("/v2/spaces/{space}/apps"),
            None => "/v2/apps".to_string(),
        }
    }

    async fn check(resp: reqwest::Response, endpoint: &'static str) -> Result<reqwest::Response> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api { endpoint, status, body });
        }
        Ok(resp)
    }

    // ── Apps ─────────────────────────────────────────────────────────

    pub async fn find_app_by_name(&self, name: &str) -> Result<AppResource> {
        let resp = self
            .http
            .get(self.url(&self.app_search_path()))
            .header("Authorization", self.auth())
            .query(&[("q", format!("name:{name}"))])
            .send()
            .await?;

        let found: AppSearchResponse = Self::check(resp, "find app").await?.json().await?;
        found.into_first(name)
    }

    // ── Raw ──────────────────────────────────────────────────────────

    /// Send an authenticated request to `path` and return the body as lines.
    pub async fn raw_request(&self, method: Method, path: &str) -> Result<Vec<String>> {
        let resp = self
            .http
            .request(method, self.url(path))
            .header("Authorization", self.auth())
            .send()
            .await?;

        let body = Self::check(resp, "raw request").await?.text().await?;
        Ok(body.lines().map(str::to_owned).collect())
    }
}
