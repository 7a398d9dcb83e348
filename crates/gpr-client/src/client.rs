//! HTTP transport for the Gitee API v5 gateway.

use std::time::Duration;

use gpr_api_models::{ApiError, Issue, Milestone, Release, Repository, TagInfo, TreeResponse};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::Error;

/// Gateway used when the caller does not configure one.
pub const DEFAULT_GATEWAY: &str = "https://gitee.ru/api/v5";
/// Request timeout applied when the caller does not configure one.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

const HEADER_APP_NAME: &str = "x-app-name";
const APP_NAME: &str = "gpreplicator";
const HEADER_RATELIMIT_REMAINING: &str = "x-ratelimit-remaining";
const HEADER_RATELIMIT_RESET: &str = "x-ratelimit-reset";
const TOKEN_PARAM: &str = "access_token";

/// Client for a single Gitee API gateway.
#[derive(Debug, Clone)]
pub struct GiteeClient {
    http: Client,
    gateway: Url,
    token: Option<String>,
}

/// Builder for [`GiteeClient`].
#[derive(Debug, Default)]
pub struct GiteeClientBuilder {
    gateway: Option<Url>,
    token: Option<String>,
    timeout: Option<Duration>,
}

impl GiteeClientBuilder {
    /// Override the API gateway base URL.
    #[must_use]
    pub fn gateway(mut self, gateway: Url) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Attach an OAuth access token; sent as the `access_token` query
    /// parameter on every request.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Override the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Construct the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the gateway cannot carry path
    /// segments, or [`Error::Http`] if the underlying HTTP client fails to
    /// initialise.
    pub fn build(self) -> Result<GiteeClient, Error> {
        let gateway = match self.gateway {
            Some(url) => url,
            None => Url::parse(DEFAULT_GATEWAY).map_err(|_| Error::InvalidUrl {
                gateway: DEFAULT_GATEWAY.to_string(),
            })?,
        };
        if gateway.cannot_be_a_base() {
            return Err(Error::InvalidUrl {
                gateway: gateway.to_string(),
            });
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(HEADER_APP_NAME, HeaderValue::from_static(APP_NAME));

        let http = Client::builder()
            .timeout(
                self.timeout
                    .unwrap_or_else(|| Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            )
            .default_headers(headers)
            .build()?;

        Ok(GiteeClient {
            http,
            gateway,
            token: self.token,
        })
    }
}

impl GiteeClient {
    /// Start building a client.
    #[must_use]
    pub fn builder() -> GiteeClientBuilder {
        GiteeClientBuilder::default()
    }

    /// Fetch the git tree of `sha` (a branch name, tag, or commit SHA).
    ///
    /// With `recursive` the server expands the tree into every directory;
    /// otherwise only the root directory is listed.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure modes; requests are never retried.
    pub async fn tree(
        &self,
        owner: &str,
        repo: &str,
        sha: &str,
        recursive: bool,
    ) -> Result<TreeResponse, Error> {
        let mut url = self.endpoint(&["repos", owner, repo, "git", "trees", sha])?;
        url.query_pairs_mut()
            .append_pair("recursive", if recursive { "1" } else { "0" });
        self.get_json(url).await
    }

    /// Fetch all issues of the project, regardless of state.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure modes; requests are never retried.
    pub async fn issues(&self, owner: &str, repo: &str) -> Result<Vec<Issue>, Error> {
        let mut url = self.endpoint(&["repos", owner, repo, "issues"])?;
        url.query_pairs_mut().append_pair("state", "all");
        self.get_json(url).await
    }

    /// Fetch all milestones of the project.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure modes; requests are never retried.
    pub async fn milestones(&self, owner: &str, repo: &str) -> Result<Vec<Milestone>, Error> {
        let url = self.endpoint(&["repos", owner, repo, "milestones"])?;
        self.get_json(url).await
    }

    /// Fetch all published releases of the project.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure modes; requests are never retried.
    pub async fn releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>, Error> {
        let url = self.endpoint(&["repos", owner, repo, "releases"])?;
        self.get_json(url).await
    }

    /// Fetch all tags of the project.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure modes; requests are never retried.
    pub async fn tags(&self, owner: &str, repo: &str) -> Result<Vec<TagInfo>, Error> {
        let url = self.endpoint(&["repos", owner, repo, "tags"])?;
        self.get_json(url).await
    }

    /// Fetch the project metadata, including its description.
    ///
    /// # Errors
    ///
    /// See [`Error`] for the failure modes; requests are never retried.
    pub async fn repository(&self, owner: &str, repo: &str) -> Result<Repository, Error> {
        let url = self.endpoint(&["repos", owner, repo])?;
        self.get_json(url).await
    }

    /// Extend the gateway with endpoint path segments, preserving any path
    /// prefix the gateway carries (e.g. `/api/v5`).
    fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.gateway.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| Error::InvalidUrl {
                gateway: self.gateway.to_string(),
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, mut url: Url) -> Result<T, Error> {
        if let Some(token) = &self.token {
            url.query_pairs_mut().append_pair(TOKEN_PARAM, token);
        }
        tracing::debug!(url = %redact_token(&url), "sending API request");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(classify_failure(response).await);
        }

        let bytes = response.bytes().await?;
        tracing::debug!(%status, body_len = bytes.len(), "received API response");
        serde_json::from_slice(&bytes).map_err(Error::Decode)
    }
}

/// Map a non-success response onto [`Error`], extracting the server message
/// from the Gitee error body when it parses.
async fn classify_failure(response: Response) -> Error {
    let status = response.status();

    // The gateway reports rate-limit exhaustion as 403 alongside the
    // x-ratelimit-* headers; unauthenticated clients get 60 requests/hour.
    if status == StatusCode::FORBIDDEN && header_u64(&response, HEADER_RATELIMIT_REMAINING) == Some(0)
    {
        return Error::RateLimited {
            reset_secs: header_u64(&response, HEADER_RATELIMIT_RESET),
        };
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiError>(&body).map_or_else(
        |_| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                format!("request failed with status {status}")
            } else {
                trimmed.to_string()
            }
        },
        |api| api.message,
    );
    tracing::debug!(%status, message = %message, "API request failed");
    Error::Status { status, message }
}

fn header_u64(response: &Response, name: &str) -> Option<u64> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

/// Clone of `url` safe for logging: the access token is masked.
fn redact_token(url: &Url) -> Url {
    if !url.query_pairs().any(|(key, _)| key == TOKEN_PARAM) {
        return url.clone();
    }
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != TOKEN_PARAM)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    let mut clean = url.clone();
    clean.set_query(None);
    {
        let mut pairs = clean.query_pairs_mut();
        for (key, value) in &kept {
            pairs.append_pair(key, value);
        }
        pairs.append_pair(TOKEN_PARAM, "***");
    }
    clean
}
