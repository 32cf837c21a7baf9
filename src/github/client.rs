//! # GitHub API Gateway
//!
//! The two outbound calls a search makes, and the sequencing between them.
//!
//! ## Endpoints
//!
//! ```text
//! GET {base}/users/{username}
//! GET {base}/users/{username}/repos?sort=updated&per_page={page_size}
//! ```
//!
//! Requests are unauthenticated. Non-success statuses are classified into
//! [`FetchError`] variants per stage; nothing is retried.

use crate::github::error::{FetchError, FetchResult};
use crate::github::models::{Profile, Repository, SearchResult};
use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, StatusCode, Url};
use std::future::Future;

/// Public GitHub REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// How many repositories a search asks for.
pub const DEFAULT_PAGE_SIZE: u8 = 12;

/// GitHub ignores `per_page` above this.
pub const MAX_PAGE_SIZE: u8 = 100;

/// Source of profiles and repository lists.
///
/// [`GitHubClient`] talks to the real API; tests substitute canned answers.
pub trait Gateway {
    fn fetch_profile(&self, username: &str)
        -> impl Future<Output = FetchResult<Profile>> + Send;

    fn fetch_repositories(
        &self,
        username: &str,
    ) -> impl Future<Output = FetchResult<Vec<Repository>>> + Send;
}

/// Run one search: profile first, then repositories.
///
/// The repository list is only requested once the profile call succeeded, so
/// a missing user surfaces as `NotFound` rather than a repositories failure.
pub async fn search<G: Gateway>(gateway: &G, username: &str) -> FetchResult<SearchResult> {
    let profile = gateway.fetch_profile(username).await?;
    let repositories = gateway.fetch_repositories(username).await?;
    Ok(SearchResult {
        profile,
        repositories,
    })
}

/// Map a non-success status from the profile request.
pub fn classify_profile_status(status: StatusCode) -> FetchError {
    let code = status.as_u16();
    match code {
        404 => FetchError::NotFound { status: code },
        403 | 429 => FetchError::RateLimited { status: code },
        500 | 502 | 503 | 504 => FetchError::ServiceUnavailable { status: code },
        _ => FetchError::UnknownApi { status: code },
    }
}

/// Map a non-success status from the repositories request.
pub fn classify_repositories_status(status: StatusCode) -> FetchError {
    FetchError::RepositoriesFetch {
        status: status.as_u16(),
    }
}

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: Url,
    page_size: u8,
}

impl GitHubClient {
    /// Build a client with the headers GitHub requires.
    ///
    /// `page_size` is clamped to `1..=MAX_PAGE_SIZE`.
    pub fn new(base_url: &str, page_size: u8) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid API base URL: {base_url}"))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("API base URL cannot hold a path: {base_url}");
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("octoscope/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        })
    }

    pub fn page_size(&self) -> u8 {
        self.page_size
    }

    pub fn profile_url(&self, username: &str) -> FetchResult<Url> {
        self.endpoint(&["users", username])
    }

    pub fn repositories_url(&self, username: &str) -> FetchResult<Url> {
        let mut url = self.endpoint(&["users", username, "repos"])?;
        url.query_pairs_mut()
            .append_pair("sort", "updated")
            .append_pair("per_page", &self.page_size.to_string());
        Ok(url)
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> FetchResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::Unexpected(format!("Invalid API base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl Gateway for GitHubClient {
    async fn fetch_profile(&self, username: &str) -> FetchResult<Profile> {
        let url = self.profile_url(username)?;
        tracing::debug!(%url, "fetching profile");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(classify_profile_status(status));
        }

        Ok(response.json::<Profile>().await?)
    }

    async fn fetch_repositories(&self, username: &str) -> FetchResult<Vec<Repository>> {
        let url = self.repositories_url(username)?;
        tracing::debug!(%url, "fetching repositories");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(classify_repositories_status(status));
        }

        Ok(response.json::<Vec<Repository>>().await?)
    }
}
