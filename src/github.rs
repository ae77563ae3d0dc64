use reqwest::blocking::Client;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use crate::config::Config;
use crate::error_handling::{GitPeekError, Result};
use crate::models::{CommitEntry, Repository, User};

/// Items per page the API returns when no `per_page` is requested
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Blocking GitHub REST client; one request per call, no retries
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

/// Value for the `Authorization` header
#[must_use]
pub fn authorization_value(token: &str) -> String {
    format!("token {token}")
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            HeaderValue::from_static(concat!("gitpeek/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&authorization_value(token))
                .map_err(|_| GitPeekError::Config("token contains invalid characters".into()))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        } else {
            debug!("No API token configured, sending unauthenticated requests");
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    /// GET `path` and decode a 200 body; an empty 200 body yields `None`
    pub fn get_json<T>(&self, path: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("GitHub API request: GET {}", url);

        let response = self.client.get(&url).send()?;
        let status = response.status();
        let body = response.text()?;
        trace!("GitHub API response body: {}", body);

        if status != StatusCode::OK {
            debug!("GitHub API error: {}", status);
            return Err(GitPeekError::from_response(status.as_u16(), &body));
        }

        if body.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| GitPeekError::MalformedBody(e.to_string()))
    }

    /// Fetch a user profile
    pub fn get_user(&self, username: &str) -> Result<Option<User>> {
        let path = format!("/users/{}", urlencoding::encode(username));
        self.get_json(&path)
    }

    /// Fetch the first page of a user's public repositories
    pub fn list_repos(&self, username: &str) -> Result<Vec<Repository>> {
        let path = format!("/users/{}/repos", urlencoding::encode(username));
        let repos: Vec<Repository> = self.get_json(&path)?.unwrap_or_default();
        warn_if_truncated(repos.len(), "repositories");
        Ok(repos)
    }

    /// Fetch the first page of commits on a branch
    pub fn list_commits(
        &self,
        username: &str,
        repo: &str,
        branch: &str,
    ) -> Result<Vec<CommitEntry>> {
        let path = format!(
            "/repos/{}/{}/commits?sha={}",
            urlencoding::encode(username),
            urlencoding::encode(repo),
            urlencoding::encode(branch)
        );
        let commits: Vec<CommitEntry> = self.get_json(&path)?.unwrap_or_default();
        warn_if_truncated(commits.len(), "commits");
        Ok(commits)
    }
}

fn warn_if_truncated(count: usize, what: &str) {
    // Only the first page is ever fetched
    if count >= DEFAULT_PAGE_SIZE {
        warn!(
            "Received a full page of {} {}; results beyond the first page are not shown",
            count, what
        );
    }
}
