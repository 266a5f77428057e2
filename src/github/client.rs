use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use url::Url;

use crate::auth::Token;
use crate::error::{CifailError, Result};

/// GitHub REST API media type.
const ACCEPT_JSON: &str = "application/vnd.github+json";
/// API version pin sent with every request.
const API_VERSION: &str = "2022-11-28";

/// Authenticated GitHub API client, scoped to a single repository.
///
/// One client is built per invocation and reused for every call, so the
/// default header set and connection are shared across requests.
pub struct GitHubClient {
    /// HTTP client carrying the default headers
    client: reqwest::Client,
    /// Base URL for the GitHub API
    base_url: String,
    /// Repository owner
    owner: String,
    /// Repository name
    repo: String,
}

impl GitHubClient {
    /// Create a new GitHub API client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - GitHub API base URL (e.g., "https://api.github.com")
    /// * `owner` - Repository owner/organization
    /// * `repo` - Repository name
    /// * `token` - GitHub access token
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the base URL does not parse, the
    /// token is not a valid header value, or the HTTP client cannot be built.
    pub fn new(base_url: &str, owner: &str, repo: &str, token: Token) -> Result<Self> {
        Url::parse(base_url)
            .map_err(|e| CifailError::Config(format!("Invalid base URL: {e}")))?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("cifail/0.4"));
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));
        headers.insert(
            HeaderName::from_static("x-github-api-version"),
            HeaderValue::from_static(API_VERSION),
        );

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
            .map_err(|e| CifailError::Config(format!("Invalid token: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| CifailError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            owner: owner.to_owned(),
            repo: repo.to_owned(),
        })
    }

    /// Full URL for an endpoint under the target repository.
    pub(super) fn repo_url(&self, rest: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.base_url, self.owner, self.repo, rest
        )
    }

    /// Perform a GET against the API and decode the JSON body.
    ///
    /// Non-2xx responses become [`CifailError::Api`], carrying the status
    /// code and raw body so callers can classify them.
    pub(super) async fn get<T>(&self, url: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            return Err(CifailError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
