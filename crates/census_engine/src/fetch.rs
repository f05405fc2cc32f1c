use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde::Deserialize;

use crate::{FailureKind, FetchError, ProfileRecord};

/// Default endpoint for profile lookups; the identifier is appended verbatim.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com/users/";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            user_agent: "census-profile-collector".to_string(),
        }
    }
}

/// Wire view of a profile response. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct WireProfile {
    login: String,
    created_at: String,
    public_repos: u32,
}

#[async_trait::async_trait]
pub trait ProfileFetcher: Send + Sync {
    async fn fetch_profile(&self, identifier: &str) -> Result<ProfileRecord, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestFetcher {
    /// Build a fetcher over one shared client. The remote API rejects
    /// agent-less requests, so a `User-Agent` header is always sent.
    pub fn new(base_url: impl Into<String>, settings: FetchSettings) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(&settings.user_agent)
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        headers.insert(USER_AGENT, agent);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait::async_trait]
impl ProfileFetcher for ReqwestFetcher {
    async fn fetch_profile(&self, identifier: &str) -> Result<ProfileRecord, FetchError> {
        let raw = format!("{}{}", self.base_url, identifier);
        let url = reqwest::Url::parse(&raw)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|err| FetchError::new(FailureKind::InvalidJson, err.to_string()))?;

        // An error-shaped body (unknown identifier, rate limit) is valid
        // json without the profile fields; that is a lookup failure, not a
        // parse failure.
        let profile: WireProfile = serde_json::from_value(value)
            .map_err(|err| FetchError::new(FailureKind::MissingField, err.to_string()))?;

        Ok(ProfileRecord {
            username: profile.login,
            date_made: profile.created_at,
            num_repos: profile.public_repos,
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
