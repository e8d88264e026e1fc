//! Job Board Client — the single point of entry for all board API calls.
//!
//! No other module issues HTTP directly; the three resource fetchers at the
//! bottom of this file wrap the client so loaders stay generic over the
//! `ResourceFetcher` seam.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::TokenProvider;
use crate::detail::{aggregate, JobDetailView};
use crate::errors::FetchError;
use crate::loader::ResourceFetcher;
use crate::models::job::{JobSummary, JobsEnvelope};
use crate::models::profile::{ProfileEnvelope, ProfileSummary};
use crate::query::QueryDescriptor;

pub const DEFAULT_BASE_URL: &str = "https://apis.ccbp.in";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The one HTTP client for the board API. Attaches the bearer credential
/// from the injected provider on every request; with no token the request
/// still goes out and the server's rejection surfaces as a failed fetch.
#[derive(Clone)]
pub struct JobBoardClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl JobBoardClient {
    pub fn new(base_url: impl Into<String>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self::with_timeout(base_url, tokens, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenProvider>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
            tokens,
        }
    }

    /// `GET /profile`, unwrapping the `profile_details` envelope.
    pub async fn profile(&self) -> Result<ProfileSummary, FetchError> {
        let envelope: ProfileEnvelope = self.get_json("/profile", None).await?;
        Ok(envelope.profile_details)
    }

    /// `GET /jobs` with the three ANDed query constraints.
    pub async fn jobs(&self, query: &QueryDescriptor) -> Result<Vec<JobSummary>, FetchError> {
        let envelope: JobsEnvelope = self.get_json("/jobs", Some(query)).await?;
        Ok(envelope.jobs)
    }

    /// `GET /jobs/{id}`, aggregated into the detail + similar view model.
    pub async fn job_detail(&self, id: &str) -> Result<JobDetailView, FetchError> {
        let raw: Value = self.get_json(&format!("/jobs/{id}"), None).await?;
        aggregate(raw)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&QueryDescriptor>,
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.client.get(&url);
        if let Some(query) = query {
            request = request.query(&query.as_pairs());
        }
        if let Some(token) = self.tokens.token() {
            request = request.header(header::AUTHORIZATION, bearer(&token));
        }

        debug!(%url, "issuing GET");
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "API returned non-success status");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Formats the `Authorization` header value.
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

// ────────────────────────────────────────────────────────────────────────────
// Resource fetchers — one per endpoint, consumed by ResourceLoader
// ────────────────────────────────────────────────────────────────────────────

pub struct ProfileFetcher(pub JobBoardClient);

#[async_trait]
impl ResourceFetcher for ProfileFetcher {
    type Request = ();
    type Output = ProfileSummary;

    async fn fetch(&self, _request: &()) -> Result<ProfileSummary, FetchError> {
        self.0.profile().await
    }
}

pub struct JobsFetcher(pub JobBoardClient);

#[async_trait]
impl ResourceFetcher for JobsFetcher {
    type Request = QueryDescriptor;
    type Output = Vec<JobSummary>;

    async fn fetch(&self, request: &QueryDescriptor) -> Result<Vec<JobSummary>, FetchError> {
        self.0.jobs(request).await
    }
}

pub struct JobDetailFetcher(pub JobBoardClient);

#[async_trait]
impl ResourceFetcher for JobDetailFetcher {
    type Request = String;
    type Output = JobDetailView;

    async fn fetch(&self, request: &String) -> Result<JobDetailView, FetchError> {
        self.0.job_detail(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header_value() {
        assert_eq!(bearer("jwt-abc"), "Bearer jwt-abc");
    }
}
