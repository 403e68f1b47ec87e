//! HTTP transport for TMDB endpoints.
#![allow(clippy::future_not_send)]

use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::Client;
use tracing::instrument;
use url::Url;

use super::endpoint::Endpoint;
use super::envelope::{Envelope, RawPayload};
use super::error::ApiError;
use super::types::TmdbErrorResponse;

/// Default base URL for TMDB API v3.
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Transport trait.
///
/// Performs exactly one round trip per call and classifies the outcome.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[trait_variant::make(Transport: Send)]
pub trait LocalTransport {
    /// Fetches the raw body for `endpoint`.
    ///
    /// # Errors
    ///
    /// - `ApiError::Transport` on connection, timeout or body read failure.
    /// - `ApiError::HttpStatus` on a non-2xx response.
    async fn fetch(&self, endpoint: &Endpoint) -> Envelope<RawPayload>;
}

/// reqwest-backed transport with Bearer authentication.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct HttpTransport {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests (ends with `/`).
    base_url: Url,
    /// Bearer API token.
    api_token: String,
    /// Response language appended to every request.
    language: Option<String>,
}

/// Builder for `HttpTransport`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct HttpTransportBuilder {
    base_url: Option<Url>,
    api_token: Option<String>,
    user_agent: Option<String>,
    language: Option<String>,
    timeout: Option<Duration>,
}

impl HttpTransportBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            api_token: None,
            user_agent: None,
            language: None,
            timeout: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API bearer token (required).
    #[must_use]
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the response language (e.g. "en-US").
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets a total request timeout (default: none).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the transport.
    ///
    /// # Errors
    ///
    /// - `api_token` is not set.
    /// - `user_agent` is not set.
    /// - the base URL cannot be a base (e.g. `mailto:`).
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<HttpTransport> {
        let api_token = self.api_token.context("api_token is required")?;
        let user_agent = self.user_agent.context("user_agent is required")?;

        let mut base_url = if let Some(url) = self.base_url {
            url
        } else {
            let result = Url::parse(DEFAULT_BASE_URL);
            result.context("invalid default base URL")?
        };
        if base_url.cannot_be_a_base() {
            bail!("base URL cannot be a base: {base_url}");
        }
        // Endpoint paths are joined relative to the last segment.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = Client::builder().user_agent(&user_agent).gzip(true);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().context("failed to build HTTP client")?;

        Ok(HttpTransport {
            http_client,
            base_url,
            api_token,
            language: self.language,
        })
    }
}

impl HttpTransport {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::new()
    }
}

impl LocalTransport for HttpTransport {
    #[instrument(skip_all, fields(operation = endpoint.name()))]
    async fn fetch(&self, endpoint: &Endpoint) -> Envelope<RawPayload> {
        let path = endpoint.path();
        let transport_error = |source| ApiError::Transport {
            operation: path.clone(),
            source,
        };

        let mut query = endpoint.query();
        if let Some(ref language) = self.language {
            query.push(("language", language.clone()));
        }

        let url = self
            .base_url
            .join(&path)
            .map_err(|source| ApiError::InvalidUrl {
                operation: path.clone(),
                source,
            })?;

        let request = self
            .http_client
            .get(url)
            .bearer_auth(&self.api_token)
            .query(&query)
            .build()
            .map_err(transport_error)?;

        tracing::debug!(url = %request.url(), "TMDB API request");

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("<failed to read body>"));
            let message = serde_json::from_str::<TmdbErrorResponse>(&body)
                .map_or(body, |error_response| error_response.status_message);
            tracing::warn!(status = status.as_u16(), %message, "TMDB API error");
            return Err(ApiError::HttpStatus {
                operation: path,
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await.map_err(transport_error)?;
        tracing::debug!(bytes = body.len(), "TMDB API response");
        Ok(RawPayload::from(body.to_vec()))
    }
}
