//! HTTP transport for the Visoma service.
//!
//! `HttpClient` owns the single connection pool, injects the fixed headers
//! every request carries, and applies one response-handling policy to every
//! verb. Redirects are not followed: the service uses 3xx responses as a
//! bare acknowledgment on some legacy endpoints, and the classifier must be
//! able to observe them.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{redirect, Client, RequestBuilder, Response};
use serde::Serialize;
use serde_json::Value;

use crate::config::Config;
use crate::error::VisomaError;

/// Fixed connect/read timeout applied uniformly to every request.
const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Browser-like user agent the service expects on every request.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36 Edg/121.0.0.";

/// Header carrying the login user name.
const USERNAME_HEADER: &str = "x_vsm_username";

/// Header carrying the login password.
const PASSWORD_HEADER: &str = "x_vsm_password";

/// Transport wrapper around the pooled HTTP client.
///
/// Cloning is cheap; every clone shares the same connection pool, which is
/// released when the last clone drops.
#[derive(Clone)]
pub(crate) struct HttpClient {
    http: Client,
    base_url: String,
}

impl HttpClient {
    /// Builds the transport from configuration.
    ///
    /// # Errors
    ///
    /// Returns `VisomaError::Config` when a credential cannot be carried in
    /// a header, or `VisomaError::HttpClient` when the underlying client
    /// fails to initialize.
    pub(crate) fn new(config: &Config) -> Result<Self, VisomaError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(USERNAME_HEADER),
            HeaderValue::from_str(&config.user).map_err(|_| {
                VisomaError::invalid_config("VISOMA_USER is not a valid header value")
            })?,
        );

        let mut password = HeaderValue::from_str(&config.password).map_err(|_| {
            VisomaError::invalid_config("VISOMA_PASSWORD is not a valid header value")
        })?;
        password.set_sensitive(true);
        headers.insert(HeaderName::from_static(PASSWORD_HEADER), password);

        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(VisomaError::HttpClient)?;

        Ok(Self {
            http,
            base_url: config.base_url(),
        })
    }

    /// Makes a GET request and parses the body as JSON.
    ///
    /// Returns `Ok(None)` when the service acknowledges with a redirect.
    pub(crate) async fn get_json(
        &self,
        path: &str,
        params: Option<&BTreeMap<String, String>>,
    ) -> Result<Option<Value>, VisomaError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let mut request = self.http.get(&url);
        if let Some(params) = params {
            request = request.query(params);
        }

        match classify(send(request).await?).await? {
            Some(response) => Ok(Some(into_json(response).await?)),
            None => Ok(None),
        }
    }

    /// Makes a GET request and returns the raw body text.
    ///
    /// Used for the legacy HTML endpoints that have no JSON counterpart.
    pub(crate) async fn get_text(&self, path: &str) -> Result<Option<String>, VisomaError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        match classify(send(self.http.get(&url)).await?).await? {
            Some(response) => {
                let body = response.text().await.map_err(VisomaError::Transport)?;
                Ok(Some(body))
            }
            None => Ok(None),
        }
    }

    /// Makes a POST request with a JSON body and parses the JSON response.
    pub(crate) async fn post_json<B>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<Value>, VisomaError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        match classify(send(self.http.post(&url).json(body)).await?).await? {
            Some(response) => Ok(Some(into_json(response).await?)),
            None => Ok(None),
        }
    }

    /// Makes a DELETE request and parses the JSON response.
    pub(crate) async fn delete_json(&self, path: &str) -> Result<Option<Value>, VisomaError> {
        let url = self.url(path);
        tracing::debug!(%url, "DELETE");

        match classify(send(self.http.delete(&url)).await?).await? {
            Some(response) => Ok(Some(into_json(response).await?)),
            None => Ok(None),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

async fn send(request: RequestBuilder) -> Result<Response, VisomaError> {
    request.send().await.map_err(VisomaError::Transport)
}

/// The one place status-code semantics are decided, for every verb:
/// 2xx passes the response through, 3xx yields no value, anything else
/// fails with the status and raw body text.
async fn classify(response: Response) -> Result<Option<Response>, VisomaError> {
    let status = response.status();
    tracing::debug!(status = status.as_u16(), "response");

    if status.is_success() {
        return Ok(Some(response));
    }

    if status.is_redirection() {
        return Ok(None);
    }

    let body = response.text().await.unwrap_or_default();
    Err(VisomaError::Http { status, body })
}

async fn into_json(response: Response) -> Result<Value, VisomaError> {
    let body = response.text().await.map_err(VisomaError::Transport)?;
    tracing::trace!(%body, "response body");
    Ok(serde_json::from_str(&body)?)
}
