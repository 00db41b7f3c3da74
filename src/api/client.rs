//! Console REST client
//!
//! Thin typed wrapper over the backend. GET requests are retried on
//! transient failures; mutating requests are sent once.

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::dto::ErrorBody;
use super::resources::{
    ClientAccessResource, DashboardResource, PackagesResource, ProjectsResource,
    ReleasesResource, RolesResource, ShareLinksResource, TenantsResource, UsersResource,
};
use crate::config::ApiConfig;
use crate::shared::{retry_with_backoff, ApiError, RetryConfig};

/// Builder for [`ConsoleClient`].
#[derive(Clone)]
pub struct ClientBuilder {
    base_url: String,
    timeout: Duration,
    token: Option<String>,
    retry: RetryConfig,
}

impl ClientBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            token: None,
            retry: RetryConfig::default(),
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Bearer token sent with every request. Kept in memory only.
    pub fn token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn build(self) -> Result<ConsoleClient, ApiError> {
        let base_url = self.base_url.trim().trim_end_matches('/').to_string();
        let parsed =
            reqwest::Url::parse(&base_url).map_err(|e| ApiError::InvalidUrl(format!("{base_url}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(format!(
                "{base_url}: unsupported scheme {}",
                parsed.scheme()
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(ConsoleClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                token: self.token,
                retry: self.retry,
            }),
        })
    }
}

struct ClientInner {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
    retry: RetryConfig,
}

impl std::fmt::Debug for ClientInner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientInner")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

/// Cheaply cloneable handle to the backend.
#[derive(Debug, Clone)]
pub struct ConsoleClient {
    inner: Arc<ClientInner>,
}

impl ConsoleClient {
    pub fn builder(base_url: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(base_url)
    }

    /// Build a client from the `[api]` and `[retry]` config sections.
    pub fn from_config(
        api: &ApiConfig,
        retry: &RetryConfig,
        token: Option<String>,
    ) -> Result<Self, ApiError> {
        ClientBuilder::new(api.base_url.clone())
            .timeout(Duration::from_secs(api.timeout_secs.max(1)))
            .token(token)
            .retry(retry.clone())
            .build()
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn users(&self) -> UsersResource<'_> {
        UsersResource::new(self)
    }

    pub fn tenants(&self) -> TenantsResource<'_> {
        TenantsResource::new(self)
    }

    pub fn roles(&self) -> RolesResource<'_> {
        RolesResource::new(self)
    }

    pub fn projects(&self) -> ProjectsResource<'_> {
        ProjectsResource::new(self)
    }

    pub fn packages(&self) -> PackagesResource<'_> {
        PackagesResource::new(self)
    }

    pub fn releases(&self) -> ReleasesResource<'_> {
        ReleasesResource::new(self)
    }

    pub fn client_access(&self) -> ClientAccessResource<'_> {
        ClientAccessResource::new(self)
    }

    pub fn share_links(&self) -> ShareLinksResource<'_> {
        ShareLinksResource::new(self)
    }

    pub fn dashboard(&self) -> DashboardResource<'_> {
        DashboardResource::new(self)
    }

    /// GET `path` and decode the JSON body, retrying transient failures.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let operation = format!("GET {path}");
        let body = retry_with_backoff(
            &self.inner.retry,
            || self.execute::<()>(Method::GET, path, query, None),
            ApiError::is_transient,
            &operation,
        )
        .await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Send a mutating request with an optional JSON body and decode the
    /// JSON response.
    pub(crate) async fn send<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.execute(method, path, &[], body).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// DELETE `path`, ignoring any response body.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute::<()>(Method::DELETE, path, &[], None).await?;
        Ok(())
    }

    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Vec<u8>, ApiError> {
        let url = format!("{}{}", self.inner.base_url, path);
        let started = Instant::now();

        let mut request = self.inner.http.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = &self.inner.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!(
            method = %method,
            path,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Backend request completed"
        );

        if status.is_success() {
            Ok(bytes.to_vec())
        } else {
            Err(status_error(status, path, &bytes))
        }
    }
}

fn status_error(status: StatusCode, path: &str, body: &[u8]) -> ApiError {
    let message = ErrorBody::message_from(body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    });
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Unauthorized(message),
        StatusCode::NOT_FOUND => ApiError::NotFound(path.to_string()),
        _ => ApiError::Status {
            status: status.as_u16(),
            message,
        },
    }
}
