//! HTTP transport port and its reqwest implementation

use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::TransportError;

/// Header identifying the author on every catalog request
pub const AUTHOR_ID_HEADER: HeaderName = HeaderName::from_static("authorid");

/// Status and raw body of a completed HTTP exchange
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Sends one request relative to the catalog base URL.
///
/// Any HTTP status is a successful exchange; only failures below HTTP are
/// `TransportError`s.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<HttpResponse, TransportError>;
}

/// Default transport over a shared `reqwest::Client`
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
    author_id: HeaderValue,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let author_id = HeaderValue::from_str(&config.author_id)
            .map_err(|e| TransportError::new(format!("invalid author id: {}", e)))?;
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            author_id,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<HttpResponse, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "Sending catalog request");

        let mut request = self
            .client
            .request(method, &url)
            .header(AUTHOR_ID_HEADER, self.author_id.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(%status, "Catalog response received");
        Ok(HttpResponse::new(status, body))
    }
}
