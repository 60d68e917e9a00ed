//! Transport abstraction and the reqwest-backed implementation.
//!
//! The client never talks to the network directly; it hands fully
//! resolved requests to a [`Transport`]. HTTP responses of any status are
//! `Ok` so the client can inspect the status code; only network-level
//! failures are `Err`.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// A fully resolved request: absolute URL, final headers, serialized body.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL including query parameters.
    pub url: Url,
    /// Headers, `Authorization` included when a token is attached.
    pub headers: Vec<(String, String)>,
    /// JSON body, if any.
    pub body: Option<Value>,
}

/// Status and raw body of an HTTP response.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Bytes,
}

impl TransportResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the response indicates a rejected access token.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

/// Network-level transport failures.
///
/// These never carry an HTTP status; a response with a status, however
/// unhappy, comes back as `Ok(TransportResponse)`.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request did not complete within the transport's deadline.
    #[error("request timed out")]
    Timeout,

    /// The connection could not be established.
    #[error("connection error: {0}")]
    Connection(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::Connection(err.to_string())
        } else {
            TransportError::Other(err.into())
        }
    }
}

impl From<TransportError> for blogkit_core::Error {
    fn from(err: TransportError) -> Self {
        blogkit_core::Error::transport(err.to_string())
    }
}

/// Dispatches requests and returns raw responses.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one request.
    async fn execute(&self, request: TransportRequest)
        -> Result<TransportResponse, TransportError>;
}

/// Production transport over [`reqwest`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with reqwest defaults.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a transport with a request timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self { client }
    }

    /// Wrap an existing reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(
        &self,
        request: TransportRequest,
    ) -> Result<TransportResponse, TransportError> {
        let mut builder = self.client.request(request.method, request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(TransportResponse { status, body })
    }
}
