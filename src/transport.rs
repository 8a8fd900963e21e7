//! The seam between the service and the network.
//!
//! A [`Transport`] performs exactly one send-and-receive for a fully built
//! [`TransportRequest`]. It does not look at status codes or decode bodies;
//! that is left to the classifier and the decoder. Tests swap in a
//! deterministic implementation instead of [`ReqwestTransport`].

use crate::request::TransportRequest;
use async_trait::async_trait;
use bytes::Bytes;

/// A transport-level failure (DNS, connection, TLS, etc.).
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// What came back from the transport when it did not fail outright.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    /// The HTTP status code, if the response was HTTP-shaped.
    pub status: Option<u16>,
    /// The response body, if any.
    pub body: Option<Bytes>,
}

impl RawResponse {
    /// Creates an HTTP response with the given status and body.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status: Some(status),
            body: Some(body.into()),
        }
    }

    /// Creates an HTTP response that carried no body.
    pub fn empty(status: u16) -> Self {
        Self {
            status: Some(status),
            body: None,
        }
    }
}

/// Performs one asynchronous request.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use netservice::{RawResponse, Transport, TransportError, TransportRequest};
///
/// struct AlwaysTeapot;
///
/// #[async_trait]
/// impl Transport for AlwaysTeapot {
///     async fn send(&self, _request: TransportRequest) -> Result<RawResponse, TransportError> {
///         Ok(RawResponse::new(418, "short and stout"))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the raw outcome.
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, TransportError>;
}

/// [`Transport`] backed by a `reqwest::Client`.
///
/// Headers are passed through verbatim and no timeout is imposed beyond the
/// client's own defaults. The body is returned as received, even when empty.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wraps an existing `reqwest::Client`.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .client
            .request(http::Method::from(request.method), request.url);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(RawResponse {
            status: Some(status),
            body: Some(body),
        })
    }
}
