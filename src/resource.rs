//! Declarative description of a single request.

use bytes::Bytes;
use std::collections::HashMap;
use std::fmt;
use url::Url;

/// HTTP methods a [`Resource`] can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Returns the method as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for http::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Post => http::Method::POST,
            HttpMethod::Put => http::Method::PUT,
            HttpMethod::Delete => http::Method::DELETE,
        }
    }
}

/// Everything needed to perform one request: method, target, body and
/// per-request headers.
///
/// A `Resource` is immutable once built. Header names and values, as well as
/// the target URL, are taken verbatim.
///
/// # Examples
///
/// ```
/// use netservice::{HttpMethod, Resource};
///
/// let resource = Resource::new(
///     HttpMethod::Post,
///     "https://api.example.com/todos".parse().unwrap(),
///     Some(br#"{"title":"Test"}"#.to_vec().into()),
///     [("Content-Type".to_string(), "application/json".to_string())].into(),
/// );
///
/// assert_eq!(resource.method(), HttpMethod::Post);
/// assert_eq!(resource.header("Content-Type"), Some("application/json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    method: HttpMethod,
    url: Url,
    body: Option<Bytes>,
    headers: HashMap<String, String>,
}

impl Resource {
    /// Creates a new `Resource`.
    ///
    /// # Panics
    ///
    /// Panics if `method` is [`HttpMethod::Get`] and a body is supplied. A GET
    /// with a body is a programming error, not a runtime condition.
    pub fn new(
        method: HttpMethod,
        url: Url,
        body: Option<Bytes>,
        headers: HashMap<String, String>,
    ) -> Self {
        assert!(
            !(method == HttpMethod::Get && body.is_some()),
            "GET method must not have a body"
        );

        Self {
            method,
            url,
            body,
            headers,
        }
    }

    /// Shorthand for a GET resource without headers.
    pub fn get(url: Url) -> Self {
        Self::new(HttpMethod::Get, url, None, HashMap::new())
    }

    /// Shorthand for a DELETE resource without body or headers.
    pub fn delete(url: Url) -> Self {
        Self::new(HttpMethod::Delete, url, None, HashMap::new())
    }

    /// Shorthand for a POST resource carrying `body`.
    pub fn post(url: Url, body: impl Into<Bytes>) -> Self {
        Self::new(HttpMethod::Post, url, Some(body.into()), HashMap::new())
    }

    /// Shorthand for a PUT resource carrying `body`.
    pub fn put(url: Url, body: impl Into<Bytes>) -> Self {
        Self::new(HttpMethod::Put, url, Some(body.into()), HashMap::new())
    }

    /// Returns a copy of this resource with one more header.
    ///
    /// An existing header with the same name is replaced.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Returns the HTTP method.
    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the absolute target URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the body, if any.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Returns the per-request headers.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns a per-request header value by exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}
