//! Turning a [`Resource`] into a ready-to-send request.

use crate::resource::{HttpMethod, Resource};
use bytes::Bytes;
use std::collections::HashMap;
use url::Url;

/// Name of the header the service-level authorization is written to.
pub const AUTHORIZATION: &str = "Authorization";

/// A fully merged request, ready to hand to a [`Transport`](crate::Transport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The absolute target URL.
    pub url: Url,
    /// Default headers merged with the resource's own headers.
    pub headers: HashMap<String, String>,
    /// The request body, unchanged from the resource.
    pub body: Option<Bytes>,
}

/// Builds the request for `resource` on top of service-level defaults.
///
/// Merge order, last write wins:
/// 1. `default_headers`
/// 2. the resource's own headers
/// 3. `authorization`, written to the `Authorization` header
///
/// The service-level authorization therefore replaces an `Authorization`
/// header set on the resource itself.
///
/// # Examples
///
/// ```
/// use netservice::{build_request, Resource};
/// use std::collections::HashMap;
///
/// let defaults: HashMap<String, String> =
///     [("A".to_string(), "1".to_string()), ("B".to_string(), "2".to_string())].into();
/// let resource = Resource::get("https://example.com".parse().unwrap())
///     .with_header("B", "3")
///     .with_header("C", "4");
///
/// let request = build_request(&resource, &defaults, Some("X"));
/// assert_eq!(request.headers["A"], "1");
/// assert_eq!(request.headers["B"], "3");
/// assert_eq!(request.headers["C"], "4");
/// assert_eq!(request.headers["Authorization"], "X");
/// ```
pub fn build_request(
    resource: &Resource,
    default_headers: &HashMap<String, String>,
    authorization: Option<&str>,
) -> TransportRequest {
    let mut headers = default_headers.clone();
    headers.extend(
        resource
            .headers()
            .iter()
            .map(|(name, value)| (name.clone(), value.clone())),
    );

    if let Some(authorization) = authorization {
        headers.insert(AUTHORIZATION.to_string(), authorization.to_string());
    }

    TransportRequest {
        method: resource.method(),
        url: resource.url().clone(),
        headers,
        body: resource.body().cloned(),
    }
}
