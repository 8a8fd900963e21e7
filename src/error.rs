//! Error types for service calls.
//!
//! Every call resolves to exactly one of these kinds. Nothing is retried or
//! swallowed internally; the caller always gets the failure through the
//! `Result` channel of the call that produced it.

use crate::transport::TransportError;

/// The error type for [`NetworkService`](crate::NetworkService) calls.
///
/// # Examples
///
/// ```no_run
/// use netservice::{Error, HttpMethod, NetworkService, Resource};
///
/// # async fn example() -> Result<(), Error> {
/// let service = NetworkService::new()?;
/// let resource = Resource::new(
///     HttpMethod::Get,
///     "https://api.example.com/todos/1".parse().unwrap(),
///     None,
///     Default::default(),
/// );
///
/// match service.perform_request_decoded::<serde_json::Value>(&resource).await {
///     Ok(todo) => println!("Todo: {}", todo),
///     Err(Error::BadStatusCode(code)) => eprintln!("Unexpected status {}", code),
///     Err(Error::Decoding { raw_response, source }) => {
///         eprintln!("Could not decode {}: {}", raw_response, source);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The transport failed before producing a response (DNS, connection, TLS, etc.).
    #[error("Transport error: {0}")]
    DataTask(#[source] TransportError),

    /// The transport completed but produced no interpretable status code.
    #[error("Response carried no HTTP status")]
    Response,

    /// The status code fell outside the service's acceptable range.
    #[error("Unacceptable status code {0}")]
    BadStatusCode(u16),

    /// The status code was acceptable but the body was missing or empty.
    #[error("Response body is missing")]
    BadData,

    /// The body did not parse into the requested type.
    ///
    /// The serde error is kept as the source and the raw body is preserved
    /// for debugging.
    #[error("Failed to decode response: {source}")]
    Decoding {
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
        /// The raw response body, lossily converted to UTF-8
        raw_response: String,
    },

    /// The service could not be built, e.g. the HTTP client failed to
    /// initialise. Never returned by a request.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Returns the offending status code for [`Error::BadStatusCode`].
    ///
    /// # Examples
    ///
    /// ```
    /// use netservice::Error;
    ///
    /// assert_eq!(Error::BadStatusCode(404).status(), Some(404));
    /// assert_eq!(Error::BadData.status(), None);
    /// ```
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::BadStatusCode(code) => Some(*code),
            _ => None,
        }
    }

    /// Returns the raw response body if this error kept one.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Error::Decoding { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }

    /// Returns `true` if the transport itself failed.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::DataTask(_))
    }
}

/// A specialized `Result` type for service calls.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_status_only_for_bad_status_code() {
        assert_eq!(Error::BadStatusCode(503).status(), Some(503));
        assert_eq!(Error::Response.status(), None);
        assert_eq!(Error::BadData.status(), None);
    }

    #[test]
    fn test_decoding_error_keeps_source_and_body() {
        let source = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = Error::Decoding {
            source,
            raw_response: "nope".to_string(),
        };

        assert_eq!(err.raw_response(), Some("nope"));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Failed to decode response"));
    }

    #[test]
    fn test_data_task_exposes_transport_error() {
        let inner: TransportError = "connection refused".into();
        let err = Error::DataTask(inner);

        assert!(err.is_transport());
        assert_eq!(err.source().unwrap().to_string(), "connection refused");
    }

    #[test]
    fn test_configuration_error_display() {
        let err = Error::Configuration("Failed to build HTTP client: tls".to_string());

        assert_eq!(
            err.to_string(),
            "Configuration error: Failed to build HTTP client: tls"
        );
        assert!(!err.is_transport());
        assert_eq!(err.status(), None);
    }
}
