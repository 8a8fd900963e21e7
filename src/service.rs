//! The service facade tying builder, transport, classifier and decoder together.
//!
//! [`NetworkService`] is the main entry point. Use [`NetworkServiceBuilder`]
//! to configure one, or [`NetworkService::new`] for the defaults.

use crate::{
    classify::{classify, StatusRange},
    decode::decode,
    logger::{Logger, TracingLogger},
    request::{build_request, TransportRequest},
    resource::Resource,
    transport::{ReqwestTransport, Transport},
    Error, Result,
};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::ops::Range;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A stateful HTTP service: default headers, authorization and the
/// acceptable status range, applied to every [`Resource`] it performs.
///
/// The service is cheap to clone and clones share configuration. Changes are
/// picked up by requests built after the change; requests already handed to
/// the transport are unaffected.
///
/// # Examples
///
/// ```no_run
/// use netservice::{NetworkService, Resource};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Todo {
///     id: u64,
///     title: String,
/// }
///
/// # async fn example() -> Result<(), netservice::Error> {
/// let service = NetworkService::builder()
///     .default_header("Accept", "application/json")
///     .bearer_token("secret")
///     .build()?;
///
/// let resource = Resource::get("https://api.example.com/todos/1".parse().unwrap());
/// let todo: Todo = service.perform_request_decoded(&resource).await?;
/// println!("Todo {}: {}", todo.id, todo.title);
///
/// service.clear_authorization();
/// let raw = service.perform_request(&resource).await?;
/// println!("{} bytes", raw.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct NetworkService {
    inner: Arc<ServiceInner>,
}

struct ServiceInner {
    transport: Arc<dyn Transport>,
    logger: Arc<dyn Logger>,
    config: RwLock<ServiceConfig>,
}

#[derive(Debug, Clone, Default)]
struct ServiceConfig {
    default_headers: HashMap<String, String>,
    authorization: Option<String>,
    acceptable_status: StatusRange,
}

impl NetworkService {
    /// Creates a service with no default headers, no authorization, the
    /// `[200, 300)` status range and a [`ReqwestTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Creates a new [`NetworkServiceBuilder`].
    pub fn builder() -> NetworkServiceBuilder {
        NetworkServiceBuilder::new()
    }

    fn config(&self) -> RwLockReadGuard<'_, ServiceConfig> {
        self.inner
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn config_mut(&self) -> RwLockWriteGuard<'_, ServiceConfig> {
        self.inner
            .config
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a snapshot of the current default headers.
    pub fn default_headers(&self) -> HashMap<String, String> {
        self.config().default_headers.clone()
    }

    /// Returns the current authorization value, if any.
    pub fn authorization(&self) -> Option<String> {
        self.config().authorization.clone()
    }

    /// Returns the current acceptable status range.
    pub fn acceptable_status_range(&self) -> Range<u16> {
        self.config().acceptable_status.range()
    }

    /// Sets a default header sent with every request, replacing any previous
    /// value for `key`.
    pub fn set_header(&self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.inner
            .logger
            .info(&format!("Setting default header {}", key));
        self.config_mut().default_headers.insert(key, value.into());
    }

    /// Removes a default header. Does nothing if it is not set.
    pub fn remove_header(&self, key: &str) {
        self.inner
            .logger
            .info(&format!("Removing default header {}", key));
        self.config_mut().default_headers.remove(key);
    }

    /// Sets the value written to the `Authorization` header of every request.
    ///
    /// The value is used verbatim and replaces any `Authorization` header set
    /// on a [`Resource`] or in the default headers.
    pub fn set_authorization(&self, value: impl Into<String>) {
        self.inner.logger.info("Setting authorization");
        self.config_mut().authorization = Some(value.into());
    }

    /// Sets the authorization to `Bearer <token>`.
    pub fn set_bearer_token(&self, token: impl AsRef<str>) {
        self.set_authorization(format!("Bearer {}", token.as_ref()));
    }

    /// Stops adding an `Authorization` header.
    pub fn clear_authorization(&self) {
        self.inner.logger.info("Clearing authorization");
        self.config_mut().authorization = None;
    }

    /// Sets the range of status codes treated as success.
    ///
    /// Both bounds are clamped into `[100, 600]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use netservice::NetworkService;
    ///
    /// let service = NetworkService::new().unwrap();
    /// service.set_acceptable_status_range(0..300);
    /// assert_eq!(service.acceptable_status_range(), 100..300);
    /// ```
    pub fn set_acceptable_status_range(&self, range: Range<u16>) {
        let status = StatusRange::new(range);
        self.inner.logger.info(&format!(
            "Setting acceptable status range to {:?}",
            status.range()
        ));
        self.config_mut().acceptable_status = status;
    }

    /// Builds the request for `resource` from the current configuration
    /// without sending it.
    pub fn build_request(&self, resource: &Resource) -> TransportRequest {
        let config = self.config();
        build_request(
            resource,
            &config.default_headers,
            config.authorization.as_deref(),
        )
    }

    /// Performs `resource` and returns the raw body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataTask`](crate::Error::DataTask) if the transport
    /// fails, [`Error::Response`](crate::Error::Response) if no status came
    /// back, [`Error::BadStatusCode`](crate::Error::BadStatusCode) for a status
    /// outside the acceptable range, and [`Error::BadData`](crate::Error::BadData)
    /// if the body is missing.
    pub async fn perform_request(&self, resource: &Resource) -> Result<Bytes> {
        let (request, acceptable) = {
            let config = self.config();
            let request = build_request(
                resource,
                &config.default_headers,
                config.authorization.as_deref(),
            );
            (request, config.acceptable_status.clone())
        };

        self.inner.logger.verbose(&format!(
            "Performing {} request to {}",
            request.method, request.url
        ));

        let outcome = self.inner.transport.send(request).await;

        classify(outcome, &acceptable).inspect_err(|e| {
            self.inner.logger.error(&format!("Request failed: {}", e));
        })
    }

    /// Performs `resource` and decodes the body as JSON into `T`.
    ///
    /// Transport and classification failures are returned before any
    /// decoding is attempted.
    ///
    /// # Errors
    ///
    /// Everything [`perform_request`](Self::perform_request) returns, plus
    /// [`Error::Decoding`](crate::Error::Decoding) if the body does not parse.
    pub async fn perform_request_decoded<T>(&self, resource: &Resource) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let bytes = self.perform_request(resource).await?;
        self.decode(&bytes)
    }

    /// Decodes `bytes` as JSON into `T`, logging the attempt.
    pub fn decode<T>(&self, bytes: &[u8]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let type_name = std::any::type_name::<T>();
        self.inner
            .logger
            .verbose(&format!("Decoding {} bytes into {}", bytes.len(), type_name));

        match decode(bytes) {
            Ok(value) => {
                self.inner
                    .logger
                    .verbose(&format!("Decoded {}", type_name));
                Ok(value)
            }
            Err(e) => {
                self.inner
                    .logger
                    .error(&format!("Failed to decode {}: {}", type_name, e));
                Err(e)
            }
        }
    }
}

/// Builder for configuring and creating a [`NetworkService`].
///
/// # Examples
///
/// ```
/// use netservice::{NetworkServiceBuilder, NoopLogger};
///
/// let service = NetworkServiceBuilder::new()
///     .default_header("User-Agent", "my-app/1.0")
///     .authorization("Token abc")
///     .acceptable_status(200..400)
///     .logger(NoopLogger)
///     .build()
///     .unwrap();
///
/// assert_eq!(service.authorization().as_deref(), Some("Token abc"));
/// assert_eq!(service.acceptable_status_range(), 200..400);
/// ```
pub struct NetworkServiceBuilder {
    config: ServiceConfig,
    transport: Option<Arc<dyn Transport>>,
    logger: Option<Arc<dyn Logger>>,
}

impl NetworkServiceBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: ServiceConfig::default(),
            transport: None,
            logger: None,
        }
    }

    /// Adds a default header that will be included in all requests.
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config
            .default_headers
            .insert(name.into(), value.into());
        self
    }

    /// Adds several default headers at once.
    pub fn default_headers(
        mut self,
        headers: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        self.config.default_headers.extend(headers);
        self
    }

    /// Sets the verbatim `Authorization` value.
    pub fn authorization(mut self, value: impl Into<String>) -> Self {
        self.config.authorization = Some(value.into());
        self
    }

    /// Sets the authorization to `Bearer <token>`.
    pub fn bearer_token(self, token: impl AsRef<str>) -> Self {
        let value = format!("Bearer {}", token.as_ref());
        self.authorization(value)
    }

    /// Sets the acceptable status range, clamped into `[100, 600]`.
    pub fn acceptable_status(mut self, range: Range<u16>) -> Self {
        self.config.acceptable_status = StatusRange::new(range);
        self
    }

    /// Sets the transport. Defaults to [`ReqwestTransport`].
    pub fn transport<T>(self, transport: T) -> Self
    where
        T: Transport + 'static,
    {
        self.shared_transport(Arc::new(transport))
    }

    /// Sets a transport that is shared with other owners.
    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets the logger. Defaults to [`TracingLogger`].
    pub fn logger<L>(mut self, logger: L) -> Self
    where
        L: Logger + 'static,
    {
        self.logger = Some(Arc::new(logger));
        self
    }

    /// Builds the configured `NetworkService`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if no transport was set and the
    /// default `reqwest` client cannot be built.
    pub fn build(self) -> Result<NetworkService> {
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => {
                let client = reqwest::Client::builder().build().map_err(|e| {
                    Error::Configuration(format!("Failed to build HTTP client: {}", e))
                })?;
                Arc::new(ReqwestTransport::new(client))
            }
        };
        let logger = self.logger.unwrap_or_else(|| Arc::new(TracingLogger));

        logger.info(&format!(
            "Network service created with {} default headers",
            self.config.default_headers.len()
        ));

        Ok(NetworkService {
            inner: Arc::new(ServiceInner {
                transport,
                logger,
                config: RwLock::new(self.config),
            }),
        })
    }
}

impl Default for NetworkServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
