//! The service as an abstraction.
//!
//! Code that performs requests can depend on [`NetworkProvider`] instead of
//! the concrete [`NetworkService`], and swap in a fake in its own tests.

use crate::{decode::decode, resource::Resource, service::NetworkService, Result};
use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::ops::Range;

/// A configurable service that performs [`Resource`]s.
///
/// # Examples
///
/// ```no_run
/// use netservice::{NetworkProvider, NetworkService, Resource};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Todo { title: String }
///
/// async fn first_todo<P: NetworkProvider>(provider: &P) -> netservice::Result<String> {
///     let resource = Resource::get("https://api.example.com/todos/1".parse().unwrap());
///     let todo: Todo = provider.perform_request_decoded(&resource).await?;
///     Ok(todo.title)
/// }
///
/// # async fn example() -> netservice::Result<()> {
/// let service = NetworkService::new()?;
/// println!("{}", first_todo(&service).await?);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait NetworkProvider: Send + Sync {
    /// Returns a snapshot of the headers added to every request.
    fn default_headers(&self) -> HashMap<String, String>;

    /// Returns the range of status codes treated as success.
    fn acceptable_status_range(&self) -> Range<u16>;

    /// Sets a default header, replacing any previous value for `key`.
    fn set_header(&self, key: &str, value: &str);

    /// Removes a default header.
    fn remove_header(&self, key: &str);

    /// Sets the verbatim `Authorization` value.
    fn set_authorization(&self, value: &str);

    /// Stops adding an `Authorization` header.
    fn clear_authorization(&self);

    /// Sets the acceptable status range, clamped into `[100, 600]`.
    fn set_acceptable_status_range(&self, range: Range<u16>);

    /// Performs `resource` and returns the raw body.
    async fn perform_request(&self, resource: &Resource) -> Result<Bytes>;

    /// Performs `resource` and decodes the body as JSON into `T`.
    async fn perform_request_decoded<T>(&self, resource: &Resource) -> Result<T>
    where
        Self: Sized,
        T: DeserializeOwned + Send,
    {
        let bytes = self.perform_request(resource).await?;
        decode(&bytes)
    }
}

#[async_trait]
impl NetworkProvider for NetworkService {
    fn default_headers(&self) -> HashMap<String, String> {
        NetworkService::default_headers(self)
    }

    fn acceptable_status_range(&self) -> Range<u16> {
        NetworkService::acceptable_status_range(self)
    }

    fn set_header(&self, key: &str, value: &str) {
        NetworkService::set_header(self, key, value);
    }

    fn remove_header(&self, key: &str) {
        NetworkService::remove_header(self, key);
    }

    fn set_authorization(&self, value: &str) {
        NetworkService::set_authorization(self, value);
    }

    fn clear_authorization(&self) {
        NetworkService::clear_authorization(self);
    }

    fn set_acceptable_status_range(&self, range: Range<u16>) {
        NetworkService::set_acceptable_status_range(self, range);
    }

    async fn perform_request(&self, resource: &Resource) -> Result<Bytes> {
        NetworkService::perform_request(self, resource).await
    }

    async fn perform_request_decoded<T>(&self, resource: &Resource) -> Result<T>
    where
        Self: Sized,
        T: DeserializeOwned + Send,
    {
        NetworkService::perform_request_decoded(self, resource).await
    }
}
