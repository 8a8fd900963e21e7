//! # netservice - a thin, testable HTTP service layer
//!
//! netservice builds requests from declarative [`Resource`] values, sends them
//! through an injectable [`Transport`], classifies responses by status code and
//! decodes successful bodies into typed values.
//!
//! ## Quick Start
//!
//! ```no_run
//! use netservice::{NetworkService, Resource};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize)]
//! struct CreateTodo {
//!     title: String,
//! }
//!
//! #[derive(Deserialize)]
//! struct Todo {
//!     id: u64,
//!     title: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = NetworkService::builder()
//!         .default_header("Content-Type", "application/json")
//!         .bearer_token("secret")
//!         .build()?;
//!
//!     // GET and decode
//!     let resource = Resource::get("https://api.example.com/todos/1".parse()?);
//!     let todo: Todo = service.perform_request_decoded(&resource).await?;
//!     println!("Todo: {}", todo.title);
//!
//!     // POST with a JSON body
//!     let body = serde_json::to_vec(&CreateTodo { title: "Write docs".to_string() })?;
//!     let resource = Resource::post("https://api.example.com/todos".parse()?, body);
//!     let created: Todo = service.perform_request_decoded(&resource).await?;
//!     println!("Created todo with ID: {}", created.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! Each call runs once, with no retries, caching or timeouts of its own:
//!
//! 1. [`build_request`] merges the service's default headers, the resource's
//!    headers and the service-level authorization, in that order.
//! 2. The [`Transport`] sends the request. [`ReqwestTransport`] is the default.
//! 3. [`classify`] turns the outcome into the body bytes or an [`Error`],
//!    using the service's [`StatusRange`].
//! 4. For typed calls, [`decode()`] parses the body as JSON.
//!
//! Code that only needs to perform requests can depend on the
//! [`NetworkProvider`] trait instead of the concrete service.
//!
//! ## Testing without a network
//!
//! Any [`Transport`] implementation can be injected, so tests can return a
//! fixed outcome:
//!
//! ```
//! use async_trait::async_trait;
//! use netservice::{
//!     Error, NetworkService, RawResponse, Resource, Transport, TransportError,
//!     TransportRequest,
//! };
//!
//! struct NotFound;
//!
//! #[async_trait]
//! impl Transport for NotFound {
//!     async fn send(&self, _request: TransportRequest) -> Result<RawResponse, TransportError> {
//!         Ok(RawResponse::new(404, "Not found"))
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let service = NetworkService::builder().transport(NotFound).build().unwrap();
//! let resource = Resource::get("https://mockurl".parse().unwrap());
//!
//! let result = service.perform_request(&resource).await;
//! assert!(matches!(result, Err(Error::BadStatusCode(404))));
//! # }
//! ```

mod classify;
mod decode;
mod error;
mod logger;
mod provider;
mod request;
mod resource;
mod service;
mod transport;

pub use classify::{classify, StatusRange, MAX_STATUS, MIN_STATUS};
pub use decode::decode;
pub use error::{Error, Result};
pub use logger::{Logger, NoopLogger, TracingLogger};
pub use provider::NetworkProvider;
pub use request::{build_request, TransportRequest, AUTHORIZATION};
pub use resource::{HttpMethod, Resource};
pub use service::{NetworkService, NetworkServiceBuilder};
pub use transport::{RawResponse, ReqwestTransport, Transport, TransportError};
