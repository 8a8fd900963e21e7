//! Observational logging hooks.
//!
//! The service reports construction, configuration changes, dispatch and
//! decoding through a [`Logger`]. Loggers only observe; nothing they do
//! feeds back into a call's outcome.

/// Receives log events from a [`NetworkService`](crate::NetworkService).
pub trait Logger: Send + Sync {
    /// Fine-grained events: dispatch and decoding steps.
    fn verbose(&self, message: &str);

    /// Lifecycle and configuration events.
    fn info(&self, message: &str);

    /// Failed requests and decodes.
    fn error(&self, message: &str);
}

/// Forwards events to `tracing`. This is the default logger.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn verbose(&self, message: &str) {
        tracing::debug!(target: "netservice", "{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "netservice", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "netservice", "{}", message);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn verbose(&self, _message: &str) {}

    fn info(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}
