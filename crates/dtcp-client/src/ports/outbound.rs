//! # Outbound Ports (Driven Ports / SPI)
//!
//! Dependencies the client needs from the outside world.

use crate::domain::errors::TransportError;
use crate::domain::requests::HttpMethod;

/// Gateway to the HTTP transport.
///
/// The client treats the transport as a black box: one synchronous call
/// that returns the raw response body or a `TransportError`. Timeouts and
/// retries are the implementation's concern, never this crate's.
/// Implementations must be thread-safe (`Send + Sync`).
pub trait Transport: Send + Sync {
    /// Send a request and return the raw response body.
    ///
    /// # Errors
    /// * `TransportError::Network` - connection-level failure
    /// * `TransportError::Status` - node answered with a non-2xx status
    /// * `TransportError::Timeout` - the request did not complete in time
    fn send(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&str>,
    ) -> Result<String, TransportError>;
}
