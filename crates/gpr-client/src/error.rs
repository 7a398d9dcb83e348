//! Error types for Gitee API operations.

use reqwest::StatusCode;
use thiserror::Error;

/// Primary error type for Gitee API operations.
///
/// Every request is attempted exactly once; there is no retry layer, so
/// transport and server failures surface directly to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure before a response was received.
    #[error("http transport failure: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Status {
        /// HTTP status code of the response.
        status: StatusCode,
        /// Message extracted from the Gitee error body, or the raw body.
        message: String,
    },
    /// The request budget is exhausted. Unauthenticated clients are limited
    /// to 60 requests per hour.
    #[error("rate limit exceeded")]
    RateLimited {
        /// Seconds until the request counter resets, when the server said.
        reset_secs: Option<u64>,
    },
    /// The response body did not match the expected payload shape.
    #[error("failed to decode response payload")]
    Decode(#[source] serde_json::Error),
    /// The gateway URL cannot be extended with endpoint path segments.
    #[error("gateway URL '{gateway}' cannot be a base for API endpoints")]
    InvalidUrl {
        /// Gateway the client was configured with.
        gateway: String,
    },
}
