//! Error types for please-merge

use thiserror::Error;

/// Crate-level error
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or invalid configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Http(String),

    /// Listener or server I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias using the crate [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Why a single remote call did not succeed
///
/// Carried in [`RemoteResponse::error`](crate::types::RemoteResponse). Never
/// shown to users verbatim; it is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// The request never produced a response (connect, TLS, timeout)
    #[error("transport error: {0}")]
    Transport(String),

    /// A response arrived but its body could not be read
    #[error("failed to read response body: {0}")]
    Body(String),

    /// The remote answered with a 5xx status
    #[error("server error: {0}")]
    Server(u16),

    /// The remote answered with a 4xx status
    #[error("client error: {0}")]
    Client(u16),
}
