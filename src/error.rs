//! Errors surfaced by the middleware to the wrapped handler.

/// Error type for request logging operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The underlying connection cannot be taken over for another protocol.
    #[error("web server does not support hijacking")]
    HijackUnsupported,
}
