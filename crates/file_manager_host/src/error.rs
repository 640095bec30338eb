//! Error types shared by the file manager contracts and adapters.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failures raised before a server response could be observed.
pub enum TransportError {
    /// A required browser API is missing in the current context.
    #[error("browser API unavailable: {0}")]
    Unavailable(String),
    /// The request could not be opened.
    #[error("failed to open request to `{url}`: {reason}")]
    Open {
        /// Target URL.
        url: String,
        /// Browser-provided reason.
        reason: String,
    },
    /// The request body could not be built or sent.
    #[error("failed to send request: {0}")]
    Send(String),
    /// The browser reported a network-level failure.
    #[error("network error")]
    Network,
    /// The request was dropped before it completed.
    #[error("request was interrupted before completion")]
    Interrupted,
}

#[derive(Debug, Error)]
/// Failures while reading the server-injected page bootstrap payload.
pub enum BootstrapError {
    /// The bootstrap element is not present in the document.
    #[error("bootstrap element `#{0}` not found")]
    MissingElement(String),
    /// The element exists but its JSON payload is malformed.
    #[error("invalid bootstrap payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}
