//! Error types for OAuth provider operations

/// Errors from OAuth provider operations.
///
/// Per-request user-facing failures (missing callback code, token response
/// without an access token) are handled directly by the gateway handlers as
/// HTTP responses — they never need to propagate as Rust errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or empty provider credentials. Raised at construction time,
    /// before any network capability is touched, and never recovered.
    #[error("provider configuration invalid: {0}")]
    Configuration(String),

    /// Transport or decode failure talking to a provider. One attempt per
    /// call; never retried. The originating cause stays reachable through
    /// `std::error::Error::source()`.
    #[error("provider integration failed: {context}: {source}")]
    Integration {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Wrap an underlying transport or decode error with its context.
    pub fn integration(
        context: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Error::Integration {
            context: context.into(),
            source: source.into(),
        }
    }
}

/// Result alias for provider operations.
pub type Result<T> = std::result::Result<T, Error>;
