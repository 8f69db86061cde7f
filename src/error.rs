use thiserror::Error;

/// Errors surfaced by [`Connector`](crate::Connector) operations.
///
/// Every failure of a call is reported from the single attempt that
/// produced it; nothing is retried or recovered locally.
#[derive(Error, Debug)]
pub enum ConnectorError {
    /// No API key was passed explicitly and the environment variable is
    /// unset. Raised when a request is attempted, never at construction.
    #[error("missing API key: pass one explicitly or set {0}")]
    MissingApiKey(&'static str),

    /// The HTTP client handle could not be built.
    #[error("connector configuration error: {0}")]
    Configuration(String),

    /// Transport-level failure (connectivity, TLS, timeout).
    #[error("network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// The API returned a non-success status. The body is forwarded as-is.
    #[error("API error (status {status_code}): {message}")]
    Api { status_code: u16, message: String },

    /// The response body could not be read or decoded.
    #[error("parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A well-formed response carried no choices.
    #[error("empty choices in response")]
    EmptyChoices,
}
