//! Error types for naver-ad-parser.
//!
//! The parsing core never fails: malformed markup and short blocks degrade to
//! empty values. Errors only come from the page fetch and from the payload
//! helpers used by the analysis services.

/// Error type for fetch and analysis operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The search keyword was empty or whitespace.
    #[error("Search keyword is empty")]
    MissingKeyword,

    /// The search page answered with a non-success status.
    #[error("Search page request to {url} failed with status {status}")]
    HttpStatus {
        /// HTTP status code returned by the server.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// Network or TLS failure before a status was received.
    #[cfg(feature = "fetch")]
    #[error("Search page request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The configured search endpoint is not a valid URL.
    #[error("Invalid search endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// An analysis request was built without advertisements or word counts.
    #[error("No advertisement data to analyse")]
    EmptyInput,

    /// The advertisements contained no text to analyse.
    #[error("Advertisements contain no analysable text")]
    EmptyText,

    /// A service reply was not the expected JSON.
    #[error("Malformed JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for fetch and analysis operations.
pub type Result<T> = std::result::Result<T, Error>;
