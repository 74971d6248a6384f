use thiserror::Error;

/// Errors produced while fetching and extracting registry links
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP request could not be sent or its body could not be read
    #[error("failed to fetch page: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("request to {url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The CSS selector could not be parsed
    #[error("invalid selector '{selector}': {reason}")]
    Selector { selector: String, reason: String },

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The collected records could not be turned into JSON
    #[error("{0}")]
    Serialize(serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
