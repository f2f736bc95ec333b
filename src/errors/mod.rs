use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    // Structural feed errors
    #[error("Feed parsing failed: {0}")]
    InvalidFeed(String),

    // Source errors
    #[error("Invalid source URL: {0}")]
    InvalidSource(String),

    #[error("Unable to connect to {0}")]
    Unreachable(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Snapshot errors
    #[error("Snapshot parsing failed: {0}")]
    Snapshot(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ParseResult<T> = Result<T, ParseError>;
