use std::io;

pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors raised by the search client and the file helpers
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Status code: {0}")]
    Status(u16),

    #[error("Invalid response: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
