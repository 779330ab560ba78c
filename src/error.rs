use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PokedexError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned {status}")]
    Status { url: String, status: StatusCode },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Usage(&'static str),

    #[error("no previous location areas to list")]
    NoPreviousPage,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PokedexError>;
