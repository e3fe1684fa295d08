use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlankError {
    #[error("invalid grouping '{0}' (expected one of: status, user, priority)")]
    InvalidGrouping(String),

    #[error("invalid sorting '{0}' (expected one of: priority, title)")]
    InvalidSorting(String),

    #[error("invalid endpoint URL '{0}'")]
    InvalidUrl(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, PlankError>;
