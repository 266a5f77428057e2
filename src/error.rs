use thiserror::Error;

#[derive(Error, Debug)]
pub enum CifailError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("GitHub API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CifailError>;
