use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrustWedoError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Not logged in. Run `trust-wedo login` first")]
    NotLoggedIn,

    #[error("Session expired. Run `trust-wedo login` again")]
    SessionExpired,

    #[error(transparent)]
    Client(#[from] trust_wedo_common::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Scan failed: {0}")]
    ScanFailed(String),

    #[error("Scan is still running (job {0}). Check later with `trust-wedo watch {0}`")]
    TimedOut(String),

    #[error("Cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, TrustWedoError>;
