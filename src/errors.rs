use thiserror::Error;

/// Ways a relay call to the listing provider can fail. The relay answers all
/// of them with the same failure payload; the variants exist for the log.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API responded with status: {0}")]
    Status(reqwest::StatusCode),
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
