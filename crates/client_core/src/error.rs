use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("prediction request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("prediction endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("prediction response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid prediction endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        source: url::ParseError,
    },
    #[error("prediction endpoint '{endpoint}' must use http or https")]
    UnsupportedScheme { endpoint: String },
}
