use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error("Failed to fetch agent card: {0}")]
    Network(String),

    #[error("Invalid JSON in agent card: {0}")]
    Parse(String),

    #[error("HTTP client error: {0}")]
    Client(String),
}

impl From<reqwest::Error> for ValidatorError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            ValidatorError::Client(err.to_string())
        } else {
            ValidatorError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ValidatorError {
    fn from(err: serde_json::Error) -> Self {
        ValidatorError::Parse(err.to_string())
    }
}
