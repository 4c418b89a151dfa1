use thiserror::Error;

pub type Result<T> = std::result::Result<T, UiError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UiError {
    #[error("unknown keypad key: {0:?}")]
    InvalidKey(String),
    #[error("invalid ui config: {0}")]
    Config(String),
}

impl From<serde_json::Error> for UiError {
    fn from(err: serde_json::Error) -> Self {
        UiError::Config(err.to_string())
    }
}
