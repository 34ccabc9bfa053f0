use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    RequestFailed(Arc<reqwest::Error>),
    #[error("{}", .0.as_u16())]
    Status(StatusCode),
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Self::RequestFailed(Arc::new(error))
    }
}
