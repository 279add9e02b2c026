use thiserror::Error;

/// Failures surfaced by generation. There is one taxonomy on purpose:
/// every variant reaches the caller as-is, nothing is caught or retried
/// inside the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("generator returned no candidates")]
    NoOutput,

    #[error("unknown generator: {0}")]
    UnknownGenerator(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn backend(message: impl Into<String>) -> Self {
        Error::Backend(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
