use thiserror::Error;

/// The token could not produce its canonical `id.secret` string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid bootstrap token: {reason}")]
pub struct TokenFormatError {
    reason: String,
}

impl TokenFormatError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    TokenFormat(#[from] TokenFormatError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
}
