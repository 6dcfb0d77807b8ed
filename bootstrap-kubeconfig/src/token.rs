use std::fmt;
use std::str::FromStr;

use crate::error::TokenFormatError;

const SEPARATOR: char = '.';
const ID_LEN: usize = 6;
const SECRET_LEN: usize = 16;

/// Anything that can render itself as a bootstrap token bearer string.
pub trait BootstrapToken {
    /// Returns `id.secret`, or an error if the token is malformed.
    fn canonical_string(&self) -> Result<String, TokenFormatError>;
}

impl<T: BootstrapToken + ?Sized> BootstrapToken for &T {
    fn canonical_string(&self) -> Result<String, TokenFormatError> {
        (**self).canonical_string()
    }
}

/// A bootstrap token split into its public id and its secret.
#[derive(Clone, PartialEq, Eq)]
pub struct BootstrapTokenString {
    pub id: String,
    pub secret: String,
}

impl BootstrapTokenString {
    pub fn new(id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            secret: secret.into(),
        }
    }
}

impl BootstrapToken for BootstrapTokenString {
    fn canonical_string(&self) -> Result<String, TokenFormatError> {
        if self.id.is_empty() {
            return Err(TokenFormatError::new("token id is empty"));
        }
        if self.secret.is_empty() {
            return Err(TokenFormatError::new("token secret is empty"));
        }
        if self.id.contains(SEPARATOR) {
            return Err(TokenFormatError::new(format!(
                "token id must not contain '{SEPARATOR}'"
            )));
        }

        Ok(format!("{}{SEPARATOR}{}", self.id, self.secret))
    }
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Parses the strict `[a-z0-9]{6}.[a-z0-9]{16}` wire form.
impl FromStr for BootstrapTokenString {
    type Err = TokenFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, secret) = s.split_once(SEPARATOR).ok_or_else(|| {
            TokenFormatError::new(format!("token must be of the form <id>{SEPARATOR}<secret>"))
        })?;

        if id.len() != ID_LEN || !id.chars().all(is_token_char) {
            return Err(TokenFormatError::new(format!(
                "token id must be {ID_LEN} characters of [a-z0-9]"
            )));
        }
        if secret.len() != SECRET_LEN || !secret.chars().all(is_token_char) {
            return Err(TokenFormatError::new(format!(
                "token secret must be {SECRET_LEN} characters of [a-z0-9]"
            )));
        }

        Ok(Self::new(id, secret))
    }
}

impl fmt::Display for BootstrapTokenString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.id, self.secret)
    }
}

// The secret never ends up in logs or panic messages.
impl fmt::Debug for BootstrapTokenString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapTokenString")
            .field("id", &self.id)
            .field("secret", &"<redacted>")
            .finish()
    }
}
