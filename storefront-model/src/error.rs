use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidCountryCode(String),
    InvalidCurrencyCode(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidCountryCode(code) => {
                write!(f, "invalid country code: {code:?}")
            }
            ModelError::InvalidCurrencyCode(code) => {
                write!(f, "invalid currency code: {code:?}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
