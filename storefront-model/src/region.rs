use crate::error::{ModelError, Result};
use crate::ids::RegionId;
use crate::money::CurrencyCode;

/// Two-letter ISO 3166 country code, lower-case (`br`, `us`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct CountryCode(String);

impl CountryCode {
    pub fn parse(code: &str) -> Result<Self> {
        let trimmed = code.trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ModelError::InvalidCountryCode(code.to_string()));
        }
        Ok(CountryCode(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CountryCode {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        CountryCode::parse(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pricing region. Rails pass it through to preview rendering untouched.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub id: RegionId,
    pub name: String,
    pub currency_code: CurrencyCode,
    #[cfg_attr(feature = "serde", serde(default))]
    pub countries: Vec<CountryCode>,
}
