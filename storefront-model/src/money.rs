use crate::error::{ModelError, Result};

/// ISO 4217 currency code, stored lower-case as the commerce backend
/// reports it (`brl`, `eur`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn parse(code: &str) -> Result<Self> {
        let trimmed = code.trim();
        if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ModelError::InvalidCurrencyCode(code.to_string()));
        }
        Ok(CurrencyCode(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Symbol used when displaying an amount. Unknown currencies fall back
    /// to the upper-case code.
    pub fn symbol(&self) -> String {
        match self.0.as_str() {
            "brl" => "R$".to_string(),
            "usd" => "$".to_string(),
            "eur" => "€".to_string(),
            "gbp" => "£".to_string(),
            other => other.to_ascii_uppercase(),
        }
    }

    /// Decimal separator conventionally used with this currency.
    fn decimal_separator(&self) -> char {
        match self.0.as_str() {
            "brl" | "eur" => ',',
            _ => '.',
        }
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        CurrencyCode::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

/// An amount of money in minor units (cents) of a currency.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Money {
    pub amount: i64,
    pub currency_code: CurrencyCode,
}

impl Money {
    pub fn new(amount: i64, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Format for display, e.g. `R$ 129,90` or `$ 12.00`.
    pub fn display(&self) -> String {
        let sign = if self.amount < 0 { "-" } else { "" };
        let abs = self.amount.unsigned_abs();
        format!(
            "{sign}{} {}{}{:02}",
            self.currency_code.symbol(),
            abs / 100,
            self.currency_code.decimal_separator(),
            abs % 100
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_code_is_normalized() {
        let code = CurrencyCode::parse(" BRL ").unwrap();
        assert_eq!(code.as_str(), "brl");
    }

    #[test]
    fn currency_code_rejects_garbage() {
        assert!(CurrencyCode::parse("reais").is_err());
        assert!(CurrencyCode::parse("b1l").is_err());
    }

    #[test]
    fn display_uses_currency_conventions() {
        let brl = Money::new(12990, CurrencyCode::parse("brl").unwrap());
        assert_eq!(brl.display(), "R$ 129,90");

        let usd = Money::new(1205, CurrencyCode::parse("usd").unwrap());
        assert_eq!(usd.display(), "$ 12.05");

        let chf = Money::new(-5, CurrencyCode::parse("chf").unwrap());
        assert_eq!(chf.display(), "-CHF 0.05");
    }
}
