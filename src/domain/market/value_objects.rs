use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, Display as StrumDisplay};

use crate::domain::errors::ValidationError;

/// Value Object - ticker symbol, always upper case
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: &str) -> Result<Self, ValidationError> {
        let trimmed = symbol.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring match used by the table and search boxes.
    /// An empty needle matches every symbol.
    pub fn matches(&self, needle: &str) -> bool {
        contains_ignore_case(&self.0, needle)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.trim().to_uppercase())
    }
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_uppercase().contains(&needle.to_uppercase())
}

/// Which half of the market overview a table shows
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AssetClass {
    #[default]
    Stocks,
    Crypto,
}

impl AssetClass {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Stocks => "Stocks",
            Self::Crypto => "Crypto",
        }
    }
}

/// Where a sentiment reading or an influencer comes from
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Twitter,
    Reddit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn symbol_is_upper_and_trimmed() {
        assert_eq!(Symbol::new(" aapl ").unwrap().value(), "AAPL");
        assert_eq!(Symbol::new("   "), Err(ValidationError::EmptySymbol));
    }

    #[test]
    fn symbol_matching_ignores_case() {
        let s = Symbol::from("NVDA");
        assert!(s.matches("vd"));
        assert!(s.matches(""));
        assert!(!s.matches("x"));
        assert!(!s.matches(" "));
    }

    #[test]
    fn asset_class_parses() {
        assert_eq!(AssetClass::from_str("crypto").unwrap(), AssetClass::Crypto);
        assert_eq!(AssetClass::Stocks.to_string(), "stocks");
    }
}
