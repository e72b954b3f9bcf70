use crate::error::InvalidAmountError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Integer token quantity in the smallest on-chain unit, kept as its decimal
/// digit string.
///
/// Leading zeros are preserved because the formatter measures the string
/// length, not the numeric magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RawAmount(String);

impl RawAmount {
    /// Validates and wraps a digit string.
    ///
    /// # Errors
    /// Returns [`InvalidAmountError`] if `digits` is empty or contains
    /// anything other than `0-9`.
    pub fn parse(digits: &str) -> Result<Self, InvalidAmountError> {
        if !is_digit_string(digits) {
            return Err(InvalidAmountError::new(digits));
        }
        Ok(Self(digits.to_owned()))
    }

    pub fn zero() -> Self {
        Self("0".to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the literal `"0"` only; `"00"` is a distinct raw string.
    pub fn is_literal_zero(&self) -> bool {
        self.0 == "0"
    }

    /// Number of digits, leading zeros included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn is_digit_string(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for RawAmount {
    type Err = InvalidAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RawAmount {
    type Error = InvalidAmountError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !is_digit_string(&value) {
            return Err(InvalidAmountError::new(value));
        }
        Ok(Self(value))
    }
}

impl From<RawAmount> for String {
    fn from(amount: RawAmount) -> Self {
        amount.0
    }
}

impl From<u64> for RawAmount {
    fn from(v: u64) -> Self {
        Self(v.to_string())
    }
}

impl From<u128> for RawAmount {
    fn from(v: u128) -> Self {
        Self(v.to_string())
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_digits() {
        let amount = RawAmount::parse("00123").unwrap();
        assert_eq!(amount.as_str(), "00123");
        assert_eq!(amount.len(), 5);
        assert!(!amount.is_literal_zero());
        assert!(RawAmount::zero().is_literal_zero());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "12a3", "-5", "1.5", " 1", "1,000", "１"] {
            let err = RawAmount::parse(input).unwrap_err();
            assert_eq!(err.input, input);
        }
    }

    #[test]
    fn test_integer_conversion() {
        assert_eq!(RawAmount::from(123_456_789u64).as_str(), "123456789");
        assert_eq!(RawAmount::from(u128::MAX).len(), 39);
        assert!(RawAmount::from(0u64).is_literal_zero());
    }

    #[test]
    fn test_serde_validates() {
        let amount: RawAmount = serde_json::from_str("\"100000000\"").unwrap();
        assert_eq!(amount, RawAmount::from(100_000_000u64));
        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"100000000\"");

        assert!(serde_json::from_str::<RawAmount>("\"1 MOVE\"").is_err());
    }
}
