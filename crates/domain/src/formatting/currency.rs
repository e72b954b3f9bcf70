use super::balance::{FormatOptions, format_amount};
use crate::error::InvalidAmountError;
use crate::value_objects::RawAmount;
use std::fmt;

/// Ticker of the chain's native token.
pub const NATIVE_CURRENCY_CODE: &str = "MOVE";

/// A balance paired with an optional currency code, rendered as
/// `"<amount> <code>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyValue {
    amount: RawAmount,
    options: FormatOptions,
    currency_code: Option<String>,
}

impl CurrencyValue {
    pub fn new(amount: RawAmount, options: FormatOptions) -> Self {
        Self {
            amount,
            options,
            currency_code: None,
        }
    }

    /// Attaches a currency code. An empty code renders as no code.
    #[must_use]
    pub fn with_currency_code(mut self, code: impl Into<String>) -> Self {
        let code = code.into();
        self.currency_code = (!code.is_empty()).then_some(code);
        self
    }

    /// Builds a native-token value from a possibly negative delta.
    ///
    /// Exactly one leading `-` is stripped and not re-attached; callers that
    /// show direction must prepend the sign themselves.
    ///
    /// # Errors
    /// Returns [`InvalidAmountError`] if the unsigned remainder is not all
    /// digits.
    pub fn native(amount: &str, options: FormatOptions) -> Result<Self, InvalidAmountError> {
        let unsigned = amount.strip_prefix('-').unwrap_or(amount);
        let amount = RawAmount::parse(unsigned)?;
        Ok(Self::new(amount, options).with_currency_code(NATIVE_CURRENCY_CODE))
    }

    pub fn amount(&self) -> &RawAmount {
        &self.amount
    }

    pub fn currency_code(&self) -> Option<&str> {
        self.currency_code.as_deref()
    }

    /// The formatted number without the currency code.
    pub fn formatted_amount(&self) -> String {
        format_amount(&self.amount, self.options)
    }
}

impl fmt::Display for CurrencyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = self.formatted_amount();
        match &self.currency_code {
            Some(code) => write!(f, "{number} {code}"),
            None => f.write_str(&number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value() {
        let value = CurrencyValue::new(RawAmount::from(150_000_000u64), FormatOptions::default());
        assert_eq!(value.to_string(), "1.50");
        assert_eq!(value.currency_code(), None);
    }

    #[test]
    fn test_custom_code() {
        let value = CurrencyValue::new(RawAmount::from(2_500_000u64), FormatOptions::new(6, 2))
            .with_currency_code("USDC");
        assert_eq!(value.to_string(), "2.50 USDC");

        let blank = value.clone().with_currency_code("");
        assert_eq!(blank.to_string(), "2.50");
    }

    #[test]
    fn test_native_strips_sign() {
        let value = CurrencyValue::native("-100000000", FormatOptions::default()).unwrap();
        assert_eq!(value.to_string(), "1.00 MOVE");
        assert_eq!(value.amount().as_str(), "100000000");

        let value = CurrencyValue::native("1234567800000000", FormatOptions::default()).unwrap();
        assert_eq!(value.to_string(), "12,345,678.00 MOVE");
    }

    #[test]
    fn test_native_zero_keeps_code() {
        let value = CurrencyValue::native("0", FormatOptions::default()).unwrap();
        assert_eq!(value.to_string(), "0 MOVE");
    }

    #[test]
    fn test_native_strips_only_one_sign() {
        assert!(CurrencyValue::native("--5", FormatOptions::default()).is_err());
        assert!(CurrencyValue::native("-", FormatOptions::default()).is_err());
        assert!(CurrencyValue::native("+5", FormatOptions::default()).is_err());
    }
}
