//! Fixed-point rendering of raw on-chain balances.
//!
//! A balance arrives as the integer count of the token's smallest unit. The
//! display value is `raw / 10^decimals`, rounded half up to a fixed number of
//! fractional digits. All arithmetic is done on the digit string, so amounts
//! of any length keep full precision.

use super::grouping::group_thousands;
use crate::error::InvalidAmountError;
use crate::value_objects::RawAmount;
use serde::{Deserialize, Serialize};

/// Decimal exponent of the native token (octas).
pub const DEFAULT_DECIMALS: u32 = 8;
/// Fractional digits shown when the caller does not ask for a count.
pub const DEFAULT_FIXED_DECIMAL_PLACES: u32 = 2;
/// Largest fractional digit count rendered; larger requests are clamped.
pub const MAX_FIXED_DECIMAL_PLACES: u32 = 100;

/// Scale and precision used to render a balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Power of ten separating the raw amount from its display value.
    pub decimals: u32,
    /// Minimum number of digits after the decimal point.
    pub fixed_decimal_places: u32,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            fixed_decimal_places: DEFAULT_FIXED_DECIMAL_PLACES,
        }
    }
}

impl FormatOptions {
    /// `fixed_decimal_places` is clamped to [`MAX_FIXED_DECIMAL_PLACES`].
    pub fn new(decimals: u32, fixed_decimal_places: u32) -> Self {
        Self {
            decimals,
            fixed_decimal_places: fixed_decimal_places.min(MAX_FIXED_DECIMAL_PLACES),
        }
    }

    /// Resolves optional caller settings.
    ///
    /// Absent or negative `decimals` fall back to [`DEFAULT_DECIMALS`];
    /// absent `fixed_decimal_places` falls back to
    /// [`DEFAULT_FIXED_DECIMAL_PLACES`]; values above
    /// [`MAX_FIXED_DECIMAL_PLACES`] are clamped.
    pub fn resolve(decimals: Option<i32>, fixed_decimal_places: Option<u32>) -> Self {
        let decimals = decimals
            .and_then(|d| u32::try_from(d).ok())
            .unwrap_or(DEFAULT_DECIMALS);
        Self::new(
            decimals,
            fixed_decimal_places.unwrap_or(DEFAULT_FIXED_DECIMAL_PLACES),
        )
    }
}

/// Formats a raw digit string for display.
///
/// # Examples
///
/// ```
/// use ticketing_domain::formatting::format_balance_str;
///
/// assert_eq!(format_balance_str("150000000", None, None).unwrap(), "1.50");
/// assert_eq!(
///     format_balance_str("1234567800000000", Some(8), Some(2)).unwrap(),
///     "12,345,678.00"
/// );
/// ```
///
/// # Errors
/// Returns [`InvalidAmountError`] if `balance` is empty or not all digits.
pub fn format_balance_str(
    balance: &str,
    decimals: Option<i32>,
    fixed_decimal_places: Option<u32>,
) -> Result<String, InvalidAmountError> {
    let amount = RawAmount::parse(balance)?;
    Ok(format_amount(
        &amount,
        FormatOptions::resolve(decimals, fixed_decimal_places),
    ))
}

/// Formats an already validated amount.
pub fn format_amount(amount: &RawAmount, options: FormatOptions) -> String {
    let decimals = options.decimals as usize;
    // Fields are public, so the cap is applied here as well.
    let places = options.fixed_decimal_places.min(MAX_FIXED_DECIMAL_PLACES) as usize;

    if amount.is_literal_zero() || decimals == 0 {
        return "0".to_owned();
    }

    let raw = amount.as_str();
    let len = raw.len();

    // Entirely fractional: rendered as-is, without grouping or trimming.
    if len <= decimals {
        return format_fraction_only(raw, decimals - len, places);
    }

    let (integer, fraction) = raw.split_at(len - decimals);
    let (integer, fraction) = round_half_up(integer, fraction, places);
    let grouped = group_thousands(&integer);

    if fraction.is_empty() {
        return grouped;
    }
    // Never shorter than `places`: only zeros past the rounding point go.
    let trimmed = fraction.trim_end_matches('0');
    format!("{grouped}.{trimmed:0<places$}")
}

/// Renders `0.<padding zeros><raw>` with exactly `places` fractional digits.
fn format_fraction_only(raw: &str, padding: usize, places: usize) -> String {
    if padding > places {
        // The first dropped digit is a padding zero, so nothing rounds up.
        return join_parts("0", &"0".repeat(places));
    }
    let fraction = format!("{}{raw}", "0".repeat(padding));
    let (integer, fraction) = round_half_up("0", &fraction, places);
    join_parts(&integer, &fraction)
}

fn join_parts(integer: &str, fraction: &str) -> String {
    if fraction.is_empty() {
        integer.to_owned()
    } else {
        format!("{integer}.{fraction}")
    }
}

/// Rounds `integer.fraction` to `places` fractional digits, ties away from
/// zero. Returns the integer digits (possibly one longer after a carry) and
/// exactly `places` fractional digits.
fn round_half_up(integer: &str, fraction: &str, places: usize) -> (String, String) {
    if fraction.len() <= places {
        let mut padded = fraction.to_owned();
        padded.push_str(&"0".repeat(places - fraction.len()));
        return (integer.to_owned(), padded);
    }

    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(fraction[..places].bytes())
        .collect();
    if fraction.as_bytes()[places] >= b'5' {
        increment(&mut digits);
    }

    let split = digits.len() - places;
    let integer = digits[..split].iter().map(|&d| char::from(d)).collect();
    let fraction = digits[split..].iter().map(|&d| char::from(d)).collect();
    (integer, fraction)
}

/// Adds one to a big-endian ASCII digit buffer.
fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
